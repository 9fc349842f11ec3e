//! Claims operations.

use tracing::debug;

use super::Repository;
use crate::records::{
    estimated_processing_days, ActivityKind, ActivityRef, Claim, ClaimStatus, NewClaim,
    NewNotification, NotificationKind,
};
use crate::store::keys;

impl Repository {
    /// All claims in stored order, newest first.
    pub fn claims(&self) -> Vec<Claim> {
        self.read_or_default(keys::CLAIMS)
    }

    /// Submit a claim: prepends the record, estimates processing time from
    /// priority, logs a `claim_submitted` activity, emits a success
    /// notification and awards 15 points.
    pub fn add_claim(&self, input: NewClaim) -> Claim {
        let mut claims = self.claims();
        let (id, submitted_at) = self.next_id("CLAIM");
        let claim = Claim {
            id,
            claim_number: format!("JKN-{}", self.tick().timestamp_millis()),
            case_id: input.case_id,
            patient_name: input.patient_name,
            diagnosis: input.diagnosis,
            amount: input.amount,
            priority: input.priority.unwrap_or_default(),
            status: ClaimStatus::Submitted,
            submitted_at,
            updated_at: None,
            approved_at: None,
            estimated_processing_time: estimated_processing_days(input.priority),
        };

        claims.insert(0, claim.clone());
        self.write_value(keys::CLAIMS, &claims);
        debug!(id = %claim.id, number = %claim.claim_number, "claim submitted");

        self.log_activity(
            ActivityKind::ClaimSubmitted,
            format!("Claim submitted: {}", claim.claim_number),
            Some(ActivityRef::Claim(claim.id.clone())),
        );
        self.add_notification(NewNotification {
            title: "Claim submitted".to_string(),
            message: format!("Claim {} submitted successfully", claim.claim_number),
            kind: NotificationKind::Success,
        });
        self.add_points(15, "Submitted a claim");

        claim
    }

    /// Set a claim's status. Approval stamps `approved_at` and awards 20
    /// bonus points; every change emits a notification (success when
    /// approved, info otherwise).
    pub fn update_claim_status(&self, id: &str, status: ClaimStatus) -> bool {
        let mut claims = self.claims();
        let claim = match claims.iter_mut().find(|claim| claim.id == id) {
            Some(claim) => claim,
            None => return false,
        };

        claim.status = status;
        claim.updated_at = Some(self.tick());

        let approved = status == ClaimStatus::Approved;
        if approved {
            claim.approved_at = Some(self.tick());
        }
        let claim_number = claim.claim_number.clone();

        self.write_value(keys::CLAIMS, &claims);
        if approved {
            self.add_points(20, "Claim approved");
        }
        self.add_notification(NewNotification {
            title: "Claim update".to_string(),
            message: format!("Claim {} status: {}", claim_number, status.as_str()),
            kind: if approved {
                NotificationKind::Success
            } else {
                NotificationKind::Info
            },
        });

        true
    }
}
