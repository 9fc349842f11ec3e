//! Derived statistics.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::Repository;
use crate::records::{CaseStatus, ClaimStatus, QUEUE_WAITING};

/// Dashboard counters derived from the live collections. Never stored;
/// recomputed on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_cases: usize,
    pub active_cases: usize,
    pub closed_cases: usize,
    /// Cases created within the last 30 days.
    pub recent_cases: usize,
    pub queue_waiting: usize,
    pub queue_total: usize,
    /// Claims still in flight: submitted or processing.
    pub claims_pending: usize,
    pub claims_approved: usize,
    pub claims_rejected: usize,
    pub claims_total: usize,
}

impl Repository {
    pub fn statistics(&self) -> Statistics {
        let cases = self.cases();
        let queue = self.queue();
        let claims = self.claims();
        let recent_cutoff = self.now() - Duration::days(30);

        Statistics {
            total_cases: cases.len(),
            active_cases: cases
                .iter()
                .filter(|c| c.status == CaseStatus::Active)
                .count(),
            closed_cases: cases
                .iter()
                .filter(|c| c.status == CaseStatus::Closed)
                .count(),
            recent_cases: cases.iter().filter(|c| c.created_at > recent_cutoff).count(),
            queue_waiting: queue.iter().filter(|q| q.status == QUEUE_WAITING).count(),
            queue_total: queue.len(),
            claims_pending: claims
                .iter()
                .filter(|c| matches!(c.status, ClaimStatus::Submitted | ClaimStatus::Processing))
                .count(),
            claims_approved: claims
                .iter()
                .filter(|c| c.status == ClaimStatus::Approved)
                .count(),
            claims_rejected: claims
                .iter()
                .filter(|c| c.status == ClaimStatus::Rejected)
                .count(),
            claims_total: claims.len(),
        }
    }
}
