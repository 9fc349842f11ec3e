use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Priority;

/// Processing status of a submitted claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    Submitted,
    Processing,
    Approved,
    Rejected,
}

impl ClaimStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Submitted => "submitted",
            ClaimStatus::Processing => "processing",
            ClaimStatus::Approved => "approved",
            ClaimStatus::Rejected => "rejected",
        }
    }
}

/// An insurance claim record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    pub id: String,
    /// Generated independently of `id`, in the JKN numbering scheme.
    pub claim_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_id: Option<String>,
    pub patient_name: String,
    pub diagnosis: String,
    pub amount: u64,
    pub priority: Priority,
    pub status: ClaimStatus,
    pub submitted_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Set only when the claim transitions to approved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<DateTime<Utc>>,
    /// Estimated days until a decision, fixed at submission.
    pub estimated_processing_time: u32,
}

/// Input for `add_claim`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClaim {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_id: Option<String>,
    pub patient_name: String,
    pub diagnosis: String,
    pub amount: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

/// Estimated processing days: 3-day base scaled by priority, rounded up.
/// High priority halves it, low priority adds half again.
pub(crate) fn estimated_processing_days(priority: Option<Priority>) -> u32 {
    let base_days = 3.0_f64;
    let multiplier = match priority {
        Some(Priority::High) => 0.5,
        Some(Priority::Low) => 1.5,
        Some(Priority::Medium) | None => 1.0,
    };
    (base_days * multiplier).ceil() as u32
}
