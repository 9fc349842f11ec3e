//! Persisted record types.
//!
//! Every entity serializes with camelCase field names, matching the JSON
//! documents the repository persists and exports.

mod activity;
mod case;
mod claim;
mod gamification;
mod notification;
mod queue;

pub use activity::{Activity, ActivityKind, ActivityRef};
pub use case::{Case, CaseClaimStatus, CaseFilter, CaseStatus, CaseUpdate, CreatedWithin, NewCase};
pub use claim::{Claim, ClaimStatus, NewClaim};
pub(crate) use claim::estimated_processing_days;
pub use gamification::{Achievement, GamificationState, NewAchievement};
pub use notification::{NewNotification, Notification, NotificationKind};
pub use queue::{NewQueueEntry, QueueEntry, QUEUE_WAITING};

use serde::{Deserialize, Serialize};

/// Clinical priority of a case or claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

/// Patient gender as recorded on the case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}
