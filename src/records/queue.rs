use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status assigned to every new queue entry. Later status values are free
/// strings; nothing validates them.
pub const QUEUE_WAITING: &str = "waiting";

/// A waiting-list entry for a patient visit.
///
/// `queue_number` is assigned from the collection length at insertion and is
/// never renumbered on removal: a monotonically-assigned sequence number,
/// not a live position.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueEntry {
    pub id: String,
    pub queue_number: u32,
    pub status: String,
    pub patient_name: String,
    pub appointment_date: DateTime<Utc>,
    pub reason: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Input for `add_to_queue`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQueueEntry {
    pub patient_name: String,
    pub appointment_date: DateTime<Utc>,
    pub reason: String,
}
