use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of mutation an activity records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    CaseCreated,
    CaseUpdated,
    CaseDeleted,
    ClaimSubmitted,
    QueueAdded,
}

/// Foreign reference an activity may carry.
#[derive(Debug, Clone)]
pub enum ActivityRef {
    Case(String),
    Queue(String),
    Claim(String),
}

/// An audit-log entry describing a past mutation. Entries are never edited.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub user: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claim_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_wire_names() {
        assert_eq!(
            serde_json::to_string(&ActivityKind::CaseCreated).unwrap(),
            "\"case_created\""
        );
        assert_eq!(
            serde_json::from_str::<ActivityKind>("\"queue_added\"").unwrap(),
            ActivityKind::QueueAdded
        );
    }

    #[test]
    fn test_only_set_reference_appears() {
        let activity = Activity {
            id: "ACTIVITY-1000".to_string(),
            kind: ActivityKind::CaseCreated,
            message: "New case added: Ahmad Surya".to_string(),
            timestamp: Utc::now(),
            user: "dr. User".to_string(),
            case_id: Some("CASE-1000".to_string()),
            queue_id: None,
            claim_id: None,
        };
        let json = serde_json::to_value(&activity).unwrap();
        assert_eq!(json["type"], "case_created");
        assert_eq!(json["caseId"], "CASE-1000");
        assert!(json.get("queueId").is_none());
        assert!(json.get("claimId").is_none());
    }
}
