//! Export and import of the full store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, warn};

use super::Repository;
use crate::records::{Activity, Case, Claim, GamificationState, Notification, QueueEntry};
use crate::store::keys;

/// Version string stamped into exported documents.
pub const SNAPSHOT_VERSION: &str = "2.0";

/// Full serialized export of all live collections at a point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub cases: Vec<Case>,
    pub queue: Vec<QueueEntry>,
    pub claims: Vec<Claim>,
    pub notifications: Vec<Notification>,
    pub activities: Vec<Activity>,
    pub gamification: GamificationState,
    pub exported_at: DateTime<Utc>,
    pub version: String,
}

/// Snapshot section names and the collection keys they overwrite.
const SECTIONS: [(&str, &str); 6] = [
    ("cases", keys::CASES),
    ("queue", keys::QUEUE),
    ("claims", keys::CLAIMS),
    ("notifications", keys::NOTIFICATIONS),
    ("activities", keys::ACTIVITIES),
    ("gamification", keys::GAMIFICATION),
];

impl Repository {
    /// Bundle all six live collections into one JSON document. Read-only;
    /// the store is not touched.
    pub fn export_snapshot(&self) -> String {
        let snapshot = Snapshot {
            cases: self.cases(),
            queue: self.queue(),
            claims: self.claims(),
            notifications: self.notifications(),
            activities: self.activities(),
            gamification: self.gamification(),
            exported_at: self.now(),
            version: SNAPSHOT_VERSION.to_string(),
        };

        match serde_json::to_string_pretty(&snapshot) {
            Ok(text) => text,
            Err(err) => {
                error!(error = %err, "failed to serialize snapshot");
                String::from("{}")
            }
        }
    }

    /// Overwrite collections from a previously exported document.
    ///
    /// A document that does not parse as a JSON object is rejected with no
    /// state touched. Once parsed, each recognized section present replaces
    /// its collection wholesale, without shape validation; sections are
    /// applied independently, so absent sections leave their collections
    /// untouched. Accepts documents from this or older export versions.
    pub fn import_snapshot(&self, data: &str) -> bool {
        let document: Value = match serde_json::from_str(data) {
            Ok(document) => document,
            Err(err) => {
                warn!(error = %err, "snapshot rejected: not valid JSON");
                return false;
            }
        };
        let sections = match document.as_object() {
            Some(sections) => sections,
            None => {
                warn!("snapshot rejected: not a JSON object");
                return false;
            }
        };

        let mut ok = true;
        for (section, key) in SECTIONS {
            if let Some(value) = sections.get(section) {
                ok &= self.raw_set(key, value.clone());
            }
        }
        ok
    }
}
