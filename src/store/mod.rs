//! Key-value persistence backends.
//!
//! The repository addresses each collection by a string key and only needs
//! `get`/`set`/`remove` over JSON values. [`MemoryStore`] backs tests and
//! ephemeral embedding; [`FileStore`] persists every key inside a single
//! JSON document on disk.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::MedicaseResult;
use serde_json::Value;

/// Storage keys
pub mod keys {
    pub const CASES: &str = "jkn_medical_cases";
    pub const QUEUE: &str = "jkn_queue_data";
    pub const CLAIMS: &str = "jkn_claims_data";
    pub const PATIENTS: &str = "jkn_patients_data";
    pub const ANALYTICS: &str = "jkn_analytics_data";
    pub const SETTINGS: &str = "jkn_user_settings";
    pub const NOTIFICATIONS: &str = "jkn_notifications";
    pub const ACTIVITIES: &str = "jkn_activities";
    pub const GAMIFICATION: &str = "jkn_gamification_points";

    /// Every key the repository may touch. `PATIENTS`, `ANALYTICS` and
    /// `SETTINGS` are reserved: declared in the schema, never written by any
    /// operation, wiped by `clear_all`.
    pub const ALL: [&str; 9] = [
        CASES,
        QUEUE,
        CLAIMS,
        PATIENTS,
        ANALYTICS,
        SETTINGS,
        NOTIFICATIONS,
        ACTIVITIES,
        GAMIFICATION,
    ];
}

/// Abstract key-value store for persisted collections.
///
/// Implementations can use different storage backends (memory, file, a
/// browser-storage bridge, etc.).
pub trait KeyValueStore: Send + Sync {
    /// Load the value stored under `key`, if any.
    fn get(&self, key: &str) -> MedicaseResult<Option<Value>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: Value) -> MedicaseResult<()>;

    /// Remove `key` and its value, if present.
    fn remove(&self, key: &str) -> MedicaseResult<()>;

    /// Check whether `key` currently holds a value.
    fn contains(&self, key: &str) -> MedicaseResult<bool> {
        Ok(self.get(key)?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_contains_default_method() {
        let store = MemoryStore::new();
        assert!(!store.contains(keys::CASES).unwrap());
        store.set(keys::CASES, json!([])).unwrap();
        assert!(store.contains(keys::CASES).unwrap());
    }
}
