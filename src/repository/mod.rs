//! The repository owning every persisted collection.
//!
//! All writes to the store go through this type; callers read via the
//! getters and mutate via the named operations. Primary operations carry
//! deliberate secondary writes: activity logging, notification emission and
//! gamification points are part of the operation, not optional extras.
//!
//! Failure handling follows a fixed rule: unreadable stored data is treated
//! as an empty collection, unknown ids yield `None`/`false`, and failed
//! writes are logged and reported through the operation's return value
//! where one exists. Nothing here returns an error to the caller.

mod cases;
mod claims;
mod feed;
mod gamification;
mod queue;
mod seed;
mod snapshot;
mod stats;

pub use snapshot::{Snapshot, SNAPSHOT_VERSION};
pub use stats::Statistics;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, warn};

use crate::clock::{Clock, SystemClock, TickSource};
use crate::records::GamificationState;
use crate::store::{keys, KeyValueStore};

pub struct Repository {
    store: Box<dyn KeyValueStore>,
    ticks: TickSource,
}

impl Repository {
    /// Repository over `store`, using the system clock.
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    /// Repository over `store` with an injected clock, for deterministic
    /// timestamps in tests.
    pub fn with_clock(store: Box<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            ticks: TickSource::new(clock),
        }
    }

    /// Ensure every live collection key exists and seed sample data when the
    /// cases collection is empty. Safe to call repeatedly; seeding happens
    /// at most once per store.
    pub fn init(&self) {
        if self.cases().is_empty() {
            self.seed_sample_data();
        }
        self.ensure_key(keys::QUEUE, Value::Array(Vec::new()));
        self.ensure_key(keys::CLAIMS, Value::Array(Vec::new()));
        self.ensure_key(keys::NOTIFICATIONS, Value::Array(Vec::new()));
        self.ensure_key(keys::ACTIVITIES, Value::Array(Vec::new()));
        match serde_json::to_value(GamificationState::default()) {
            Ok(default_state) => self.ensure_key(keys::GAMIFICATION, default_state),
            Err(err) => error!(error = %err, "failed to build default gamification state"),
        }
    }

    /// Erase every collection key, reserved ones included, then re-run
    /// initialization (which re-seeds).
    pub fn clear_all(&self) -> bool {
        for key in keys::ALL {
            if let Err(err) = self.store.remove(key) {
                error!(key, error = %err, "failed to clear collection");
                return false;
            }
        }
        self.init();
        true
    }

    fn ensure_key(&self, key: &str, default: Value) {
        match self.store.contains(key) {
            Ok(true) => {}
            Ok(false) => {
                if let Err(err) = self.store.set(key, default) {
                    error!(key, error = %err, "failed to initialize collection");
                }
            }
            Err(err) => warn!(key, error = %err, "could not check collection key"),
        }
    }

    // ========================================================================
    // Internal helpers shared by the operation modules
    // ========================================================================

    /// Load a collection, treating missing or unreadable data as empty.
    pub(crate) fn read_or_default<T>(&self, key: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        match self.store.get(key) {
            Ok(Some(value)) => match serde_json::from_value(value) {
                Ok(parsed) => parsed,
                Err(err) => {
                    warn!(key, error = %err, "stored collection unreadable, treating as empty");
                    T::default()
                }
            },
            Ok(None) => T::default(),
            Err(err) => {
                warn!(key, error = %err, "failed to read collection, treating as empty");
                T::default()
            }
        }
    }

    /// Persist a collection; logs and returns false on failure.
    pub(crate) fn write_value<T: Serialize>(&self, key: &str, value: &T) -> bool {
        let json = match serde_json::to_value(value) {
            Ok(json) => json,
            Err(err) => {
                error!(key, error = %err, "failed to serialize collection");
                return false;
            }
        };
        self.raw_set(key, json)
    }

    /// Persist an already-serialized value; logs and returns false on failure.
    pub(crate) fn raw_set(&self, key: &str, value: Value) -> bool {
        match self.store.set(key, value) {
            Ok(()) => true,
            Err(err) => {
                error!(key, error = %err, "failed to persist collection");
                false
            }
        }
    }

    /// Current clock reading, for recency windows and export stamps.
    pub(crate) fn now(&self) -> DateTime<Utc> {
        self.ticks.now()
    }

    /// Strictly-increasing timestamp for generated ids and updated-at fields.
    pub(crate) fn tick(&self) -> DateTime<Utc> {
        self.ticks.tick()
    }

    /// Fresh prefixed id plus the timestamp it was derived from.
    pub(crate) fn next_id(&self, prefix: &str) -> (String, DateTime<Utc>) {
        let ts = self.tick();
        (format!("{}-{}", prefix, ts.timestamp_millis()), ts)
    }

    /// JKN number in the original scheme: timestamp plus a random suffix.
    /// Uniqueness comes from the timestamp; the suffix is cosmetic.
    pub(crate) fn jkn_number(&self) -> String {
        let ts = self.tick();
        let suffix: u16 = rand::thread_rng().gen_range(0..1000);
        format!("JKN-{}-{}", ts.timestamp_millis(), suffix)
    }
}
