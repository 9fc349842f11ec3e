//! medicase: data-access layer for a medical case tracker.
//!
//! The [`Repository`] owns patient cases, a visit queue, insurance claims,
//! notification and activity feeds, and a points/level gamification record,
//! all persisted through a pluggable [`store::KeyValueStore`].
//!
//! ```
//! use medicase::{Repository, MemoryStore};
//! use medicase::records::{NewCase, CaseStatus, Gender};
//!
//! let repo = Repository::new(Box::new(MemoryStore::new()));
//! let case = repo.add_case(NewCase {
//!     patient_name: "Ahmad Surya".to_string(),
//!     patient_age: 45,
//!     patient_gender: Gender::Male,
//!     diagnosis: "Diabetes Mellitus Type 2".to_string(),
//!     description: "Polyuria and weight loss".to_string(),
//!     treatment: String::new(),
//!     notes: String::new(),
//!     status: CaseStatus::Active,
//!     priority: None,
//! });
//! assert!(repo.case(&case.id).is_some());
//! ```

pub mod clock;
pub mod error;
pub mod records;
pub mod repository;
pub mod store;

pub use error::{MedicaseError, MedicaseResult};
pub use repository::{Repository, Snapshot, Statistics, SNAPSHOT_VERSION};
pub use store::{FileStore, KeyValueStore, MemoryStore};
