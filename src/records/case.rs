use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::{Gender, Priority};

/// Lifecycle status of a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    Active,
    Closed,
    Pending,
}

/// Progress of the insurance claim attached to a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseClaimStatus {
    Pending,
    Processing,
    Approved,
    Rejected,
}

/// A medical case record.
///
/// `id` and `jkn_number` are generated at creation and never change;
/// `updated_at` is refreshed on every update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    pub id: String,
    pub jkn_number: String,
    pub patient_name: String,
    pub patient_age: u32,
    pub patient_gender: Gender,
    pub diagnosis: String,
    pub description: String,
    #[serde(default)]
    pub treatment: String,
    #[serde(default)]
    pub notes: String,
    pub status: CaseStatus,
    pub priority: Priority,
    pub claim_status: CaseClaimStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for `add_case`; generated fields and defaults are applied by the
/// repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCase {
    pub patient_name: String,
    pub patient_age: u32,
    pub patient_gender: Gender,
    pub diagnosis: String,
    pub description: String,
    #[serde(default)]
    pub treatment: String,
    #[serde(default)]
    pub notes: String,
    pub status: CaseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

/// Partial update for `update_case`: present fields overwrite, absent fields
/// are retained.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseUpdate {
    pub patient_name: Option<String>,
    pub patient_age: Option<u32>,
    pub patient_gender: Option<Gender>,
    pub diagnosis: Option<String>,
    pub description: Option<String>,
    pub treatment: Option<String>,
    pub notes: Option<String>,
    pub status: Option<CaseStatus>,
    pub priority: Option<Priority>,
    pub claim_status: Option<CaseClaimStatus>,
}

impl CaseUpdate {
    pub(crate) fn apply(self, case: &mut Case) {
        if let Some(patient_name) = self.patient_name {
            case.patient_name = patient_name;
        }
        if let Some(patient_age) = self.patient_age {
            case.patient_age = patient_age;
        }
        if let Some(patient_gender) = self.patient_gender {
            case.patient_gender = patient_gender;
        }
        if let Some(diagnosis) = self.diagnosis {
            case.diagnosis = diagnosis;
        }
        if let Some(description) = self.description {
            case.description = description;
        }
        if let Some(treatment) = self.treatment {
            case.treatment = treatment;
        }
        if let Some(notes) = self.notes {
            case.notes = notes;
        }
        if let Some(status) = self.status {
            case.status = status;
        }
        if let Some(priority) = self.priority {
            case.priority = priority;
        }
        if let Some(claim_status) = self.claim_status {
            case.claim_status = claim_status;
        }
    }
}

/// Recency window for [`CaseFilter::created_within`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreatedWithin {
    Today,
    Week,
    Month,
}

impl CreatedWithin {
    fn cutoff(self, now: DateTime<Utc>) -> DateTime<Utc> {
        let days = match self {
            CreatedWithin::Today => 1,
            CreatedWithin::Week => 7,
            CreatedWithin::Month => 30,
        };
        now - Duration::days(days)
    }
}

/// In-memory query over the cases collection. Criteria compose by AND; an
/// empty filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct CaseFilter {
    pub status: Option<CaseStatus>,
    pub created_within: Option<CreatedWithin>,
    /// Case-insensitive substring over patient name, diagnosis, description,
    /// id and JKN number.
    pub search: Option<String>,
    pub age_min: Option<u32>,
    pub age_max: Option<u32>,
    /// Empty means any gender.
    pub genders: Vec<Gender>,
    pub diagnosis: Option<String>,
    pub priority: Option<Priority>,
}

impl CaseFilter {
    pub fn matches(&self, case: &Case, now: DateTime<Utc>) -> bool {
        if let Some(status) = self.status {
            if case.status != status {
                return false;
            }
        }
        if let Some(window) = self.created_within {
            if case.created_at < window.cutoff(now) {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let hit = case.patient_name.to_lowercase().contains(&needle)
                || case.diagnosis.to_lowercase().contains(&needle)
                || case.description.to_lowercase().contains(&needle)
                || case.id.to_lowercase().contains(&needle)
                || case.jkn_number.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        if let Some(age_min) = self.age_min {
            if case.patient_age < age_min {
                return false;
            }
        }
        if let Some(age_max) = self.age_max {
            if case.patient_age > age_max {
                return false;
            }
        }
        if !self.genders.is_empty() && !self.genders.contains(&case.patient_gender) {
            return false;
        }
        if let Some(diagnosis) = &self.diagnosis {
            if !case
                .diagnosis
                .to_lowercase()
                .contains(&diagnosis.to_lowercase())
            {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if case.priority != priority {
                return false;
            }
        }
        true
    }
}
