//! Case operations.

use tracing::debug;

use super::Repository;
use crate::records::{
    ActivityKind, ActivityRef, Case, CaseClaimStatus, CaseFilter, CaseUpdate, NewCase,
};
use crate::store::keys;

impl Repository {
    /// All cases in stored order, newest first.
    pub fn cases(&self) -> Vec<Case> {
        self.read_or_default(keys::CASES)
    }

    /// Look up a single case by id.
    pub fn case(&self, id: &str) -> Option<Case> {
        self.cases().into_iter().find(|case| case.id == id)
    }

    /// Create a case, prepend it to the collection and fire the bundled side
    /// effects: a `case_created` activity and 10 points.
    pub fn add_case(&self, input: NewCase) -> Case {
        let mut cases = self.cases();
        let (id, created_at) = self.next_id("CASE");
        let case = Case {
            id,
            jkn_number: self.jkn_number(),
            patient_name: input.patient_name,
            patient_age: input.patient_age,
            patient_gender: input.patient_gender,
            diagnosis: input.diagnosis,
            description: input.description,
            treatment: input.treatment,
            notes: input.notes,
            status: input.status,
            priority: input.priority.unwrap_or_default(),
            claim_status: CaseClaimStatus::Pending,
            created_at,
            updated_at: created_at,
        };

        cases.insert(0, case.clone());
        self.write_value(keys::CASES, &cases);
        debug!(id = %case.id, patient = %case.patient_name, "case added");

        self.log_activity(
            ActivityKind::CaseCreated,
            format!("New case added: {}", case.patient_name),
            Some(ActivityRef::Case(case.id.clone())),
        );
        self.add_points(10, "Added a new case");

        case
    }

    /// Merge `update` onto the case with `id`: present fields overwrite,
    /// absent fields are retained, `updated_at` is refreshed. Returns the
    /// updated record, or `None` when the id is unknown.
    pub fn update_case(&self, id: &str, update: CaseUpdate) -> Option<Case> {
        let mut cases = self.cases();
        let case = cases.iter_mut().find(|case| case.id == id)?;

        update.apply(case);
        case.updated_at = self.tick();
        let updated = case.clone();

        self.write_value(keys::CASES, &cases);
        self.log_activity(
            ActivityKind::CaseUpdated,
            format!("Case updated: {}", updated.patient_name),
            Some(ActivityRef::Case(updated.id.clone())),
        );
        self.add_points(5, "Updated a case");

        Some(updated)
    }

    /// Remove exactly the case with `id`. Related queue entries, claims and
    /// notifications are independent feeds and stay untouched.
    pub fn delete_case(&self, id: &str) -> bool {
        let mut cases = self.cases();
        let before = cases.len();
        cases.retain(|case| case.id != id);
        if cases.len() == before {
            return false;
        }

        if !self.write_value(keys::CASES, &cases) {
            return false;
        }
        self.log_activity(
            ActivityKind::CaseDeleted,
            "Case deleted".to_string(),
            Some(ActivityRef::Case(id.to_string())),
        );
        true
    }

    /// Cases matching `filter`, in stored order.
    pub fn find_cases(&self, filter: &CaseFilter) -> Vec<Case> {
        let now = self.now();
        self.cases()
            .into_iter()
            .filter(|case| filter.matches(case, now))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{CaseStatus, Gender, Priority};
    use crate::store::MemoryStore;

    fn repo() -> Repository {
        Repository::new(Box::new(MemoryStore::new()))
    }

    fn new_case(name: &str) -> NewCase {
        NewCase {
            patient_name: name.to_string(),
            patient_age: 45,
            patient_gender: Gender::Male,
            diagnosis: "Diabetes Mellitus Type 2".to_string(),
            description: "Polyuria and weight loss".to_string(),
            treatment: String::new(),
            notes: String::new(),
            status: CaseStatus::Active,
            priority: None,
        }
    }

    #[test]
    fn test_add_case_applies_defaults() {
        let repo = repo();
        let case = repo.add_case(new_case("Ahmad Surya"));

        assert!(case.id.starts_with("CASE-"));
        assert!(case.jkn_number.starts_with("JKN-"));
        assert_eq!(case.priority, Priority::Medium);
        assert_eq!(case.claim_status, CaseClaimStatus::Pending);
        assert_eq!(case.created_at, case.updated_at);
    }

    #[test]
    fn test_newest_case_first() {
        let repo = repo();
        repo.add_case(new_case("First"));
        repo.add_case(new_case("Second"));

        let cases = repo.cases();
        assert_eq!(cases[0].patient_name, "Second");
        assert_eq!(cases[1].patient_name, "First");
    }

    #[test]
    fn test_add_case_logs_activity_and_points() {
        let repo = repo();
        let case = repo.add_case(new_case("Ahmad Surya"));

        let activities = repo.activities();
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].kind, ActivityKind::CaseCreated);
        assert_eq!(activities[0].case_id.as_deref(), Some(case.id.as_str()));
        assert_eq!(repo.gamification().points, 10);
    }

    #[test]
    fn test_update_merges_and_refreshes_updated_at() {
        let repo = repo();
        let case = repo.add_case(new_case("Ahmad Surya"));

        let updated = repo
            .update_case(
                &case.id,
                CaseUpdate {
                    status: Some(CaseStatus::Closed),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.status, CaseStatus::Closed);
        assert_eq!(updated.patient_name, "Ahmad Surya");
        assert_eq!(updated.id, case.id);
        assert_eq!(updated.jkn_number, case.jkn_number);
        assert!(updated.updated_at > case.updated_at);
    }

    #[test]
    fn test_update_unknown_id_returns_none() {
        let repo = repo();
        assert!(repo
            .update_case("CASE-missing", CaseUpdate::default())
            .is_none());
        assert!(repo.activities().is_empty());
    }

    #[test]
    fn test_delete_is_exact_and_idempotent() {
        let repo = repo();
        let keep = repo.add_case(new_case("Keep"));
        let drop = repo.add_case(new_case("Drop"));

        assert!(repo.delete_case(&drop.id));
        assert!(repo.case(&keep.id).is_some());
        assert!(repo.case(&drop.id).is_none());

        let len = repo.cases().len();
        assert!(!repo.delete_case(&drop.id));
        assert_eq!(repo.cases().len(), len);
    }

    #[test]
    fn test_find_cases_composes_criteria() {
        let repo = repo();
        repo.add_case(new_case("Ahmad Surya"));
        let mut other = new_case("Siti Nurhaliza");
        other.patient_gender = Gender::Female;
        other.diagnosis = "Hipertensi Grade 1".to_string();
        repo.add_case(other);

        let filter = CaseFilter {
            genders: vec![Gender::Female],
            diagnosis: Some("hipertensi".to_string()),
            ..Default::default()
        };
        let hits = repo.find_cases(&filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].patient_name, "Siti Nurhaliza");
    }
}
