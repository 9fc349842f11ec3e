//! First-run sample data.

use tracing::info;

use super::Repository;
use crate::records::{CaseStatus, Gender, NewCase, NewClaim, NewQueueEntry, Priority};

impl Repository {
    /// Seed illustrative records through the normal operations, so the usual
    /// side effects (activities, notifications, points) fire exactly as they
    /// would for user input.
    pub(crate) fn seed_sample_data(&self) {
        info!("seeding sample data");

        let first = self.add_case(NewCase {
            patient_name: "Ahmad Surya".to_string(),
            patient_age: 45,
            patient_gender: Gender::Male,
            diagnosis: "Diabetes Mellitus Type 2".to_string(),
            description: "Polyuria, polydipsia and weight loss over the last three months. \
                          HbA1c: 9.2%"
                .to_string(),
            treatment: "Metformin 500mg twice daily, low-sugar diet, regular exercise".to_string(),
            notes: "Family history of diabetes. Lifestyle counselling given.".to_string(),
            status: CaseStatus::Active,
            priority: Some(Priority::Medium),
        });

        self.add_case(NewCase {
            patient_name: "Siti Nurhaliza".to_string(),
            patient_age: 32,
            patient_gender: Gender::Female,
            diagnosis: "Hipertensi Grade 1".to_string(),
            description: "Recurring headaches, mostly in the morning. BP: 150/95 mmHg".to_string(),
            treatment: "Amlodipine 5mg once daily, low-salt diet".to_string(),
            notes: "Follow up in two weeks for blood pressure monitoring".to_string(),
            status: CaseStatus::Active,
            priority: Some(Priority::Medium),
        });

        self.add_case(NewCase {
            patient_name: "Budi Santoso".to_string(),
            patient_age: 28,
            patient_gender: Gender::Male,
            diagnosis: "GERD (Gastroesophageal Reflux Disease)".to_string(),
            description: "Epigastric pain and nausea, worse after meals. Irregular eating habits."
                .to_string(),
            treatment: "Omeprazole 20mg once daily before meals, regular meal schedule".to_string(),
            notes: "Counselled on trigger foods and meal timing".to_string(),
            status: CaseStatus::Closed,
            priority: Some(Priority::Low),
        });

        self.add_to_queue(NewQueueEntry {
            patient_name: "Dewi Lestari".to_string(),
            appointment_date: self.now(),
            reason: "Routine hypertension check-up".to_string(),
        });

        self.add_claim(NewClaim {
            case_id: Some(first.id),
            patient_name: "Ahmad Surya".to_string(),
            diagnosis: "Diabetes Mellitus Type 2".to_string(),
            amount: 2_500_000,
            priority: Some(Priority::Medium),
        });
    }
}
