//! Queue operations.

use tracing::debug;

use super::Repository;
use crate::records::{
    ActivityKind, ActivityRef, NewNotification, NewQueueEntry, NotificationKind, QueueEntry,
    QUEUE_WAITING,
};
use crate::store::keys;

impl Repository {
    /// All queue entries in insertion order.
    pub fn queue(&self) -> Vec<QueueEntry> {
        self.read_or_default(keys::QUEUE)
    }

    /// Append a waiting entry, numbering it from the current collection
    /// length. Logs a `queue_added` activity, emits an info notification and
    /// awards 5 points.
    pub fn add_to_queue(&self, input: NewQueueEntry) -> QueueEntry {
        let mut queue = self.queue();
        let (id, created_at) = self.next_id("QUEUE");
        let entry = QueueEntry {
            id,
            queue_number: queue.len() as u32 + 1,
            status: QUEUE_WAITING.to_string(),
            patient_name: input.patient_name,
            appointment_date: input.appointment_date,
            reason: input.reason,
            created_at,
            updated_at: None,
        };

        queue.push(entry.clone());
        self.write_value(keys::QUEUE, &queue);
        debug!(id = %entry.id, number = entry.queue_number, "queue entry added");

        self.log_activity(
            ActivityKind::QueueAdded,
            format!("Patient added to queue: {}", entry.patient_name),
            Some(ActivityRef::Queue(entry.id.clone())),
        );
        self.add_notification(NewNotification {
            title: "New queue entry".to_string(),
            message: format!("{} added to the queue", entry.patient_name),
            kind: NotificationKind::Info,
        });
        self.add_points(5, "Managed the queue");

        entry
    }

    /// Set the status of an entry in place. Any string is accepted; there is
    /// no state machine over queue statuses.
    pub fn update_queue_status(&self, id: &str, status: &str) -> bool {
        let mut queue = self.queue();
        let entry = match queue.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => entry,
            None => return false,
        };

        entry.status = status.to_string();
        entry.updated_at = Some(self.tick());
        self.write_value(keys::QUEUE, &queue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::Utc;

    fn repo() -> Repository {
        Repository::new(Box::new(MemoryStore::new()))
    }

    fn new_entry(name: &str) -> NewQueueEntry {
        NewQueueEntry {
            patient_name: name.to_string(),
            appointment_date: Utc::now(),
            reason: "Routine check-up".to_string(),
        }
    }

    #[test]
    fn test_queue_numbers_increase() {
        let repo = repo();
        let first = repo.add_to_queue(new_entry("Dewi Lestari"));
        let second = repo.add_to_queue(new_entry("Budi Santoso"));

        assert_eq!(first.queue_number, 1);
        assert_eq!(second.queue_number, 2);
        assert_eq!(first.status, QUEUE_WAITING);
    }

    #[test]
    fn test_queue_numbers_not_reissued_after_removal() {
        // Removal only happens through snapshot import; numbers come from the
        // collection length, so a shrunken queue may reuse a number, but
        // entries are never renumbered in place.
        let repo = repo();
        let first = repo.add_to_queue(new_entry("Dewi Lestari"));
        repo.add_to_queue(new_entry("Budi Santoso"));

        let queue = repo.queue();
        assert_eq!(queue[0].id, first.id);
        assert_eq!(queue[0].queue_number, 1);
    }

    #[test]
    fn test_add_emits_notification_activity_points() {
        let repo = repo();
        repo.add_to_queue(new_entry("Dewi Lestari"));

        assert_eq!(repo.activities()[0].kind, ActivityKind::QueueAdded);
        let notifications = repo.notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].kind, NotificationKind::Info);
        assert_eq!(repo.gamification().points, 5);
    }

    #[test]
    fn test_update_status_accepts_any_string() {
        let repo = repo();
        let entry = repo.add_to_queue(new_entry("Dewi Lestari"));

        assert!(repo.update_queue_status(&entry.id, "in-consultation"));
        let stored = &repo.queue()[0];
        assert_eq!(stored.status, "in-consultation");
        assert!(stored.updated_at.is_some());
    }

    #[test]
    fn test_update_status_unknown_id() {
        let repo = repo();
        assert!(!repo.update_queue_status("QUEUE-missing", "done"));
    }
}
