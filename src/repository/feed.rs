//! Notification and activity feeds.
//!
//! Both are additive, newest-first, bounded logs. Nothing in a stored entry
//! is ever mutated except the `read` flag on notifications.

use super::Repository;
use crate::records::{Activity, ActivityKind, ActivityRef, NewNotification, Notification};
use crate::store::keys;

/// Oldest notifications beyond this count are discarded on insert.
pub(crate) const NOTIFICATION_CAP: usize = 50;
/// Oldest activities beyond this count are discarded on insert.
pub(crate) const ACTIVITY_CAP: usize = 100;

/// Placeholder identity stamped on every activity; there is no auth layer.
const ACTIVITY_USER: &str = "dr. User";

impl Repository {
    /// All notifications, newest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.read_or_default(keys::NOTIFICATIONS)
    }

    /// Prepend a notification, discarding the oldest beyond the cap.
    pub fn add_notification(&self, input: NewNotification) -> Notification {
        let mut notifications = self.notifications();
        let (id, timestamp) = self.next_id("NOTIF");
        let notification = Notification {
            id,
            title: input.title,
            message: input.message,
            kind: input.kind,
            read: false,
            timestamp,
        };

        notifications.insert(0, notification.clone());
        notifications.truncate(NOTIFICATION_CAP);
        self.write_value(keys::NOTIFICATIONS, &notifications);

        notification
    }

    /// Flag a notification as read.
    pub fn mark_as_read(&self, id: &str) -> bool {
        let mut notifications = self.notifications();
        let notification = match notifications.iter_mut().find(|n| n.id == id) {
            Some(notification) => notification,
            None => return false,
        };

        notification.read = true;
        self.write_value(keys::NOTIFICATIONS, &notifications)
    }

    /// Number of notifications not yet marked read.
    pub fn unread_count(&self) -> usize {
        self.notifications().iter().filter(|n| !n.read).count()
    }

    /// All activities, newest first. Read-only for callers; entries are
    /// appended by the mutating operations.
    pub fn activities(&self) -> Vec<Activity> {
        self.read_or_default(keys::ACTIVITIES)
    }

    /// Record an activity, stamping the placeholder user and discarding the
    /// oldest beyond the cap.
    pub(crate) fn log_activity(
        &self,
        kind: ActivityKind,
        message: String,
        reference: Option<ActivityRef>,
    ) {
        let mut activities = self.activities();
        let (id, timestamp) = self.next_id("ACTIVITY");

        let (case_id, queue_id, claim_id) = match reference {
            Some(ActivityRef::Case(id)) => (Some(id), None, None),
            Some(ActivityRef::Queue(id)) => (None, Some(id), None),
            Some(ActivityRef::Claim(id)) => (None, None, Some(id)),
            None => (None, None, None),
        };

        let activity = Activity {
            id,
            kind,
            message,
            timestamp,
            user: ACTIVITY_USER.to_string(),
            case_id,
            queue_id,
            claim_id,
        };

        activities.insert(0, activity);
        activities.truncate(ACTIVITY_CAP);
        self.write_value(keys::ACTIVITIES, &activities);
    }
}
