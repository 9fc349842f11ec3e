//! Points, levels and achievements.

use tracing::debug;

use super::Repository;
use crate::records::{
    Achievement, GamificationState, NewAchievement, NewNotification, NotificationKind,
};
use crate::store::keys;

impl Repository {
    /// Current points/level/achievements record.
    pub fn gamification(&self) -> GamificationState {
        self.read_or_default(keys::GAMIFICATION)
    }

    /// Award points and recompute the level. One celebratory notification is
    /// emitted per level gained. `reason` is logged, not persisted.
    pub fn add_points(&self, points: u64, reason: &str) {
        let mut state = self.gamification();
        state.points += points;
        debug!(points, reason, total = state.points, "points awarded");

        let new_level = GamificationState::level_for(state.points);
        if new_level > state.level {
            let previous = state.level;
            state.level = new_level;
            for level in (previous + 1)..=new_level {
                self.add_notification(NewNotification {
                    title: "Level up!".to_string(),
                    message: format!("Congratulations! You reached level {}", level),
                    kind: NotificationKind::Success,
                });
            }
        }

        self.write_value(keys::GAMIFICATION, &state);
    }

    /// Unlock an achievement once; repeated unlocks with the same id are
    /// ignored. Emits a notification only on first unlock.
    pub fn add_achievement(&self, input: NewAchievement) {
        let mut state = self.gamification();
        if state.achievements.iter().any(|a| a.id == input.id) {
            return;
        }

        let unlocked_at = self.tick();
        state.achievements.push(Achievement {
            id: input.id,
            name: input.name.clone(),
            unlocked_at,
        });
        self.write_value(keys::GAMIFICATION, &state);

        self.add_notification(NewNotification {
            title: "Achievement unlocked!".to_string(),
            message: input.name,
            kind: NotificationKind::Success,
        });
    }
}
