use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An unlocked achievement, unique by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub name: String,
    pub unlocked_at: DateTime<Utc>,
}

/// Input for `add_achievement`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAchievement {
    pub id: String,
    pub name: String,
}

/// Singleton points/level/achievements record.
///
/// `level` is always derived from `points`, never set independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GamificationState {
    pub points: u64,
    pub level: u32,
    pub achievements: Vec<Achievement>,
}

impl Default for GamificationState {
    fn default() -> Self {
        Self {
            points: 0,
            level: 1,
            achievements: Vec::new(),
        }
    }
}

impl GamificationState {
    /// Every 100 points is one level.
    pub fn level_for(points: u64) -> u32 {
        (points / 100) as u32 + 1
    }
}
