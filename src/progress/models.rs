//! Data model for study progress

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::syllabus::TOTAL_DAYS;

/// Per-user completion state for the 30-day plan.
///
/// `completed_days` keeps the order in which days were first completed;
/// `current_day` always points at the earliest day not yet done.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    pub username: String,
    #[serde(default)]
    pub completed_days: Vec<u8>,
    #[serde(default = "default_current_day")]
    pub current_day: u8,
    pub updated_at: DateTime<Utc>,
}

fn default_current_day() -> u8 {
    1
}

impl UserProgress {
    pub fn new(username: String) -> Self {
        Self {
            username,
            completed_days: Vec::new(),
            current_day: default_current_day(),
            updated_at: Utc::now(),
        }
    }

    pub fn is_completed(&self, day: u8) -> bool {
        self.completed_days.contains(&day)
    }

    /// Earliest day not yet completed, or `None` when the plan is done.
    pub fn next_day(&self) -> Option<u8> {
        (1..=TOTAL_DAYS).find(|d| !self.is_completed(*d))
    }

    /// Whole-plan completion as a rounded percentage.
    pub fn percent_complete(&self) -> u8 {
        let completed = self.completed_days.len() as f32;
        (completed / TOTAL_DAYS as f32 * 100.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_complete_rounds() {
        let mut progress = UserProgress::new("alice".to_string());
        assert_eq!(progress.percent_complete(), 0);

        progress.completed_days = vec![1];
        assert_eq!(progress.percent_complete(), 3); // 1/30 = 3.33%

        progress.completed_days = (1..=30).collect();
        assert_eq!(progress.percent_complete(), 100);
    }

    #[test]
    fn test_next_day_skips_completed() {
        let mut progress = UserProgress::new("alice".to_string());
        assert_eq!(progress.next_day(), Some(1));

        progress.completed_days = vec![1, 2, 5];
        assert_eq!(progress.next_day(), Some(3));

        progress.completed_days = (1..=30).collect();
        assert_eq!(progress.next_day(), None);
    }
}
