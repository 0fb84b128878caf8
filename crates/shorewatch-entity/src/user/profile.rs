//! User profile and contribution statistics value objects.
//!
//! Both are stored as JSON columns on the `users` table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Free-form profile information supplied by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Home village or town.
    #[serde(default)]
    pub location: Option<String>,
    /// Affiliated organization or school.
    #[serde(default)]
    pub organization: Option<String>,
    /// Areas of expertise.
    #[serde(default)]
    pub expertise: Vec<String>,
    /// Free-form client preferences.
    #[serde(default)]
    pub preferences: serde_json::Value,
}

/// Contribution statistics for a user.
///
/// Mutated exclusively by reading submission — never writable through
/// any user update payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    /// Total readings ever submitted.
    #[serde(default)]
    pub total_readings: i64,
    /// Consecutive-day submission streak.
    #[serde(default)]
    pub streak: i64,
    /// Running mean of submitted reading accuracies (0-100).
    #[serde(default)]
    pub accuracy: f64,
    /// Timestamp of the most recent reading.
    #[serde(default)]
    pub last_reading_at: Option<DateTime<Utc>>,
}

impl UserStats {
    /// Fold a new reading into the stats.
    ///
    /// The streak increments when the gap to the previous reading is at
    /// most one day, otherwise it resets to 1. Accuracy becomes the
    /// running mean of all submitted accuracies.
    pub fn record_reading(&mut self, timestamp: DateTime<Utc>, accuracy: i32) {
        let previous = self.last_reading_at;
        self.total_readings += 1;
        self.last_reading_at = Some(timestamp);

        self.streak = match previous {
            Some(prev) if (timestamp - prev) <= chrono::Duration::days(1) => self.streak + 1,
            _ => 1,
        };

        let n = self.total_readings as f64;
        self.accuracy = (self.accuracy * (n - 1.0) + f64::from(accuracy)) / n;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_first_reading_starts_streak() {
        let mut stats = UserStats::default();
        stats.record_reading(at(1, 9), 80);
        assert_eq!(stats.total_readings, 1);
        assert_eq!(stats.streak, 1);
        assert_eq!(stats.last_reading_at, Some(at(1, 9)));
    }

    #[test]
    fn test_consecutive_day_increments_streak() {
        let mut stats = UserStats::default();
        stats.record_reading(at(1, 9), 80);
        stats.record_reading(at(2, 9), 90);
        assert_eq!(stats.streak, 2);
        stats.record_reading(at(3, 8), 70);
        assert_eq!(stats.streak, 3);
    }

    #[test]
    fn test_gap_resets_streak() {
        let mut stats = UserStats::default();
        stats.record_reading(at(1, 9), 80);
        stats.record_reading(at(2, 9), 90);
        stats.record_reading(at(7, 9), 60);
        assert_eq!(stats.streak, 1);
        assert_eq!(stats.total_readings, 3);
    }

    #[test]
    fn test_accuracy_running_mean() {
        let mut stats = UserStats::default();
        stats.record_reading(at(1, 9), 80);
        stats.record_reading(at(2, 9), 100);
        assert!((stats.accuracy - 90.0).abs() < f64::EPSILON);
    }
}
