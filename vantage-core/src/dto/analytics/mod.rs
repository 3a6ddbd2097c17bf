//! Analytics DTOs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Hourly session activity, one bucket per label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyActivity {
    /// Hour labels, oldest first ("09:00", "10:00", ...)
    pub labels: Vec<String>,
    /// Session counts aligned with `labels`
    pub data: Vec<u32>,
    pub total_today: u32,
    pub peak_hour: String,
    pub last_updated: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hourly_activity_decodes() {
        let raw = serde_json::json!({
            "labels": ["09:00", "10:00"],
            "data": [4, 9],
            "total_today": 13,
            "peak_hour": "10:00",
            "last_updated": "2026-08-07T10:20:00",
        });

        let activity: HourlyActivity = serde_json::from_value(raw).unwrap();
        assert_eq!(activity.labels.len(), activity.data.len());
        assert_eq!(activity.peak_hour, "10:00");
    }
}
