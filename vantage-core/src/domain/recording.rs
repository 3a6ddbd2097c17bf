//! Recording domain types

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Audio recording metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recording {
    pub id: String,
    #[serde(rename = "user_id")]
    pub device_id: String,
    pub filename: String,
    /// Length in seconds, when known
    pub duration: Option<u32>,
    pub created_at: NaiveDateTime,
    /// Size in bytes, when known
    pub file_size: Option<u64>,
}

/// Page of recent recordings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentRecordings {
    pub recordings: Vec<Recording>,
    pub total: usize,
    pub limit: usize,
}
