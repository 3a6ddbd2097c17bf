//! Audio DTOs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Latest audio clip available for a device
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioClip {
    #[serde(rename = "user_id")]
    pub device_id: String,
    /// Relative streaming URL for the clip
    pub audio_url: String,
    /// Length in seconds, when known
    pub duration: Option<u32>,
    pub recorded_at: NaiveDateTime,
    /// Size in bytes, when known
    pub file_size: Option<u64>,
}
