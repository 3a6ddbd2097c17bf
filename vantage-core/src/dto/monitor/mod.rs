//! Monitoring control DTOs
//!
//! Responses of the start/stop-monitoring and end-session operations.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::device::GeoLocation;

/// Response to a start-monitoring request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartMonitoringResponse {
    pub status: String,
    pub message: String,
    pub session_id: String,
    #[serde(rename = "user_id")]
    pub device_id: String,
    /// Location resolved from the operator's address at session start
    pub location: GeoLocation,
}

/// Response to a stop-monitoring request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopMonitoringResponse {
    pub status: String,
    pub message: String,
    pub session_id: String,
    pub duration_minutes: i64,
}

/// Response to ending a session by id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndSessionResponse {
    pub status: String,
    pub message: String,
    pub session_id: String,
    pub ended_at: NaiveDateTime,
}
