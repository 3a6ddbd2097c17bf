//! Monitoring session domain types

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Active monitoring session summary
///
/// Returned both embedded in the dashboard payload and by the active-sessions
/// endpoint; the latter additionally carries the session's recorded location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub session_id: String,
    #[serde(rename = "user_id")]
    pub device_id: String,
    pub start_time: NaiveDateTime,
    pub duration_minutes: i64,
    #[serde(default)]
    pub location: Option<SessionLocation>,
}

/// Location captured when a session was started; either coordinate may be
/// missing when IP resolution failed
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SessionLocation {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// Envelope for the active-sessions endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveSessions {
    pub active_sessions: Vec<SessionSummary>,
}
