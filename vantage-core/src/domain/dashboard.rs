//! Dashboard aggregate types
//!
//! [`DashboardData`] is the payload the poller fetches on every cycle; the
//! other types here are its building blocks.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::device::Device;
use crate::domain::session::SessionSummary;

/// Full dashboard snapshot returned by the dashboard-data endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardData {
    pub active_sessions_count: u32,
    #[serde(rename = "total_users")]
    pub total_devices: u32,
    pub connection_status: ConnectionStatus,
    #[serde(rename = "users")]
    pub devices: Vec<Device>,
    pub active_sessions: Vec<SessionSummary>,
    pub stats: DashboardStats,
    pub last_updated: NaiveDateTime,
}

/// Backend-reported connection state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Connected,
    Connecting,
    Error,
}

/// Aggregate counters for the dashboard header
///
/// The backend adds new counters over time; anything not modelled explicitly
/// is preserved in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(rename = "total_users")]
    pub total_devices: u32,
    pub active_sessions: u32,
    #[serde(default)]
    pub total_recordings: u32,
    #[serde(rename = "online_users", default)]
    pub online_devices: Option<u32>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}
