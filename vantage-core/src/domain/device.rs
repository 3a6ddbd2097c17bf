//! Device domain types
//!
//! A "device" is a monitored handset known to the backend. The wire format
//! uses `user_id` for the device identifier; timestamps arrive as naive
//! ISO-8601 strings without a timezone offset.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Monitored device as reported in the dashboard payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    #[serde(rename = "user_id")]
    pub device_id: String,
    pub status: DeviceStatus,
    pub location: GeoPoint,
    pub last_activity: Option<NaiveDateTime>,
    pub current_session_id: Option<String>,
    #[serde(default)]
    pub session_start: Option<NaiveDateTime>,
    pub phone_number: String,
    #[serde(default)]
    pub device_info: Option<String>,
    /// Relative URL of the device's most recent audio clip, if any
    #[serde(default)]
    pub latest_recording: Option<String>,
    #[serde(default)]
    pub recordings_count: u32,
}

/// Compact device entry returned by the device-listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceSummary {
    #[serde(rename = "user_id")]
    pub device_id: String,
    pub status: DeviceStatus,
    pub last_activity: Option<NaiveDateTime>,
    pub phone_number: String,
}

/// Envelope for the device-listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceList {
    #[serde(rename = "users")]
    pub devices: Vec<DeviceSummary>,
}

/// Reported device state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    Listening,
    Idle,
    Offline,
}

/// Latitude/longitude pair attached to a device
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Resolved location with provenance, attached to monitoring responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    /// How the location was resolved: "ip", "default" or "fallback"
    pub source: String,
}
