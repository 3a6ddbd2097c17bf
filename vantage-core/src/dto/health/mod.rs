//! Health-check DTOs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Backend health-check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub timestamp: NaiveDateTime,
    pub version: String,
}

impl Health {
    /// Whether the backend reports itself healthy
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
