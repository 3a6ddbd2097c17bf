//! Vantage Dashboard Client
//!
//! A typed HTTP client for the Vantage monitoring backend API.
//!
//! The client is constructed per session and owns (or receives) its own
//! `reqwest::Client`; there is no process-wide instance. Callers that need
//! custom headers (`Authorization`, `Cache-Control`) or timeouts inject a
//! pre-configured client via [`DashboardClient::with_client`].
//!
//! # Example
//!
//! ```no_run
//! use vantage_client::DashboardClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), vantage_client::ClientError> {
//!     let client = DashboardClient::new("http://localhost:8000");
//!
//!     let data = client.dashboard_data().await?;
//!     println!("{} devices, {} active sessions",
//!         data.total_devices, data.active_sessions_count);
//!     Ok(())
//! }
//! ```

pub mod error;

mod dashboard;
mod devices;
mod recordings;
mod sessions;

pub use error::{ClientError, Result};

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the Vantage dashboard API
///
/// Methods are grouped by backend area:
/// - Overview (dashboard data, stats, hourly activity, health)
/// - Devices (listing, start/stop monitoring)
/// - Sessions (active sessions, ending a session)
/// - Recordings (recent recordings, latest audio clip)
#[derive(Debug, Clone)]
pub struct DashboardClient {
    /// Base URL of the backend (e.g. "http://localhost:8000")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl DashboardClient {
    /// Create a new dashboard client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the backend API (e.g. "http://localhost:8000")
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Create a new dashboard client with a custom HTTP client
    ///
    /// This allows configuring timeouts, proxies, TLS settings, or default
    /// headers such as `Authorization`.
    ///
    /// # Example
    /// ```
    /// use vantage_client::DashboardClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = DashboardClient::with_client("http://localhost:8000", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the backend
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Handle an API response and deserialize JSON
    ///
    /// Checks the status code and returns an appropriate error if the request
    /// failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(status = status.as_u16(), "dashboard API request failed");
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::Parse(format!("Failed to parse JSON response: {}", e)))
    }
}
