//! Overview endpoints: dashboard data, stats, analytics, health

use crate::DashboardClient;
use crate::error::Result;
use vantage_core::domain::dashboard::{DashboardData, DashboardStats};
use vantage_core::dto::analytics::HourlyActivity;
use vantage_core::dto::health::Health;

impl DashboardClient {
    /// Fetch the full dashboard snapshot
    ///
    /// This is the payload the poller refreshes on every cycle: device list,
    /// active sessions, and aggregate counters in one response.
    pub async fn dashboard_data(&self) -> Result<DashboardData> {
        let url = format!("{}/api/dashboard-data", self.base_url);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Fetch aggregate dashboard statistics
    pub async fn dashboard_stats(&self) -> Result<DashboardStats> {
        let url = format!("{}/api/dashboard/stats", self.base_url);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Fetch hourly session-activity buckets for the trailing 24 hours
    pub async fn hourly_activity(&self) -> Result<HourlyActivity> {
        let url = format!("{}/api/analytics/hourly-activity", self.base_url);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Check backend health
    pub async fn health(&self) -> Result<Health> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }
}
