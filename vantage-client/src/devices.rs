//! Device endpoints: listing and per-device monitoring control

use crate::DashboardClient;
use crate::error::Result;
use vantage_core::domain::device::{DeviceList, DeviceSummary};
use vantage_core::dto::monitor::{StartMonitoringResponse, StopMonitoringResponse};

impl DashboardClient {
    /// List all known devices
    ///
    /// Returns the compact per-device entries used for search and filtering.
    pub async fn list_devices(&self) -> Result<Vec<DeviceSummary>> {
        let url = format!("{}/api/users", self.base_url);
        let response = self.client.get(&url).send().await?;

        let list: DeviceList = self.handle_response(response).await?;
        Ok(list.devices)
    }

    /// Start a monitoring session on a device
    ///
    /// # Arguments
    /// * `device_id` - The device to start monitoring
    ///
    /// # Returns
    /// The created session id and the location it was started from
    pub async fn start_monitoring(&self, device_id: &str) -> Result<StartMonitoringResponse> {
        let url = format!("{}/api/start-listening/{}", self.base_url, device_id);
        let response = self.client.post(&url).send().await?;

        self.handle_response(response).await
    }

    /// Stop the active monitoring session on a device
    ///
    /// Fails with a 404 API error when the device has no active session.
    ///
    /// # Arguments
    /// * `device_id` - The device to stop monitoring
    pub async fn stop_monitoring(&self, device_id: &str) -> Result<StopMonitoringResponse> {
        let url = format!("{}/api/stop-listening/{}", self.base_url, device_id);
        let response = self.client.post(&url).send().await?;

        self.handle_response(response).await
    }
}
