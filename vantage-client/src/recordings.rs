//! Recording endpoints

use crate::DashboardClient;
use crate::error::Result;
use vantage_core::domain::recording::RecentRecordings;
use vantage_core::dto::audio::AudioClip;

impl DashboardClient {
    /// Fetch the most recent recordings
    ///
    /// # Arguments
    /// * `limit` - Maximum number of recordings to return
    pub async fn recent_recordings(&self, limit: usize) -> Result<RecentRecordings> {
        let url = format!("{}/api/recordings/recent", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("limit", limit)])
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Fetch the latest audio clip for a device
    ///
    /// Fails with a 404 API error when the device has no recordings.
    ///
    /// # Arguments
    /// * `device_id` - The device whose latest clip to fetch
    pub async fn latest_audio(&self, device_id: &str) -> Result<AudioClip> {
        let url = format!("{}/api/audio/{}/latest", self.base_url, device_id);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }
}
