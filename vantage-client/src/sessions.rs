//! Session endpoints

use crate::DashboardClient;
use crate::error::Result;
use vantage_core::domain::session::{ActiveSessions, SessionSummary};
use vantage_core::dto::monitor::EndSessionResponse;

impl DashboardClient {
    /// List currently active monitoring sessions
    pub async fn active_sessions(&self) -> Result<Vec<SessionSummary>> {
        let url = format!("{}/api/sessions/active", self.base_url);
        let response = self.client.get(&url).send().await?;

        let sessions: ActiveSessions = self.handle_response(response).await?;
        Ok(sessions.active_sessions)
    }

    /// End a session by id
    ///
    /// # Arguments
    /// * `session_id` - The session to end
    pub async fn end_session(&self, session_id: &str) -> Result<EndSessionResponse> {
        let url = format!("{}/api/sessions/{}/end", self.base_url, session_id);
        let response = self.client.post(&url).send().await?;

        self.handle_response(response).await
    }
}
