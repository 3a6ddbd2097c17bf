//! Fetch executor
//!
//! Performs exactly one bounded request-decode-transform cycle and
//! normalizes the result into an [`Outcome`]. Errors never escape this
//! boundary and no retry policy lives here; scheduling is the scheduler's
//! concern.

use chrono::{DateTime, Utc};
use std::time::Duration;
use thiserror::Error;

use crate::config::Transform;

/// Normalized result of one fetch attempt
#[derive(Debug)]
pub enum Outcome<T> {
    Success {
        value: T,
        completed_at: DateTime<Utc>,
    },
    Failure {
        error: FetchError,
        completed_at: DateTime<Utc>,
    },
}

/// Why a fetch attempt failed
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (connection refused, DNS, TLS, ...)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The attempt did not complete within the configured timeout
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// Backend answered with a non-success status
    #[error("HTTP error (status {status}): {body}")]
    Http { status: u16, body: String },

    /// Decoding or transforming an otherwise valid response failed
    #[error("transform error: {0}")]
    Transform(String),
}

/// Executes one fetch attempt against `endpoint`
///
/// The whole cycle runs under `request_timeout`; an expired deadline aborts
/// the in-flight request and yields a timeout failure.
pub(crate) async fn execute<T>(
    client: &reqwest::Client,
    endpoint: &str,
    request_timeout: Duration,
    transform: &Transform<T>,
) -> Outcome<T> {
    let result = tokio::time::timeout(request_timeout, attempt(client, endpoint, transform)).await;
    let completed_at = Utc::now();

    match result {
        Ok(Ok(value)) => Outcome::Success {
            value,
            completed_at,
        },
        Ok(Err(error)) => Outcome::Failure {
            error,
            completed_at,
        },
        Err(_) => Outcome::Failure {
            error: FetchError::Timeout(request_timeout),
            completed_at,
        },
    }
}

async fn attempt<T>(
    client: &reqwest::Client,
    endpoint: &str,
    transform: &Transform<T>,
) -> Result<T, FetchError> {
    let response = client.get(endpoint).send().await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(FetchError::Http {
            status: status.as_u16(),
            body,
        });
    }

    let raw: serde_json::Value = response
        .json()
        .await
        .map_err(|e| FetchError::Transform(format!("failed to decode JSON body: {}", e)))?;

    (transform)(raw).map_err(|e| FetchError::Transform(e.to_string()))
}
