//! Poll session configuration
//!
//! All knobs of one poll session: endpoint, cadence, retry budget, timeout,
//! payload transform and outcome hooks. Immutable once the session is
//! spawned.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::state::ErrorInfo;

/// Post-processing applied to the raw decoded payload of a successful fetch
pub(crate) type Transform<T> = Arc<dyn Fn(serde_json::Value) -> anyhow::Result<T> + Send + Sync>;

/// Hook invoked after every applied success
pub(crate) type SuccessHook<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Hook invoked after every applied failure
pub(crate) type ErrorHook = Arc<dyn Fn(&ErrorInfo) + Send + Sync>;

const DEFAULT_INTERVAL: Duration = Duration::from_millis(2000);
const DEFAULT_MAX_RETRIES: u32 = 5;
const DEFAULT_RETRY_BASE_DELAY: Duration = Duration::from_millis(1000);
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Configuration of one poll session
pub struct PollConfig<T> {
    /// URL fetched on every cycle
    pub endpoint: String,

    /// Fixed cadence between regular fetches
    pub interval: Duration,

    /// Whether to fetch immediately when polling starts, rather than waiting
    /// for the first interval tick
    pub immediate: bool,

    /// Maximum number of backoff retries scheduled after consecutive failures
    pub max_retries: u32,

    /// Delay before the first backoff retry; doubles per consecutive failure
    pub retry_base_delay: Duration,

    /// Hard deadline for one request-decode-transform cycle
    pub request_timeout: Duration,

    pub(crate) transform: Transform<T>,
    pub(crate) on_success: Option<SuccessHook<T>>,
    pub(crate) on_error: Option<ErrorHook>,
}

impl PollConfig<serde_json::Value> {
    /// Creates a config that yields the raw decoded JSON payload unchanged
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_transform(endpoint, Ok)
    }
}

impl<T: DeserializeOwned> PollConfig<T> {
    /// Creates a config that deserializes payloads into `T`
    pub fn deserializing(endpoint: impl Into<String>) -> Self {
        Self::with_transform(endpoint, |raw| {
            serde_json::from_value(raw).map_err(Into::into)
        })
    }
}

impl<T> PollConfig<T> {
    /// Creates a config whose payloads are post-processed by `transform`
    ///
    /// A transform returning `Err` turns the attempt into a failure outcome,
    /// exactly like a network or HTTP error.
    pub fn with_transform(
        endpoint: impl Into<String>,
        transform: impl Fn(serde_json::Value) -> anyhow::Result<T> + Send + Sync + 'static,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            interval: DEFAULT_INTERVAL,
            immediate: true,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_base_delay: DEFAULT_RETRY_BASE_DELAY,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            transform: Arc::new(transform),
            on_success: None,
            on_error: None,
        }
    }

    /// Sets the fixed fetch cadence
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Sets whether polling fetches immediately on start
    pub fn with_immediate(mut self, immediate: bool) -> Self {
        self.immediate = immediate;
        self
    }

    /// Sets the backoff retry budget
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Sets the delay before the first backoff retry
    pub fn with_retry_base_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }

    /// Sets the hard per-request timeout
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Registers a hook invoked after every applied success
    pub fn on_success(mut self, hook: impl Fn(&T) + Send + Sync + 'static) -> Self {
        self.on_success = Some(Arc::new(hook));
        self
    }

    /// Registers a hook invoked after every applied failure
    pub fn on_error(mut self, hook: impl Fn(&ErrorInfo) + Send + Sync + 'static) -> Self {
        self.on_error = Some(Arc::new(hook));
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.endpoint.is_empty() {
            anyhow::bail!("endpoint cannot be empty");
        }

        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            anyhow::bail!("endpoint must start with http:// or https://");
        }

        if self.interval.is_zero() {
            anyhow::bail!("interval must be greater than 0");
        }

        if self.retry_base_delay.is_zero() {
            anyhow::bail!("retry_base_delay must be greater than 0");
        }

        if self.request_timeout.is_zero() {
            anyhow::bail!("request_timeout must be greater than 0");
        }

        Ok(())
    }
}

impl<T> Clone for PollConfig<T> {
    fn clone(&self) -> Self {
        Self {
            endpoint: self.endpoint.clone(),
            interval: self.interval,
            immediate: self.immediate,
            max_retries: self.max_retries,
            retry_base_delay: self.retry_base_delay,
            request_timeout: self.request_timeout,
            transform: Arc::clone(&self.transform),
            on_success: self.on_success.clone(),
            on_error: self.on_error.clone(),
        }
    }
}

impl<T> fmt::Debug for PollConfig<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PollConfig")
            .field("endpoint", &self.endpoint)
            .field("interval", &self.interval)
            .field("immediate", &self.immediate)
            .field("max_retries", &self.max_retries)
            .field("retry_base_delay", &self.retry_base_delay)
            .field("request_timeout", &self.request_timeout)
            .finish_non_exhaustive()
    }
}
