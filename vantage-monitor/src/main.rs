//! Vantage Monitor
//!
//! Terminal consumer of the polling core. Connects to the monitoring
//! backend, polls the dashboard snapshot on a fixed cadence, and reports
//! every connection transition and data update as log/status lines.
//!
//! Architecture:
//! - Configuration: flags and environment variables, validated at startup
//! - Client: typed dashboard API client, used for the startup health probe
//! - Poller: resilient poll session over the dashboard-data endpoint
//! - Reporter: subscribes to poll state transitions and prints them

mod config;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use vantage_client::DashboardClient;
use vantage_core::domain::dashboard::DashboardData;
use vantage_poller::{PollConfig, PollState, Poller};

#[derive(Parser)]
#[command(name = "vantage-monitor")]
#[command(about = "Live status monitor for a Vantage dashboard backend", long_about = None)]
struct Cli {
    /// Backend base URL
    #[arg(
        long,
        env = "VANTAGE_BACKEND_URL",
        default_value = "http://localhost:8000"
    )]
    backend_url: String,

    /// Poll interval in milliseconds
    #[arg(long, env = "VANTAGE_POLL_INTERVAL_MS", default_value_t = 2000)]
    poll_interval_ms: u64,

    /// Backoff retries after consecutive poll failures
    #[arg(long, env = "VANTAGE_MAX_RETRIES", default_value_t = 5)]
    max_retries: u32,

    /// Base delay of the backoff series in milliseconds
    #[arg(long, env = "VANTAGE_RETRY_BASE_DELAY_MS", default_value_t = 1000)]
    retry_base_delay_ms: u64,

    /// Per-request timeout in milliseconds
    #[arg(long, env = "VANTAGE_REQUEST_TIMEOUT_MS", default_value_t = 10_000)]
    request_timeout_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vantage_monitor=info,vantage_poller=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config {
        backend_url: cli.backend_url,
        poll_interval: Duration::from_millis(cli.poll_interval_ms),
        max_retries: cli.max_retries,
        retry_base_delay: Duration::from_millis(cli.retry_base_delay_ms),
        request_timeout: Duration::from_millis(cli.request_timeout_ms),
    };
    config.validate()?;

    info!(backend_url = %config.backend_url, "starting Vantage monitor");

    let client = DashboardClient::new(config.backend_url.clone());

    wait_for_backend(&client).await?;

    match client.dashboard_stats().await {
        Ok(stats) => info!(
            devices = stats.total_devices,
            active_sessions = stats.active_sessions,
            recordings = stats.total_recordings,
            "backend baseline"
        ),
        Err(error) => warn!("could not fetch baseline stats: {}", error),
    }

    let poll_config = PollConfig::with_transform(
        format!("{}/api/dashboard-data", client.base_url()),
        normalize_dashboard,
    )
    .with_interval(config.poll_interval)
    .with_max_retries(config.max_retries)
    .with_retry_base_delay(config.retry_base_delay)
    .with_request_timeout(config.request_timeout)
    .on_error(|error| warn!("dashboard poll failed: {}", error.message));

    let poller = Poller::spawn(poll_config)?;
    let mut updates = poller.subscribe();
    let mut last_connected: Option<bool> = None;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("shutting down");
                poller.stop();
                break;
            }
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = updates.borrow_and_update().clone();
                report(&state, &mut last_connected);
            }
        }
    }

    Ok(())
}

/// Wait for the backend health endpoint with capped exponential backoff
///
/// Covers the case where the backend is still starting when the monitor
/// launches (common under a process manager).
async fn wait_for_backend(client: &DashboardClient) -> Result<()> {
    const MAX_ATTEMPTS: u32 = 10;
    const INITIAL_DELAY_MS: u64 = 500;
    const MAX_DELAY_MS: u64 = 30_000;

    let mut attempt = 0;
    let mut delay_ms = INITIAL_DELAY_MS;

    loop {
        attempt += 1;

        match client.health().await {
            Ok(health) if health.is_healthy() => {
                if attempt > 1 {
                    info!("backend healthy after {} attempt(s)", attempt);
                }
                return Ok(());
            }
            Ok(health) => {
                warn!(
                    "backend reachable but unhealthy (attempt {}/{}): status={}",
                    attempt, MAX_ATTEMPTS, health.status
                );
            }
            Err(error) => {
                warn!(
                    "backend not reachable (attempt {}/{}): {}",
                    attempt, MAX_ATTEMPTS, error
                );
            }
        }

        if attempt >= MAX_ATTEMPTS {
            anyhow::bail!("backend not healthy after {} attempts", MAX_ATTEMPTS);
        }

        warn!("retrying in {} ms...", delay_ms);
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;

        delay_ms = (delay_ms * 2).min(MAX_DELAY_MS);
    }
}

/// Decode a dashboard payload, filling the sections the backend omits on its
/// degraded path (it answers `{"error": ..., "connection_status": "error"}`
/// when the snapshot query fails)
fn normalize_dashboard(mut raw: serde_json::Value) -> anyhow::Result<DashboardData> {
    if let Some(object) = raw.as_object_mut() {
        let defaults = [
            ("active_sessions_count", serde_json::json!(0)),
            ("total_users", serde_json::json!(0)),
            ("connection_status", serde_json::json!("connecting")),
            ("users", serde_json::json!([])),
            ("active_sessions", serde_json::json!([])),
            (
                "stats",
                serde_json::json!({ "total_users": 0, "active_sessions": 0 }),
            ),
        ];
        for (key, value) in defaults {
            object.entry(key).or_insert(value);
        }
        if !object.contains_key("last_updated") {
            object.insert(
                "last_updated".to_string(),
                serde_json::to_value(chrono::Utc::now().naive_utc())?,
            );
        }
    }

    serde_json::from_value(raw).map_err(Into::into)
}

/// Print one status line per state transition
fn report(state: &PollState<DashboardData>, last_connected: &mut Option<bool>) {
    if *last_connected != Some(state.is_connected) {
        if state.is_connected {
            println!("{} backend link established", "CONNECTED".green().bold());
        } else {
            let detail = state
                .error
                .as_ref()
                .map(|e| e.message.as_str())
                .unwrap_or("no error detail");
            println!("{} {}", "DISCONNECTED".red().bold(), detail.dimmed());
        }
        *last_connected = Some(state.is_connected);
    }

    if let Some(data) = &state.data {
        info!(
            devices = data.total_devices,
            active_sessions = data.active_sessions_count,
            retry_count = state.retry_count,
            connected = state.is_connected,
            "dashboard updated"
        );
    }
}
