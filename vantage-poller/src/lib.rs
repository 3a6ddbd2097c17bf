//! Vantage Poller
//!
//! A reusable data-polling and connection-resilience core: repeatedly fetch a
//! JSON resource over an unreliable network, retry failures with bounded
//! exponential backoff, and expose the latest successful result as a stable
//! read-only snapshot.
//!
//! Architecture:
//! - Scheduler: a single driver task owning the fetch cadence, the one-shot
//!   backoff retry, and all mutable state
//! - Fetch executor: one bounded request-decode-transform cycle per attempt
//! - State projection: [`PollState`] published through a `watch` channel;
//!   consumers pull snapshots or subscribe to transitions
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use vantage_poller::{PollConfig, Poller};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = PollConfig::new("http://localhost:8000/api/dashboard-data")
//!         .with_interval(Duration::from_secs(2))
//!         .with_max_retries(5);
//!
//!     let poller = Poller::spawn(config)?;
//!     let mut updates = poller.subscribe();
//!
//!     while updates.changed().await.is_ok() {
//!         let state = updates.borrow_and_update().clone();
//!         println!("connected={} data={:?}", state.is_connected, state.data);
//!     }
//!     Ok(())
//! }
//! ```

mod backoff;
mod config;
mod fetch;
mod scheduler;
mod state;

pub use config::PollConfig;
pub use fetch::{FetchError, Outcome};
pub use scheduler::Poller;
pub use state::{ErrorInfo, PollState};
