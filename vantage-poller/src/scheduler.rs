//! Poll scheduler
//!
//! Owns the fixed fetch cadence, the one-shot backoff retry, and the poll
//! state. Everything mutable lives in a single driver task; the [`Poller`]
//! handle only enqueues commands and reads `watch` snapshots, so no handle
//! operation blocks.

use tokio::sync::{mpsc, watch};
use tokio::task::JoinSet;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::PollConfig;
use crate::fetch::{self, Outcome};
use crate::state::{ErrorInfo, PollState};

/// Control messages from the handle to the driver
#[derive(Debug, Clone, Copy)]
enum Command {
    Start,
    Stop,
    Refresh,
}

/// Completed fetch reported back to the driver
///
/// `seq` is the issue order, `epoch` the cancellation generation the fetch
/// was spawned under. The driver applies outcomes in completion order and
/// uses both fields to discard results that arrive after cancellation or
/// after a later-issued fetch already applied.
struct FetchDone<T> {
    seq: u64,
    epoch: u64,
    outcome: Outcome<T>,
}

/// Handle to a running poll session
///
/// Spawning starts polling immediately; `start` is only needed to resume
/// after a `stop`. Dropping the handle tears the session down: the driver
/// task and any in-flight fetch are aborted and no further state change is
/// published.
pub struct Poller<T> {
    commands: mpsc::UnboundedSender<Command>,
    state: watch::Receiver<PollState<T>>,
    driver: tokio::task::JoinHandle<()>,
}

impl<T> Poller<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Spawns a poll session with its own HTTP client
    pub fn spawn(config: PollConfig<T>) -> anyhow::Result<Self> {
        Self::spawn_with_client(config, reqwest::Client::new())
    }

    /// Spawns a poll session using a pre-configured HTTP client
    ///
    /// Use this to attach default headers (`Authorization`,
    /// `Cache-Control: no-cache`) or TLS settings to every fetch.
    pub fn spawn_with_client(config: PollConfig<T>, http: reqwest::Client) -> anyhow::Result<Self> {
        config.validate()?;

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(PollState::initial());
        let driver = tokio::spawn(drive(config, http, state_tx, command_rx));

        Ok(Self {
            commands: command_tx,
            state: state_rx,
            driver,
        })
    }

    /// Returns a snapshot of the current poll state
    pub fn state(&self) -> PollState<T> {
        self.state.borrow().clone()
    }

    /// Subscribes to state transitions
    ///
    /// Each applied outcome publishes exactly one new snapshot; receivers
    /// that fall behind only ever observe the latest one.
    pub fn subscribe(&self) -> watch::Receiver<PollState<T>> {
        self.state.clone()
    }

    /// Resumes polling after a `stop`; no-op while already polling
    pub fn start(&self) {
        let _ = self.commands.send(Command::Start);
    }

    /// Stops the fetch cadence and cancels any pending retry and in-flight
    /// fetch; idempotent
    pub fn stop(&self) {
        let _ = self.commands.send(Command::Stop);
    }

    /// Fetches once immediately, resetting the retry budget
    ///
    /// Independent of the repeating cadence phase and of whether polling is
    /// currently stopped.
    pub fn refresh(&self) {
        let _ = self.commands.send(Command::Refresh);
    }
}

impl<T> Drop for Poller<T> {
    fn drop(&mut self) {
        self.driver.abort();
    }
}

/// Driver task: the only owner of mutable poll state
async fn drive<T>(
    config: PollConfig<T>,
    http: reqwest::Client,
    state: watch::Sender<PollState<T>>,
    mut commands: mpsc::UnboundedReceiver<Command>,
) where
    T: Clone + Send + Sync + 'static,
{
    let poller_id = Uuid::new_v4();
    let mut fetches: JoinSet<FetchDone<T>> = JoinSet::new();
    let mut interval = time::interval_at(Instant::now() + config.interval, config.interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut polling = true;
    // Armed backoff retry: deadline plus the attempt number it was computed
    // for. At most one exists at any time.
    let mut retry: Option<(Instant, u32)> = None;
    let mut next_seq: u64 = 0;
    let mut applied_seq: u64 = 0;
    let mut epoch: u64 = 0;

    info!(
        %poller_id,
        endpoint = %config.endpoint,
        interval = ?config.interval,
        "poll session started"
    );

    if config.immediate {
        next_seq += 1;
        spawn_fetch(&mut fetches, &config, &http, next_seq, epoch);
    }

    loop {
        let retry_deadline = retry.map(|(at, _)| at);

        tokio::select! {
            command = commands.recv() => {
                let Some(command) = command else { break };
                match command {
                    Command::Start => {
                        if polling {
                            continue;
                        }
                        polling = true;
                        interval =
                            time::interval_at(Instant::now() + config.interval, config.interval);
                        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
                        state.send_modify(|s| s.is_polling = true);
                        info!(%poller_id, "polling resumed");
                        if config.immediate {
                            next_seq += 1;
                            spawn_fetch(&mut fetches, &config, &http, next_seq, epoch);
                        }
                    }
                    Command::Stop => {
                        retry = None;
                        epoch += 1;
                        fetches.abort_all();
                        if polling {
                            polling = false;
                            state.send_modify(|s| s.is_polling = false);
                            info!(%poller_id, "polling stopped");
                        }
                    }
                    Command::Refresh => {
                        retry = None;
                        state.send_if_modified(|s| {
                            let reset = s.retry_count != 0;
                            s.retry_count = 0;
                            reset
                        });
                        next_seq += 1;
                        debug!(%poller_id, seq = next_seq, "manual refresh");
                        spawn_fetch(&mut fetches, &config, &http, next_seq, epoch);
                    }
                }
            }

            _ = interval.tick(), if polling => {
                next_seq += 1;
                debug!(%poller_id, seq = next_seq, "interval tick");
                spawn_fetch(&mut fetches, &config, &http, next_seq, epoch);
            }

            _ = async move {
                match retry_deadline {
                    Some(at) => time::sleep_until(at).await,
                    None => std::future::pending().await,
                }
            }, if retry_deadline.is_some() => {
                if let Some((_, attempt)) = retry.take() {
                    next_seq += 1;
                    debug!(%poller_id, attempt, seq = next_seq, "backoff retry");
                    spawn_fetch(&mut fetches, &config, &http, next_seq, epoch);
                }
            }

            Some(joined) = fetches.join_next(), if !fetches.is_empty() => {
                match joined {
                    Ok(done) => apply_outcome(
                        done,
                        epoch,
                        &mut applied_seq,
                        &mut retry,
                        &config,
                        &state,
                        poller_id,
                    ),
                    // Aborted fetches are expected on stop; anything else is
                    // a panic inside the fetch task.
                    Err(join_error) if join_error.is_cancelled() => {}
                    Err(join_error) => {
                        warn!(%poller_id, "fetch task failed: {}", join_error);
                    }
                }
            }
        }
    }

    fetches.abort_all();
    info!(%poller_id, "poll session terminated");
}

/// Spawns one fetch attempt reporting back into the driver's join set
fn spawn_fetch<T>(
    fetches: &mut JoinSet<FetchDone<T>>,
    config: &PollConfig<T>,
    http: &reqwest::Client,
    seq: u64,
    epoch: u64,
) where
    T: Send + 'static,
{
    let http = http.clone();
    let endpoint = config.endpoint.clone();
    let request_timeout = config.request_timeout;
    let transform = config.transform.clone();

    fetches.spawn(async move {
        let outcome = fetch::execute(&http, &endpoint, request_timeout, &transform).await;
        FetchDone {
            seq,
            epoch,
            outcome,
        }
    });
}

/// Applies one completed fetch as a single atomic state transition
fn apply_outcome<T>(
    done: FetchDone<T>,
    epoch: u64,
    applied_seq: &mut u64,
    retry: &mut Option<(Instant, u32)>,
    config: &PollConfig<T>,
    state: &watch::Sender<PollState<T>>,
    poller_id: Uuid,
) where
    T: Clone,
{
    if done.epoch != epoch {
        debug!(%poller_id, seq = done.seq, "discarding outcome from cancelled session");
        return;
    }
    if done.seq < *applied_seq {
        debug!(
            %poller_id,
            seq = done.seq,
            applied = *applied_seq,
            "discarding outcome superseded by a later fetch"
        );
        return;
    }
    *applied_seq = done.seq;

    match done.outcome {
        Outcome::Success {
            value,
            completed_at,
        } => {
            // A retry armed by an earlier failure is stale once the count
            // resets; the steady cadence keeps polling.
            *retry = None;
            state.send_modify(|s| s.apply_success(value.clone(), completed_at));
            debug!(%poller_id, seq = done.seq, "fetch succeeded");
            if let Some(hook) = &config.on_success {
                hook(&value);
            }
        }
        Outcome::Failure {
            error,
            completed_at,
        } => {
            let info = ErrorInfo {
                message: error.to_string(),
                occurred_at: completed_at,
            };

            let mut directive = None;
            state.send_modify(|s| {
                directive =
                    s.apply_failure(info.clone(), config.max_retries, config.retry_base_delay);
            });

            match directive {
                Some(next) => {
                    warn!(
                        %poller_id,
                        seq = done.seq,
                        attempt = next.attempt,
                        delay = ?next.delay,
                        "fetch failed, retry armed: {}",
                        info.message
                    );
                    *retry = Some((Instant::now() + next.delay, next.attempt));
                }
                None => {
                    warn!(
                        %poller_id,
                        seq = done.seq,
                        "fetch failed, retry budget exhausted: {}",
                        info.message
                    );
                }
            }

            if let Some(hook) = &config.on_error {
                hook(&info);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn backoff_series_caps_under_paused_clock() {
        // Nothing listens on this port, so every fetch fails fast with a
        // transport error and the paused clock skips across the 1s/2s/4s
        // backoff waits instead of serving them out.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = PollConfig::new(format!("http://{}/data", addr))
            .with_interval(Duration::from_secs(3600))
            .with_max_retries(3)
            .with_retry_base_delay(Duration::from_secs(1));
        let poller = Poller::spawn(config).unwrap();
        let mut updates = poller.subscribe();

        loop {
            updates.changed().await.unwrap();
            let state = updates.borrow_and_update().clone();
            if state.retry_count == 3 {
                assert!(!state.is_connected);
                assert!(state.data.is_none());
                let message = state.error.unwrap().message;
                assert!(message.contains("network error"), "message was: {message}");
                break;
            }
        }
    }
}
