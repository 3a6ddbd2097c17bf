//! Poll state and its outcome transitions
//!
//! [`PollState`] is the externally observable snapshot of one poll session.
//! Transitions are pure methods applied inside a single `watch::send_modify`
//! call, so consumers never observe a partially updated record.

use chrono::{DateTime, Utc};
use std::time::Duration;

use crate::backoff::backoff_delay;

/// Error surfaced to consumers after a failed fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    /// Human-readable failure description, preserving the distinguishing
    /// detail (timeout, status code, transform) for diagnostics
    pub message: String,
    pub occurred_at: DateTime<Utc>,
}

/// Externally observable snapshot of one poll session
///
/// `data` holds the transformed payload of the most recent successful fetch
/// and survives later failures, so consumers can keep showing stale data
/// alongside a disconnected indicator.
#[derive(Debug, Clone)]
pub struct PollState<T> {
    pub data: Option<T>,
    /// True from session start until the first outcome is applied
    pub loading: bool,
    pub error: Option<ErrorInfo>,
    /// Whether the fixed-cadence timer is active
    pub is_polling: bool,
    /// True iff the most recently completed fetch succeeded
    pub is_connected: bool,
    /// Consecutive failures counted so far, capped at the retry budget
    pub retry_count: u32,
    /// Completion time of the most recent successful fetch
    pub last_updated: Option<DateTime<Utc>>,
}

/// One-shot backoff retry the scheduler should arm after a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RetryDirective {
    /// 1-based attempt number, threaded through the armed timer instead of
    /// being re-read from shared state when it fires
    pub attempt: u32,
    pub delay: Duration,
}

impl<T> PollState<T> {
    /// Initial state of a freshly spawned session
    pub(crate) fn initial() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
            is_polling: true,
            is_connected: false,
            retry_count: 0,
            last_updated: None,
        }
    }

    /// Applies a successful fetch outcome
    pub(crate) fn apply_success(&mut self, value: T, completed_at: DateTime<Utc>) {
        self.data = Some(value);
        self.loading = false;
        self.error = None;
        self.is_connected = true;
        self.retry_count = 0;
        self.last_updated = Some(completed_at);
    }

    /// Applies a failed fetch outcome
    ///
    /// Returns the backoff retry to arm, or `None` once the retry budget is
    /// exhausted; the next attempt then waits for the regular cadence or a
    /// manual refresh.
    pub(crate) fn apply_failure(
        &mut self,
        error: ErrorInfo,
        max_retries: u32,
        retry_base_delay: Duration,
    ) -> Option<RetryDirective> {
        self.loading = false;
        self.is_connected = false;
        self.error = Some(error);

        if self.retry_count < max_retries {
            let delay = backoff_delay(retry_base_delay, self.retry_count);
            self.retry_count += 1;
            Some(RetryDirective {
                attempt: self.retry_count,
                delay,
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: Duration = Duration::from_millis(1000);

    fn failure(message: &str) -> ErrorInfo {
        ErrorInfo {
            message: message.to_string(),
            occurred_at: Utc::now(),
        }
    }

    #[test]
    fn initial_state_is_loading_and_disconnected() {
        let state = PollState::<u32>::initial();
        assert!(state.data.is_none());
        assert!(state.loading);
        assert!(state.is_polling);
        assert!(!state.is_connected);
        assert_eq!(state.retry_count, 0);
        assert!(state.last_updated.is_none());
    }

    #[test]
    fn success_resets_retry_count_and_reconnects() {
        let mut state = PollState::initial();
        for _ in 0..3 {
            state.apply_failure(failure("connection refused"), 5, BASE);
        }
        assert_eq!(state.retry_count, 3);
        assert!(!state.is_connected);

        let at = Utc::now();
        state.apply_success(7u32, at);
        assert_eq!(state.data, Some(7));
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert!(state.is_connected);
        assert_eq!(state.retry_count, 0);
        assert_eq!(state.last_updated, Some(at));
    }

    #[test]
    fn failure_preserves_stale_data() {
        let mut state = PollState::initial();
        state.apply_success(7u32, Utc::now());
        let updated = state.last_updated;

        state.apply_failure(failure("HTTP error (status 500)"), 5, BASE);
        assert_eq!(state.data, Some(7), "stale data must remain visible");
        assert!(!state.is_connected);
        assert_eq!(state.last_updated, updated);
        assert!(
            state
                .error
                .as_ref()
                .is_some_and(|e| e.message.contains("500"))
        );
    }

    #[test]
    fn consecutive_failures_follow_backoff_series() {
        let mut state = PollState::<u32>::initial();

        let first = state.apply_failure(failure("x"), 3, BASE).unwrap();
        assert_eq!(first.attempt, 1);
        assert_eq!(first.delay, Duration::from_millis(1000));

        let second = state.apply_failure(failure("x"), 3, BASE).unwrap();
        assert_eq!(second.attempt, 2);
        assert_eq!(second.delay, Duration::from_millis(2000));

        let third = state.apply_failure(failure("x"), 3, BASE).unwrap();
        assert_eq!(third.attempt, 3);
        assert_eq!(third.delay, Duration::from_millis(4000));
    }

    #[test]
    fn failures_beyond_budget_direct_no_retry() {
        let mut state = PollState::<u32>::initial();
        for _ in 0..3 {
            assert!(state.apply_failure(failure("x"), 3, BASE).is_some());
        }

        // Budget exhausted: count stays capped and no retry is directed
        assert!(state.apply_failure(failure("x"), 3, BASE).is_none());
        assert_eq!(state.retry_count, 3);

        assert!(state.apply_failure(failure("x"), 3, BASE).is_none());
        assert_eq!(state.retry_count, 3);
    }

    #[test]
    fn zero_budget_never_directs_retries() {
        let mut state = PollState::<u32>::initial();
        assert!(state.apply_failure(failure("x"), 0, BASE).is_none());
        assert_eq!(state.retry_count, 0);
    }
}
