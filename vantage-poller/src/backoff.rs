//! Exponential backoff for retry scheduling

use std::time::Duration;

/// Largest exponent applied to the base delay; larger failure counts
/// saturate here instead of overflowing the shift.
const MAX_EXPONENT: u32 = 16;

/// Delay before the retry that follows the given number of already-counted
/// consecutive failures: `base * 2^failures`.
///
/// The first retry waits `base * 1`, the second `base * 2`, and so on. The
/// caller bounds how many retries are scheduled; this function only computes
/// the spacing.
pub(crate) fn backoff_delay(base: Duration, failures: u32) -> Duration {
    base.saturating_mul(1u32 << failures.min(MAX_EXPONENT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_retry_waits_one_base_delay() {
        assert_eq!(
            backoff_delay(Duration::from_millis(1000), 0),
            Duration::from_millis(1000)
        );
    }

    #[test]
    fn delay_doubles_per_consecutive_failure() {
        let base = Duration::from_millis(1000);
        assert_eq!(backoff_delay(base, 1), Duration::from_millis(2000));
        assert_eq!(backoff_delay(base, 2), Duration::from_millis(4000));
        assert_eq!(backoff_delay(base, 3), Duration::from_millis(8000));
    }

    #[test]
    fn exponent_saturates() {
        let base = Duration::from_secs(1);
        assert_eq!(backoff_delay(base, 40), backoff_delay(base, MAX_EXPONENT));
    }
}
