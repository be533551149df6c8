//! Blocking delay on a monotonic clock.

use std::thread;
use std::time::{Duration, Instant};

/// Block the calling thread for at least `seconds`.
///
/// The wait is measured with [`Instant`] and re-armed if the thread wakes
/// early. Zero, negative, NaN and out-of-range values return immediately.
pub fn delay(seconds: f64) {
    let duration = match Duration::try_from_secs_f64(seconds) {
        Ok(d) if !d.is_zero() => d,
        _ => {
            tracing::debug!(seconds, "delay skipped");
            return;
        }
    };

    tracing::trace!(?duration, "delay started");
    let start = Instant::now();
    let mut remaining = duration;
    loop {
        thread::sleep(remaining);
        let elapsed = start.elapsed();
        if elapsed >= duration {
            break;
        }
        remaining = duration - elapsed;
    }
    tracing::trace!(elapsed = ?start.elapsed(), "delay finished");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waits_at_least_requested() {
        let start = Instant::now();
        delay(0.05);
        assert!(start.elapsed() >= Duration::from_millis(50));
    }

    #[test]
    fn test_zero_returns_immediately() {
        let start = Instant::now();
        delay(0.0);
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[test]
    fn test_invalid_values_return() {
        delay(-1.0);
        delay(f64::NAN);
        delay(f64::INFINITY);
    }

    #[test]
    fn test_blocks_only_calling_thread() {
        let handle = thread::spawn(|| delay(0.2));
        let start = Instant::now();
        delay(0.01);
        assert!(start.elapsed() < Duration::from_millis(200));
        handle.join().unwrap();
    }
}
