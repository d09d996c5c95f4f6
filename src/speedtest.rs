//! Toy CPU speed stopwatch.
//!
//! Times a single tiny floating-point division. A timer read can come back
//! as zero when it lands inside one clock tick, so the measurement retries
//! until it is non-zero.

use std::hint::black_box;
use std::time::{Duration, Instant};

/// Attempts before giving up on a sub-tick clock and timing a batch instead.
const MAX_ATTEMPTS: u32 = 10_000;

/// Outcome of one stopwatch run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedTestResult {
    /// How long the operation took.
    pub elapsed: Duration,
    /// Shown alongside the result.
    pub pi: f64,
}

fn measure_once() -> Duration {
    let start = Instant::now();
    black_box(black_box(11.0_f64) / black_box(3.5_f64));
    start.elapsed()
}

/// Runs the stopwatch: measure the division, retrying while the reading
/// is zero.
pub fn run() -> SpeedTestResult {
    let mut elapsed = measure_once();
    let mut attempts = 1;

    while elapsed.is_zero() && attempts < MAX_ATTEMPTS {
        elapsed = measure_once();
        attempts += 1;
    }

    if elapsed.is_zero() {
        // Clock too coarse for a single op; time a batch instead.
        let start = Instant::now();
        for _ in 0..MAX_ATTEMPTS {
            black_box(black_box(11.0_f64) / black_box(3.5_f64));
        }
        elapsed = start.elapsed();
    }

    SpeedTestResult {
        elapsed,
        pi: std::f64::consts::PI,
    }
}

impl SpeedTestResult {
    /// Result in milliseconds for display.
    pub fn millis_display(&self) -> String {
        format!("{:.6} ms", self.elapsed.as_secs_f64() * 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_never_reports_zero() {
        let result = run();
        assert!(!result.elapsed.is_zero());
    }

    #[test]
    fn test_reports_pi() {
        let result = run();
        assert!((result.pi - 3.14159265).abs() < 1e-8);
    }

    #[test]
    fn test_millis_display_has_unit() {
        let result = SpeedTestResult {
            elapsed: Duration::from_micros(3),
            pi: std::f64::consts::PI,
        };
        assert_eq!(result.millis_display(), "0.003000 ms");
    }
}
