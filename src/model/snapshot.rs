//! The immutable record one sampling pass produces.

use crate::fmt::{format_opt_count, format_opt_gb, format_opt_pct, round3};

/// Host metrics taken at one instant.
///
/// Produced fresh on each sample and never mutated; its only identity is
/// `taken_at`. A `None` field means the host could not answer and the UI
/// shows a placeholder instead.
///
/// Used memory is intentionally not a field: it is derived from total and
/// percent on demand so the two can never drift apart.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSnapshot {
    /// Unix timestamp of the sampling instant.
    pub taken_at: i64,
    /// Total RAM in whole GB.
    pub total_gb: Option<u64>,
    /// Available RAM in GB, 3 decimals.
    pub available_gb: Option<f64>,
    /// Memory use percent, rounded to an integer.
    pub mem_percent: Option<u8>,
    /// Number of running processes.
    pub process_count: Option<usize>,
    /// CPU use percent, rounded to an integer.
    pub cpu_percent: Option<u8>,
}

impl MetricsSnapshot {
    /// A snapshot with every metric unavailable.
    pub fn empty(taken_at: i64) -> Self {
        Self {
            taken_at,
            total_gb: None,
            available_gb: None,
            mem_percent: None,
            process_count: None,
            cpu_percent: None,
        }
    }

    /// Used RAM in GB, recomputed as `total × percent / 100`.
    pub fn used_gb(&self) -> Option<f64> {
        let total = self.total_gb?;
        let percent = self.mem_percent?;
        Some(round3(total as f64 * (percent as f64 / 100.0)))
    }

    /// Display string for available RAM.
    pub fn available_display(&self) -> String {
        format_opt_gb(self.available_gb)
    }

    /// Display string for memory use percent.
    pub fn mem_percent_display(&self) -> String {
        format_opt_pct(self.mem_percent)
    }

    /// Display string for used RAM.
    pub fn used_display(&self) -> String {
        format_opt_gb(self.used_gb())
    }

    /// Display string for the process count.
    pub fn process_count_display(&self) -> String {
        format_opt_count(self.process_count)
    }

    /// Display string for CPU use percent.
    pub fn cpu_percent_display(&self) -> String {
        format_opt_pct(self.cpu_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fmt::PLACEHOLDER;

    fn snapshot(total: u64, percent: u8) -> MetricsSnapshot {
        MetricsSnapshot {
            total_gb: Some(total),
            mem_percent: Some(percent),
            ..MetricsSnapshot::empty(0)
        }
    }

    #[test]
    fn test_used_is_total_times_percent() {
        // Holds across the whole percent range.
        for percent in 0..=100u8 {
            let s = snapshot(16, percent);
            let expected = 16.0 * (percent as f64 / 100.0);
            assert!((s.used_gb().unwrap() - expected).abs() < 0.001);
        }
    }

    #[test]
    fn test_used_for_zero_ram() {
        assert_eq!(snapshot(0, 50).used_gb(), Some(0.0));
    }

    #[test]
    fn test_used_requires_both_inputs() {
        let mut s = snapshot(16, 50);
        s.mem_percent = None;
        assert_eq!(s.used_gb(), None);
        assert_eq!(s.used_display(), PLACEHOLDER);
    }

    #[test]
    fn test_display_strings() {
        let s = MetricsSnapshot {
            taken_at: 0,
            total_gb: Some(16),
            available_gb: Some(3.0),
            mem_percent: Some(27),
            process_count: Some(120),
            cpu_percent: Some(4),
        };

        assert_eq!(s.available_display(), "3.0");
        assert_eq!(s.mem_percent_display(), "27");
        assert_eq!(s.used_display(), "4.32");
        assert_eq!(s.process_count_display(), "120");
        assert_eq!(s.cpu_percent_display(), "4");
    }

    #[test]
    fn test_empty_renders_placeholders() {
        let s = MetricsSnapshot::empty(1_700_000_000);
        assert_eq!(s.available_display(), PLACEHOLDER);
        assert_eq!(s.cpu_percent_display(), PLACEHOLDER);
    }
}
