//! Live bar gauges.
//!
//! A gauge is a vertical 0..=100 column whose fill level tracks one metric.
//! The fill boundary is the coordinate of the top of the filled region:
//! boundary 0 means a full bar, boundary 100 an empty one.

mod updater;

pub use updater::{GaugeHandle, MetricFn, spawn_gauge};

use std::time::Duration;

/// Cadence at which the updater loops re-read their metric.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(500);

/// Which metric drives a gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaugeKind {
    /// Fill tracks CPU load.
    Cpu,
    /// Fill tracks available memory.
    Memory,
}

impl GaugeKind {
    pub fn title(&self) -> &'static str {
        match self {
            GaugeKind::Cpu => "CPU Usage",
            GaugeKind::Memory => "RAM Usage",
        }
    }
}

/// Fill boundary posted by an updater loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GaugeState {
    /// Top coordinate of the filled region on the 0..=100 column.
    pub boundary: u16,
}

impl GaugeState {
    /// Filled portion of the column as a percentage.
    pub fn fill_percent(&self) -> u16 {
        100 - self.boundary.min(100)
    }
}

/// Boundary for the CPU-load gauge: `round(100 - percent)`.
pub fn cpu_fill_boundary(cpu_percent: f64) -> GaugeState {
    let boundary = (100.0 - cpu_percent).round().clamp(0.0, 100.0) as u16;
    GaugeState { boundary }
}

/// Boundary for the memory-availability gauge: available MB divided by a
/// denominator derived from total RAM (10 units per GB), floored.
pub fn mem_fill_boundary(available_mb: f64, total_ram_gb: u64) -> GaugeState {
    let denominator = (total_ram_gb * 10).max(1) as f64;
    let boundary = (available_mb / denominator).floor().clamp(0.0, 100.0) as u16;
    GaugeState { boundary }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpu_boundary_is_round_100_minus_p() {
        // Holds across the whole valid percent range.
        for p in 0..=100u32 {
            let p = p as f64;
            assert_eq!(cpu_fill_boundary(p).boundary, (100.0 - p).round() as u16);
        }
    }

    #[test]
    fn test_cpu_boundary_rounds() {
        assert_eq!(cpu_fill_boundary(26.6).boundary, 73);
        assert_eq!(cpu_fill_boundary(26.4).boundary, 74);
    }

    #[test]
    fn test_cpu_boundary_clamps_out_of_range() {
        assert_eq!(cpu_fill_boundary(-5.0).boundary, 100);
        assert_eq!(cpu_fill_boundary(150.0).boundary, 0);
    }

    #[test]
    fn test_fill_percent_inverts_boundary() {
        assert_eq!(cpu_fill_boundary(30.0).fill_percent(), 30);
        assert_eq!(GaugeState { boundary: 100 }.fill_percent(), 0);
        assert_eq!(GaugeState { boundary: 0 }.fill_percent(), 100);
    }

    #[test]
    fn test_mem_boundary_divides_by_ram_denominator() {
        // 11718 MB available on a 16 GB machine: 11718 / 160 = 73.2 -> 73
        assert_eq!(mem_fill_boundary(11718.0, 16).boundary, 73);
    }

    #[test]
    fn test_mem_boundary_clamps_to_column() {
        assert_eq!(mem_fill_boundary(1_000_000.0, 16).boundary, 100);
        assert_eq!(mem_fill_boundary(0.0, 16).boundary, 0);
    }

    #[test]
    fn test_mem_boundary_zero_ram_does_not_divide_by_zero() {
        assert_eq!(mem_fill_boundary(500.0, 0).boundary, 100);
    }
}
