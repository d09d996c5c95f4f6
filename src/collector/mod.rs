//! Host metric collection.
//!
//! The `Collector` combines the procfs sampler into display-ready
//! [`MetricsSnapshot`]s. Individual probes (disks, display, static
//! hardware) live in their own submodules.

pub mod disks;
pub mod display;
pub mod hardware;
pub mod mock;
pub mod procfs;
pub mod traits;

pub use disks::{SysinfoVolumes, VolumeInfo, VolumeProbe, enumerate_volumes};
pub use display::{DisplayInfo, DisplayProbe, PlatformDisplay, probe_display};
pub use hardware::HostInfo;
pub use procfs::{CollectError, MemorySample, ProcessDetails, SystemSampler};
pub use traits::{FileSystem, RealFs};

use tracing::warn;

use crate::collector::procfs::CpuTimes;
use crate::fmt::{bytes_to_gb, total_ram_gb};
use crate::model::MetricsSnapshot;

/// Derives a CPU use percent from consecutive `/proc/stat` samples.
///
/// The first update has no baseline and reports `None`; callers render the
/// placeholder until a second sample arrives.
#[derive(Debug, Default)]
pub struct CpuPercentTracker {
    prev: Option<CpuTimes>,
}

impl CpuPercentTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds the next sample and returns the use percent since the
    /// previous one.
    pub fn update(&mut self, current: CpuTimes) -> Option<f64> {
        let prev = self.prev.replace(current)?;

        let total_delta = current.total().saturating_sub(prev.total());
        if total_delta == 0 {
            // Counters did not move between reads; the CPU was idle from
            // our point of view.
            return Some(0.0);
        }

        let busy_delta = current.busy().saturating_sub(prev.busy());
        Some(busy_delta as f64 / total_delta as f64 * 100.0)
    }
}

/// Source of metrics snapshots, object-safe so the TUI does not care which
/// filesystem backs it.
pub trait SnapshotSource: Send {
    /// Takes a fresh snapshot. Never fails: unavailable metrics come back
    /// as `None` fields.
    fn sample(&mut self) -> MetricsSnapshot;
}

/// Samples host metrics into [`MetricsSnapshot`]s.
///
/// Each failed read degrades its field to `None` (rendered as a
/// placeholder) and is logged at warn level; sampling itself never fails.
pub struct Collector<F: FileSystem> {
    sampler: SystemSampler<F>,
    cpu_tracker: CpuPercentTracker,
}

impl<F: FileSystem> Collector<F> {
    /// Creates a new collector.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `proc_path` - Base path to proc filesystem (usually "/proc")
    pub fn new(fs: F, proc_path: impl Into<String>) -> Self {
        Self {
            sampler: SystemSampler::new(fs, proc_path),
            cpu_tracker: CpuPercentTracker::new(),
        }
    }

    fn sample_inner(&mut self) -> MetricsSnapshot {
        let mut snapshot = MetricsSnapshot::empty(chrono::Utc::now().timestamp());

        match self.sampler.sample_memory() {
            Ok(mem) => {
                snapshot.total_gb = Some(total_ram_gb(mem.total));
                snapshot.available_gb = Some(bytes_to_gb(mem.available));
                snapshot.mem_percent = Some(mem.percent.round() as u8);
            }
            Err(e) => warn!("memory sample failed: {}", e),
        }

        match self.sampler.list_process_ids() {
            Ok(pids) => snapshot.process_count = Some(pids.len()),
            Err(e) => warn!("process enumeration failed: {}", e),
        }

        match self.sampler.sample_cpu_times() {
            Ok(times) => {
                snapshot.cpu_percent = self
                    .cpu_tracker
                    .update(times)
                    .map(|p| p.round() as u8);
            }
            Err(e) => warn!("cpu sample failed: {}", e),
        }

        snapshot
    }
}

impl<F: FileSystem> SnapshotSource for Collector<F> {
    fn sample(&mut self) -> MetricsSnapshot {
        self.sample_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::MockFs;

    #[test]
    fn test_cpu_tracker_first_sample_has_no_baseline() {
        let mut tracker = CpuPercentTracker::new();
        let times = CpuTimes {
            user: 100,
            idle: 900,
            ..CpuTimes::default()
        };
        assert_eq!(tracker.update(times), None);
    }

    #[test]
    fn test_cpu_tracker_computes_delta_percent() {
        let mut tracker = CpuPercentTracker::new();
        tracker.update(CpuTimes {
            user: 100,
            idle: 900,
            ..CpuTimes::default()
        });
        let pct = tracker
            .update(CpuTimes {
                user: 150,
                idle: 950,
                ..CpuTimes::default()
            })
            .unwrap();
        // 50 busy ticks of 100 total
        assert!((pct - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_cpu_tracker_unchanged_counters_report_zero() {
        let mut tracker = CpuPercentTracker::new();
        let times = CpuTimes {
            user: 100,
            idle: 900,
            ..CpuTimes::default()
        };
        tracker.update(times);
        assert_eq!(tracker.update(times), Some(0.0));
    }

    #[test]
    fn test_sample_fills_fields_from_mock() {
        let mut collector = Collector::new(MockFs::typical_system(), "/proc");

        let snapshot = collector.sample();

        assert_eq!(snapshot.total_gb, Some(16));
        // 12000000 kB available = 11.444 GiB
        assert_eq!(snapshot.available_gb, Some(11.444));
        assert_eq!(snapshot.mem_percent, Some(27));
        assert_eq!(snapshot.process_count, Some(3));
        // First CPU sample has no baseline
        assert_eq!(snapshot.cpu_percent, None);
    }

    #[test]
    fn test_sample_degrades_to_placeholders_on_empty_fs() {
        let mut collector = Collector::new(MockFs::new(), "/proc");

        let snapshot = collector.sample();

        assert_eq!(snapshot.total_gb, None);
        assert_eq!(snapshot.available_gb, None);
        assert_eq!(snapshot.mem_percent, None);
        assert_eq!(snapshot.process_count, None);
        assert_eq!(snapshot.cpu_percent, None);
    }

    #[test]
    fn test_cpu_percent_present_from_second_sample() {
        let mut collector = Collector::new(MockFs::typical_system(), "/proc");

        assert_eq!(collector.sample().cpu_percent, None);
        assert!(collector.sample().cpu_percent.is_some());
    }

    #[test]
    fn test_back_to_back_samples_are_equal_on_unchanged_host() {
        let mut collector = Collector::new(MockFs::typical_system(), "/proc");

        // Warm up the CPU baseline first.
        let _ = collector.sample();
        let a = collector.sample();
        let b = collector.sample();

        assert_eq!(a.total_gb, b.total_gb);
        assert_eq!(a.available_gb, b.available_gb);
        assert_eq!(a.mem_percent, b.mem_percent);
        assert_eq!(a.process_count, b.process_count);
        assert_eq!(a.cpu_percent, b.cpu_percent);
        assert_eq!(a.cpu_percent, Some(0));
    }
}
