//! Sampler for system-wide metrics and the process list, read from `/proc/`.

use std::path::Path;

use crate::collector::procfs::parser::{
    CpuTimes, ProcStatus, parse_cpu_total, parse_meminfo, parse_proc_status,
};
use crate::collector::traits::FileSystem;

/// Error type for collection failures.
#[derive(Debug)]
pub enum CollectError {
    /// Process disappeared during collection.
    ProcessGone(u32),
    /// I/O error reading `/proc` files.
    Io(std::io::Error),
    /// Parse error in `/proc` files.
    Parse(String),
}

impl std::fmt::Display for CollectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectError::ProcessGone(pid) => write!(f, "process {} disappeared", pid),
            CollectError::Io(e) => write!(f, "I/O error: {}", e),
            CollectError::Parse(msg) => write!(f, "parse error: {}", msg),
        }
    }
}

impl std::error::Error for CollectError {}

impl From<std::io::Error> for CollectError {
    fn from(e: std::io::Error) -> Self {
        CollectError::Io(e)
    }
}

/// One read of the host memory figures, in bytes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemorySample {
    pub total: u64,
    pub available: u64,
    /// Use percent derived from total and available at read time.
    pub percent: f64,
}

/// Name and state of one process.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessDetails {
    pub pid: u32,
    pub name: String,
    pub state: String,
}

/// Reads host metrics from `/proc/`.
pub struct SystemSampler<F: FileSystem> {
    fs: F,
    proc_path: String,
}

impl<F: FileSystem> SystemSampler<F> {
    /// Creates a new sampler.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `proc_path` - Base path to proc filesystem (usually "/proc")
    pub fn new(fs: F, proc_path: impl Into<String>) -> Self {
        Self {
            fs,
            proc_path: proc_path.into(),
        }
    }

    /// Samples memory figures from `/proc/meminfo`.
    pub fn sample_memory(&self) -> Result<MemorySample, CollectError> {
        let path = format!("{}/meminfo", self.proc_path);
        let content = self.fs.read_to_string(Path::new(&path))?;
        let info = parse_meminfo(&content).map_err(|e| CollectError::Parse(e.message))?;

        let total = info.mem_total * 1024;
        let available = info.mem_available * 1024;
        let percent = if total > 0 {
            (total - available.min(total)) as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        Ok(MemorySample {
            total,
            available,
            percent,
        })
    }

    /// Samples the aggregate CPU time counters from `/proc/stat`.
    ///
    /// A use percent is the delta of two such samples; see
    /// [`crate::collector::CpuPercentTracker`].
    pub fn sample_cpu_times(&self) -> Result<CpuTimes, CollectError> {
        let path = format!("{}/stat", self.proc_path);
        let content = self.fs.read_to_string(Path::new(&path))?;
        parse_cpu_total(&content).map_err(|e| CollectError::Parse(e.message))
    }

    /// Lists all PIDs found under `/proc`.
    pub fn list_process_ids(&self) -> Result<Vec<u32>, CollectError> {
        let names = self.fs.read_dir_names(Path::new(&self.proc_path))?;

        let mut pids: Vec<u32> = names.iter().filter_map(|name| name.parse().ok()).collect();
        pids.sort_unstable();

        Ok(pids)
    }

    /// Reads name and state of one process from `/proc/[pid]/status`.
    ///
    /// Returns [`CollectError::ProcessGone`] if the process exited between
    /// enumeration and the read.
    pub fn process_info(&self, pid: u32) -> Result<ProcessDetails, CollectError> {
        let path = format!("{}/{}/status", self.proc_path, pid);
        let path = Path::new(&path).to_path_buf();

        if !self.fs.exists(&path) {
            return Err(CollectError::ProcessGone(pid));
        }

        let content = match self.fs.read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(CollectError::ProcessGone(pid));
            }
            Err(e) => return Err(e.into()),
        };

        let ProcStatus { name, state } =
            parse_proc_status(&content).map_err(|e| CollectError::Parse(e.message))?;

        Ok(ProcessDetails { pid, name, state })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::MockFs;

    #[test]
    fn test_sample_memory() {
        let fs = MockFs::typical_system();
        let sampler = SystemSampler::new(fs, "/proc");

        let mem = sampler.sample_memory().unwrap();

        assert_eq!(mem.total, 16384000 * 1024);
        assert_eq!(mem.available, 12000000 * 1024);
        // (16384000 - 12000000) / 16384000 = 26.76%
        assert!((mem.percent - 26.757).abs() < 0.01);
    }

    #[test]
    fn test_sample_memory_pressure() {
        let fs = MockFs::memory_pressure();
        let sampler = SystemSampler::new(fs, "/proc");

        let mem = sampler.sample_memory().unwrap();

        assert!(mem.percent > 90.0);
        assert!(mem.available < mem.total / 10);
    }

    #[test]
    fn test_sample_memory_missing_file() {
        let fs = MockFs::new();
        let sampler = SystemSampler::new(fs, "/proc");

        assert!(matches!(
            sampler.sample_memory(),
            Err(CollectError::Io(_))
        ));
    }

    #[test]
    fn test_sample_cpu_times() {
        let fs = MockFs::typical_system();
        let sampler = SystemSampler::new(fs, "/proc");

        let times = sampler.sample_cpu_times().unwrap();

        assert_eq!(times.user, 10000);
        assert_eq!(times.idle, 80000);
    }

    #[test]
    fn test_list_process_ids() {
        let fs = MockFs::typical_system();
        let sampler = SystemSampler::new(fs, "/proc");

        let pids = sampler.list_process_ids().unwrap();

        // typical_system has init, bash and a daemon
        assert_eq!(pids, vec![1, 100, 250]);
    }

    #[test]
    fn test_process_info() {
        let fs = MockFs::typical_system();
        let sampler = SystemSampler::new(fs, "/proc");

        let info = sampler.process_info(100).unwrap();

        assert_eq!(info.pid, 100);
        assert_eq!(info.name, "bash");
        assert_eq!(info.state, "S (sleeping)");
    }

    #[test]
    fn test_process_info_gone() {
        let fs = MockFs::typical_system();
        let sampler = SystemSampler::new(fs, "/proc");

        assert!(matches!(
            sampler.process_info(99999),
            Err(CollectError::ProcessGone(99999))
        ));
    }
}
