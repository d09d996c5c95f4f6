//! Pre-built mock filesystem scenarios for testing.
//!
//! These scenarios provide realistic `/proc` filesystem states for
//! exercising the samplers under various system conditions.

use super::filesystem::MockFs;

impl MockFs {
    /// Creates a typical idle system with a few processes.
    ///
    /// 16 GB RAM with plenty available, low CPU load, three processes:
    /// init (PID 1), a bash shell (PID 100) and a daemon (PID 250).
    pub fn typical_system() -> Self {
        let mut fs = Self::new();

        fs.add_file(
            "/proc/meminfo",
            "\
MemTotal:       16384000 kB
MemFree:         8192000 kB
MemAvailable:   12000000 kB
Buffers:          512000 kB
Cached:          2048000 kB
SwapTotal:       4096000 kB
SwapFree:        4096000 kB
",
        );
        fs.add_file(
            "/proc/stat",
            "\
cpu  10000 500 3000 80000 1000 200 100 0 0 0
cpu0 2500 125 750 20000 250 50 25 0 0 0
cpu1 2500 125 750 20000 250 50 25 0 0 0
cpu2 2500 125 750 20000 250 50 25 0 0 0
cpu3 2500 125 750 20000 250 50 25 0 0 0
ctxt 500000
btime 1700000000
processes 10000
procs_running 2
procs_blocked 0
",
        );

        fs.add_process(1, "Name:\tsystemd\nState:\tS (sleeping)\nPid:\t1\n");
        fs.add_process(100, "Name:\tbash\nState:\tS (sleeping)\nPid:\t100\n");
        fs.add_process(250, "Name:\tsysdash\nState:\tR (running)\nPid:\t250\n");

        fs
    }

    /// Creates a system under memory pressure.
    ///
    /// Most RAM used, swap partially consumed.
    pub fn memory_pressure() -> Self {
        let mut fs = Self::typical_system();

        fs.add_file(
            "/proc/meminfo",
            "\
MemTotal:       16384000 kB
MemFree:          256000 kB
MemAvailable:     512000 kB
Buffers:           64000 kB
Cached:           128000 kB
SwapTotal:       4096000 kB
SwapFree:        1024000 kB
",
        );

        fs
    }

    /// Creates a system under heavy CPU load.
    ///
    /// The aggregate cpu line shows mostly busy time.
    pub fn high_cpu_load() -> Self {
        let mut fs = Self::typical_system();

        fs.add_file(
            "/proc/stat",
            "\
cpu  80000 2000 10000 5000 1000 500 500 0 0 0
cpu0 20000 500 2500 1250 250 125 125 0 0 0
ctxt 900000
btime 1700000000
processes 20000
procs_running 8
procs_blocked 1
",
        );

        fs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::procfs::SystemSampler;

    #[test]
    fn test_typical_system_has_three_processes() {
        let sampler = SystemSampler::new(MockFs::typical_system(), "/proc");
        assert_eq!(sampler.list_process_ids().unwrap().len(), 3);
    }

    #[test]
    fn test_high_cpu_load_is_mostly_busy() {
        let sampler = SystemSampler::new(MockFs::high_cpu_load(), "/proc");
        let times = sampler.sample_cpu_times().unwrap();
        assert!(times.busy() > times.total() * 9 / 10);
    }
}
