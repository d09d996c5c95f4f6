//! Parsers for `/proc` filesystem files.
//!
//! These are pure functions that parse the content of various `/proc` files
//! into structured data. They are designed to be easily testable with
//! string inputs.

/// Error type for parsing failures.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Parse error: {}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// The two `/proc/meminfo` figures the dashboard consumes
/// (values in kB, as reported by the kernel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemInfo {
    pub mem_total: u64,
    pub mem_available: u64,
}

/// Parses `/proc/meminfo` content.
///
/// Only `MemTotal` and `MemAvailable` matter; every other row is skipped.
pub fn parse_meminfo(content: &str) -> Result<MemInfo, ParseError> {
    let mut total = None;
    let mut available = None;

    for line in content.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let kb = value
            .trim()
            .strip_suffix("kB")
            .unwrap_or(value)
            .trim()
            .parse::<u64>()
            .ok();
        match key {
            "MemTotal" => total = kb,
            "MemAvailable" => available = kb,
            _ => {}
        }
    }

    match (total, available) {
        (Some(mem_total), Some(mem_available)) => Ok(MemInfo {
            mem_total,
            mem_available,
        }),
        _ => Err(ParseError::new(
            "meminfo missing MemTotal or MemAvailable",
        )),
    }
}

/// Aggregate CPU time counters from the `cpu` line of `/proc/stat`,
/// in USER_HZ ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CpuTimes {
    pub user: u64,
    pub nice: u64,
    pub system: u64,
    pub idle: u64,
    pub iowait: u64,
    pub irq: u64,
    pub softirq: u64,
    pub steal: u64,
}

impl CpuTimes {
    /// Sum of all counters.
    pub fn total(&self) -> u64 {
        self.user
            + self.nice
            + self.system
            + self.idle
            + self.iowait
            + self.irq
            + self.softirq
            + self.steal
    }

    /// Time spent not idle and not waiting for I/O.
    pub fn busy(&self) -> u64 {
        self.total() - self.idle - self.iowait
    }
}

/// Parses the aggregate `cpu` line of `/proc/stat`.
///
/// Per-CPU lines (`cpu0`, `cpu1`, ...) are ignored; only the first line
/// matters for the use-percent calculation.
pub fn parse_cpu_total(content: &str) -> Result<CpuTimes, ParseError> {
    let line = content
        .lines()
        .find(|l| l.starts_with("cpu "))
        .ok_or_else(|| ParseError::new("missing aggregate cpu line in stat"))?;

    let fields: Vec<u64> = line
        .split_whitespace()
        .skip(1)
        .map(|s| s.parse().unwrap_or(0))
        .collect();

    if fields.len() < 4 {
        return Err(ParseError::new(format!(
            "not enough fields in cpu line: expected 4+, got {}",
            fields.len()
        )));
    }

    let get = |i: usize| fields.get(i).copied().unwrap_or(0);

    Ok(CpuTimes {
        user: get(0),
        nice: get(1),
        system: get(2),
        idle: get(3),
        iowait: get(4),
        irq: get(5),
        softirq: get(6),
        steal: get(7),
    })
}

/// Name and state of a process, from `/proc/[pid]/status`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcStatus {
    pub name: String,
    /// Human-readable state, e.g. "S (sleeping)".
    pub state: String,
}

/// Parses `/proc/[pid]/status` content (only the Name and State lines).
///
/// Name is required; a missing State is tolerated as empty since kernels
/// always place both near the top.
pub fn parse_proc_status(content: &str) -> Result<ProcStatus, ParseError> {
    let mut name = None;
    let mut state = None;

    for line in content.lines() {
        match line.split_once(':') {
            Some(("Name", rest)) => name = Some(rest.trim().to_string()),
            Some(("State", rest)) => state = Some(rest.trim().to_string()),
            _ => {}
        }
        if name.is_some() && state.is_some() {
            break;
        }
    }

    Ok(ProcStatus {
        name: name.ok_or_else(|| ParseError::new("missing Name in status"))?,
        state: state.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEMINFO: &str = "\
MemTotal:       16384000 kB
MemFree:         8192000 kB
MemAvailable:   12000000 kB
Buffers:          512000 kB
Cached:          2048000 kB
SwapTotal:       4096000 kB
SwapFree:        4096000 kB
";

    #[test]
    fn test_parse_meminfo() {
        let info = parse_meminfo(MEMINFO).unwrap();
        assert_eq!(info.mem_total, 16384000);
        assert_eq!(info.mem_available, 12000000);
    }

    #[test]
    fn test_parse_meminfo_missing_total() {
        assert!(parse_meminfo("MemFree: 100 kB\nMemAvailable: 80 kB\n").is_err());
    }

    #[test]
    fn test_parse_meminfo_missing_available() {
        assert!(parse_meminfo("MemTotal: 100 kB\nMemFree: 80 kB\n").is_err());
    }

    #[test]
    fn test_parse_cpu_total() {
        let content = "\
cpu  10000 500 3000 80000 1000 200 100 0 0 0
cpu0 2500 125 750 20000 250 50 25 0 0 0
ctxt 500000
";
        let times = parse_cpu_total(content).unwrap();
        assert_eq!(times.user, 10000);
        assert_eq!(times.nice, 500);
        assert_eq!(times.system, 3000);
        assert_eq!(times.idle, 80000);
        assert_eq!(times.iowait, 1000);
        assert_eq!(times.total(), 94800);
        assert_eq!(times.busy(), 13800);
    }

    #[test]
    fn test_parse_cpu_total_missing() {
        assert!(parse_cpu_total("ctxt 500000\n").is_err());
    }

    #[test]
    fn test_parse_proc_status() {
        let content = "\
Name:\tbash
Umask:\t0022
State:\tS (sleeping)
Pid:\t100
";
        let status = parse_proc_status(content).unwrap();
        assert_eq!(status.name, "bash");
        assert_eq!(status.state, "S (sleeping)");
    }

    #[test]
    fn test_parse_proc_status_missing_name() {
        assert!(parse_proc_status("State:\tR (running)\n").is_err());
    }

    #[test]
    fn test_parse_proc_status_missing_state_is_empty() {
        let status = parse_proc_status("Name:\tkthreadd\nPid:\t2\n").unwrap();
        assert_eq!(status.name, "kthreadd");
        assert_eq!(status.state, "");
    }
}
