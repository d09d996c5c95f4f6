//! Static host facts, collected once at startup.

use sysinfo::System;

use crate::fmt::{PLACEHOLDER, total_ram_gb};

/// Facts about the host that do not change while the dashboard runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInfo {
    /// OS name and version, e.g. "Linux 6.8".
    pub os: String,
    /// CPU brand string, e.g. "AMD Ryzen 7 5800X".
    pub cpu_model: String,
    /// Total RAM in whole GB.
    pub ram_gb: u64,
    /// Pointer width of the running build, in bits.
    pub bitness: u32,
}

impl HostInfo {
    /// Queries the host. Fields the platform cannot answer fall back to
    /// the display placeholder.
    pub fn detect() -> Self {
        let sys = System::new_all();

        let os = match (System::name(), System::os_version()) {
            (Some(name), Some(version)) => format!("{} {}", name, version),
            (Some(name), None) => name,
            _ => std::env::consts::OS.to_string(),
        };

        let cpu_model = sys
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .filter(|brand| !brand.is_empty())
            .unwrap_or_else(|| PLACEHOLDER.to_string());

        Self {
            os,
            cpu_model,
            ram_gb: total_ram_gb(sys.total_memory()),
            bitness: (size_of::<usize>() * 8) as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_fills_every_field() {
        let info = HostInfo::detect();

        assert!(!info.os.is_empty());
        assert!(!info.cpu_model.is_empty());
        assert!(info.bitness == 32 || info.bitness == 64);
    }
}
