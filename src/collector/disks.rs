//! Mounted volume enumeration.
//!
//! A volume that fails its free-space query (typically permission denied on
//! restricted mounts) is skipped silently; it never appears in the result
//! and never surfaces as an error.

use std::io;
use std::path::Path;

use sysinfo::Disks;
use tracing::debug;

use crate::fmt::bytes_to_gb1;

/// One entry from the mount table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountedVolume {
    pub device: String,
    pub mountpoint: String,
}

/// A volume ready for display: device, mountpoint and free space in GB
/// (1 decimal).
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeInfo {
    pub device: String,
    pub mountpoint: String,
    pub free_gb: f64,
}

/// Abstraction over the platform's view of mounted volumes.
pub trait VolumeProbe {
    /// Lists mounted volumes (device, mountpoint).
    fn list_mounted_volumes(&self) -> Vec<MountedVolume>;

    /// Free space in bytes for a mountpoint.
    fn free_space(&self, mountpoint: &str) -> io::Result<u64>;
}

/// Enumerates volumes with their free space, skipping any volume whose
/// free-space query fails.
pub fn enumerate_volumes(probe: &dyn VolumeProbe) -> Vec<VolumeInfo> {
    let mut volumes = Vec::new();

    for vol in probe.list_mounted_volumes() {
        match probe.free_space(&vol.mountpoint) {
            Ok(free) => volumes.push(VolumeInfo {
                device: vol.device,
                mountpoint: vol.mountpoint,
                free_gb: bytes_to_gb1(free),
            }),
            Err(e) => {
                debug!("skipping volume {}: {}", vol.mountpoint, e);
            }
        }
    }

    volumes
}

/// Real probe backed by the `sysinfo` disk list.
#[derive(Debug, Default)]
pub struct SysinfoVolumes;

impl SysinfoVolumes {
    pub fn new() -> Self {
        Self
    }
}

impl VolumeProbe for SysinfoVolumes {
    fn list_mounted_volumes(&self) -> Vec<MountedVolume> {
        Disks::new_with_refreshed_list()
            .iter()
            .map(|disk| MountedVolume {
                device: disk.name().to_string_lossy().into_owned(),
                mountpoint: disk.mount_point().display().to_string(),
            })
            .collect()
    }

    fn free_space(&self, mountpoint: &str) -> io::Result<u64> {
        let disks = Disks::new_with_refreshed_list();
        disks
            .iter()
            .find(|d| d.mount_point() == Path::new(mountpoint))
            .map(|d| d.available_space())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no such mountpoint: {}", mountpoint),
                )
            })
    }
}
