//! Filesystem seam for the samplers.
//!
//! Everything the samplers need from the OS is three operations on `/proc`
//! paths, so the seam is exactly that narrow: production uses `std::fs`,
//! tests swap in the in-memory [`crate::collector::mock::MockFs`].

use std::io;
use std::path::Path;

/// The filesystem operations the samplers perform.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as a string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Checks if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Lists the entry names directly under a directory.
    ///
    /// Names, not paths: the pid scan only ever looks at the last
    /// component.
    fn read_dir_names(&self, path: &Path) -> io::Result<Vec<String>>;
}

/// `std::fs`-backed implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFs;

impl RealFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for RealFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_dir_names(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(path)? {
            names.push(entry?.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_to_string_and_exists() {
        let fs = RealFs::new();
        assert!(fs.exists(Path::new("Cargo.toml")));
        assert!(!fs.exists(Path::new("no-such-file-12345")));

        let manifest = fs.read_to_string(Path::new("Cargo.toml")).unwrap();
        assert!(manifest.contains("[package]"));
    }

    #[test]
    fn test_read_dir_names_returns_names_not_paths() {
        let names = RealFs::new().read_dir_names(Path::new("src")).unwrap();
        assert!(names.contains(&"lib.rs".to_string()));
        assert!(names.iter().all(|n| !n.contains('/')));
    }

    #[test]
    fn test_read_dir_names_missing_dir() {
        let err = RealFs::new()
            .read_dir_names(Path::new("no-such-dir-12345"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
