//! Samplers for the Linux `/proc` filesystem.
//!
//! This module provides parsers and samplers for reading system and process
//! information from the `/proc` virtual filesystem.

pub mod parser;
pub mod system;

pub use parser::{CpuTimes, MemInfo, ParseError, ProcStatus};
pub use system::{CollectError, MemorySample, ProcessDetails, SystemSampler};
