//! In-memory mock filesystem for testing samplers without real `/proc`.

mod filesystem;
mod scenarios;

pub use filesystem::MockFs;
