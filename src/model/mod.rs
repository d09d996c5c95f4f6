//! Data model for sampled metrics.

mod snapshot;

pub use snapshot::MetricsSnapshot;
