//! sysdash - tabbed terminal dashboard for host characteristics.
//!
//! This library provides the pieces behind the `sysdash` binary:
//! - `collector` - host metric sampling (procfs-backed, mockable)
//! - `gauge` - background updater loops for the live bar gauges
//! - `model` - the snapshot record the sampler produces
//! - `tui` - interactive tabbed viewer

pub mod collector;
pub mod config;
pub mod fmt;
pub mod gauge;
pub mod model;
pub mod speedtest;
pub mod tui;
