//! Per-tab widgets.

mod disks;
mod display;
mod overview;
mod performance;
mod speedtest;

pub use disks::render_disks;
pub use display::render_display;
pub use overview::render_overview;
pub use performance::render_performance;
pub use speedtest::render_speedtest;
