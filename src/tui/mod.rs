//! Terminal user interface for the dashboard.
//!
//! A tabbed viewer in the style of atop/htop: an event thread feeds ticks
//! and key presses into the main loop, which owns all UI state and renders
//! one tab at a time.

mod app;
mod event;
mod input;
mod render;
mod state;
mod style;
mod widgets;

pub use app::App;
pub use state::AppState;
