//! Dashboard configuration.
//!
//! A single parameterized dashboard: the config describes which tabs and
//! gauges to enable, the gauge cadence and the color scheme, rather than a
//! separate hand-written component per variant.

use std::time::Duration;

use clap::ValueEnum;

use crate::gauge::DEFAULT_INTERVAL;

/// The tabs the dashboard can show, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Tab {
    /// Static host characteristics.
    Overview,
    /// Display hardware.
    Display,
    /// Live metrics snapshot plus the CPU/RAM gauges.
    Performance,
    /// Mounted volumes and free space.
    Disks,
    /// CPU speed stopwatch.
    Speedtest,
}

impl Tab {
    /// All tabs, in display order.
    pub const ALL: [Tab; 5] = [
        Tab::Overview,
        Tab::Display,
        Tab::Performance,
        Tab::Disks,
        Tab::Speedtest,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Overview => "Main info",
            Tab::Display => "Monitor",
            Tab::Performance => "Performance",
            Tab::Disks => "Disks",
            Tab::Speedtest => "CPU Speed test",
        }
    }
}

/// Dark or light background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeKind {
    Dark,
    Light,
}

impl ThemeKind {
    pub fn toggled(self) -> Self {
        match self {
            ThemeKind::Dark => ThemeKind::Light,
            ThemeKind::Light => ThemeKind::Dark,
        }
    }
}

/// Accent color for labels and gauge fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Accent {
    Green,
    Blue,
    White,
    Red,
    Yellow,
    Orange,
    Black,
}

impl Accent {
    pub const ALL: [Accent; 7] = [
        Accent::Green,
        Accent::Blue,
        Accent::White,
        Accent::Red,
        Accent::Yellow,
        Accent::Orange,
        Accent::Black,
    ];

    /// The next accent in the cycle (`c` key).
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|a| *a == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

/// Everything that varies between dashboard instances.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Enabled tabs, in display order. Never empty.
    pub tabs: Vec<Tab>,
    /// Cadence of the gauge updater loops.
    pub gauge_interval: Duration,
    pub theme: ThemeKind,
    pub accent: Accent,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            tabs: Tab::ALL.to_vec(),
            gauge_interval: DEFAULT_INTERVAL,
            theme: ThemeKind::Dark,
            accent: Accent::Green,
        }
    }
}

impl DashboardConfig {
    /// Restricts the dashboard to the given tabs; an empty selection keeps
    /// the full set.
    pub fn with_tabs(mut self, tabs: Vec<Tab>) -> Self {
        if !tabs.is_empty() {
            self.tabs = tabs;
        }
        self
    }

    pub fn with_gauge_interval(mut self, interval: Duration) -> Self {
        self.gauge_interval = interval;
        self
    }

    pub fn with_theme(mut self, theme: ThemeKind) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_accent(mut self, accent: Accent) -> Self {
        self.accent = accent;
        self
    }

    /// Whether the performance gauges should run at all.
    pub fn gauges_enabled(&self) -> bool {
        self.tabs.contains(&Tab::Performance)
    }
}
