//! Application state.
//!
//! One explicit context object owned by the [`crate::tui::App`] and passed
//! to every render call; nothing UI-related lives in globals.

use crate::collector::{DisplayInfo, HostInfo, VolumeInfo};
use crate::config::{Accent, DashboardConfig, Tab, ThemeKind};
use crate::gauge::GaugeState;
use crate::model::MetricsSnapshot;
use crate::speedtest::SpeedTestResult;

/// All state the UI reads and mutates.
pub struct AppState {
    pub config: DashboardConfig,
    /// Index into `config.tabs`.
    pub tab_index: usize,
    pub theme: ThemeKind,
    pub accent: Accent,

    /// Static facts, collected once at startup.
    pub host: HostInfo,
    pub display: DisplayInfo,
    pub volumes: Vec<VolumeInfo>,

    /// Latest manual snapshot (startup + `r`).
    pub snapshot: Option<MetricsSnapshot>,
    /// Latest states posted by the gauge loops.
    pub cpu_gauge: Option<GaugeState>,
    pub mem_gauge: Option<GaugeState>,

    pub speedtest: Option<SpeedTestResult>,
}

impl AppState {
    pub fn new(
        config: DashboardConfig,
        host: HostInfo,
        display: DisplayInfo,
        volumes: Vec<VolumeInfo>,
    ) -> Self {
        let theme = config.theme;
        let accent = config.accent;
        Self {
            config,
            tab_index: 0,
            theme,
            accent,
            host,
            display,
            volumes,
            snapshot: None,
            cpu_gauge: None,
            mem_gauge: None,
            speedtest: None,
        }
    }

    /// The tab currently shown.
    pub fn current_tab(&self) -> Tab {
        self.config.tabs[self.tab_index]
    }

    pub fn next_tab(&mut self) {
        self.tab_index = (self.tab_index + 1) % self.config.tabs.len();
    }

    pub fn prev_tab(&mut self) {
        let len = self.config.tabs.len();
        self.tab_index = (self.tab_index + len - 1) % len;
    }

    /// Selects a tab by 1-based position, ignoring out-of-range digits.
    pub fn select_tab(&mut self, position: usize) {
        if position >= 1 && position <= self.config.tabs.len() {
            self.tab_index = position - 1;
        }
    }

    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn cycle_accent(&mut self) {
        self.accent = self.accent.next();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Tab;

    fn state() -> AppState {
        AppState::new(
            DashboardConfig::default(),
            HostInfo {
                os: "Linux 6.8".to_string(),
                cpu_model: "Test CPU".to_string(),
                ram_gb: 16,
                bitness: 64,
            },
            DisplayInfo::default(),
            Vec::new(),
        )
    }

    #[test]
    fn test_tab_cycling_wraps() {
        let mut s = state();
        assert_eq!(s.current_tab(), Tab::Overview);

        for _ in 0..s.config.tabs.len() {
            s.next_tab();
        }
        assert_eq!(s.current_tab(), Tab::Overview);

        s.prev_tab();
        assert_eq!(s.current_tab(), Tab::Speedtest);
    }

    #[test]
    fn test_select_tab_ignores_out_of_range() {
        let mut s = state();
        s.select_tab(3);
        assert_eq!(s.current_tab(), Tab::Performance);
        s.select_tab(99);
        assert_eq!(s.current_tab(), Tab::Performance);
        s.select_tab(0);
        assert_eq!(s.current_tab(), Tab::Performance);
    }

    #[test]
    fn test_theme_and_accent_start_from_config() {
        let s = state();
        assert_eq!(s.theme, s.config.theme);
        assert_eq!(s.accent, s.config.accent);
    }
}
