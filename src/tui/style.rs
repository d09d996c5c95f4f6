//! Color scheme and styles.
//!
//! The palette is derived from the configured theme and accent at render
//! time, so theme/accent switches take effect on the next frame.

use ratatui::style::{Color, Modifier, Style};

use crate::config::{Accent, ThemeKind};
use crate::gauge::GaugeKind;

/// Maps an accent to its terminal color.
pub fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Green => Color::Rgb(0x62, 0xCA, 0x00),
        Accent::Blue => Color::Rgb(0x29, 0x75, 0xC1),
        Accent::White => Color::Rgb(0xFF, 0xFF, 0xFF),
        Accent::Red => Color::Rgb(0xE1, 0x00, 0x00),
        Accent::Yellow => Color::Rgb(0xDB, 0xC5, 0x00),
        Accent::Orange => Color::Rgb(0xDB, 0x87, 0x00),
        Accent::Black => Color::Rgb(0x00, 0x00, 0x00),
    }
}

/// Resolved styles for one frame.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    bg: Color,
    fg: Color,
    accent: Color,
}

impl Palette {
    pub fn new(theme: ThemeKind, accent: Accent) -> Self {
        let (bg, fg) = match theme {
            ThemeKind::Dark => (Color::Rgb(0x2C, 0x2C, 0x2C), Color::White),
            ThemeKind::Light => (Color::Rgb(0xF0, 0xF0, 0xF0), Color::Black),
        };
        Self {
            bg,
            fg,
            accent: accent_color(accent),
        }
    }

    /// Base style for the whole frame.
    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Accent-colored metric label.
    pub fn label(&self) -> Style {
        Style::default().fg(self.accent).bg(self.bg)
    }

    /// Frame/section title.
    pub fn frame_title(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Active tab in the tab bar.
    pub fn tab_active(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Inactive tab in the tab bar.
    pub fn tab_inactive(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    /// Gauge fill, accent-colored like the metric labels.
    pub fn gauge(&self, _kind: GaugeKind) -> Style {
        Style::default().fg(self.accent).bg(self.bg)
    }

    /// Table header row.
    pub fn table_header(&self) -> Style {
        Style::default()
            .fg(self.fg)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Bottom help line.
    pub fn help(&self) -> Style {
        Style::default().fg(Color::DarkGray).bg(self.bg)
    }

    /// Highlighted keys in the help line.
    pub fn help_key(&self) -> Style {
        Style::default()
            .fg(self.fg)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_colors_are_fixed_rgb() {
        assert_eq!(accent_color(Accent::Green), Color::Rgb(0x62, 0xCA, 0x00));
        assert_eq!(accent_color(Accent::Red), Color::Rgb(0xE1, 0x00, 0x00));
    }

    #[test]
    fn test_palette_tracks_theme() {
        let dark = Palette::new(ThemeKind::Dark, Accent::Green);
        let light = Palette::new(ThemeKind::Light, Accent::Green);
        assert_ne!(dark.base(), light.base());
        assert_eq!(dark.label(), Style::default().fg(accent_color(Accent::Green)).bg(Color::Rgb(0x2C, 0x2C, 0x2C)));
    }
}
