//! Monitor tab: display hardware, placeholders where the platform
//! cannot answer.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::fmt::PLACEHOLDER;
use crate::tui::state::AppState;
use crate::tui::style::Palette;

pub fn render_display(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let info = &state.display;

    let device = info.device.as_deref().unwrap_or(PLACEHOLDER);
    let frequency = info
        .refresh_hz
        .map(|hz| hz.to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string());
    let resolution = info
        .resolution
        .map(|(w, h)| format!("{} x {}", w, h))
        .unwrap_or_else(|| PLACEHOLDER.to_string());

    let lines = vec![
        Line::styled(format!("Video card: {}", device), palette.label()),
        Line::styled(format!("Frequency(Hz): {}", frequency), palette.label()),
        Line::styled(
            format!("Screen resolution: {}", resolution),
            palette.label(),
        ),
    ];

    let paragraph = Paragraph::new(lines).block(Block::default().style(palette.base()));
    frame.render_widget(paragraph, area);
}
