//! Main info tab: static host characteristics.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::tui::state::AppState;
use crate::tui::style::Palette;

pub fn render_overview(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let host = &state.host;

    let lines = vec![
        Line::styled(format!("OS: {}", host.os), palette.label()),
        Line::styled(format!("RAM(GB): {}", host.ram_gb), palette.label()),
        Line::styled(format!("CPU: {}", host.cpu_model), palette.label()),
        Line::styled(
            format!("System bitness: {}", host.bitness),
            palette.label(),
        ),
    ];

    let paragraph = Paragraph::new(lines).block(Block::default().style(palette.base()));
    frame.render_widget(paragraph, area);
}
