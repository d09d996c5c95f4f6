//! CPU Speed test tab: the toy stopwatch.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::tui::state::AppState;
use crate::tui::style::Palette;

pub fn render_speedtest(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let (pi, result) = match &state.speedtest {
        Some(r) => (format!("π: {}", r.pi), format!("Result: {}", r.millis_display())),
        None => ("π: ".to_string(), "Result: ".to_string()),
    };

    let start_hint = if state.speedtest.is_some() {
        "press s to restart"
    } else {
        "press s to start"
    };

    let lines = vec![
        Line::styled(
            "Test your processor speed with calculating π",
            palette.label(),
        ),
        Line::raw(""),
        Line::styled(result, palette.label()),
        Line::styled(pi, palette.label()),
        Line::raw(""),
        Line::styled(start_hint, palette.help()),
    ];

    let paragraph = Paragraph::new(lines).block(Block::default().style(palette.base()));
    frame.render_widget(paragraph, area);
}
