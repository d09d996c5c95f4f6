//! Main rendering logic for the TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Tabs};

use super::state::AppState;
use super::style::Palette;
use super::widgets::{
    render_disks, render_display, render_overview, render_performance, render_speedtest,
};
use crate::config::Tab;

/// Main render function.
pub fn render(frame: &mut Frame, state: &AppState) {
    let palette = Palette::new(state.theme, state.accent);
    let area = frame.area();

    // Paint the background before anything else
    frame.render_widget(Block::default().style(palette.base()), area);

    let chunks = Layout::vertical([
        Constraint::Length(1), // Tab bar
        Constraint::Min(5),    // Content
        Constraint::Length(1), // Help line
    ])
    .split(area);

    render_tab_bar(frame, chunks[0], state, &palette);
    render_content(frame, chunks[1], state, &palette);
    render_help_line(frame, chunks[2], state, &palette);
}

fn render_tab_bar(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let titles: Vec<Line> = state
        .config
        .tabs
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("{}:{}", i + 1, tab.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(state.tab_index)
        .style(palette.tab_inactive())
        .highlight_style(palette.tab_active());
    frame.render_widget(tabs, area);
}

/// Renders content based on the current tab.
fn render_content(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    match state.current_tab() {
        Tab::Overview => render_overview(frame, area, state, palette),
        Tab::Display => render_display(frame, area, state, palette),
        Tab::Performance => render_performance(frame, area, state, palette),
        Tab::Disks => render_disks(frame, area, state, palette),
        Tab::Speedtest => render_speedtest(frame, area, state, palette),
    }
}

fn render_help_line(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let key = palette.help_key();
    let dim = palette.help();

    let mut spans = vec![
        Span::styled("q", key),
        Span::styled(" quit  ", dim),
        Span::styled("Tab", key),
        Span::styled(" switch  ", dim),
        Span::styled("r", key),
        Span::styled(" reload  ", dim),
        Span::styled("t", key),
        Span::styled(" theme  ", dim),
        Span::styled("c", key),
        Span::styled(" color", dim),
    ];
    if state.current_tab() == Tab::Speedtest {
        spans.push(Span::styled("  s", key));
        spans.push(Span::styled(" start", dim));
    }

    frame.render_widget(Line::from(spans), area);
}
