//! Performance tab: snapshot figures plus the two live gauges.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};

use crate::fmt::PLACEHOLDER;
use crate::gauge::{GaugeKind, GaugeState};
use crate::tui::state::AppState;
use crate::tui::style::Palette;

pub fn render_performance(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let columns = Layout::horizontal([
        Constraint::Percentage(30), // Physical memory
        Constraint::Percentage(20), // RAM gauge
        Constraint::Percentage(30), // System
        Constraint::Percentage(20), // CPU gauge
    ])
    .split(area);

    render_memory_frame(frame, columns[0], state, palette);
    render_gauge(frame, columns[1], GaugeKind::Memory, state.mem_gauge, palette);
    render_system_frame(frame, columns[2], state, palette);
    render_gauge(frame, columns[3], GaugeKind::Cpu, state.cpu_gauge, palette);
}

fn render_memory_frame(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let (available, percent, used) = match &state.snapshot {
        Some(s) => (
            s.available_display(),
            s.mem_percent_display(),
            s.used_display(),
        ),
        None => (
            PLACEHOLDER.to_string(),
            PLACEHOLDER.to_string(),
            PLACEHOLDER.to_string(),
        ),
    };

    let lines = vec![
        Line::styled(format!("Available RAM(GB): {}", available), palette.label()),
        Line::styled(
            format!("RAM usage percent(%): {}", percent),
            palette.label(),
        ),
        Line::styled(format!("RAM usage(GB): {}", used), palette.label()),
        Line::raw(""),
        Line::styled("press r to reload", palette.help()),
    ];

    let block = Block::default()
        .title("Physical memory")
        .borders(Borders::ALL)
        .style(palette.base())
        .title_style(palette.frame_title());
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_system_frame(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let (processes, cpu) = match &state.snapshot {
        Some(s) => (s.process_count_display(), s.cpu_percent_display()),
        None => (PLACEHOLDER.to_string(), PLACEHOLDER.to_string()),
    };

    let lines = vec![
        Line::styled(format!("Process amount: {}", processes), palette.label()),
        Line::styled(format!("CPU usage percent(%): {}", cpu), palette.label()),
    ];

    let block = Block::default()
        .title("System")
        .borders(Borders::ALL)
        .style(palette.base())
        .title_style(palette.frame_title());
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_gauge(
    frame: &mut Frame,
    area: Rect,
    kind: GaugeKind,
    gauge: Option<GaugeState>,
    palette: &Palette,
) {
    let fill = gauge.map(|g| g.fill_percent()).unwrap_or(0);

    let block = Block::default()
        .title(kind.title())
        .borders(Borders::ALL)
        .style(palette.base())
        .title_style(palette.frame_title());

    let widget = Gauge::default()
        .block(block)
        .gauge_style(palette.gauge(kind))
        .percent(fill.min(100));
    frame.render_widget(widget, area);
}
