//! Disks tab: mounted volumes and free space.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Block, Paragraph, Row, Table};

use crate::tui::state::AppState;
use crate::tui::style::Palette;

pub fn render_disks(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    if state.volumes.is_empty() {
        let paragraph = Paragraph::new("No volumes visible")
            .style(palette.help())
            .block(Block::default().style(palette.base()));
        frame.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(vec!["Device", "Mountpoint", "Free space(GB)"])
        .style(palette.table_header());

    let rows: Vec<Row> = state
        .volumes
        .iter()
        .map(|vol| {
            Row::new(vec![
                vol.device.clone(),
                vol.mountpoint.clone(),
                format!("{:.1}", vol.free_gb),
            ])
            .style(palette.label())
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(35),
            Constraint::Percentage(45),
            Constraint::Percentage(20),
        ],
    )
    .header(header)
    .block(Block::default().style(palette.base()));

    frame.render_widget(table, area);
}
