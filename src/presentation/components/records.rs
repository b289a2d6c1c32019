use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use super::super::{
    records::{header_row, record_rows},
    view::UiContext,
};

pub fn render_records(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let title = format!("Saved Movies ({})", ctx.collection.len());
    let block = Block::default().title(title).borders(Borders::ALL);

    let Some(header) = header_row(ctx.collection, ctx.definitions) else {
        let placeholder = Paragraph::new("No movies saved yet.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    };

    let columns = header.len().max(1) as u32;
    let widths = vec![Constraint::Ratio(1, columns); header.len()];
    let header = Row::new(header.into_iter().map(Cell::from)).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    let rows = record_rows(ctx.collection, ctx.definitions)
        .into_iter()
        .map(|cells| Row::new(cells.into_iter().map(Cell::from)));

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1);

    let max_offset = ctx.collection.len().saturating_sub(1);
    let mut state = TableState::default().with_offset(ctx.records_offset.min(max_offset));
    frame.render_stateful_widget(table, area, &mut state);
}
