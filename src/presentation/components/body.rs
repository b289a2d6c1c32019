use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
};

use super::super::view::UiContext;
use super::{fields::render_fields, records::render_records};

pub fn render_body(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>, enable_cursor: bool) {
    if ctx.form_state.is_empty() {
        let placeholder =
            Paragraph::new("No fields configured").block(Block::default().borders(Borders::ALL));
        frame.render_widget(placeholder, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_fields(frame, chunks[0], ctx.title, ctx.form_state, enable_cursor);
    render_records(frame, chunks[1], ctx);
}
