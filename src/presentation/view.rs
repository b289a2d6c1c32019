use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{
    domain::{FieldDefinition, MovieCollection},
    form::FormState,
};

use super::components::{render_alert, render_body, render_footer, render_popup};

pub struct UiContext<'a> {
    pub title: &'a str,
    pub form_state: &'a FormState,
    pub definitions: &'a [FieldDefinition],
    pub collection: &'a MovieCollection,
    pub records_offset: usize,
    pub status_message: &'a str,
    pub dirty: bool,
    pub error_count: usize,
    pub help: Option<&'a str>,
    pub popup: Option<PopupRender<'a>>,
    pub alert: Option<AlertRender<'a>>,
}

pub struct PopupRender<'a> {
    pub title: &'a str,
    pub options: &'a [&'static str],
    pub selected: usize,
}

pub struct AlertRender<'a> {
    pub title: &'a str,
    pub message: &'a str,
}

pub fn draw(frame: &mut Frame<'_>, ctx: UiContext<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(7), Constraint::Length(4)])
        .split(frame.area());

    let cursor_enabled = ctx.popup.is_none() && ctx.alert.is_none();
    render_body(frame, chunks[0], &ctx, cursor_enabled);
    render_footer(frame, chunks[1], &ctx);

    if let Some(popup) = ctx.popup {
        render_popup(frame, popup);
    }
    if let Some(alert) = ctx.alert {
        render_alert(frame, alert);
    }
}
