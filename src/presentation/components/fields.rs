use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

use crate::form::{ComponentKind, FieldState, FormState};

const SUBMIT_LABEL: &str = "[ Save ]";

pub fn render_fields(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    form_state: &FormState,
    enable_cursor: bool,
) {
    let content_width = area.width.saturating_sub(6);
    let selected_index = form_state.focus_index();
    let mut items = Vec::with_capacity(form_state.fields.len() + 1);
    let mut line_counts = Vec::with_capacity(form_state.fields.len() + 1);
    let mut cursor_hint: Option<CursorHint> = None;

    for (idx, field) in form_state.fields.iter().enumerate() {
        let render = build_field_render(field, idx == selected_index, content_width);
        if let Some(hint) = render.cursor_hint {
            cursor_hint = Some(hint);
        }
        line_counts.push(render.lines.len());
        items.push(ListItem::new(render.lines));
    }

    let submit = submit_line(form_state.submit_focused());
    line_counts.push(1);
    items.push(ListItem::new(submit));

    let mut list_state = ListState::default();
    list_state.select(Some(selected_index));

    let list = List::new(items)
        .block(Block::default().title(title.to_string()).borders(Borders::ALL))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("» ");

    frame.render_stateful_widget(list, area, &mut list_state);

    if !enable_cursor {
        return;
    }
    let Some(cursor) = cursor_hint else {
        return;
    };
    let first_visible = list_state.offset();
    if selected_index < first_visible {
        return;
    }
    let line = line_counts[first_visible..selected_index].iter().sum::<usize>() + cursor.line_offset;
    let inner_height = area.height.saturating_sub(2) as usize;
    if line >= inner_height {
        return;
    }
    let cursor_y = area.y.saturating_add(1).saturating_add(line as u16);
    let cursor_x = area
        .x
        .saturating_add(1)
        .saturating_add(2)
        .saturating_add(2)
        .saturating_add(cursor.value_width);
    frame.set_cursor_position((cursor_x, cursor_y));
}

struct FieldRender {
    lines: Vec<Line<'static>>,
    cursor_hint: Option<CursorHint>,
}

struct CursorHint {
    line_offset: usize,
    value_width: u16,
}

fn build_field_render(field: &FieldState, is_selected: bool, max_width: u16) -> FieldRender {
    let mut lines = Vec::new();
    let label_style = if is_selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    };
    lines.push(Line::from(vec![
        Span::styled(field.display_label(), label_style),
        Span::styled(
            format!(" ({})", field.definition.key),
            Style::default().fg(Color::DarkGray),
        ),
    ]));

    let (value_panel, mut cursor_hint) = value_panel_lines(field, is_selected, max_width);
    if let Some(hint) = cursor_hint.as_mut() {
        hint.line_offset += lines.len();
    }
    lines.extend(value_panel);

    lines.push(meta_line(field, is_selected));

    if let Some(error) = error_lines(field, max_width) {
        lines.extend(error);
    }

    FieldRender { lines, cursor_hint }
}

fn value_panel_lines(
    field: &FieldState,
    is_selected: bool,
    max_width: u16,
) -> (Vec<Line<'static>>, Option<CursorHint>) {
    let clamp_width = max_width.max(4) as usize;
    let value_text = field.display_value();
    let mut wrapped_value: Vec<String> = wrap(&value_text, clamp_width)
        .into_iter()
        .map(|segment| segment.into_owned())
        .collect();
    if wrapped_value.is_empty() {
        wrapped_value.push(String::new());
    }
    let inner_width = wrapped_value
        .iter()
        .map(|line| UnicodeWidthStr::width(line.as_str()))
        .max()
        .unwrap_or(0);
    let last_line_width = wrapped_value
        .last()
        .map(|line| UnicodeWidthStr::width(line.as_str()))
        .unwrap_or(0);
    let mut lines = Vec::new();

    if !is_selected {
        for segment in wrapped_value {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(segment, Style::default().fg(Color::White)),
            ]));
        }
        return (lines, None);
    }

    let border_width = inner_width.saturating_add(2);
    let border_line = "─".repeat(border_width);
    let border_style = Style::default().fg(Color::Yellow);
    let value_style = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    lines.push(Line::from(Span::styled(
        format!("┌{border_line}┐"),
        border_style,
    )));
    let last_value_line = lines.len() + wrapped_value.len() - 1;
    for segment in &wrapped_value {
        let mut content = segment.clone();
        let mut width = UnicodeWidthStr::width(content.as_str());
        while width < inner_width {
            content.push(' ');
            width += 1;
        }
        lines.push(Line::from(vec![
            Span::styled("│ ", border_style),
            Span::styled(content, value_style),
            Span::styled(" │", border_style),
        ]));
    }
    lines.push(Line::from(Span::styled(
        format!("└{border_line}┘"),
        border_style,
    )));

    // selects take arrows and Enter, not typed text
    let cursor_hint = (field.component_kind() != ComponentKind::Select).then_some(CursorHint {
        line_offset: last_value_line,
        value_width: last_line_width as u16,
    });
    (lines, cursor_hint)
}

pub(super) fn meta_line(field: &FieldState, is_selected: bool) -> Line<'static> {
    let type_style = if is_selected {
        Style::default().fg(Color::Black).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let mut meta = vec![Span::styled(
        format!("  type: {}", field.component_kind().type_label()),
        type_style,
    )];
    if let Some(hint) = control_hint(field.component_kind()) {
        meta.push(Span::styled(format!("  {hint}"), Style::default().fg(Color::DarkGray)));
    }
    if field.error.is_some() {
        meta.push(Span::styled(
            "  • invalid",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    } else if field.dirty {
        meta.push(Span::styled("  • edited", Style::default().fg(Color::Yellow)));
    }
    Line::from(meta)
}

fn control_hint(kind: ComponentKind) -> Option<&'static str> {
    match kind {
        ComponentKind::TextInput => None,
        ComponentKind::DateInput => Some("(YYYY-MM-DD, ←/→ step a day)"),
        ComponentKind::Select => Some("(↑/↓ cycle, Enter for list)"),
    }
}

fn error_lines(field: &FieldState, max_width: u16) -> Option<Vec<Line<'static>>> {
    field.error.as_ref().map(|message| {
        let mut lines = vec![Line::from(Span::styled(
            "  Error:",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))];
        for line in wrap(message, max_width.max(4) as usize) {
            lines.push(Line::from(Span::styled(
                format!("    {}", line.into_owned()),
                Style::default().fg(Color::Red),
            )));
        }
        lines
    })
}

fn submit_line(is_selected: bool) -> Line<'static> {
    let style = if is_selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    };
    Line::from(Span::styled(SUBMIT_LABEL, style))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::field_definitions;

    fn title_field() -> FieldState {
        FieldState::from_definition(field_definitions().remove(0))
    }

    #[test]
    fn meta_line_selected_uses_dark_text() {
        let field = title_field();
        let line = meta_line(&field, true);
        let span = line.spans.first().expect("type span");
        assert_eq!(span.style.fg, Some(Color::Black));
        assert!(span.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn meta_line_unselected_uses_gray() {
        let field = title_field();
        let line = meta_line(&field, false);
        let span = line.spans.first().expect("type span");
        assert_eq!(span.style.fg, Some(Color::DarkGray));
        assert!(!span.style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(span.content, "  type: text");
    }

    #[test]
    fn focused_field_is_boxed_and_reports_cursor() {
        let field = title_field();
        let render = build_field_render(&field, true, 40);
        // label, top border, value, bottom border, meta
        assert_eq!(render.lines.len(), 5);
        let hint = render.cursor_hint.expect("text inputs place a cursor");
        assert_eq!(hint.line_offset, 2);
        assert_eq!(hint.value_width, 0);
    }

    #[test]
    fn errors_add_lines_below_meta() {
        let mut field = title_field();
        field.set_error("Please fill out all fields".to_string());
        let render = build_field_render(&field, false, 40);
        assert_eq!(render.lines.len(), 5);
        assert!(render.cursor_hint.is_none());
    }
}
