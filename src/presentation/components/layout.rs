use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Centres a `width` x `height` box inside `area`, clamped to its bounds.
pub fn popup_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popup_is_centred() {
        let rect = popup_rect(Rect::new(0, 0, 100, 40), 20, 10);
        assert_eq!(rect, Rect::new(40, 15, 20, 10));
    }

    #[test]
    fn popup_never_exceeds_area() {
        let rect = popup_rect(Rect::new(0, 0, 10, 5), 30, 30);
        assert_eq!(rect, Rect::new(0, 0, 10, 5));
    }
}
