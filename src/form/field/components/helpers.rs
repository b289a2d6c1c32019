use chrono::{Days, Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::domain::parse_release_date;

const DATE_BUFFER_FORMAT: &str = "%Y-%m-%d";

pub(crate) fn handle_text_edit(buffer: &mut String, key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return false;
            }
            buffer.push(ch);
            true
        }
        KeyCode::Backspace => buffer.pop().is_some(),
        KeyCode::Delete => {
            if buffer.is_empty() {
                return false;
            }
            buffer.clear();
            true
        }
        _ => false,
    }
}

/// Moves a `YYYY-MM-DD` buffer by `delta` days. An empty buffer is seeded with
/// `today`; anything unparseable is left alone.
pub(crate) fn step_date(buffer: &mut String, delta: i64, today: NaiveDate) -> bool {
    if buffer.trim().is_empty() {
        *buffer = today.format(DATE_BUFFER_FORMAT).to_string();
        return true;
    }
    let Some(current) = parse_release_date(buffer) else {
        return false;
    };
    let days = Days::new(delta.unsigned_abs());
    let next = if delta >= 0 {
        current.checked_add_days(days)
    } else {
        current.checked_sub_days(days)
    };
    match next {
        Some(date) => {
            *buffer = date.format(DATE_BUFFER_FORMAT).to_string();
            true
        }
        None => false,
    }
}

pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub(crate) fn cycle_index(current: Option<usize>, len: usize, delta: i32) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let len = len as i64;
    let next = match current {
        Some(index) => ((index as i64 + delta as i64) % len + len) % len,
        None if delta >= 0 => 0,
        None => len - 1,
    };
    Some(next as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(raw: &str) -> NaiveDate {
        NaiveDate::parse_from_str(raw, DATE_BUFFER_FORMAT).unwrap()
    }

    #[test]
    fn step_date_crosses_month_boundaries() {
        let mut buffer = "2020-01-31".to_string();
        assert!(step_date(&mut buffer, 1, date("2000-01-01")));
        assert_eq!(buffer, "2020-02-01");
        assert!(step_date(&mut buffer, -2, date("2000-01-01")));
        assert_eq!(buffer, "2020-01-30");
    }

    #[test]
    fn step_date_seeds_empty_buffer_and_ignores_garbage() {
        let mut buffer = String::new();
        assert!(step_date(&mut buffer, 1, date("2024-06-09")));
        assert_eq!(buffer, "2024-06-09");

        let mut garbage = "next friday".to_string();
        assert!(!step_date(&mut garbage, 1, date("2024-06-09")));
        assert_eq!(garbage, "next friday");
    }

    #[test]
    fn cycle_index_wraps_both_ways() {
        assert_eq!(cycle_index(None, 3, 1), Some(0));
        assert_eq!(cycle_index(None, 3, -1), Some(2));
        assert_eq!(cycle_index(Some(2), 3, 1), Some(0));
        assert_eq!(cycle_index(Some(0), 3, -1), Some(2));
        assert_eq!(cycle_index(Some(0), 0, 1), None);
    }
}
