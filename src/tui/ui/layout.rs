//! Layout calculations and text utilities for the TUI.

use once_cell::sync::Lazy;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Pre-computed padding strings to avoid repeated " ".repeat(n) allocations.
/// Covers padding widths 0-100 (cards and list columns stay well below that).
static PADDING: Lazy<Vec<String>> = Lazy::new(|| (0..=100).map(|n| " ".repeat(n)).collect());

/// Get a padding string of the given width (reuses pre-computed strings).
#[inline]
fn get_padding(width: usize) -> &'static str {
    &PADDING[width.min(100)]
}

pub const PREFIX: &str = "  ";
pub const SEP: &str = " │ ";

/// Outer height of one grid card, borders included
pub const CARD_HEIGHT: u16 = 7;

const PROGRESS_FILLED: char = '█';
const PROGRESS_EMPTY: char = '░';

/// Calculate the display width of text (accounting for Unicode).
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Truncate text to a maximum display width.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + ch_width > max_width {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out
}

/// Truncate text with an ellipsis if it exceeds max width.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if display_width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 1 {
        return "…".to_string();
    }
    let truncated = truncate_to_width(text, max_width.saturating_sub(1));
    format!("{truncated}…")
}

/// Pad text to a specific width with given alignment.
/// Uses pre-computed padding strings to avoid allocations.
pub fn pad_to_width(text: &str, width: usize, alignment: Alignment) -> String {
    let mut trimmed = truncate_with_ellipsis(text, width);
    let current = display_width(&trimmed);
    let pad = width.saturating_sub(current);
    match alignment {
        Alignment::Left => {
            trimmed.push_str(get_padding(pad));
            trimmed
        }
        Alignment::Right => format!("{}{}", get_padding(pad), trimmed),
        Alignment::Center => {
            let left = pad / 2;
            let right = pad.saturating_sub(left);
            format!("{}{}{}", get_padding(left), trimmed, get_padding(right))
        }
    }
}

/// Text progress bar of exactly `width` cells, e.g. `██████░░░░` for 60%.
pub fn progress_bar(percentage: u8, width: usize) -> String {
    let pct = percentage.min(100) as usize;
    let filled = (pct * width + 50) / 100;
    let mut bar = String::with_capacity(width * 3);
    bar.extend(std::iter::repeat(PROGRESS_FILLED).take(filled));
    bar.extend(std::iter::repeat(PROGRESS_EMPTY).take(width - filled));
    bar
}

/// Index of the first row to draw so that `cursor_row` stays on screen.
pub fn scroll_offset(cursor_row: usize, visible_rows: usize) -> usize {
    if visible_rows == 0 {
        return cursor_row;
    }
    cursor_row.saturating_sub(visible_rows - 1)
}

/// Split `area` into `columns` equal-width cells of `CARD_HEIGHT` rows each,
/// for as many rows as fit.
pub fn grid_cells(area: Rect, columns: usize) -> Vec<Vec<Rect>> {
    let columns = columns.max(1) as u16;
    let rows = area.height / CARD_HEIGHT;
    let cell_width = area.width / columns;
    if cell_width == 0 {
        return Vec::new();
    }

    (0..rows)
        .map(|row| {
            (0..columns)
                .map(|col| {
                    // Give the remainder to the last column
                    let width = if col == columns - 1 {
                        area.width - cell_width * col
                    } else {
                        cell_width
                    };
                    Rect {
                        x: area.x + cell_width * col,
                        y: area.y + CARD_HEIGHT * row,
                        width,
                        height: CARD_HEIGHT,
                    }
                })
                .collect()
        })
        .collect()
}

/// Fit a Line to a maximum width by truncating spans.
pub fn fit_line_to_width<'a>(line: Line<'a>, max_width: usize) -> Line<'a> {
    if max_width == 0 {
        return Line::from(Vec::<Span>::new());
    }

    let Line {
        spans,
        alignment,
        style,
    } = line;
    let mut out: Vec<Span<'a>> = Vec::new();
    let mut used = 0usize;

    for span in spans {
        if used >= max_width {
            break;
        }
        let content = span.content.as_ref();
        let span_width = display_width(content);
        if used + span_width <= max_width {
            used += span_width;
            out.push(span);
        } else {
            let remaining = max_width.saturating_sub(used);
            let truncated = truncate_to_width(content, remaining);
            if !truncated.is_empty() {
                out.push(Span::styled(truncated, span.style));
            }
            break;
        }
    }

    Line {
        spans: out,
        alignment,
        style,
    }
}

/// Create an ellipsis line centered in the given width.
pub fn ellipsis_line(width: u16) -> Line<'static> {
    let text = pad_to_width("…", width as usize, Alignment::Center);
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
}

/// Fit lines to an area, adding ellipsis if content is truncated.
pub fn fit_lines_to_area<'a>(
    lines: Vec<Line<'a>>,
    inner: Rect,
    keep_bottom: usize,
) -> Vec<Line<'a>> {
    let width = inner.width as usize;
    let height = inner.height as usize;
    if height == 0 || width == 0 {
        return Vec::new();
    }

    let mut fitted: Vec<Line<'a>> = lines
        .into_iter()
        .map(|line| fit_line_to_width(line, width))
        .collect();

    if fitted.len() <= height {
        return fitted;
    }

    let keep_bottom = keep_bottom.min(height);
    let top_space = height.saturating_sub(keep_bottom);
    let mut out: Vec<Line<'a>> = Vec::with_capacity(height);

    if top_space > 0 {
        let top_take = top_space.saturating_sub(1);
        if top_take > 0 {
            out.extend(fitted.drain(..top_take));
        }
        out.push(ellipsis_line(inner.width));
    }

    if keep_bottom > 0 {
        let start = fitted.len().saturating_sub(keep_bottom);
        out.extend(fitted.drain(start..));
    }

    if out.is_empty() {
        out.push(ellipsis_line(inner.width));
    }

    out
}

/// Calculate a centered popup rectangle within a container.
pub fn popup_rect(
    percent_x: u16,
    percent_y: u16,
    min_width: u16,
    min_height: u16,
    r: Rect,
) -> Rect {
    let max_width = r.width.saturating_sub(2).max(1);
    let max_height = r.height.saturating_sub(2).max(1);

    let target_width = (r.width.saturating_mul(percent_x) / 100).max(min_width);
    let target_height = (r.height.saturating_mul(percent_y) / 100).max(min_height);

    let width = target_width.min(max_width);
    let height = target_height.min(max_height);

    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar_widths() {
        assert_eq!(progress_bar(0, 10), "░░░░░░░░░░");
        assert_eq!(progress_bar(100, 10), "██████████");
        assert_eq!(progress_bar(60, 10), "██████░░░░");
        assert_eq!(display_width(&progress_bar(33, 7)), 7);
    }

    #[test]
    fn test_truncate_with_ellipsis() {
        assert_eq!(truncate_with_ellipsis("Website Redesign", 8), "Website…");
        assert_eq!(truncate_with_ellipsis("Short", 8), "Short");
        assert_eq!(truncate_with_ellipsis("Anything", 0), "");
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("ab", 5, Alignment::Left), "ab   ");
        assert_eq!(pad_to_width("ab", 5, Alignment::Right), "   ab");
        assert_eq!(pad_to_width("ab", 6, Alignment::Center), "  ab  ");
    }

    #[test]
    fn test_scroll_offset_keeps_cursor_visible() {
        assert_eq!(scroll_offset(0, 3), 0);
        assert_eq!(scroll_offset(2, 3), 0);
        assert_eq!(scroll_offset(5, 3), 3);
    }

    #[test]
    fn test_grid_cells_cover_width() {
        let cells = grid_cells(Rect::new(0, 0, 100, 15), 3);
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].len(), 3);
        let total: u16 = cells[0].iter().map(|r| r.width).sum();
        assert_eq!(total, 100);
        assert_eq!(cells[1][0].y, CARD_HEIGHT);
    }

    #[test]
    fn test_popup_rect_centered() {
        let r = popup_rect(50, 50, 10, 5, Rect::new(0, 0, 100, 40));
        assert_eq!(r, Rect::new(25, 10, 50, 20));
    }
}
