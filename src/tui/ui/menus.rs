//! Menu rendering - sort and filter menus.

use super::icons;
use super::layout::{fit_lines_to_area, popup_rect};
use super::status::project_status_config;
use crate::data::{ProjectStatus, SortKey};
use crate::tui::App;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn draw_sort_menu(f: &mut Frame, app: &App) {
    let area = popup_rect(40, 30, 36, 9, f.area());

    f.render_widget(Clear, area);

    let current = app.view.sort_key;
    let active_style = Style::default().fg(Color::White);
    let dim_style = Style::default().fg(Color::DarkGray);

    let mut lines: Vec<Line> = vec![Line::from("")];

    for (idx, key) in SortKey::all().enumerate() {
        let is_selected = current == key;
        let marker = if is_selected {
            icons::RADIO_ON
        } else {
            icons::RADIO_OFF
        };
        let text_style = if is_selected { active_style } else { dim_style };

        lines.push(Line::from(vec![
            Span::styled(
                format!("  {} ", marker),
                if is_selected {
                    Style::default().fg(Color::Green)
                } else {
                    dim_style
                },
            ),
            Span::styled(format!("[{}] ", idx + 1), text_style),
            Span::styled(key.description(), text_style),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press 1-3 to select | Esc: Cancel",
        dim_style,
    )));

    let block = Block::default()
        .title(format!(" {} Sort By ", icons::ICON_SORT))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    let lines = fit_lines_to_area(lines, inner, 1);
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().fg(Color::White));

    f.render_widget(paragraph, area);
}

pub fn draw_filter_menu(f: &mut Frame, app: &App) {
    let area = popup_rect(40, 30, 36, 10, f.area());

    f.render_widget(Clear, area);

    let active_style = Style::default().fg(Color::White);
    let dim_style = Style::default().fg(Color::DarkGray);

    let mut lines: Vec<Line> = vec![Line::from("")];
    for (idx, status) in ProjectStatus::all().enumerate() {
        let is_selected = app.view.selected_statuses.contains(&status);
        lines.push(render_status_checkbox(
            idx + 1,
            status,
            is_selected,
            active_style,
            dim_style,
        ));
    }

    let summary = if app.view.selected_statuses.is_empty() {
        "  Showing all statuses"
    } else {
        "  Showing selected statuses only"
    };
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(summary, dim_style)));
    lines.push(Line::from(Span::styled(
        "  [c] Clear | Esc: Close",
        dim_style,
    )));

    let block = Block::default()
        .title(format!(" {} Filter by Status ", icons::ICON_FILTER))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    let lines = fit_lines_to_area(lines, inner, 1);
    let paragraph = Paragraph::new(lines).block(block);

    f.render_widget(paragraph, area);
}

/// Render a status filter checkbox with its icon
fn render_status_checkbox<'a>(
    key: usize,
    status: ProjectStatus,
    is_selected: bool,
    active_style: Style,
    dim_style: Style,
) -> Line<'a> {
    let cfg = project_status_config(status);
    let marker = if is_selected {
        icons::CHECK_ON
    } else {
        icons::CHECK_OFF
    };
    let style = if is_selected { active_style } else { dim_style };
    Line::from(vec![
        Span::styled(format!("  [{}] ", key), style),
        Span::styled(format!("{} ", cfg.icon), cfg.style),
        Span::styled(format!("{:<14}", status.display_name()), style),
        Span::styled(format!("  {}", marker), style),
    ])
}
