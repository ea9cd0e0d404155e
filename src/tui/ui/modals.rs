//! Project detail panel.

use super::icons;
use super::layout::{fit_lines_to_area, popup_rect, progress_bar};
use super::status::project_status_config;
use crate::data::{days_remaining, format_date, is_overdue, ProjectRecord};
use crate::tui::App;
use chrono::NaiveDate;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const LABEL_WIDTH: usize = 16;

pub fn draw_detail_panel(f: &mut Frame, app: &App) {
    let Some(project) = app.detail_project() else {
        return;
    };

    let area = popup_rect(60, 70, 48, 18, f.area());

    f.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} Project Details ", icons::ICON_PROJECT))
        .title_bottom(Line::from(" Esc: close ").centered())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    let bar_width = (inner.width as usize).saturating_sub(LABEL_WIDTH + 4).min(30);
    let lines = fit_lines_to_area(detail_lines(project, app.today, bar_width), inner, 1);
    let paragraph = Paragraph::new(lines).block(block);

    f.render_widget(paragraph, area);
}

/// Body of the detail panel for `project`, with day counts relative to `today`.
pub fn detail_lines(project: &ProjectRecord, today: NaiveDate, bar_width: usize) -> Vec<Line<'static>> {
    let title_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(Color::DarkGray);
    let text_style = Style::default().fg(Color::White);
    let cfg = project_status_config(project.status);

    let field = |label: &str, value: Span<'static>| {
        Line::from(vec![
            Span::styled(format!("  {:<width$}", label, width = LABEL_WIDTH), label_style),
            value,
        ])
    };

    let days = days_remaining(&project.end_date, today);
    let (days_label, days_value, days_style) = if is_overdue(project, today) {
        ("Days Overdue", days.abs(), Style::default().fg(Color::Red))
    } else {
        ("Days Remaining", days, text_style)
    };

    vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}", project.name), title_style)),
        Line::from(""),
        field(
            "Client",
            Span::styled(project.client_name.clone(), text_style),
        ),
        field(
            "Status",
            Span::styled(
                format!("{} {}", cfg.icon, project.status.display_name()),
                cfg.style,
            ),
        ),
        Line::from(""),
        field(
            "Start Date",
            Span::styled(format_date(&project.start_date), text_style),
        ),
        field(
            "End Date",
            Span::styled(format_date(&project.end_date), text_style),
        ),
        field(days_label, Span::styled(days_value.to_string(), days_style)),
        Line::from(""),
        field(
            "Progress",
            Span::styled(
                format!("{}%", project.completion_percentage),
                text_style.add_modifier(Modifier::BOLD),
            ),
        ),
        Line::from(vec![
            Span::raw(format!("  {:<width$}", "", width = LABEL_WIDTH)),
            Span::styled(progress_bar(project.completion_percentage, bar_width), cfg.style),
        ]),
        Line::from(vec![
            Span::raw(format!("  {:<width$}", "", width = LABEL_WIDTH)),
            Span::styled(
                format!(
                    "0%{:>width$}",
                    "100%",
                    width = bar_width.saturating_sub(2)
                ),
                label_style,
            ),
        ]),
        Line::from(""),
        field("Project ID", Span::styled(project.id.clone(), label_style)),
    ]
}
