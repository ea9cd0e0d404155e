//! Dashboard rendering - header, stats row, filter sidebar and the project
//! grid/list.

use super::icons;
use super::layout::{
    display_width, grid_cells, pad_to_width, progress_bar, scroll_offset, truncate_with_ellipsis, PREFIX,
    SEP,
};
use super::status::project_status_config;
use crate::data::dates::timeline_label;
use crate::data::{format_date, is_overdue, ProjectRecord, ProjectStatus, ViewMode};
use crate::tui::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const EMPTY_STORE: &str = "No projects available";
const EMPTY_FILTERED: &str = "No projects match your filters";

fn cursor_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Draw the title bar with the visible/total counter.
pub fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let counter = format!(
        "{} of {} projects",
        app.visible.len(),
        app.store.len()
    );
    let mut spans = vec![
        Span::styled(
            format!("{} ", icons::ICON_DASHBOARD),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            "Project Dashboard ",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("[{}]", counter), Style::default().fg(Color::Green)),
    ];
    if app.has_active_filters() {
        spans.push(Span::styled("  (filtered)", dim()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    f.render_widget(paragraph, inner);
}

/// Draw the four aggregate stat tiles.
pub fn draw_stats(f: &mut Frame, app: &App, area: Rect) {
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let stats = &app.stats;
    let entries = [
        ("Active Projects", stats.active_count.to_string(), Color::Green),
        ("Completed", stats.completed_count.to_string(), Color::Blue),
        ("On Hold", stats.on_hold_count.to_string(), Color::Yellow),
        (
            "Avg. Progress",
            format!("{}%", stats.average_completion),
            Color::Cyan,
        ),
    ];

    for ((label, value, color), tile) in entries.into_iter().zip(tiles.iter()) {
        let block = Block::default()
            .title(format!(" {} ", label))
            .borders(Borders::ALL)
            .border_style(dim());
        let paragraph = Paragraph::new(Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(paragraph, *tile);
    }
}

/// Draw the search box and status filter toggles.
pub fn draw_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    // Search box
    let search_border = if app.search_mode {
        Style::default().fg(Color::Yellow)
    } else {
        dim()
    };
    let block = Block::default()
        .title(format!(" {} Search ", icons::ICON_SEARCH))
        .borders(Borders::ALL)
        .border_style(search_border);
    let query = &app.view.search_query;
    let line = if query.is_empty() && !app.search_mode {
        Line::from(Span::styled("Search projects...", dim()))
    } else {
        let mut spans = vec![Span::styled(
            query.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )];
        if app.search_mode {
            spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
        }
        Line::from(spans)
    };
    f.render_widget(Paragraph::new(line).block(block), chunks[0]);

    // Status toggles
    let mut lines = vec![Line::from("")];
    for (idx, status) in ProjectStatus::all().enumerate() {
        let selected = app.view.selected_statuses.contains(&status);
        let cfg = project_status_config(status);
        let marker = if selected {
            icons::CHECK_ON
        } else {
            icons::CHECK_OFF
        };
        let label_style = if selected {
            Style::default().fg(Color::White)
        } else {
            dim()
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), label_style),
            Span::styled(format!("{} ", cfg.icon), cfg.style),
            Span::styled(status.display_name(), label_style),
            Span::styled(format!("  [{}]", idx + 1), dim()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(format!(" {} ", icons::ICON_SORT), dim()),
        Span::raw(app.view.sort_key.label()),
    ]));
    if app.has_active_filters() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(" Ctrl+R: reset", dim())));
    }

    let block = Block::default()
        .title(format!(" {} Status ", icons::ICON_FILTER))
        .borders(Borders::ALL)
        .border_style(dim());
    f.render_widget(Paragraph::new(lines).block(block), chunks[1]);
}

/// Draw the visible projects as cards or rows, depending on the view mode.
pub fn draw_projects(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(" {} Projects ({}) ", icons::ICON_PROJECT, app.view.view_mode.label());
    let block = Block::default().title(title).borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let projects = app.visible_projects();
    if projects.is_empty() {
        let message = if app.store.is_empty() {
            EMPTY_STORE
        } else {
            EMPTY_FILTERED
        };
        let mut lines = vec![Line::from(""), Line::from(Span::styled(message, dim()))];
        if !app.store.is_empty() {
            lines.push(Line::from(Span::styled("Ctrl+R to reset filters", dim())));
        }
        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        f.render_widget(paragraph, inner);
        return;
    }

    match app.view.view_mode {
        ViewMode::Grid => draw_grid(f, app, &projects, inner),
        ViewMode::List => draw_list(f, app, &projects, inner),
    }
}

fn draw_grid(f: &mut Frame, app: &App, projects: &[&ProjectRecord], area: Rect) {
    let columns = app.grid_columns();
    let cells = grid_cells(area, columns);
    if cells.is_empty() {
        return;
    }

    let cursor_row = app.cursor / columns;
    let first_row = scroll_offset(cursor_row, cells.len());

    for (row_cells, row) in cells.iter().zip(first_row..) {
        for (col, cell) in row_cells.iter().enumerate() {
            let idx = row * columns + col;
            let Some(project) = projects.get(idx) else {
                return;
            };
            draw_card(f, app, project, idx == app.cursor, *cell);
        }
    }
}

fn draw_card(f: &mut Frame, app: &App, project: &ProjectRecord, selected: bool, area: Rect) {
    let cfg = project_status_config(project.status);
    let border_style = if selected {
        Style::default().fg(Color::Yellow)
    } else {
        dim()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let width = inner.width as usize;
    let name_style = if selected {
        cursor_style()
    } else {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    };

    let timeline = timeline_label(project, app.today);
    let timeline_style = if is_overdue(project, app.today) {
        Style::default().fg(Color::Red)
    } else {
        dim()
    };
    let status_text = format!("{} {}", cfg.icon, project.status.display_name());
    let gap = width.saturating_sub(display_width(&status_text) + display_width(&timeline));

    let pct = format!(" {:>3}%", project.completion_percentage);
    let bar_width = width.saturating_sub(pct.len());

    let lines = vec![
        Line::from(Span::styled(
            truncate_with_ellipsis(&project.name, width),
            name_style,
        )),
        Line::from(Span::styled(
            truncate_with_ellipsis(&project.client_name, width),
            dim(),
        )),
        Line::from(Span::styled(
            truncate_with_ellipsis(&date_range(project), width),
            dim(),
        )),
        Line::from(vec![
            Span::styled(status_text, cfg.style),
            Span::raw(" ".repeat(gap)),
            Span::styled(timeline, timeline_style),
        ]),
        Line::from(vec![
            Span::styled(progress_bar(project.completion_percentage, bar_width), cfg.style),
            Span::raw(pct),
        ]),
    ];

    f.render_widget(Paragraph::new(lines), inner);
}

/// `Jan 1 - Mar 31, 2024`, or the raw strings when either end is malformed.
fn date_range(project: &ProjectRecord) -> String {
    match (project.start(), project.end()) {
        (Some(start), Some(end)) => {
            format!("{} - {}", start.format("%b %-d"), end.format("%b %-d, %Y"))
        }
        _ => format!(
            "{} - {}",
            format_date(&project.start_date),
            format_date(&project.end_date)
        ),
    }
}

fn draw_list(f: &mut Frame, app: &App, projects: &[&ProjectRecord], area: Rect) {
    if area.height < 2 {
        return;
    }
    let width = area.width as usize;

    // Fixed columns, the name/client columns share what is left
    const STATUS_W: usize = 11;
    const DATE_W: usize = 12;
    const BAR_W: usize = 10;
    const PCT_W: usize = 4;
    const TIME_W: usize = 12;
    let fixed =
        PREFIX.len() + STATUS_W + DATE_W + BAR_W + 1 + PCT_W + TIME_W + display_width(SEP) * 5;
    let flexible = width.saturating_sub(fixed);
    let name_w = flexible * 3 / 5;
    let client_w = flexible - name_w;

    let sep = || Span::styled(SEP, dim());
    let header_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![Line::from(vec![
        Span::raw(PREFIX),
        Span::styled(pad_to_width("Project", name_w, Alignment::Left), header_style),
        sep(),
        Span::styled(pad_to_width("Client", client_w, Alignment::Left), header_style),
        sep(),
        Span::styled(pad_to_width("Status", STATUS_W, Alignment::Left), header_style),
        sep(),
        Span::styled(pad_to_width("Due", DATE_W, Alignment::Left), header_style),
        sep(),
        Span::styled(
            pad_to_width("Progress", BAR_W + 1 + PCT_W, Alignment::Left),
            header_style,
        ),
        sep(),
        Span::styled(pad_to_width("Timeline", TIME_W, Alignment::Left), header_style),
    ])];

    let rows = area.height as usize - 1;
    let first = scroll_offset(app.cursor, rows);

    for (idx, project) in projects.iter().enumerate().skip(first).take(rows) {
        let selected = idx == app.cursor;
        let cfg = project_status_config(project.status);
        let text_style = if selected {
            cursor_style()
        } else {
            Style::default().fg(Color::White)
        };
        let timeline_style = if is_overdue(project, app.today) {
            Style::default().fg(Color::Red)
        } else {
            dim()
        };
        let prefix = if selected {
            format!("{} ", icons::CURSOR)
        } else {
            PREFIX.to_string()
        };

        lines.push(Line::from(vec![
            Span::styled(prefix, Style::default().fg(Color::Yellow)),
            Span::styled(pad_to_width(&project.name, name_w, Alignment::Left), text_style),
            sep(),
            Span::styled(pad_to_width(&project.client_name, client_w, Alignment::Left), dim()),
            sep(),
            Span::styled(
                pad_to_width(
                    &format!("{} {}", cfg.icon, project.status.display_name()),
                    STATUS_W,
                    Alignment::Left,
                ),
                cfg.style,
            ),
            sep(),
            Span::raw(pad_to_width(&format_date(&project.end_date), DATE_W, Alignment::Left)),
            sep(),
            Span::styled(progress_bar(project.completion_percentage, BAR_W), cfg.style),
            Span::raw(format!(" {:>3}%", project.completion_percentage)),
            sep(),
            Span::styled(
                pad_to_width(&timeline_label(project, app.today), TIME_W, Alignment::Left),
                timeline_style,
            ),
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}
