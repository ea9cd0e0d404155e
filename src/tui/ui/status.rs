//! Status configuration, status bar and help popup rendering.

use super::icons;
use super::layout::{fit_lines_to_area, popup_rect};
use crate::data::ProjectStatus;
use crate::tui::keybindings::{current_mode, generate_footer_hints, generate_keyboard_shortcuts};
use crate::tui::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Unified status configuration - single source of truth for icon and style.
pub struct StatusConfig {
    pub icon: &'static str,
    pub style: Style,
}

/// Trait for types that can provide their display configuration (icon + style).
pub trait StatusConfigurable {
    fn status_config(&self) -> StatusConfig;
}

impl StatusConfigurable for ProjectStatus {
    fn status_config(&self) -> StatusConfig {
        match self {
            ProjectStatus::Active => StatusConfig {
                icon: icons::STATUS_ACTIVE,
                style: Style::default().fg(Color::Green),
            },
            ProjectStatus::OnHold => StatusConfig {
                icon: icons::STATUS_ON_HOLD,
                style: Style::default().fg(Color::Yellow),
            },
            ProjectStatus::Completed => StatusConfig {
                icon: icons::STATUS_COMPLETED,
                style: Style::default().fg(Color::Blue),
            },
            ProjectStatus::Unknown => StatusConfig {
                icon: icons::STATUS_UNKNOWN,
                style: Style::default().fg(Color::DarkGray),
            },
        }
    }
}

pub fn project_status_config(status: ProjectStatus) -> StatusConfig {
    status.status_config()
}

/// Status legend shown below the shortcuts in the help popup.
fn status_legend() -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from("  Status"),
        Line::from("  ──────"),
    ];
    for status in ProjectStatus::all() {
        let cfg = status.status_config();
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{}  ", cfg.icon), cfg.style),
            Span::raw(format!("{:<12}", status.display_name())),
            Span::styled(status.description(), Style::default().fg(Color::DarkGray)),
        ]));
    }
    lines
}

/// Draw the status bar at the bottom of the screen.
pub fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let width = area.width as usize;
    let hints = generate_footer_hints(current_mode(app));

    let (text, style) = if app.search_mode {
        (hints.to_string(), Style::default().fg(Color::Yellow))
    } else if width >= 90 {
        (
            format!(
                "{} | sort: {} | view: {}",
                hints,
                app.view.sort_key.label(),
                app.view.view_mode.label()
            ),
            Style::default().fg(Color::DarkGray),
        )
    } else if width >= 40 {
        (hints.to_string(), Style::default().fg(Color::DarkGray))
    } else {
        (" ? help ".to_string(), Style::default().fg(Color::DarkGray))
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(text, style)));
    f.render_widget(paragraph, area);
}

/// Draw the keyboard shortcuts popup.
pub fn draw_help_popup(f: &mut Frame) {
    let area = popup_rect(60, 80, 44, 16, f.area());

    f.render_widget(Clear, area);

    let mut lines: Vec<Line> = generate_keyboard_shortcuts()
        .into_iter()
        .map(Line::from)
        .collect();
    lines.extend(status_legend());
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Esc / ? : Close",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .title(format!(" {} Keyboard Shortcuts ", icons::ICON_HELP))
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    let lines = fit_lines_to_area(lines, inner, 1);
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().fg(Color::White));

    f.render_widget(paragraph, area);
}
