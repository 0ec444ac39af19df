//! Layout components (header navigation, footer, status bar)

use crate::app::App;
use crate::content::{CONTACT, TAGLINE};
use crate::platform::{NEXT_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Screen regions shared by every view
pub struct ScreenLayout {
    pub header: Rect,
    pub main: Rect,
    pub footer: Rect,
    pub status: Rect,
}

/// Split the frame into header, content, footer and status bar
pub fn create_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header navigation
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Footer
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    ScreenLayout {
        header: chunks[0],
        main: chunks[1],
        footer: chunks[2],
        status: chunks[3],
    }
}

/// Draw the brand and the F1..F5 navigation tabs
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = View::NAV
        .iter()
        .enumerate()
        .map(|(i, view)| {
            Line::from(vec![
                Span::styled(format!("F{} ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::raw(view.label()),
            ])
        })
        .collect();
    let selected = View::NAV
        .iter()
        .position(|v| *v == app.state.current_view)
        .unwrap_or(0);

    let block = Block::default()
        .title(Span::styled(
            " Nurse Connect ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let tabs = Tabs::new(titles)
        .block(block)
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(Span::styled("│", Style::default().fg(Color::DarkGray)));

    frame.render_widget(tabs, area);
}

/// Draw the tagline and contact details
pub fn draw_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(vec![
        Span::styled(format!(" {TAGLINE}"), Style::default().fg(Color::Gray)),
        Span::raw("  │  "),
        Span::styled(CONTACT, Style::default().fg(Color::Blue)),
    ]));
    frame.render_widget(footer, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Store backend
    let backend = app.state.store_backend;
    let indicator = if backend == "memory" {
        Span::styled(" ○ memory ", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(format!(" ● {backend} "), Style::default().fg(Color::Green))
    };
    spans.push(indicator);

    spans.push(Span::styled(
        get_view_hints(app.state.current_view),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            msg.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^C:quit ";
    let width = quit_hint.len() as u16;
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(width),
        y: area.y,
        width: width.min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: View) -> String {
    match view {
        View::Home => "Tab:next  ←/→:choose  Enter:select".to_string(),
        View::Nurse | View::Employer => {
            format!("Tab:field  {NEXT_SHORTCUT}:next  {SUBMIT_SHORTCUT}:submit  Esc:leave")
        }
        View::Playbooks => "j/k:country  Enter:apply  Esc:back".to_string(),
        View::Compliance => "j/k:scroll  Esc:back".to_string(),
    }
}
