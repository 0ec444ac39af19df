//! Country licensing playbooks

use crate::app::App;
use crate::content::PLAYBOOKS;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(0)])
        .split(area);

    let items: Vec<ListItem> = PLAYBOOKS
        .iter()
        .map(|p| ListItem::new(format!(" {}", p.country)))
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .title(" Countries ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    let mut list_state = ListState::default().with_selected(Some(app.state.selected_index));
    frame.render_stateful_widget(list, chunks[0], &mut list_state);

    let Some(playbook) = PLAYBOOKS.get(app.state.selected_index) else {
        return;
    };

    let heading = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Regulator: ", heading),
            Span::raw(playbook.regulator),
        ]),
        Line::from(vec![
            Span::styled("Typical timeline: ", heading),
            Span::raw(playbook.typical_timeline),
        ]),
        Line::from(""),
        Line::from(playbook.summary),
        Line::from(""),
        Line::from(Span::styled("Steps", heading)),
    ];
    lines.extend(
        playbook
            .steps
            .iter()
            .enumerate()
            .map(|(i, step)| Line::from(format!("  {}. {step}", i + 1))),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Enter to apply for this country",
        Style::default().fg(Color::DarkGray),
    )));

    let detail = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(format!(" {} ", playbook.country))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(detail, chunks[1]);
}
