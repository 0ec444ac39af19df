//! Landing page: hero, audience CTAs and the quick signup form

use super::components::{render_action_button, render_button, BUTTON_HEIGHT};
use super::forms::{draw_field, FieldFocus};
use crate::app::App;
use crate::content::{HERO_BODY, HERO_TITLE};
use crate::state::{HOME_CTAS, QUICK_SIGNUP_FIELDS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),             // Hero
            Constraint::Length(BUTTON_HEIGHT), // CTAs
            Constraint::Min(0),                // Quick signup
        ])
        .margin(1)
        .split(area);

    let hero = Paragraph::new(vec![
        Line::from(Span::styled(
            HERO_TITLE,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(HERO_BODY),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(hero, chunks[0]);

    draw_ctas(frame, chunks[1], app);
    draw_quick_signup(frame, chunks[2], app);
}

fn draw_ctas(frame: &mut Frame, area: Rect, app: &App) {
    let home = &app.state.home;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(28),
            Constraint::Length(2),
            Constraint::Length(28),
            Constraint::Min(0),
        ])
        .split(area);

    for (i, (label, _)) in HOME_CTAS.iter().enumerate() {
        render_action_button(
            frame,
            chunks[i * 2],
            label,
            home.is_cta_row_active() && home.cta == i,
            true,
            Some(if i == 0 { Color::Cyan } else { Color::Magenta }),
        );
    }
}

fn draw_quick_signup(frame: &mut Frame, area: Rect, app: &App) {
    let home = &app.state.home;
    let block = Block::default()
        .title(" Quick signup ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(3); QUICK_SIGNUP_FIELDS.len()];
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    for (i, field) in QUICK_SIGNUP_FIELDS.iter().enumerate() {
        let focus = FieldFocus {
            is_active: home.active_field() == Some(*field),
            required: true,
            ..FieldFocus::default()
        };
        draw_field(frame, chunks[i], &home.signup, *field, focus);
    }

    let button_area = Rect {
        width: chunks[QUICK_SIGNUP_FIELDS.len()].width.min(30),
        ..chunks[QUICK_SIGNUP_FIELDS.len()]
    };
    render_button(
        frame,
        button_area,
        "Start application →",
        home.is_start_button_active(),
        true,
    );
}
