//! Review step: read-only summary of every field in the flow

use crate::state::Wizard;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_review(frame: &mut Frame, area: Rect, wizard: &Wizard) {
    let label_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let rows = wizard.review_rows();
    let label_width = rows
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines: Vec<Line> = rows
        .into_iter()
        .map(|(label, value)| {
            let value_span = if value.is_empty() {
                Span::styled("—", Style::default().fg(Color::DarkGray))
            } else {
                Span::raw(value)
            };
            Line::from(vec![
                Span::styled(format!("{label:<label_width$}  "), label_style),
                value_span,
            ])
        })
        .collect();

    let missing: Vec<&str> = wizard
        .flow()
        .gated_fields()
        .into_iter()
        .filter(|field| wizard.form().error(*field).is_some())
        .map(|field| field.label())
        .collect();
    if !missing.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Missing or invalid: {}", missing.join(", ")),
            Style::default().fg(Color::Red),
        )));
    }

    let block = Block::default()
        .title(" Review ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}
