//! Multi-step intake form rendering (nurse and employer flows)

use super::field_renderer::{draw_field, field_height, FieldFocus};
use super::review::draw_review;
use crate::platform::{BACK_SHORTCUT, NEXT_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{Wizard, BACK_BUTTON, FORWARD_BUTTON};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a wizard: title, progress, current step and the Back/Next row
pub fn draw_wizard(frame: &mut Frame, area: Rect, wizard: &Wizard) {
    let flow = wizard.flow();
    let block = Block::default()
        .title(format!(" {} ", flow.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Subtitle
            Constraint::Length(2),             // Progress
            Constraint::Min(0),                // Step body
            Constraint::Length(BUTTON_HEIGHT), // Buttons
            Constraint::Length(1),             // Help text
        ])
        .horizontal_margin(1)
        .split(inner);

    frame.render_widget(
        Paragraph::new(flow.subtitle()).style(Style::default().fg(Color::Gray)),
        chunks[0],
    );
    frame.render_widget(Paragraph::new(progress_line(wizard)), chunks[1]);

    if wizard.step().is_review() {
        draw_review(frame, chunks[2], wizard);
    } else {
        draw_step_fields(frame, chunks[2], wizard);
    }

    draw_buttons(frame, chunks[3], wizard);
    draw_help(frame, chunks[4], wizard);
}

/// "Step 2 of 4" followed by every step title, the current one highlighted
fn progress_line(wizard: &Wizard) -> Line<'static> {
    let current = wizard.step_number();
    let mut spans = vec![Span::styled(
        format!("Step {} of {}  ", current, wizard.total_steps()),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )];
    for (i, step) in wizard.flow().steps().iter().enumerate() {
        let number = i + 1;
        let (marker, style) = if number < current {
            ("✓", Style::default().fg(Color::Green))
        } else if number == current {
            (
                "●",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("○", Style::default().fg(Color::DarkGray))
        };
        if i > 0 {
            spans.push(Span::styled(" ─ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(format!("{marker} {}", step.title), style));
    }
    Line::from(spans)
}

fn draw_step_fields(frame: &mut Frame, area: Rect, wizard: &Wizard) {
    let step = wizard.step();
    let mut constraints: Vec<Constraint> = step
        .fields
        .iter()
        .map(|field| Constraint::Length(field_height(*field)))
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (row, field) in step.fields.iter().enumerate() {
        let is_active = wizard.active_row() == row;
        let focus = FieldFocus {
            is_active,
            required: step.required.contains(field),
            choice_cursor: if is_active { wizard.choice_cursor() } else { 0 },
            file_input: if is_active { wizard.file_input() } else { "" },
        };
        draw_field(frame, chunks[row], wizard.form(), *field, focus);
    }
}

fn draw_buttons(frame: &mut Frame, area: Rect, wizard: &Wizard) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14),
            Constraint::Min(0),
            Constraint::Length(18),
        ])
        .split(area);

    let focused = wizard.is_buttons_row_active();
    let back_label = if wizard.is_first_step() {
        "← Exit"
    } else {
        "← Back"
    };
    render_action_button(
        frame,
        chunks[0],
        back_label,
        focused && wizard.selected_button() == BACK_BUTTON,
        !wizard.is_submitting(),
        Some(Color::Gray),
    );

    let (forward_label, enabled, accent) = if wizard.is_submitting() {
        ("Submitting…", false, Color::Yellow)
    } else if wizard.is_review() {
        ("Submit", wizard.can_submit(), Color::Green)
    } else {
        ("Next →", wizard.can_advance(), Color::Cyan)
    };
    render_action_button(
        frame,
        chunks[2],
        forward_label,
        focused && wizard.selected_button() == FORWARD_BUTTON,
        enabled,
        Some(accent),
    );
}

fn draw_help(frame: &mut Frame, area: Rect, wizard: &Wizard) {
    let key = Style::default().fg(Color::Cyan);
    let mut spans = vec![
        Span::styled("Tab", key),
        Span::raw(": next field  "),
        Span::styled(BACK_SHORTCUT, key),
        Span::raw(": back  "),
    ];
    if wizard.is_review() {
        spans.push(Span::styled(SUBMIT_SHORTCUT, key));
        spans.push(Span::raw(": submit  "));
    } else {
        spans.push(Span::styled(NEXT_SHORTCUT, key));
        spans.push(Span::raw(": next step  "));
    }
    spans.push(Span::styled("Esc", key));
    spans.push(Span::raw(": leave"));

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Flow;

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_progress_marks_current_step() {
        let wizard = Wizard::new(Flow::Employer);
        let text = text_of(&progress_line(&wizard));
        assert!(text.starts_with("Step 1 of 3"));
        assert!(text.contains("● Profile"));
        assert!(text.contains("○ Review"));
    }
}
