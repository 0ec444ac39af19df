//! Field rendering utilities for forms

use crate::state::{
    password_strength, FieldId, FieldKind, FieldValue, FormState, PasswordStrength,
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CURSOR: &str = "▌";

/// Focus-dependent input state for one field
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldFocus<'a> {
    pub is_active: bool,
    pub required: bool,
    /// Highlighted option of a multi-choice field
    pub choice_cursor: usize,
    /// Uncommitted path typed into a file field
    pub file_input: &'a str,
}

/// Rows a field occupies, borders included
pub fn field_height(field: FieldId) -> u16 {
    match field.kind() {
        FieldKind::Text { multiline: true } => 6,
        FieldKind::MultiChoice(options) => options.len() as u16 + 2,
        _ => 3,
    }
}

/// Draw one field of `form` with its label, value and visible error
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    form: &FormState,
    field: FieldId,
    focus: FieldFocus,
) {
    let border_style = if focus.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title = if focus.required {
        format!(" {} * ", field.label())
    } else {
        format!(" {} ", field.label())
    };
    let mut block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    if let Some(error) = form.visible_error(field) {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red),
        )));
    } else if let Some(hint) = field_hint(form, field, focus) {
        block = block.title_bottom(hint);
    }

    let lines = field_lines(form, field, focus);
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}

fn field_lines<'a>(form: &'a FormState, field: FieldId, focus: FieldFocus<'a>) -> Vec<Line<'a>> {
    let value_style = if focus.is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    let cursor = Span::styled(
        if focus.is_active { CURSOR } else { "" },
        Style::default().fg(Color::Cyan),
    );
    let text = form.value(field).map(|v| v.as_text()).unwrap_or_default();

    match field.kind() {
        FieldKind::Text { multiline } => {
            if text.is_empty() && !focus.is_active {
                return vec![placeholder("(empty)")];
            }
            let mut lines: Vec<Line> = if multiline {
                text.split('\n')
                    .map(|l| Line::from(Span::styled(l, value_style)))
                    .collect()
            } else {
                vec![Line::from(Span::styled(text, value_style))]
            };
            if let Some(last) = lines.last_mut() {
                last.spans.push(cursor);
            }
            lines
        }
        FieldKind::Secret => {
            vec![Line::from(vec![
                Span::styled(masked(text), value_style),
                cursor,
            ])]
        }
        FieldKind::Choice(_) => {
            let selected = if text.is_empty() { "Select…" } else { text };
            let arrows = Style::default().fg(if focus.is_active {
                Color::Cyan
            } else {
                Color::DarkGray
            });
            vec![Line::from(vec![
                Span::styled("‹ ", arrows),
                Span::styled(selected, value_style),
                Span::styled(" ›", arrows),
            ])]
        }
        FieldKind::MultiChoice(options) => options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let checked = matches!(
                    form.value(field),
                    Some(FieldValue::Choices(set)) if set.contains(*option)
                );
                let mark = if checked { "[x] " } else { "[ ] " };
                let style = if focus.is_active && i == focus.choice_cursor {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    value_style
                };
                Line::from(vec![Span::styled(mark, style), Span::styled(*option, style)])
            })
            .collect(),
        FieldKind::File => {
            let shown = if focus.is_active {
                focus.file_input.to_string()
            } else {
                form.value(field)
                    .map(|v| v.display_value())
                    .unwrap_or_default()
            };
            if shown.is_empty() && !focus.is_active {
                return vec![placeholder("No file chosen")];
            }
            vec![Line::from(vec![Span::styled(shown, value_style), cursor])]
        }
    }
}

/// Bottom-border hint when no error is showing
fn field_hint(form: &FormState, field: FieldId, focus: FieldFocus) -> Option<Line<'static>> {
    let hint_style = Style::default().fg(Color::DarkGray);
    match field.kind() {
        FieldKind::Secret => {
            let text = form.value(field).map(|v| v.as_text()).unwrap_or_default();
            if text.is_empty() {
                return None;
            }
            let strength = password_strength(text);
            let color = match strength {
                PasswordStrength::Weak => Color::Red,
                PasswordStrength::Medium => Color::Yellow,
                PasswordStrength::Strong => Color::Green,
            };
            Some(Line::from(vec![
                Span::styled(" Strength: ", hint_style),
                Span::styled(format!("{} ", strength.label()), Style::default().fg(color)),
            ]))
        }
        FieldKind::File if focus.is_active => Some(Line::from(Span::styled(
            " Type a path, Enter to attach ",
            hint_style,
        ))),
        FieldKind::Choice(_) if focus.is_active => {
            Some(Line::from(Span::styled(" ←/→ to choose ", hint_style)))
        }
        FieldKind::MultiChoice(_) if focus.is_active => Some(Line::from(Span::styled(
            " ←/→ move  Space toggle ",
            hint_style,
        ))),
        _ => None,
    }
}

fn placeholder(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    ))
}

/// One bullet per character
fn masked(text: &str) -> String {
    "•".repeat(text.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masked_counts_chars() {
        assert_eq!(masked("pässw0rd"), "••••••••");
        assert_eq!(masked(""), "");
    }

    #[test]
    fn test_field_heights() {
        assert_eq!(field_height(FieldId::FullName), 3);
        assert_eq!(field_height(FieldId::Roles), 6);
        assert_eq!(field_height(FieldId::PreferredLocations), 6);
    }
}
