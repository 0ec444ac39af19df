//! Wizard shell: one flow's form, step sequencer and input focus

use super::flow::{Flow, StepSpec};
use super::sequencer::StepSequencer;
use crate::state::forms::{FieldId, FieldKind, FieldValue, FileRef, FormState};
use std::path::Path;
use thiserror::Error;

/// Mask shown in place of secret values
pub const SECRET_MASK: &str = "••••••";

/// Buttons on the action row (0=Back, 1=Next or Submit)
pub const BUTTON_COUNT: usize = 2;
pub const BACK_BUTTON: usize = 0;
pub const FORWARD_BUTTON: usize = 1;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PickError {
    #[error("No file path entered")]
    Empty,
    #[error("File not found: {0}")]
    NotFound(String),
}

/// Runtime state of one intake flow
#[derive(Debug, Clone)]
pub struct Wizard {
    flow: Flow,
    form: FormState,
    sequencer: StepSequencer,
    /// Focused row: a field index in the current step, or the button row
    active_row: usize,
    selected_button: usize,
    /// Highlighted option of a multi-choice field
    choice_cursor: usize,
    /// Path typed into the file field before it is picked
    file_input: String,
    submitting: bool,
}

impl Wizard {
    pub fn new(flow: Flow) -> Self {
        Self {
            flow,
            form: flow.new_form(),
            sequencer: StepSequencer::new(flow.steps().len()),
            active_row: 0,
            selected_button: FORWARD_BUTTON,
            choice_cursor: 0,
            file_input: String::new(),
            submitting: false,
        }
    }

    pub fn flow(&self) -> Flow {
        self.flow
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn step_number(&self) -> usize {
        self.sequencer.current()
    }

    pub fn total_steps(&self) -> usize {
        self.sequencer.total()
    }

    pub fn step(&self) -> &'static StepSpec {
        &self.flow.steps()[self.sequencer.current() - 1]
    }

    pub fn is_first_step(&self) -> bool {
        self.sequencer.is_first()
    }

    pub fn is_review(&self) -> bool {
        self.sequencer.is_last()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub(crate) fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
    }

    /// True when the current step's required fields are present and valid
    pub fn can_advance(&self) -> bool {
        self.form.is_valid_for(self.step().required)
    }

    /// Submit is offered on the last step once the form and every step's gate are
    /// satisfied and nothing is in flight
    pub fn can_submit(&self) -> bool {
        self.is_review()
            && !self.submitting
            && self.form.is_valid()
            && self.form.is_valid_for(&self.flow.gated_fields())
    }

    /// Advance when the current step is valid
    pub fn next(&mut self) -> bool {
        if self.is_review() || !self.can_advance() {
            return false;
        }
        self.leave_field();
        let moved = self.sequencer.next();
        if moved {
            tracing::debug!(flow = ?self.flow, step = self.step_number(), "advanced step");
            self.focus_row(0);
        }
        moved
    }

    /// Mark the current step's fields touched so their errors show
    pub fn reveal_step_errors(&mut self) {
        for field in self.step().fields {
            self.form.touch(*field);
        }
    }

    /// Go back one step; never gated
    pub fn back(&mut self) -> bool {
        let moved = self.sequencer.back();
        if moved {
            tracing::debug!(flow = ?self.flow, step = self.step_number(), "returned to step");
            self.focus_row(0);
        }
        moved
    }

    /// Restore the flow to its initial state
    pub fn reset(&mut self) {
        self.form.reset();
        self.sequencer.reset();
        self.focus_row(0);
        self.selected_button = FORWARD_BUTTON;
    }

    // Focus

    fn row_count(&self) -> usize {
        self.step().fields.len() + 1
    }

    pub fn active_row(&self) -> usize {
        self.active_row
    }

    /// Field under focus, or `None` on the button row
    pub fn active_field(&self) -> Option<FieldId> {
        self.step().fields.get(self.active_row).copied()
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.active_row == self.step().fields.len()
    }

    pub fn selected_button(&self) -> usize {
        self.selected_button
    }

    pub fn next_field(&mut self) {
        let count = self.row_count();
        self.leave_field();
        self.focus_row((self.active_row + 1) % count);
    }

    pub fn prev_field(&mut self) {
        let count = self.row_count();
        let row = if self.active_row == 0 {
            count - 1
        } else {
            self.active_row - 1
        };
        self.leave_field();
        self.focus_row(row);
    }

    /// Focus leaving a field counts as interaction
    fn leave_field(&mut self) {
        if let Some(field) = self.active_field() {
            self.form.touch(field);
        }
    }

    fn focus_row(&mut self, row: usize) {
        self.active_row = row.min(self.row_count() - 1);
        self.choice_cursor = 0;
        self.file_input = match self.active_field() {
            Some(field) if matches!(field.kind(), FieldKind::File) => self
                .form
                .value(field)
                .map(FieldValue::display_value)
                .unwrap_or_default(),
            _ => String::new(),
        };
    }

    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % BUTTON_COUNT;
    }

    pub fn prev_button(&mut self) {
        self.selected_button = (self.selected_button + BUTTON_COUNT - 1) % BUTTON_COUNT;
    }

    // Input

    /// Type a character into the focused field
    pub fn input_char(&mut self, c: char) {
        let Some(field) = self.active_field() else {
            return;
        };
        match field.kind() {
            FieldKind::File => self.file_input.push(c),
            FieldKind::MultiChoice(_) if c == ' ' => self.toggle_choice(),
            _ => self.form.push_char(field, c),
        }
    }

    pub fn backspace(&mut self) {
        let Some(field) = self.active_field() else {
            return;
        };
        match field.kind() {
            FieldKind::File => {
                self.file_input.pop();
                self.form.pop_char(field);
            }
            _ => self.form.pop_char(field),
        }
    }

    /// Left/Right on a choice field: cycle a single choice or move the multi-choice cursor
    pub fn cycle(&mut self, forward: bool) {
        let Some(field) = self.active_field() else {
            return;
        };
        match field.kind() {
            FieldKind::Choice(_) => self.form.cycle_choice(field, forward),
            FieldKind::MultiChoice(options) if !options.is_empty() => {
                let len = options.len();
                self.choice_cursor = if forward {
                    (self.choice_cursor + 1) % len
                } else {
                    (self.choice_cursor + len - 1) % len
                };
            }
            _ => {}
        }
    }

    pub fn choice_cursor(&self) -> usize {
        self.choice_cursor
    }

    /// Toggle the highlighted option of the focused multi-choice field
    pub fn toggle_choice(&mut self) {
        let Some(field) = self.active_field() else {
            return;
        };
        if let FieldKind::MultiChoice(options) = field.kind() {
            if let Some(option) = options.get(self.choice_cursor) {
                self.form.toggle_choice(field, option);
            }
        }
    }

    pub fn file_input(&self) -> &str {
        &self.file_input
    }

    /// Resolve the typed path and attach it to the focused file field
    pub fn pick_file(&mut self) -> Result<(), PickError> {
        let Some(field) = self.active_field() else {
            return Ok(());
        };
        if !matches!(field.kind(), FieldKind::File) {
            return Ok(());
        }
        let typed = self.file_input.trim();
        if typed.is_empty() {
            self.form.touch(field);
            return Err(PickError::Empty);
        }
        let path = Path::new(typed);
        let file = FileRef::from_path(path)
            .filter(|_| path.is_file())
            .ok_or_else(|| PickError::NotFound(typed.to_string()))?;
        tracing::debug!(path = %file.path.display(), "attached file");
        self.file_input = file.name.clone();
        self.form.select_file(field, file);
        Ok(())
    }

    /// Copy values from another form into matching fields of this one
    pub fn prefill(&mut self, values: impl IntoIterator<Item = (FieldId, FieldValue)>) {
        for (field, value) in values {
            if !value.is_empty() {
                self.form.set_field(field, value);
            }
        }
    }

    /// Label/value pairs for the review step, secrets masked
    pub fn review_rows(&self) -> Vec<(&'static str, String)> {
        self.flow
            .fields()
            .iter()
            .map(|field| {
                let value = self
                    .form
                    .value(*field)
                    .map(FieldValue::display_value)
                    .unwrap_or_default();
                let shown = if field.is_secret() && !value.is_empty() {
                    SECRET_MASK.to_string()
                } else {
                    value
                };
                (field.label(), shown)
            })
            .collect()
    }
}
