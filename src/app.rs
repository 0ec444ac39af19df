//! Application state and core logic

use crate::content::{PLAYBOOKS, POLICIES};
use crate::platform::is_shortcut;
use crate::state::{
    AppState, FieldId, FieldKind, FieldValue, Flow, SubmissionGateway, View, BACK_BUTTON,
    FORWARD_BUTTON, HOME_CTAS,
};
use crate::store::{DocumentStore, StoreError};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::task::JoinHandle;

const SIGNUP_RECEIVED: &str = "Signup received — continue to full profile";
const SIGNUP_INCOMPLETE: &str = "Please complete the signup form";
const STEP_INCOMPLETE: &str = "Complete the required fields to continue";
const SUBMIT_INCOMPLETE: &str = "Complete all required fields before submitting";
const SUBMIT_NOT_READY: &str = "Go to the Review step to submit";
const ALREADY_SUBMITTING: &str = "Submission already in progress";
const SUBMITTING: &str = "Submitting…";

type SubmissionTask = JoinHandle<Result<String, StoreError>>;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Writes completed flows to the document store
    gateway: SubmissionGateway,
    /// Store writes still running, at most one per flow
    pending: Vec<(Flow, SubmissionTask)>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App writing submissions to `store`
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        let gateway = SubmissionGateway::new(store);
        let state = AppState::with_backend(gateway.backend_name());
        Self {
            state,
            gateway,
            pending: Vec::new(),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    pub fn has_pending_submissions(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Header navigation: F1..F5
        if let KeyCode::F(n) = key.code {
            let view = usize::from(n)
                .checked_sub(1)
                .and_then(|i| View::NAV.get(i))
                .copied();
            if let Some(view) = view {
                self.navigate(view);
            }
            return Ok(());
        }

        match self.state.current_view {
            View::Home => self.handle_home_key(key),
            View::Nurse => self.handle_wizard_key(Flow::Nurse, key),
            View::Employer => self.handle_wizard_key(Flow::Employer, key),
            View::Playbooks => self.handle_playbooks_key(key),
            View::Compliance => self.handle_compliance_key(key),
        }

        Ok(())
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View) {
        let current = self.state.current_view;
        if current == view {
            return;
        }
        if let Some(flow) = current.flow() {
            self.state.leave_flow(flow);
        }
        self.state.view_history.push(current);
        self.state.current_view = view;
        self.state.status_message = None;
        self.state.selected_index = 0;
        self.state.scroll_offset = 0;
    }

    /// Go back to the previous view, or Home when there is none
    pub fn go_back(&mut self) {
        let current = self.state.current_view;
        if let Some(flow) = current.flow() {
            self.state.leave_flow(flow);
        }
        let mut target = View::Home;
        while let Some(view) = self.state.view_history.pop() {
            if view != current {
                target = view;
                break;
            }
        }
        self.state.current_view = target;
        self.state.status_message = None;
        self.state.scroll_offset = 0;
    }

    /// Handle keys on the landing page
    fn handle_home_key(&mut self, key: KeyEvent) {
        let home = &mut self.state.home;
        match key.code {
            KeyCode::Tab | KeyCode::Down => home.next_row(),
            KeyCode::BackTab | KeyCode::Up => home.prev_row(),
            KeyCode::Left => home.cycle(false),
            KeyCode::Right => home.cycle(true),
            KeyCode::Backspace => home.backspace(),
            KeyCode::Enter if home.is_cta_row_active() => {
                let (_, view) = HOME_CTAS[home.cta % HOME_CTAS.len()];
                self.navigate(view);
            }
            KeyCode::Enter if home.is_start_button_active() => self.start_from_signup(),
            KeyCode::Enter => home.next_row(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                home.input_char(c)
            }
            _ => {}
        }
    }

    /// Hand the quick signup over to the nurse flow
    fn start_from_signup(&mut self) {
        match self.state.home.take_signup() {
            Some(values) => {
                self.navigate(View::Nurse);
                self.state.nurse.prefill(values);
                tracing::info!("quick signup handed to nurse flow");
                self.state.status_message = Some(SIGNUP_RECEIVED.to_string());
            }
            None => self.state.status_message = Some(SIGNUP_INCOMPLETE.to_string()),
        }
    }

    /// Handle keys inside an intake flow
    fn handle_wizard_key(&mut self, flow: Flow, key: KeyEvent) {
        if is_shortcut(&key) {
            match key.code {
                KeyCode::Char('n') => self.advance(flow),
                KeyCode::Char('b') => {
                    self.state.wizard_mut(flow).back();
                }
                KeyCode::Char('s') => self.submit(flow),
                _ => {}
            }
            return;
        }

        let wizard = self.state.wizard_mut(flow);
        match key.code {
            KeyCode::Esc => self.go_back(),
            KeyCode::Tab | KeyCode::Down => wizard.next_field(),
            KeyCode::BackTab | KeyCode::Up => wizard.prev_field(),
            KeyCode::Left if wizard.is_buttons_row_active() => wizard.prev_button(),
            KeyCode::Right if wizard.is_buttons_row_active() => wizard.next_button(),
            KeyCode::Left => wizard.cycle(false),
            KeyCode::Right => wizard.cycle(true),
            KeyCode::Backspace => wizard.backspace(),
            KeyCode::Enter if wizard.is_buttons_row_active() => {
                match wizard.selected_button() {
                    BACK_BUTTON if wizard.is_first_step() => self.go_back(),
                    BACK_BUTTON => {
                        wizard.back();
                    }
                    FORWARD_BUTTON if wizard.is_review() => self.submit(flow),
                    _ => self.advance(flow),
                }
            }
            KeyCode::Enter => match wizard.active_field() {
                Some(field) if matches!(field.kind(), FieldKind::File) => {
                    if let Err(e) = wizard.pick_file() {
                        self.state.status_message = Some(e.to_string());
                    }
                }
                Some(field) if field.is_multiline() => wizard.input_char('\n'),
                _ => wizard.next_field(),
            },
            KeyCode::Char(c) => wizard.input_char(c),
            _ => {}
        }
    }

    /// Move to the next step, revealing errors when the step is incomplete
    fn advance(&mut self, flow: Flow) {
        let wizard = self.state.wizard_mut(flow);
        if wizard.is_review() {
            return;
        }
        if wizard.next() {
            if self.state.status_message.as_deref() == Some(STEP_INCOMPLETE) {
                self.state.status_message = None;
            }
        } else {
            wizard.reveal_step_errors();
            self.state.status_message = Some(STEP_INCOMPLETE.to_string());
        }
    }

    /// Start a background store write for `flow`
    fn submit(&mut self, flow: Flow) {
        let wizard = self.state.wizard_mut(flow);
        if wizard.is_submitting() {
            self.state.status_message = Some(ALREADY_SUBMITTING.to_string());
            return;
        }
        match SubmissionGateway::begin(wizard) {
            Some(pending) => {
                let task = self.gateway.dispatch(pending);
                self.pending.push((flow, task));
                self.state.status_message = Some(SUBMITTING.to_string());
            }
            None if !wizard.is_review() => {
                self.state.status_message = Some(SUBMIT_NOT_READY.to_string());
            }
            None => self.state.status_message = Some(SUBMIT_INCOMPLETE.to_string()),
        }
    }

    /// Settle every submission whose store write has finished
    pub async fn poll_submissions(&mut self) {
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].1.is_finished() {
                let (flow, task) = self.pending.swap_remove(i);
                self.settle(flow, task).await;
            } else {
                i += 1;
            }
        }
    }

    /// Wait for every outstanding submission to settle
    pub async fn finish_submissions(&mut self) {
        while let Some((flow, task)) = self.pending.pop() {
            self.settle(flow, task).await;
        }
    }

    async fn settle(&mut self, flow: Flow, task: SubmissionTask) {
        let result = task
            .await
            .unwrap_or_else(|e| Err(StoreError::Rejected(format!("submission task failed: {e}"))));
        let outcome = SubmissionGateway::settle(self.state.wizard_mut(flow), result);
        tracing::debug!(?flow, success = outcome.is_success(), "submission settled");
        self.state.status_message = Some(outcome.message().to_string());
    }

    /// Handle keys on the country playbooks page
    fn handle_playbooks_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.go_back(),
            KeyCode::Char('j') | KeyCode::Down => self.state.move_selection_down(PLAYBOOKS.len()),
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(),
            KeyCode::Enter => {
                // Apply with the highlighted country preselected
                let country = PLAYBOOKS
                    .get(self.state.selected_index)
                    .map(|p| p.country.to_string());
                self.navigate(View::Nurse);
                if let Some(country) = country {
                    self.state
                        .nurse
                        .prefill([(FieldId::Country, FieldValue::Text(country))]);
                }
            }
            _ => {}
        }
    }

    /// Handle keys on the compliance page
    fn handle_compliance_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.go_back(),
            KeyCode::Char('j') | KeyCode::Down => {
                if self.state.scroll_offset + 1 < POLICIES.len() {
                    self.state.scroll_down();
                }
            }
            KeyCode::Char('k') | KeyCode::Up => self.state.scroll_up(),
            _ => {}
        }
    }
}
