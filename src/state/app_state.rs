//! Application state definitions

use super::forms::{FieldId, FieldKind, FieldValue, FormState};
use super::wizard::{Flow, Wizard};
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Nurse,
    Employer,
    Playbooks,
    Compliance,
}

impl View {
    /// Header navigation order
    pub const NAV: [View; 5] = [
        View::Home,
        View::Nurse,
        View::Employer,
        View::Playbooks,
        View::Compliance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Nurse => "For Nurses",
            Self::Employer => "For Employers",
            Self::Playbooks => "Country Playbooks",
            Self::Compliance => "Compliance",
        }
    }

    pub fn flow(&self) -> Option<Flow> {
        match self {
            Self::Nurse => Some(Flow::Nurse),
            Self::Employer => Some(Flow::Employer),
            _ => None,
        }
    }
}

/// Fields of the landing page's quick signup form
pub const QUICK_SIGNUP_FIELDS: &[FieldId] = &[FieldId::FullName, FieldId::Email, FieldId::Country];

/// Call-to-action buttons on the landing page
pub const HOME_CTAS: [(&str, View); 2] = [
    ("I'm a Nurse — Apply", View::Nurse),
    ("I'm an Employer — Hire", View::Employer),
];

/// Landing page focus: row 0 is the CTA row, then the signup fields, then the start button
#[derive(Debug, Clone)]
pub struct HomeState {
    pub row: usize,
    pub cta: usize,
    pub signup: FormState,
}

impl Default for HomeState {
    fn default() -> Self {
        Self {
            row: 0,
            cta: 0,
            signup: FormState::new(QUICK_SIGNUP_FIELDS, QUICK_SIGNUP_FIELDS.to_vec()),
        }
    }
}

impl HomeState {
    const ROWS: usize = QUICK_SIGNUP_FIELDS.len() + 2;

    pub fn is_cta_row_active(&self) -> bool {
        self.row == 0
    }

    pub fn is_start_button_active(&self) -> bool {
        self.row == Self::ROWS - 1
    }

    /// Signup field under focus
    pub fn active_field(&self) -> Option<FieldId> {
        self.row
            .checked_sub(1)
            .and_then(|i| QUICK_SIGNUP_FIELDS.get(i))
            .copied()
    }

    pub fn next_row(&mut self) {
        self.leave_field();
        self.row = (self.row + 1) % Self::ROWS;
    }

    pub fn prev_row(&mut self) {
        self.leave_field();
        self.row = (self.row + Self::ROWS - 1) % Self::ROWS;
    }

    fn leave_field(&mut self) {
        if let Some(field) = self.active_field() {
            self.signup.touch(field);
        }
    }

    /// Left/Right: move between CTAs or cycle the country selector
    pub fn cycle(&mut self, forward: bool) {
        if self.is_cta_row_active() {
            self.cta = (self.cta + 1) % HOME_CTAS.len();
            return;
        }
        if let Some(field) = self.active_field() {
            if matches!(field.kind(), FieldKind::Choice(_)) {
                self.signup.cycle_choice(field, forward);
            }
        }
    }

    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.active_field() {
            self.signup.push_char(field, c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.active_field() {
            self.signup.pop_char(field);
        }
    }

    /// Hand the signup values over, clearing the mini form. Touches every field when invalid.
    pub fn take_signup(&mut self) -> Option<Vec<(FieldId, FieldValue)>> {
        if !self.signup.is_valid() {
            for field in QUICK_SIGNUP_FIELDS {
                self.signup.touch(*field);
            }
            return None;
        }
        let values = QUICK_SIGNUP_FIELDS
            .iter()
            .filter_map(|f| self.signup.value(*f).map(|v| (*f, v.clone())))
            .collect();
        self.signup.reset();
        self.row = 0;
        Some(values)
    }
}

/// Main application state
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_history: Vec<View>,

    // Flows
    pub home: HomeState,
    pub nurse: Wizard,
    pub employer: Wizard,

    // Playbooks / compliance
    pub selected_index: usize,
    pub scroll_offset: usize,

    // Status
    pub status_message: Option<String>,
    pub store_backend: &'static str,
    error_queue: VecDeque<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_view: View::default(),
            view_history: Vec::new(),
            home: HomeState::default(),
            nurse: Wizard::new(Flow::Nurse),
            employer: Wizard::new(Flow::Employer),
            selected_index: 0,
            scroll_offset: 0,
            status_message: None,
            store_backend: "memory",
            error_queue: VecDeque::new(),
        }
    }
}

impl AppState {
    /// Fresh state reporting `store_backend` in the status bar
    pub fn with_backend(store_backend: &'static str) -> Self {
        Self {
            store_backend,
            ..Self::default()
        }
    }

    pub fn wizard_mut(&mut self, flow: Flow) -> &mut Wizard {
        match flow {
            Flow::Nurse => &mut self.nurse,
            Flow::Employer => &mut self.employer,
        }
    }

    /// Discard a flow's entered data when the user leaves it.
    /// A flow with a submission in flight keeps its data until the store answers.
    pub fn leave_flow(&mut self, flow: Flow) {
        let wizard = self.wizard_mut(flow);
        if !wizard.is_submitting() {
            wizard.reset();
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
            self.scroll_offset = 0;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.scroll_offset = 0;
        }
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Queue an error for the modal dialog
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.error_queue.len()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod view {
        use super::*;

        #[test]
        fn test_default_view_is_home() {
            assert_eq!(View::default(), View::Home);
        }

        #[test]
        fn test_flow_views() {
            assert_eq!(View::Nurse.flow(), Some(Flow::Nurse));
            assert_eq!(View::Employer.flow(), Some(Flow::Employer));
            assert_eq!(View::Playbooks.flow(), None);
        }
    }

    mod home {
        use super::*;

        #[test]
        fn test_rows_cycle() {
            let mut home = HomeState::default();
            assert!(home.is_cta_row_active());
            home.next_row();
            assert_eq!(home.active_field(), Some(FieldId::FullName));
            home.prev_row();
            home.prev_row();
            assert!(home.is_start_button_active());
            assert_eq!(home.active_field(), None);
        }

        #[test]
        fn test_cta_toggles() {
            let mut home = HomeState::default();
            home.cycle(true);
            assert_eq!(home.cta, 1);
            home.cycle(false);
            assert_eq!(home.cta, 0);
        }

        #[test]
        fn test_take_signup_requires_valid_form() {
            let mut home = HomeState::default();
            assert!(home.take_signup().is_none());
            assert_eq!(home.signup.visible_error(FieldId::Email), Some("Required"));
        }

        #[test]
        fn test_take_signup_returns_values_and_clears() {
            let mut home = HomeState::default();
            home.next_row();
            for c in "Jane".chars() {
                home.input_char(c);
            }
            home.next_row();
            for c in "jane@x.com".chars() {
                home.input_char(c);
            }
            home.next_row();
            home.cycle(true);

            let values = home.take_signup().unwrap();
            assert_eq!(values.len(), 3);
            assert_eq!(values[2], (FieldId::Country, FieldValue::text("United States")));
            assert!(!home.signup.is_valid());
            assert!(home.is_cta_row_active());
        }
    }

    mod app_state {
        use super::*;

        #[test]
        fn test_error_queue_is_fifo() {
            let mut state = AppState::default();
            state.push_error("first".into());
            state.push_error("second".into());
            assert_eq!(state.current_error(), Some("first"));
            assert_eq!(state.error_count(), 2);
            state.dismiss_error();
            assert_eq!(state.current_error(), Some("second"));
            state.dismiss_error();
            assert!(!state.has_errors());
        }

        #[test]
        fn test_leave_flow_resets_wizard() {
            let mut state = AppState::default();
            state
                .nurse
                .form_mut()
                .set_field(FieldId::FullName, FieldValue::text("Jane"));
            state.leave_flow(Flow::Nurse);
            assert!(!state.nurse.form().is_touched(FieldId::FullName));
        }

        #[test]
        fn test_leave_flow_keeps_in_flight_data() {
            let mut state = AppState::default();
            state
                .employer
                .form_mut()
                .set_field(FieldId::Roles, FieldValue::text("ICU"));
            state.employer.set_submitting(true);
            state.leave_flow(Flow::Employer);
            assert!(state.employer.form().is_touched(FieldId::Roles));
        }

        #[test]
        fn test_selection_bounds() {
            let mut state = AppState::default();
            state.move_selection_up();
            assert_eq!(state.selected_index, 0);
            state.move_selection_down(2);
            state.move_selection_down(2);
            assert_eq!(state.selected_index, 1);
        }
    }
}
