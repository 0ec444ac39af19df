//! Form state container: values, touched flags and derived errors

use super::field::{FieldId, FieldKind, FieldValue, FileRef};
use super::validation::validate;
use std::collections::{BTreeMap, BTreeSet};

/// Values, touched flags and errors for one flow's fields
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    fields: &'static [FieldId],
    required: Vec<FieldId>,
    values: BTreeMap<FieldId, FieldValue>,
    errors: BTreeMap<FieldId, &'static str>,
    touched: BTreeSet<FieldId>,
}

impl FormState {
    /// Create a form over `fields`, where `required` must be valid for submission
    pub fn new(fields: &'static [FieldId], required: Vec<FieldId>) -> Self {
        let mut form = Self {
            fields,
            required,
            values: BTreeMap::new(),
            errors: BTreeMap::new(),
            touched: BTreeSet::new(),
        };
        form.reset();
        form
    }

    pub fn fields(&self) -> &'static [FieldId] {
        self.fields
    }

    pub fn value(&self, field: FieldId) -> Option<&FieldValue> {
        self.values.get(&field)
    }

    /// Current error for `field`, regardless of touch state
    pub fn error(&self, field: FieldId) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Error to display for `field`: hidden until the user has touched it
    pub fn visible_error(&self, field: FieldId) -> Option<&'static str> {
        if self.is_touched(field) {
            self.error(field)
        } else {
            None
        }
    }

    pub fn is_touched(&self, field: FieldId) -> bool {
        self.touched.contains(&field)
    }

    /// Store a value, mark the field touched and recompute every error.
    /// Fields outside this form are ignored.
    pub fn set_field(&mut self, field: FieldId, value: FieldValue) {
        if !self.fields.contains(&field) {
            return;
        }
        self.values.insert(field, value);
        self.touched.insert(field);
        self.recompute_errors();
    }

    /// Mark a field touched without changing its value (focus leaving the field)
    pub fn touch(&mut self, field: FieldId) {
        if self.fields.contains(&field) {
            self.touched.insert(field);
        }
    }

    /// True iff every listed field belongs to this form and passes its rule.
    /// Touch state is ignored. Emptiness is judged by each field's rule alone.
    pub fn is_valid_for(&self, fields: &[FieldId]) -> bool {
        fields
            .iter()
            .all(|field| self.value(*field).is_some() && self.error(*field).is_none())
    }

    /// Validity of the whole form's required set
    pub fn is_valid(&self) -> bool {
        self.is_valid_for(&self.required)
    }

    /// Restore defaults and clear errors and touched flags
    pub fn reset(&mut self) {
        self.values = self
            .fields
            .iter()
            .map(|field| (*field, field.default_value()))
            .collect();
        self.touched.clear();
        self.recompute_errors();
    }

    /// Append a character to a text or file-path field
    pub fn push_char(&mut self, field: FieldId, c: char) {
        match field.kind() {
            FieldKind::Text { .. } | FieldKind::Secret => {
                let mut text = self.text(field).to_string();
                text.push(c);
                self.set_field(field, FieldValue::Text(text));
            }
            FieldKind::Choice(_) | FieldKind::MultiChoice(_) | FieldKind::File => {}
        }
    }

    /// Remove the last character from a text field
    pub fn pop_char(&mut self, field: FieldId) {
        match field.kind() {
            FieldKind::Text { .. } | FieldKind::Secret => {
                let mut text = self.text(field).to_string();
                text.pop();
                self.set_field(field, FieldValue::Text(text));
            }
            FieldKind::File => self.set_field(field, FieldValue::File(None)),
            FieldKind::Choice(_) | FieldKind::MultiChoice(_) => {}
        }
    }

    /// Step a single-choice field through its options. `forward` picks the direction;
    /// the unselected state sits before the first option.
    pub fn cycle_choice(&mut self, field: FieldId, forward: bool) {
        let FieldKind::Choice(options) = field.kind() else {
            return;
        };
        let current = options.iter().position(|o| *o == self.text(field));
        let next = match (current, forward) {
            (None, true) => Some(0),
            (None, false) => options.len().checked_sub(1),
            (Some(i), true) if i + 1 < options.len() => Some(i + 1),
            (Some(_), true) => None,
            (Some(0), false) => None,
            (Some(i), false) => Some(i - 1),
        };
        let value = next.map(|i| options[i]).unwrap_or_default();
        self.set_field(field, FieldValue::text(value));
    }

    /// Add or remove `option` from a multi-choice field
    pub fn toggle_choice(&mut self, field: FieldId, option: &str) {
        let FieldKind::MultiChoice(options) = field.kind() else {
            return;
        };
        if !options.iter().any(|o| *o == option) {
            return;
        }
        let mut set = match self.value(field) {
            Some(FieldValue::Choices(set)) => set.clone(),
            _ => BTreeSet::new(),
        };
        if !set.remove(option) {
            set.insert(option.to_string());
        }
        self.set_field(field, FieldValue::Choices(set));
    }

    /// Attach a picked file to a file field
    pub fn select_file(&mut self, field: FieldId, file: FileRef) {
        if matches!(field.kind(), FieldKind::File) {
            self.set_field(field, FieldValue::File(Some(file)));
        }
    }

    fn text(&self, field: FieldId) -> &str {
        self.value(field).map(FieldValue::as_text).unwrap_or_default()
    }

    fn recompute_errors(&mut self) {
        self.errors = self
            .values
            .iter()
            .filter_map(|(field, value)| validate(*field, value).map(|msg| (*field, msg)))
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::validation::{INVALID_EMAIL, REQUIRED};

    const FIELDS: &[FieldId] = &[
        FieldId::FullName,
        FieldId::Email,
        FieldId::Country,
        FieldId::PreferredLocations,
        FieldId::LicenseFile,
    ];

    fn form() -> FormState {
        FormState::new(
            FIELDS,
            vec![FieldId::FullName, FieldId::Email, FieldId::Country],
        )
    }

    mod set_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_form_has_errors_but_nothing_visible() {
            let form = form();
            assert_eq!(form.error(FieldId::FullName), Some(REQUIRED));
            assert_eq!(form.visible_error(FieldId::FullName), None);
            assert!(!form.is_valid());
        }

        #[test]
        fn test_set_field_marks_touched_and_revalidates() {
            let mut form = form();
            form.set_field(FieldId::Email, FieldValue::text("a@b"));
            assert!(form.is_touched(FieldId::Email));
            assert_eq!(form.visible_error(FieldId::Email), Some(INVALID_EMAIL));

            form.set_field(FieldId::Email, FieldValue::text("a@b.com"));
            assert_eq!(form.visible_error(FieldId::Email), None);
        }

        #[test]
        fn test_unknown_field_is_ignored() {
            let mut form = form();
            form.set_field(FieldId::Password, FieldValue::text("secret"));
            assert!(form.value(FieldId::Password).is_none());
            assert!(!form.is_touched(FieldId::Password));
        }

        #[test]
        fn test_valid_required_set() {
            let mut form = form();
            form.set_field(FieldId::FullName, FieldValue::text("Jane"));
            form.set_field(FieldId::Email, FieldValue::text("jane@x.com"));
            form.set_field(FieldId::Country, FieldValue::text("Canada"));
            assert!(form.is_valid());
            assert!(!form.is_valid_for(&[FieldId::LicenseFile]));
        }

        #[test]
        fn test_untouched_required_field_still_blocks() {
            let mut form = form();
            form.set_field(FieldId::FullName, FieldValue::text("Jane"));
            form.set_field(FieldId::Email, FieldValue::text("jane@x.com"));
            assert!(!form.is_touched(FieldId::Country));
            assert!(!form.is_valid());
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_push_and_pop_char() {
            let mut form = form();
            for c in "Jo".chars() {
                form.push_char(FieldId::FullName, c);
            }
            assert_eq!(form.value(FieldId::FullName), Some(&FieldValue::text("Jo")));
            form.pop_char(FieldId::FullName);
            assert_eq!(form.value(FieldId::FullName), Some(&FieldValue::text("J")));
        }

        #[test]
        fn test_cycle_choice_wraps_through_unselected() {
            let mut form = form();
            form.cycle_choice(FieldId::Country, true);
            assert_eq!(form.value(FieldId::Country), Some(&FieldValue::text("United States")));
            form.cycle_choice(FieldId::Country, false);
            assert_eq!(form.value(FieldId::Country), Some(&FieldValue::text("")));
            form.cycle_choice(FieldId::Country, false);
            assert_eq!(form.value(FieldId::Country), Some(&FieldValue::text("Australia")));
            form.cycle_choice(FieldId::Country, true);
            assert_eq!(form.value(FieldId::Country), Some(&FieldValue::text("")));
        }

        #[test]
        fn test_toggle_choice() {
            let mut form = form();
            form.toggle_choice(FieldId::PreferredLocations, "Canada");
            form.toggle_choice(FieldId::PreferredLocations, "Australia");
            form.toggle_choice(FieldId::PreferredLocations, "Canada");
            assert_eq!(
                form.value(FieldId::PreferredLocations),
                Some(&FieldValue::choices(["Australia"]))
            );
        }

        #[test]
        fn test_toggle_rejects_unknown_option() {
            let mut form = form();
            form.toggle_choice(FieldId::PreferredLocations, "Atlantis");
            assert!(form.value(FieldId::PreferredLocations).unwrap().is_empty());
        }

        #[test]
        fn test_select_and_clear_file() {
            let mut form = form();
            form.select_file(FieldId::LicenseFile, FileRef::from_path("cert.pdf").unwrap());
            assert!(form.is_valid_for(&[FieldId::LicenseFile]));
            form.pop_char(FieldId::LicenseFile);
            assert!(!form.is_valid_for(&[FieldId::LicenseFile]));
        }
    }

    mod reset {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_reset_restores_defaults() {
            let mut form = form();
            form.set_field(FieldId::FullName, FieldValue::text("Jane"));
            form.reset();
            assert_eq!(form, super::form());
        }

        #[test]
        fn test_reset_is_idempotent() {
            let mut once = form();
            once.set_field(FieldId::Email, FieldValue::text("x@y.z"));
            once.reset();
            let mut twice = once.clone();
            twice.reset();
            assert_eq!(once, twice);
        }
    }
}
