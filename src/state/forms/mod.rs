//! Form domain layer
//!
//! Field identifiers and values, the validation rule table, and the
//! state container shared by both intake flows.

mod field;
mod form_state;
mod validation;

pub use field::{FieldId, FieldKind, FieldValue, FileRef};
pub use form_state::FormState;
pub use validation::{password_strength, PasswordStrength};
