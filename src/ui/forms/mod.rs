//! Form rendering module
//!
//! - `field_renderer`: one input field with its label, error and hint
//! - `wizard_form`: a full intake flow with progress and buttons
//! - `review`: the read-only summary step

mod field_renderer;
mod review;
mod wizard_form;

pub use field_renderer::{draw_field, FieldFocus};
pub use wizard_form::draw_wizard;
