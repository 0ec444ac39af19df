//! Step-wise intake wizard
//!
//! - `flow`: static step tables for the nurse and employer flows
//! - `sequencer`: bounded next/back state machine
//! - `shell`: one running flow (form, steps, focus)
//! - `submission`: record snapshot and store hand-off

mod flow;
mod sequencer;
mod shell;
mod submission;

pub use flow::Flow;
pub use shell::{Wizard, BACK_BUTTON, FORWARD_BUTTON};
pub use submission::{RecordValue, SubmissionGateway, SubmissionRecord};
