//! Hearth Approval - parental approval for child uploads
//!
//! - `ParentalControlSettings`: per-group switches, allowed hours, daily limit
//! - `ApprovalWorkflow`: the `pending -> approved | rejected` state machine
//! - `EffectCommand::AttachPhoto`: returned on approval for the storage
//!   collaborator to execute
//!
//! The daily limit counts approved uploads per child over a rolling window
//! (24 hours by default). Both the limit and the allowed hours are checked
//! when a request is submitted.

#![forbid(unsafe_code)]

pub mod config;
pub mod effects;
pub mod request;
pub mod settings;
pub mod workflow;

pub use config::ApprovalConfig;
pub use effects::{ApprovalOutcome, EffectCommand};
pub use request::{ApprovalRequest, ApprovalStatus};
pub use settings::{AllowedHours, ParentalControlSettings};
pub use workflow::ApprovalWorkflow;
