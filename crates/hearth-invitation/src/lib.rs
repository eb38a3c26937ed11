//! Hearth Invitation - invitation lifecycle
//!
//! Invitations are time-bounded offers to join a family group. They move
//! from `sent` to exactly one of `accepted`, `expired`, or `cancelled`.
//!
//! Transitions are pure over the service state and take the current time
//! as an argument. Delivery is requested by returning `EffectCommand`s
//! rather than performed here.

#![forbid(unsafe_code)]

pub mod config;
pub mod effects;
pub mod invitation;
pub mod service;

pub use config::InvitationConfig;
pub use effects::{EffectCommand, InvitationOutcome};
pub use invitation::{Invitation, InvitationStatus};
pub use service::InvitationService;
