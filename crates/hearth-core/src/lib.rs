//! Hearth Core - shared foundation for the family sharing crates
//!
//! This crate holds the types every other Hearth crate builds on:
//!
//! - Identifiers: `GroupId`, `MemberId`, `AlbumId`, `InvitationId`,
//!   `ApprovalRequestId`, `PhotoId`, `SuggestionId`
//! - Time: `PhysicalTime`, passed explicitly into every time-dependent
//!   operation so transitions stay deterministic
//! - Errors: the unified `HearthError` and `HearthResult`
//! - Configuration: `ConfigValidation`, `ConfigValidator`, file loading
//!
//! # Architecture
//!
//! This is the **foundation layer**. It has no knowledge of groups, albums,
//! or workflows; those live in the feature crates:
//!
//! - `hearth-social` - family groups, roles, membership
//! - `hearth-authorization` - album permission matrix and presets
//! - `hearth-invitation` - invitation lifecycle
//! - `hearth-approval` - parental approval workflow
//! - `hearth-advisor` - recipient suggestions

#![forbid(unsafe_code)]

pub mod config;
pub mod errors;
pub mod identifiers;
pub mod photo;
pub mod time;

pub use errors::{HearthError, HearthResult};
pub use identifiers::{
    AlbumId, ApprovalRequestId, GroupId, InvitationId, MemberId, PhotoId, SuggestionId,
};
pub use photo::PhotoRef;
pub use time::PhysicalTime;
