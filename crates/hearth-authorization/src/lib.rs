//! Hearth Authorization - album capabilities
//!
//! This crate provides per-album access control:
//!
//! - `Capability` and `CapabilitySet`: view, upload, edit, delete, download
//! - `PermissionMatrix`: independent capability sets keyed by member
//! - `PermissionTier`: the none/viewer/contributor/admin presets and the
//!   classifier that maps grants back to a tier
//! - `SharedAlbum`: an album owning its matrix, gated on group membership
//!
//! # Invariants
//!
//! - The album creator holds all five capabilities for the album's lifetime
//! - An album's members are exactly the ids appearing in its matrix
//! - Direct grants never imply other capabilities

#![forbid(unsafe_code)]

pub mod album;
pub mod capability;
pub mod matrix;
pub mod preset;

pub use album::SharedAlbum;
pub use capability::{Capability, CapabilitySet};
pub use matrix::PermissionMatrix;
pub use preset::PermissionTier;
