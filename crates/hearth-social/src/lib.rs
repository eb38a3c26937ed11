//! Hearth Social - family groups and membership
//!
//! This crate provides the roster layer of the family sharing core:
//!
//! - `FamilyGroup`: the group view, owning its members
//! - `Member`, `MemberRole`, `MemberStatus`: roster entries
//! - `RoleAction` and `MemberRole::permits`: the role permission table
//! - `MembershipRegistry`: capacity, organizer, and role checks
//! - `GroupPreferences`: notification and sharing toggles
//!
//! # Example
//!
//! ```ignore
//! use hearth_social::{FamilyGroup, GroupConfig, MembershipRegistry, NewMember};
//!
//! let mut group = FamilyGroup::create("Family", NewMember::new("Wei", "wei@example.com"),
//!     &GroupConfig::default(), now)?;
//! let child = MembershipRegistry::add_member(&mut group,
//!     NewMember::new("Mei", "mei@example.com").as_child(), now)?;
//! ```

#![forbid(unsafe_code)]

pub mod group;
pub mod member;
pub mod membership;
pub mod preferences;

pub use group::{FamilyGroup, GroupConfig};
pub use member::{normalize_contact, Member, MemberRole, MemberStatus, NewMember, RoleAction};
pub use membership::MembershipRegistry;
pub use preferences::{
    GroupPreferences, NotificationKind, NotificationPreferences, SharingPreferences,
};
