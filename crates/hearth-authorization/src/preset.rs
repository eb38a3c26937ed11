//! Permission tiers (the preset resolver)
//!
//! Capabilities are independent in the matrix. The conventional escalation
//! none < viewer < contributor < admin exists only here: `capabilities()`
//! expands a tier into its canonical grants and `classify` maps arbitrary
//! grants back to the nearest tier.

use crate::capability::{Capability, CapabilitySet};
use hearth_core::HearthError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named bundle of capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionTier {
    /// No access
    None,
    /// View and download
    Viewer,
    /// Viewer plus upload and edit
    Contributor,
    /// Everything, including delete
    Admin,
}

impl PermissionTier {
    /// All tiers, lowest first.
    pub const ALL: [PermissionTier; 4] = [
        PermissionTier::None,
        PermissionTier::Viewer,
        PermissionTier::Contributor,
        PermissionTier::Admin,
    ];

    /// Canonical grants for this tier.
    pub fn capabilities(self) -> CapabilitySet {
        match self {
            PermissionTier::None => CapabilitySet::empty(),
            PermissionTier::Viewer => CapabilitySet::of(&[Capability::View, Capability::Download]),
            PermissionTier::Contributor => CapabilitySet::of(&[
                Capability::View,
                Capability::Upload,
                Capability::Edit,
                Capability::Download,
            ]),
            PermissionTier::Admin => CapabilitySet::all(),
        }
    }

    /// Classify grants into the nearest tier.
    ///
    /// No view ⇒ none; delete ⇒ admin; upload or edit ⇒ contributor;
    /// otherwise viewer. Lossy for non-canonical grant combinations.
    pub fn classify(grants: CapabilitySet) -> Self {
        if !grants.contains(Capability::View) {
            PermissionTier::None
        } else if grants.contains(Capability::Delete) {
            PermissionTier::Admin
        } else if grants.contains(Capability::Upload) || grants.contains(Capability::Edit) {
            PermissionTier::Contributor
        } else {
            PermissionTier::Viewer
        }
    }

    /// Whether `grants` equal the canonical grants of their classified tier.
    pub fn is_canonical(grants: CapabilitySet) -> bool {
        Self::classify(grants).capabilities() == grants
    }

    /// Fixed textual label.
    pub fn as_str(self) -> &'static str {
        match self {
            PermissionTier::None => "none",
            PermissionTier::Viewer => "viewer",
            PermissionTier::Contributor => "contributor",
            PermissionTier::Admin => "admin",
        }
    }
}

impl fmt::Display for PermissionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PermissionTier {
    type Err = HearthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PermissionTier::ALL
            .into_iter()
            .find(|tier| tier.as_str() == s)
            .ok_or_else(|| HearthError::invalid(format!("unknown tier: {s}")))
    }
}
