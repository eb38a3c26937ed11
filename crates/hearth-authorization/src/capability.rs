//! Capability kinds and capability sets

use hearth_core::HearthError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit of album access control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// See photos in the album
    View,
    /// Add photos to the album
    Upload,
    /// Edit photos and album metadata
    Edit,
    /// Delete photos from the album
    Delete,
    /// Download original photos
    Download,
}

impl Capability {
    /// All capabilities, in display order.
    pub const ALL: [Capability; 5] = [
        Capability::View,
        Capability::Upload,
        Capability::Edit,
        Capability::Delete,
        Capability::Download,
    ];

    /// Fixed textual label.
    pub fn as_str(self) -> &'static str {
        match self {
            Capability::View => "view",
            Capability::Upload => "upload",
            Capability::Edit => "edit",
            Capability::Delete => "delete",
            Capability::Download => "download",
        }
    }

    fn bit(self) -> u8 {
        match self {
            Capability::View => 1,
            Capability::Upload => 1 << 1,
            Capability::Edit => 1 << 2,
            Capability::Delete => 1 << 3,
            Capability::Download => 1 << 4,
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Capability {
    type Err = HearthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Capability::ALL
            .into_iter()
            .find(|cap| cap.as_str() == s)
            .ok_or_else(|| HearthError::invalid(format!("unknown capability: {s}")))
    }
}

/// A subset of the five capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CapabilitySet(u8);

impl CapabilitySet {
    /// No capabilities.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// All five capabilities.
    pub const fn all() -> Self {
        Self(0b1_1111)
    }

    /// Build from a list of capabilities.
    pub fn of(caps: &[Capability]) -> Self {
        caps.iter().fold(Self::empty(), |set, cap| set.with(*cap))
    }

    /// Copy with `cap` added.
    pub fn with(self, cap: Capability) -> Self {
        Self(self.0 | cap.bit())
    }

    /// Copy with `cap` removed.
    pub fn without(self, cap: Capability) -> Self {
        Self(self.0 & !cap.bit())
    }

    /// Whether `cap` is in the set.
    pub fn contains(self, cap: Capability) -> bool {
        self.0 & cap.bit() != 0
    }

    /// Whether the set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of capabilities in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate in display order.
    pub fn iter(self) -> impl Iterator<Item = Capability> {
        Capability::ALL.into_iter().filter(move |cap| self.contains(*cap))
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), CapabilitySet::with)
    }
}
