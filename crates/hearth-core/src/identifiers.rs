//! Opaque identifiers for groups, members, albums, and workflow records
//!
//! All identifiers are UUID newtypes. `new()` draws a random v4 UUID;
//! `new_from_entropy` derives one deterministically from caller-provided
//! bytes so tests and simulations can reproduce exact identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! uuid_identifier {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Create an identifier from caller-provided entropy.
            pub fn new_from_entropy(entropy: [u8; 32]) -> Self {
                let mut uuid_bytes = [0u8; 16];
                uuid_bytes.copy_from_slice(&entropy[..16]);
                Self(Uuid::from_bytes(uuid_bytes))
            }

            /// Create from a UUID
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Get the inner UUID
            pub fn uuid(&self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "-{}"), self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Handle both raw UUIDs and prefixed format
                let uuid_str = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                Ok(Self(Uuid::parse_str(uuid_str)?))
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

uuid_identifier!(
    /// Family group identifier
    GroupId,
    "group"
);

uuid_identifier!(
    /// Member identifier, unique within its group and stable for its lifetime
    MemberId,
    "member"
);

uuid_identifier!(
    /// Shared album identifier
    AlbumId,
    "album"
);

uuid_identifier!(
    /// Invitation identifier
    InvitationId,
    "invitation"
);

uuid_identifier!(
    /// Approval request identifier
    ApprovalRequestId,
    "approval"
);

uuid_identifier!(
    /// Photo identifier assigned by the storage collaborator
    PhotoId,
    "photo"
);

uuid_identifier!(
    /// Sharing suggestion identifier
    SuggestionId,
    "suggestion"
);
