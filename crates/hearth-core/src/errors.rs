//! Unified error type for Hearth
//!
//! Every operation in the workspace reports failure through `HearthError`.
//! All variants are local, caller-correctable outcomes; none of them is fatal
//! and none of them leaves partially applied state behind.

use serde::{Deserialize, Serialize};

/// Unified error type for all Hearth operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum HearthError {
    /// Family group is at its member limit
    #[error("Capacity exceeded: group is full (max {max} members)")]
    CapacityExceeded {
        /// Configured capacity of the group
        max: usize,
    },

    /// The organizer cannot leave while other members remain
    #[error("Organizer removal forbidden: {remaining} other member(s) remain")]
    OrganizerRemovalForbidden {
        /// Number of members other than the organizer
        remaining: usize,
    },

    /// A state machine operation was attempted from a state that does not permit it
    #[error("Invalid transition: cannot {operation} {entity} in state {from}")]
    InvalidTransition {
        /// Kind of entity (invitation, approval request)
        entity: String,
        /// Label of the current state
        from: String,
        /// Attempted operation
        operation: String,
    },

    /// Invitation was accepted at or after its expiry
    #[error("Invitation expired at {expired_at_ms}")]
    InvitationExpired {
        /// Expiry timestamp in milliseconds
        expired_at_ms: u64,
    },

    /// The operation would break a model invariant
    #[error("Invariant violation: {message}")]
    InvariantViolation {
        /// Description of the protected invariant
        message: String,
    },

    /// Child reached the approved-upload limit for the current window
    #[error("Daily upload limit of {limit} reached")]
    DailyLimitExceeded {
        /// Configured limit
        limit: u32,
    },

    /// Submission outside the allowed wall-clock window
    #[error("Outside allowed hours ({start}-{end})")]
    OutsideAllowedHours {
        /// Window start, "HH:MM"
        start: String,
        /// Window end, "HH:MM"
        end: String,
    },

    /// Actor's role or status does not permit the action
    #[error("Permission denied: {message}")]
    PermissionDenied {
        /// Error message describing the permission issue
        message: String,
    },

    /// Referenced entity does not exist
    #[error("Not found: {message}")]
    NotFound {
        /// Error message describing what was not found
        message: String,
    },

    /// Contact address already belongs to a group member
    #[error("Already a member: {address}")]
    AlreadyMember {
        /// The duplicate contact address
        address: String,
    },

    /// Invalid input or configuration
    #[error("Invalid: {message}")]
    Invalid {
        /// Error message describing the invalid input
        message: String,
    },
}

impl HearthError {
    /// Create a capacity exceeded error
    pub fn capacity_exceeded(max: usize) -> Self {
        Self::CapacityExceeded { max }
    }

    /// Create an invalid transition error
    pub fn invalid_transition(
        entity: impl Into<String>,
        from: impl Into<String>,
        operation: impl Into<String>,
    ) -> Self {
        Self::InvalidTransition {
            entity: entity.into(),
            from: from.into(),
            operation: operation.into(),
        }
    }

    /// Create an invariant violation error
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::InvariantViolation {
            message: message.into(),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::PermissionDenied {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Stable snake_case label for the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CapacityExceeded { .. } => "capacity_exceeded",
            Self::OrganizerRemovalForbidden { .. } => "organizer_removal_forbidden",
            Self::InvalidTransition { .. } => "invalid_transition",
            Self::InvitationExpired { .. } => "invitation_expired",
            Self::InvariantViolation { .. } => "invariant_violation",
            Self::DailyLimitExceeded { .. } => "daily_limit_exceeded",
            Self::OutsideAllowedHours { .. } => "outside_allowed_hours",
            Self::PermissionDenied { .. } => "permission_denied",
            Self::NotFound { .. } => "not_found",
            Self::AlreadyMember { .. } => "already_member",
            Self::Invalid { .. } => "invalid",
        }
    }
}

/// Standard Result type for Hearth operations
pub type HearthResult<T> = std::result::Result<T, HearthError>;

impl From<std::io::Error> for HearthError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::not_found(err.to_string()),
            std::io::ErrorKind::PermissionDenied => Self::permission_denied(err.to_string()),
            _ => Self::invalid(err.to_string()),
        }
    }
}
