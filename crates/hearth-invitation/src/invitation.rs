//! Invitation records and status

use hearth_core::{GroupId, InvitationId, MemberId, PhysicalTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Invitation status
///
/// `Sent` is the only non-terminal state. Status only moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvitationStatus {
    /// Awaiting a response
    Sent,
    /// Accepted; a member was created
    Accepted,
    /// Lapsed before acceptance
    Expired,
    /// Withdrawn by the group
    Cancelled,
}

impl InvitationStatus {
    /// Fixed textual label.
    pub fn as_str(self) -> &'static str {
        match self {
            InvitationStatus::Sent => "sent",
            InvitationStatus::Accepted => "accepted",
            InvitationStatus::Expired => "expired",
            InvitationStatus::Cancelled => "cancelled",
        }
    }

    /// Whether no further transition is possible.
    pub fn is_terminal(self) -> bool {
        !matches!(self, InvitationStatus::Sent)
    }
}

impl fmt::Display for InvitationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A time-bounded offer to join a family group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invitation {
    /// Unique invitation identifier
    pub invitation_id: InvitationId,
    /// Group the invitee would join
    pub group_id: GroupId,
    /// Target contact address (normalized)
    pub address: String,
    /// Current status
    pub status: InvitationStatus,
    /// When the invitation was last sent
    pub sent_at: PhysicalTime,
    /// Acceptance deadline
    pub expires_at: PhysicalTime,
    /// Number of times the invitation was resent
    pub resend_count: u32,
    /// When the invitation reached a terminal status
    pub responded_at: Option<PhysicalTime>,
    /// Member created on acceptance
    pub member_id: Option<MemberId>,
}

impl Invitation {
    /// Whether the acceptance deadline has passed.
    pub fn is_expired(&self, now: PhysicalTime) -> bool {
        now >= self.expires_at
    }

    /// Status as presented to callers at `now`.
    ///
    /// A `Sent` invitation whose deadline passed reads as `Expired` even
    /// before the expiry is committed.
    pub fn effective_status(&self, now: PhysicalTime) -> InvitationStatus {
        match self.status {
            InvitationStatus::Sent if self.is_expired(now) => InvitationStatus::Expired,
            status => status,
        }
    }

    /// Copy of this invitation with its effective status at `now`.
    pub fn view_at(&self, now: PhysicalTime) -> Self {
        let mut view = self.clone();
        if view.status == InvitationStatus::Sent && view.is_expired(now) {
            view.status = InvitationStatus::Expired;
            view.responded_at = Some(self.expires_at);
        }
        view
    }

    /// Whether the invitation is still awaiting a response at `now`.
    pub fn is_pending(&self, now: PhysicalTime) -> bool {
        self.effective_status(now) == InvitationStatus::Sent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_invitation() -> Invitation {
        Invitation {
            invitation_id: InvitationId::new_from_entropy([1u8; 32]),
            group_id: GroupId::new_from_entropy([2u8; 32]),
            address: "x@example.com".to_string(),
            status: InvitationStatus::Sent,
            sent_at: PhysicalTime::from_ms(1_000),
            expires_at: PhysicalTime::from_ms(2_000),
            resend_count: 0,
            responded_at: None,
            member_id: None,
        }
    }

    #[test]
    fn test_effective_status() {
        let invitation = test_invitation();
        assert_eq!(
            invitation.effective_status(PhysicalTime::from_ms(1_999)),
            InvitationStatus::Sent
        );
        assert_eq!(
            invitation.effective_status(PhysicalTime::from_ms(2_000)),
            InvitationStatus::Expired
        );
        let view = invitation.view_at(PhysicalTime::from_ms(5_000));
        assert_eq!(view.status, InvitationStatus::Expired);
        assert_eq!(view.responded_at, Some(PhysicalTime::from_ms(2_000)));
    }

    #[test]
    fn test_terminal_states() {
        assert!(!InvitationStatus::Sent.is_terminal());
        assert!(InvitationStatus::Accepted.is_terminal());
        assert!(InvitationStatus::Expired.is_terminal());
        assert!(InvitationStatus::Cancelled.is_terminal());
    }

    #[test]
    fn test_status_labels() {
        let json = serde_json::to_string(&InvitationStatus::Cancelled).unwrap();
        assert_eq!(json, "\"cancelled\"");
        assert_eq!(InvitationStatus::Accepted.to_string(), "accepted");
    }
}
