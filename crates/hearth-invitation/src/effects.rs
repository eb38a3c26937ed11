//! Effect commands produced by invitation transitions
//!
//! Delivery of invitations is owned by an external notification
//! collaborator. Transitions return these commands as data; the caller
//! executes them after the transition has been committed.

use crate::invitation::Invitation;
use hearth_core::{InvitationId, PhysicalTime};
use serde::{Deserialize, Serialize};

/// Side effect requested by an invitation transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectCommand {
    /// Deliver (or re-deliver) the invitation to its address
    DeliverInvitation {
        /// Invitation to deliver
        invitation_id: InvitationId,
        /// Destination address
        address: String,
        /// Deadline to show the invitee
        expires_at: PhysicalTime,
    },
}

/// Result of a transition that produced a record and effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvitationOutcome {
    /// The invitation after the transition
    pub invitation: Invitation,
    /// Effects for the caller to execute
    pub effects: Vec<EffectCommand>,
}

impl InvitationOutcome {
    pub(crate) fn delivered(invitation: Invitation) -> Self {
        let effects = vec![EffectCommand::DeliverInvitation {
            invitation_id: invitation.invitation_id,
            address: invitation.address.clone(),
            expires_at: invitation.expires_at,
        }];
        Self {
            invitation,
            effects,
        }
    }
}
