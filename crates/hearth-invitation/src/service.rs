//! Invitation Service
//!
//! Owns the invitations of one family group and drives their lifecycle:
//!
//! ```text
//! sent ──accept──▶ accepted
//!  │  ╲
//!  │   ╲──cancel──▶ cancelled
//!  │
//!  └──(expires_at reached)──▶ expired
//! ```
//!
//! Expiry is lazy. Reads present a lapsed `sent` invitation as `expired`;
//! the status is committed by `expire_due` or by the next mutating call
//! that touches the invitation.
//!
//! Capacity is checked against the live roster at acceptance time. A
//! `sent` invitation does not reserve a slot.

use crate::config::InvitationConfig;
use crate::effects::InvitationOutcome;
use crate::invitation::{Invitation, InvitationStatus};
use hearth_core::config::ConfigValidator;
use hearth_core::{GroupId, HearthError, HearthResult, InvitationId, MemberId, PhysicalTime};
use hearth_social::{normalize_contact, FamilyGroup, MembershipRegistry, NewMember};
use std::collections::HashMap;

const ENTITY: &str = "invitation";

/// Invitation lifecycle for a single family group.
#[derive(Debug, Clone)]
pub struct InvitationService {
    group_id: GroupId,
    config: InvitationConfig,
    invitations: HashMap<InvitationId, Invitation>,
}

impl InvitationService {
    /// Create a service for `group_id`.
    pub fn new(group_id: GroupId, config: InvitationConfig) -> Self {
        Self {
            group_id,
            config,
            invitations: HashMap::new(),
        }
    }

    /// Group served by this service.
    pub fn group_id(&self) -> GroupId {
        self.group_id
    }

    /// Active configuration.
    pub fn config(&self) -> &InvitationConfig {
        &self.config
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Send an invitation to `address`.
    ///
    /// Rejects blank or malformed addresses, addresses that already belong
    /// to a member, and addresses with a live `sent` invitation. A full
    /// group is rejected up front; acceptance re-checks capacity.
    pub fn send(
        &mut self,
        group: &FamilyGroup,
        address: &str,
        now: PhysicalTime,
    ) -> HearthResult<InvitationOutcome> {
        self.ensure_group(group)?;

        let mut validator = ConfigValidator::new();
        validator
            .required("address", address)
            .format("address", address, "contact");
        validator.result()?;

        let address = normalize_contact(address);
        MembershipRegistry::validate_join(group, &address)?;

        let duplicate = self
            .invitations
            .values()
            .any(|inv| inv.address == address && inv.is_pending(now));
        if duplicate {
            return Err(HearthError::invalid(format!(
                "an invitation to {address} is already pending"
            )));
        }

        let invitation = Invitation {
            invitation_id: InvitationId::new(),
            group_id: self.group_id,
            address,
            status: InvitationStatus::Sent,
            sent_at: now,
            expires_at: now.plus_ms(self.config.expiration_ms),
            resend_count: 0,
            responded_at: None,
            member_id: None,
        };

        tracing::debug!(
            group_id = %self.group_id,
            invitation_id = %invitation.invitation_id,
            expires_at = %invitation.expires_at,
            "invitation sent"
        );

        self.invitations
            .insert(invitation.invitation_id, invitation.clone());
        Ok(InvitationOutcome::delivered(invitation))
    }

    /// Resend a pending invitation, restarting its expiry window.
    pub fn resend(
        &mut self,
        invitation_id: &InvitationId,
        now: PhysicalTime,
    ) -> HearthResult<InvitationOutcome> {
        let expiration_ms = self.config.expiration_ms;
        let invitation = self.pending_mut(invitation_id, "resend", now)?;

        invitation.sent_at = now;
        invitation.expires_at = now.plus_ms(expiration_ms);
        invitation.resend_count += 1;

        tracing::debug!(
            invitation_id = %invitation_id,
            resend_count = invitation.resend_count,
            "invitation resent"
        );
        Ok(InvitationOutcome::delivered(invitation.clone()))
    }

    /// Cancel a pending invitation.
    pub fn cancel(
        &mut self,
        invitation_id: &InvitationId,
        now: PhysicalTime,
    ) -> HearthResult<Invitation> {
        let invitation = self.pending_mut(invitation_id, "cancel", now)?;

        invitation.status = InvitationStatus::Cancelled;
        invitation.responded_at = Some(now);

        tracing::debug!(invitation_id = %invitation_id, "invitation cancelled");
        Ok(invitation.clone())
    }

    /// Accept a pending invitation, adding the invitee to `group`.
    ///
    /// A lapsed invitation is marked `expired` and the call fails with
    /// `InvitationExpired`. When the group has filled up since sending, the
    /// call fails with `CapacityExceeded` and the invitation stays `sent`.
    /// The member is created before the invitation is marked accepted, so
    /// a failure leaves both untouched.
    pub fn accept(
        &mut self,
        invitation_id: &InvitationId,
        group: &mut FamilyGroup,
        display_name: &str,
        now: PhysicalTime,
    ) -> HearthResult<MemberId> {
        self.ensure_group(group)?;

        let invitation = self.lookup_mut(invitation_id)?;
        if invitation.status != InvitationStatus::Sent {
            return Err(HearthError::invalid_transition(
                ENTITY,
                invitation.status.as_str(),
                "accept",
            ));
        }

        if invitation.is_expired(now) {
            let expired_at = invitation.expires_at;
            commit_expiry(invitation);
            return Err(HearthError::InvitationExpired {
                expired_at_ms: expired_at.ts_ms,
            });
        }

        let member_id = MembershipRegistry::add_member(
            group,
            NewMember::new(display_name, invitation.address.clone()),
            now,
        )?;

        invitation.status = InvitationStatus::Accepted;
        invitation.responded_at = Some(now);
        invitation.member_id = Some(member_id);

        tracing::debug!(
            invitation_id = %invitation_id,
            member_id = %member_id,
            "invitation accepted"
        );
        Ok(member_id)
    }

    /// Commit expiry for every lapsed `sent` invitation.
    ///
    /// Returns the identifiers that transitioned.
    pub fn expire_due(&mut self, now: PhysicalTime) -> Vec<InvitationId> {
        let mut expired: Vec<InvitationId> = Vec::new();
        for invitation in self.invitations.values_mut() {
            if invitation.status == InvitationStatus::Sent && invitation.is_expired(now) {
                commit_expiry(invitation);
                expired.push(invitation.invitation_id);
            }
        }
        expired.sort();
        expired
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Invitation as it reads at `now`.
    pub fn get(&self, invitation_id: &InvitationId, now: PhysicalTime) -> Option<Invitation> {
        self.invitations
            .get(invitation_id)
            .map(|inv| inv.view_at(now))
    }

    /// All invitations as they read at `now`, oldest first.
    pub fn list(&self, now: PhysicalTime) -> Vec<Invitation> {
        let mut invitations: Vec<Invitation> = self
            .invitations
            .values()
            .map(|inv| inv.view_at(now))
            .collect();
        invitations.sort_by_key(|inv| (inv.sent_at, inv.invitation_id));
        invitations
    }

    /// Invitations still awaiting a response at `now`.
    pub fn pending(&self, now: PhysicalTime) -> Vec<Invitation> {
        self.list(now)
            .into_iter()
            .filter(|inv| inv.status == InvitationStatus::Sent)
            .collect()
    }

    /// Number of invitations still awaiting a response at `now`.
    pub fn pending_count(&self, now: PhysicalTime) -> usize {
        self.invitations
            .values()
            .filter(|inv| inv.is_pending(now))
            .count()
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn ensure_group(&self, group: &FamilyGroup) -> HearthResult<()> {
        if group.group_id != self.group_id {
            return Err(HearthError::invalid(format!(
                "group {} is not served by this invitation service",
                group.group_id
            )));
        }
        Ok(())
    }

    fn lookup_mut(&mut self, invitation_id: &InvitationId) -> HearthResult<&mut Invitation> {
        self.invitations
            .get_mut(invitation_id)
            .ok_or_else(|| HearthError::not_found(format!("invitation {invitation_id}")))
    }

    /// Fetch an invitation that must still be `sent` at `now`.
    fn pending_mut(
        &mut self,
        invitation_id: &InvitationId,
        operation: &str,
        now: PhysicalTime,
    ) -> HearthResult<&mut Invitation> {
        let invitation = self.lookup_mut(invitation_id)?;
        if invitation.status == InvitationStatus::Sent && invitation.is_expired(now) {
            commit_expiry(invitation);
        }
        if invitation.status != InvitationStatus::Sent {
            return Err(HearthError::invalid_transition(
                ENTITY,
                invitation.status.as_str(),
                operation,
            ));
        }
        Ok(invitation)
    }
}

fn commit_expiry(invitation: &mut Invitation) {
    invitation.status = InvitationStatus::Expired;
    invitation.responded_at = Some(invitation.expires_at);
    tracing::debug!(invitation_id = %invitation.invitation_id, "invitation expired");
}
