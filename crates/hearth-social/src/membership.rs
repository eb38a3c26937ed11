//! Membership registry
//!
//! Capacity, organizer, and role checks for roster changes. Every check is
//! evaluated against the group as it is at the moment of the call; nothing
//! is cached between operations because the roster can change between an
//! invitation and its acceptance.

use crate::group::FamilyGroup;
use crate::member::{normalize_contact, Member, MemberRole, NewMember, RoleAction};
use crate::preferences::GroupPreferences;
use hearth_core::config::ConfigValidation;
use hearth_core::config::ConfigValidator;
use hearth_core::{HearthError, HearthResult, MemberId, PhysicalTime};

/// Validates and applies roster changes for family groups.
pub struct MembershipRegistry;

impl MembershipRegistry {
    /// Validate that a member with `contact` could join right now.
    pub fn validate_join(group: &FamilyGroup, contact: &str) -> HearthResult<()> {
        if group.is_dissolved() {
            return Err(HearthError::invariant("group has been dissolved"));
        }

        if group.member_by_contact(contact).is_some() {
            return Err(HearthError::AlreadyMember {
                address: normalize_contact(contact),
            });
        }

        if !group.can_add_member() {
            return Err(HearthError::capacity_exceeded(group.max_members()));
        }

        Ok(())
    }

    /// Add a member. Fails with `CapacityExceeded` when the group is full.
    pub fn add_member(
        group: &mut FamilyGroup,
        new_member: NewMember,
        now: PhysicalTime,
    ) -> HearthResult<MemberId> {
        if new_member.role == MemberRole::Organizer {
            return Err(HearthError::invariant(
                "a group has exactly one organizer, assigned at creation",
            ));
        }

        let mut validator = ConfigValidator::new();
        validator
            .required("display_name", &new_member.display_name)
            .format("contact", &new_member.contact, "contact");
        validator.result()?;

        Self::validate_join(group, &new_member.contact)?;

        let member_id = new_member.member_id.unwrap_or_default();
        if group.is_member(&member_id) {
            return Err(HearthError::invariant(format!(
                "member id {member_id} already in use"
            )));
        }

        group.members.push(Member {
            member_id,
            display_name: new_member.display_name.trim().to_string(),
            contact: normalize_contact(&new_member.contact),
            role: new_member.role,
            status: new_member.status,
            joined_at: now,
        });

        tracing::debug!(
            group_id = %group.group_id,
            member_id = %member_id,
            role = %new_member.role,
            count = group.member_count(),
            "member added"
        );
        Ok(member_id)
    }

    /// Remove a member.
    ///
    /// The organizer can only leave as the last member, which dissolves the
    /// group.
    pub fn remove_member(group: &mut FamilyGroup, member_id: &MemberId) -> HearthResult<Member> {
        let index = group
            .members
            .iter()
            .position(|m| &m.member_id == member_id)
            .ok_or_else(|| HearthError::not_found(format!("member {member_id}")))?;

        let is_organizer = group.organizer_id.as_ref() == Some(member_id);
        if is_organizer && group.members.len() > 1 {
            return Err(HearthError::OrganizerRemovalForbidden {
                remaining: group.members.len() - 1,
            });
        }

        let removed = group.members.remove(index);
        if is_organizer {
            group.organizer_id = None;
            tracing::debug!(group_id = %group.group_id, "organizer left, group dissolved");
        }

        tracing::debug!(
            group_id = %group.group_id,
            member_id = %member_id,
            count = group.member_count(),
            "member removed"
        );
        Ok(removed)
    }

    /// Replace the group's preferences. Children may not change them.
    pub fn update_preferences(
        group: &mut FamilyGroup,
        actor: &MemberId,
        preferences: GroupPreferences,
    ) -> HearthResult<()> {
        Self::authorize(group, actor, RoleAction::ManageGroupSettings)?;
        preferences.validate()?;

        group.preferences = preferences;
        tracing::debug!(
            group_id = %group.group_id,
            actor = %actor,
            smart_suggestions = group.preferences.sharing.smart_suggestions,
            "group preferences updated"
        );
        Ok(())
    }

    /// Role of a member.
    pub fn role_of(group: &FamilyGroup, member_id: &MemberId) -> HearthResult<MemberRole> {
        group
            .member(member_id)
            .map(|m| m.role)
            .ok_or_else(|| HearthError::not_found(format!("member {member_id}")))
    }

    /// Require that `actor` is an active member whose role permits `action`.
    pub fn authorize(
        group: &FamilyGroup,
        actor: &MemberId,
        action: RoleAction,
    ) -> HearthResult<MemberRole> {
        let member = group
            .member(actor)
            .ok_or_else(|| HearthError::permission_denied(format!("{actor} is not a member")))?;

        if !member.is_active() {
            return Err(HearthError::permission_denied(format!(
                "{actor} is {}",
                member.status
            )));
        }

        if !member.role.permits(action) {
            return Err(HearthError::permission_denied(format!(
                "role {} may not perform {action:?}",
                member.role
            )));
        }

        Ok(member.role)
    }
}
