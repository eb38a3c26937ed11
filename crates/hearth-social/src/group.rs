//! Family group view
//!
//! A `FamilyGroup` owns its roster. Mutations that can break the capacity or
//! organizer invariants go through `MembershipRegistry`; the methods here are
//! queries plus the few edits that cannot.

use crate::member::{normalize_contact, Member, MemberRole, MemberStatus, NewMember};
use crate::preferences::GroupPreferences;
use hearth_core::config::{ConfigValidation, ConfigValidator};
use hearth_core::{GroupId, HearthError, HearthResult, MemberId, PhysicalTime};
use serde::{Deserialize, Serialize};

/// Group configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupConfig {
    /// Capacity of newly created groups
    pub default_max_members: usize,
}

impl GroupConfig {
    /// Default capacity of a family group.
    pub const DEFAULT_MAX_MEMBERS: usize = 6;
    /// Smallest allowed capacity.
    pub const MIN_CAPACITY: usize = 1;
    /// Largest allowed capacity.
    pub const MAX_CAPACITY: usize = 50;
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            default_max_members: Self::DEFAULT_MAX_MEMBERS,
        }
    }
}

impl ConfigValidation for GroupConfig {
    fn validate(&self) -> HearthResult<()> {
        let mut validator = ConfigValidator::new();
        validator.range(
            "default_max_members",
            self.default_max_members as f64,
            Some(Self::MIN_CAPACITY as f64),
            Some(Self::MAX_CAPACITY as f64),
        );
        validator.result().map_err(Into::into)
    }
}

/// A family group and its roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyGroup {
    /// Unique identifier for this group
    pub group_id: GroupId,
    /// Display name
    pub name: String,
    /// Current organizer; `None` once the group is dissolved
    pub(crate) organizer_id: Option<MemberId>,
    /// Current members, organizer included
    pub(crate) members: Vec<Member>,
    /// Maximum number of members
    pub(crate) max_members: usize,
    /// Notification and sharing preferences
    #[serde(default)]
    pub(crate) preferences: GroupPreferences,
    /// Creation timestamp
    pub created_at: PhysicalTime,
}

impl FamilyGroup {
    /// Create a group with `organizer` as its first and only member.
    pub fn create(
        name: impl Into<String>,
        organizer: NewMember,
        config: &GroupConfig,
        now: PhysicalTime,
    ) -> HearthResult<Self> {
        config.validate()?;
        let name = name.into();
        let mut validator = ConfigValidator::new();
        validator
            .required("name", &name)
            .required("organizer.display_name", &organizer.display_name)
            .format("organizer.contact", &organizer.contact, "contact");
        validator.result()?;

        let organizer_id = organizer.member_id.unwrap_or_default();
        let member = Member {
            member_id: organizer_id,
            display_name: organizer.display_name,
            contact: normalize_contact(&organizer.contact),
            role: MemberRole::Organizer,
            status: MemberStatus::Active,
            joined_at: now,
        };

        let group = Self {
            group_id: GroupId::new(),
            name: name.trim().to_string(),
            organizer_id: Some(organizer_id),
            members: vec![member],
            max_members: config.default_max_members,
            preferences: GroupPreferences::default(),
            created_at: now,
        };
        tracing::debug!(group_id = %group.group_id, organizer = %organizer_id, "family group created");
        Ok(group)
    }

    /// Current organizer, if the group is not dissolved.
    pub fn organizer_id(&self) -> Option<MemberId> {
        self.organizer_id
    }

    /// Current organizer record.
    pub fn organizer(&self) -> Option<&Member> {
        self.organizer_id.and_then(|id| self.member(&id))
    }

    /// Whether the organizer left and the group was dissolved.
    pub fn is_dissolved(&self) -> bool {
        self.organizer_id.is_none()
    }

    /// All members.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Active members only.
    pub fn active_members(&self) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(|m| m.is_active())
    }

    /// Lookup a member by id.
    pub fn member(&self, member_id: &MemberId) -> Option<&Member> {
        self.members.iter().find(|m| &m.member_id == member_id)
    }

    /// Lookup a member by contact address.
    pub fn member_by_contact(&self, contact: &str) -> Option<&Member> {
        let contact = normalize_contact(contact);
        self.members.iter().find(|m| m.contact == contact)
    }

    /// Whether `member_id` is on the roster.
    pub fn is_member(&self, member_id: &MemberId) -> bool {
        self.member(member_id).is_some()
    }

    /// Whether `member_id` is on the roster and active.
    pub fn is_active_member(&self, member_id: &MemberId) -> bool {
        self.member(member_id).is_some_and(Member::is_active)
    }

    /// Number of members.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Maximum number of members.
    pub fn max_members(&self) -> usize {
        self.max_members
    }

    /// Notification and sharing preferences.
    pub fn preferences(&self) -> &GroupPreferences {
        &self.preferences
    }

    /// Whether another member fits.
    pub fn can_add_member(&self) -> bool {
        self.members.len() < self.max_members
    }

    /// Free roster slots.
    pub fn available_slots(&self) -> usize {
        self.max_members.saturating_sub(self.members.len())
    }

    /// Members other than `self_id`.
    pub fn peers(&self, self_id: &MemberId) -> Vec<MemberId> {
        self.members
            .iter()
            .filter(|m| &m.member_id != self_id)
            .map(|m| m.member_id)
            .collect()
    }

    /// Rename the group.
    pub fn rename(&mut self, name: impl Into<String>) -> HearthResult<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(HearthError::invalid("group name must not be blank"));
        }
        self.name = name.trim().to_string();
        Ok(())
    }

    /// Change capacity. Never drops below the current member count.
    pub fn set_max_members(&mut self, max_members: usize) -> HearthResult<()> {
        if !(GroupConfig::MIN_CAPACITY..=GroupConfig::MAX_CAPACITY).contains(&max_members) {
            return Err(HearthError::invalid(format!(
                "capacity must be between {} and {}",
                GroupConfig::MIN_CAPACITY,
                GroupConfig::MAX_CAPACITY
            )));
        }
        if max_members < self.members.len() {
            return Err(HearthError::invariant(format!(
                "capacity {max_members} is below current member count {}",
                self.members.len()
            )));
        }
        self.max_members = max_members;
        Ok(())
    }

    /// Change a member's status. The organizer always stays active.
    pub fn set_member_status(
        &mut self,
        member_id: &MemberId,
        status: MemberStatus,
    ) -> HearthResult<()> {
        if self.organizer_id.as_ref() == Some(member_id) && status != MemberStatus::Active {
            return Err(HearthError::invariant("organizer must remain active"));
        }
        let member = self
            .members
            .iter_mut()
            .find(|m| &m.member_id == member_id)
            .ok_or_else(|| HearthError::not_found(format!("member {member_id}")))?;
        member.status = status;
        tracing::debug!(member_id = %member_id, status = %status, "member status changed");
        Ok(())
    }
}
