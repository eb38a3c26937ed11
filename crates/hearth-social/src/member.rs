//! Family members, roles, and the role permission table

use hearth_core::{MemberId, PhysicalTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of a member within a family group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
    /// Group owner with irrevocable full control
    Organizer,
    /// Regular adult member
    Member,
    /// Member subject to parental-control gating
    Child,
}

/// Actions gated by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleAction {
    /// Send, resend, or cancel invitations
    InviteMembers,
    /// Remove other members from the group
    RemoveMembers,
    /// Change parental control settings
    ManageParentalControls,
    /// Approve or reject child upload requests
    ReviewApprovals,
    /// Create shared albums
    CreateAlbum,
    /// Change album permission grants
    ManageAlbumPermissions,
    /// Upload to an album without a parental approval request
    UploadWithoutApproval,
    /// Change group notification and sharing preferences
    ManageGroupSettings,
}

impl RoleAction {
    /// All gated actions.
    pub const ALL: [RoleAction; 8] = [
        RoleAction::InviteMembers,
        RoleAction::RemoveMembers,
        RoleAction::ManageParentalControls,
        RoleAction::ReviewApprovals,
        RoleAction::CreateAlbum,
        RoleAction::ManageAlbumPermissions,
        RoleAction::UploadWithoutApproval,
        RoleAction::ManageGroupSettings,
    ];
}

impl MemberRole {
    /// Whether this role may perform `action`.
    pub fn permits(self, action: RoleAction) -> bool {
        match self {
            MemberRole::Organizer => true,
            MemberRole::Member => !matches!(action, RoleAction::RemoveMembers),
            MemberRole::Child => false,
        }
    }

    /// Fixed textual label.
    pub fn as_str(self) -> &'static str {
        match self {
            MemberRole::Organizer => "organizer",
            MemberRole::Member => "member",
            MemberRole::Child => "child",
        }
    }
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MemberRole {
    type Err = hearth_core::HearthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "organizer" => Ok(MemberRole::Organizer),
            "member" => Ok(MemberRole::Member),
            "child" => Ok(MemberRole::Child),
            other => Err(hearth_core::HearthError::invalid(format!(
                "unknown role: {other}"
            ))),
        }
    }
}

/// Lifecycle status of a member record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberStatus {
    /// Participating normally
    Active,
    /// Joined but not yet confirmed
    Pending,
    /// Suspended; keeps a roster slot but cannot act
    Inactive,
}

impl MemberStatus {
    /// Fixed textual label.
    pub fn as_str(self) -> &'static str {
        match self {
            MemberStatus::Active => "active",
            MemberStatus::Pending => "pending",
            MemberStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A member of a family group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Stable identifier
    pub member_id: MemberId,
    /// Name shown to other members
    pub display_name: String,
    /// Contact address (normalized to lower case)
    pub contact: String,
    /// Role within the group
    pub role: MemberRole,
    /// Lifecycle status
    pub status: MemberStatus,
    /// When the member joined
    pub joined_at: PhysicalTime,
}

impl Member {
    /// Whether the member is active.
    pub fn is_active(&self) -> bool {
        self.status == MemberStatus::Active
    }
}

/// Request to add a member to a group.
///
/// The role defaults to `Member`; `as_child` switches it to `Child`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    /// Explicit identifier; a random one is drawn when absent
    pub member_id: Option<MemberId>,
    /// Name shown to other members
    pub display_name: String,
    /// Contact address
    pub contact: String,
    /// Requested role
    pub role: MemberRole,
    /// Initial status
    pub status: MemberStatus,
}

impl NewMember {
    /// New active member with the default role.
    pub fn new(display_name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            member_id: None,
            display_name: display_name.into(),
            contact: contact.into(),
            role: MemberRole::Member,
            status: MemberStatus::Active,
        }
    }

    /// Request the child role.
    pub fn as_child(mut self) -> Self {
        self.role = MemberRole::Child;
        self
    }

    /// Use a caller-chosen identifier.
    pub fn with_id(mut self, member_id: MemberId) -> Self {
        self.member_id = Some(member_id);
        self
    }

    /// Set the initial status.
    pub fn with_status(mut self, status: MemberStatus) -> Self {
        self.status = status;
        self
    }
}

/// Normalize a contact address for comparison.
pub fn normalize_contact(contact: &str) -> String {
    contact.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_table() {
        for action in RoleAction::ALL {
            assert!(MemberRole::Organizer.permits(action));
            assert!(!MemberRole::Child.permits(action));
        }
        assert!(MemberRole::Member.permits(RoleAction::InviteMembers));
        assert!(MemberRole::Member.permits(RoleAction::ReviewApprovals));
        assert!(!MemberRole::Member.permits(RoleAction::RemoveMembers));
        assert!(MemberRole::Member.permits(RoleAction::ManageGroupSettings));
    }

    #[test]
    fn test_role_labels_roundtrip() {
        for role in [MemberRole::Organizer, MemberRole::Member, MemberRole::Child] {
            assert_eq!(role.to_string().parse::<MemberRole>().unwrap(), role);
        }
        assert!("guardian".parse::<MemberRole>().is_err());
    }

    #[test]
    fn test_new_member_defaults() {
        let request = NewMember::new("Lin", "lin@example.com");
        assert_eq!(request.role, MemberRole::Member);
        assert_eq!(request.status, MemberStatus::Active);
        assert_eq!(request.as_child().role, MemberRole::Child);
    }
}
