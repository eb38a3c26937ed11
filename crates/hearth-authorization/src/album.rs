//! Shared albums
//!
//! A `SharedAlbum` owns exactly one `PermissionMatrix` and adds the group
//! membership gate: only current members of the family group may hold
//! grants. The album's member list is always derived from the matrix.

use crate::capability::Capability;
use crate::matrix::PermissionMatrix;
use crate::preset::PermissionTier;
use hearth_core::{AlbumId, GroupId, HearthError, HearthResult, MemberId, PhysicalTime};
use hearth_social::{FamilyGroup, MembershipRegistry, RoleAction};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A shared album and its permission matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedAlbum {
    /// Unique identifier for this album
    pub album_id: AlbumId,
    /// Group the album is shared within
    pub group_id: GroupId,
    /// Display name
    pub name: String,
    /// Creation timestamp
    pub created_at: PhysicalTime,
    permissions: PermissionMatrix,
    photo_count: u64,
}

impl SharedAlbum {
    /// Create an album. `creator` must be an active member allowed to create albums.
    pub fn create(
        group: &FamilyGroup,
        creator: MemberId,
        name: impl Into<String>,
        now: PhysicalTime,
    ) -> HearthResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(HearthError::invalid("album name must not be blank"));
        }
        MembershipRegistry::authorize(group, &creator, RoleAction::CreateAlbum)?;

        let album = Self {
            album_id: AlbumId::new(),
            group_id: group.group_id,
            name: name.trim().to_string(),
            created_at: now,
            permissions: PermissionMatrix::new(creator),
            photo_count: 0,
        };
        tracing::debug!(album_id = %album.album_id, creator = %creator, "shared album created");
        Ok(album)
    }

    /// Member who created the album.
    pub fn creator(&self) -> MemberId {
        self.permissions.creator()
    }

    /// Read access to the permission matrix.
    pub fn permissions(&self) -> &PermissionMatrix {
        &self.permissions
    }

    /// Members holding at least one capability.
    pub fn members(&self) -> BTreeSet<MemberId> {
        self.permissions.members()
    }

    /// Number of photos in the album.
    pub fn photo_count(&self) -> u64 {
        self.photo_count
    }

    /// Whether `member` holds `capability`.
    ///
    /// This consults the matrix only. A child granted
    /// [`Capability::Download`] still needs
    /// `hearth_approval::ApprovalWorkflow::download_allowed` to pass when
    /// the group restricts downloads for children; callers serving
    /// downloads must check both.
    pub fn can(&self, member: &MemberId, capability: Capability) -> bool {
        self.permissions.has_capability(member, capability)
    }

    /// Require that `actor` may change this album's grants.
    ///
    /// The creator always may; anyone else needs a role that permits
    /// managing album permissions.
    pub fn authorize_permission_change(
        &self,
        group: &FamilyGroup,
        actor: &MemberId,
    ) -> HearthResult<()> {
        self.ensure_same_group(group)?;
        if actor == &self.creator() && group.is_active_member(actor) {
            return Ok(());
        }
        MembershipRegistry::authorize(group, actor, RoleAction::ManageAlbumPermissions).map(|_| ())
    }

    /// Grant a capability to a current group member.
    pub fn grant(
        &mut self,
        group: &FamilyGroup,
        member: MemberId,
        capability: Capability,
    ) -> HearthResult<bool> {
        self.ensure_grantee(group, &member)?;
        Ok(self.permissions.grant(member, capability))
    }

    /// Revoke a capability. The creator's capabilities cannot be revoked.
    pub fn revoke(&mut self, member: MemberId, capability: Capability) -> HearthResult<bool> {
        self.permissions.revoke(member, capability)
    }

    /// Apply a tier preset to a current group member.
    pub fn apply_preset(
        &mut self,
        group: &FamilyGroup,
        member: MemberId,
        tier: PermissionTier,
    ) -> HearthResult<()> {
        if tier != PermissionTier::None {
            self.ensure_grantee(group, &member)?;
        }
        self.permissions.apply_preset(member, tier)
    }

    /// Nearest tier for `member`.
    pub fn current_tier(&self, member: &MemberId) -> PermissionTier {
        self.permissions.current_tier(member)
    }

    /// Drop the grants of everyone who is no longer in `group`.
    ///
    /// Returns the members whose grants were removed. The creator is kept
    /// even after leaving the group.
    pub fn prune_departed(&mut self, group: &FamilyGroup) -> HearthResult<Vec<MemberId>> {
        self.ensure_same_group(group)?;
        let creator = self.creator();
        let departed: Vec<MemberId> = self
            .permissions
            .members()
            .into_iter()
            .filter(|m| *m != creator && !group.is_member(m))
            .collect();

        for member in &departed {
            self.permissions.remove_member(member)?;
        }
        if !departed.is_empty() {
            tracing::debug!(album_id = %self.album_id, pruned = departed.len(), "departed members pruned");
        }
        Ok(departed)
    }

    /// Record photos attached to the album.
    pub fn record_photos_added(&mut self, count: u64) {
        self.photo_count = self.photo_count.saturating_add(count);
    }

    /// Record a photo removed from the album.
    pub fn record_photo_removed(&mut self) -> HearthResult<()> {
        self.photo_count = self
            .photo_count
            .checked_sub(1)
            .ok_or_else(|| HearthError::invariant("album has no photos to remove"))?;
        Ok(())
    }

    /// Rename the album.
    pub fn rename(&mut self, name: impl Into<String>) -> HearthResult<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(HearthError::invalid("album name must not be blank"));
        }
        self.name = name.trim().to_string();
        Ok(())
    }

    fn ensure_same_group(&self, group: &FamilyGroup) -> HearthResult<()> {
        if group.group_id != self.group_id {
            return Err(HearthError::invalid(format!(
                "album {} does not belong to group {}",
                self.album_id, group.group_id
            )));
        }
        Ok(())
    }

    fn ensure_grantee(&self, group: &FamilyGroup, member: &MemberId) -> HearthResult<()> {
        self.ensure_same_group(group)?;
        if !group.is_member(member) {
            return Err(HearthError::invariant(format!(
                "{member} is not a member of group {}",
                group.group_id
            )));
        }
        Ok(())
    }
}
