//! Per-album permission matrix
//!
//! Five independent member sets, one per capability. Direct grants and
//! revocations imply nothing about other capabilities; tier presets are the
//! only place the conventional escalation is applied.

use crate::capability::{Capability, CapabilitySet};
use crate::preset::PermissionTier;
use hearth_core::{HearthError, HearthResult, MemberId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Capability grants of one album, keyed by capability then member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionMatrix {
    creator: MemberId,
    view: BTreeSet<MemberId>,
    upload: BTreeSet<MemberId>,
    edit: BTreeSet<MemberId>,
    delete: BTreeSet<MemberId>,
    download: BTreeSet<MemberId>,
}

impl PermissionMatrix {
    /// New matrix with every capability granted to `creator`.
    pub fn new(creator: MemberId) -> Self {
        let only_creator = BTreeSet::from([creator]);
        Self {
            creator,
            view: only_creator.clone(),
            upload: only_creator.clone(),
            edit: only_creator.clone(),
            delete: only_creator.clone(),
            download: only_creator,
        }
    }

    /// The member exempt from revocation.
    pub fn creator(&self) -> MemberId {
        self.creator
    }

    fn set(&self, capability: Capability) -> &BTreeSet<MemberId> {
        match capability {
            Capability::View => &self.view,
            Capability::Upload => &self.upload,
            Capability::Edit => &self.edit,
            Capability::Delete => &self.delete,
            Capability::Download => &self.download,
        }
    }

    fn set_mut(&mut self, capability: Capability) -> &mut BTreeSet<MemberId> {
        match capability {
            Capability::View => &mut self.view,
            Capability::Upload => &mut self.upload,
            Capability::Edit => &mut self.edit,
            Capability::Delete => &mut self.delete,
            Capability::Download => &mut self.download,
        }
    }

    /// Grant a capability. Returns whether the matrix changed.
    pub fn grant(&mut self, member: MemberId, capability: Capability) -> bool {
        let changed = self.set_mut(capability).insert(member);
        if changed {
            tracing::debug!(member = %member, capability = %capability, "capability granted");
        }
        changed
    }

    /// Revoke a capability. Returns whether the matrix changed.
    ///
    /// Fails with `InvariantViolation` for the creator.
    pub fn revoke(&mut self, member: MemberId, capability: Capability) -> HearthResult<bool> {
        self.ensure_not_creator(&member, "revoke a capability from")?;
        let changed = self.set_mut(capability).remove(&member);
        if changed {
            tracing::debug!(member = %member, capability = %capability, "capability revoked");
        }
        Ok(changed)
    }

    /// Whether `member` holds `capability`.
    pub fn has_capability(&self, member: &MemberId, capability: Capability) -> bool {
        self.set(capability).contains(member)
    }

    /// All capabilities held by `member`.
    pub fn capabilities_of(&self, member: &MemberId) -> CapabilitySet {
        Capability::ALL
            .into_iter()
            .filter(|cap| self.has_capability(member, *cap))
            .collect()
    }

    /// Overwrite `member`'s grants with the canonical grants of `tier`.
    ///
    /// The creator may only be set to admin.
    pub fn apply_preset(&mut self, member: MemberId, tier: PermissionTier) -> HearthResult<()> {
        if tier != PermissionTier::Admin {
            self.ensure_not_creator(&member, "lower the tier of")?;
        }

        let target = tier.capabilities();
        for capability in Capability::ALL {
            if target.contains(capability) {
                self.set_mut(capability).insert(member);
            } else {
                self.set_mut(capability).remove(&member);
            }
        }
        tracing::debug!(member = %member, tier = %tier, "preset applied");
        Ok(())
    }

    /// Nearest named tier for `member`'s current grants.
    pub fn current_tier(&self, member: &MemberId) -> PermissionTier {
        PermissionTier::classify(self.capabilities_of(member))
    }

    /// Whether `member`'s grants match a tier preset exactly.
    pub fn is_canonical(&self, member: &MemberId) -> bool {
        PermissionTier::is_canonical(self.capabilities_of(member))
    }

    /// Members holding `capability`.
    pub fn members_with(&self, capability: Capability) -> impl Iterator<Item = &MemberId> {
        self.set(capability).iter()
    }

    /// Every member holding at least one capability.
    pub fn members(&self) -> BTreeSet<MemberId> {
        Capability::ALL
            .into_iter()
            .flat_map(|cap| self.set(cap).iter().copied())
            .collect()
    }

    /// Drop every grant held by `member`. Returns whether the matrix changed.
    pub fn remove_member(&mut self, member: &MemberId) -> HearthResult<bool> {
        self.ensure_not_creator(member, "remove")?;
        let mut changed = false;
        for capability in Capability::ALL {
            changed |= self.set_mut(capability).remove(member);
        }
        Ok(changed)
    }

    fn ensure_not_creator(&self, member: &MemberId, action: &str) -> HearthResult<()> {
        if member == &self.creator {
            return Err(HearthError::invariant(format!(
                "cannot {action} the album creator"
            )));
        }
        Ok(())
    }
}
