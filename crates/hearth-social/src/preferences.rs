//! Group-wide notification and sharing preferences

use hearth_core::config::ConfigValidation;
use hearth_core::HearthResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Events members can be notified about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Photos added to a shared album
    NewPhotos,
    /// Comments on shared photos
    Comments,
    /// Invitation activity
    Invitations,
    /// Child upload requests awaiting review
    Approvals,
}

impl NotificationKind {
    /// All notification kinds.
    pub const ALL: [NotificationKind; 4] = [
        NotificationKind::NewPhotos,
        NotificationKind::Comments,
        NotificationKind::Invitations,
        NotificationKind::Approvals,
    ];

    /// Fixed textual label.
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::NewPhotos => "new_photos",
            NotificationKind::Comments => "comments",
            NotificationKind::Invitations => "invitations",
            NotificationKind::Approvals => "approvals",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which notifications the group sends. All on by default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationPreferences {
    /// Notify on new album photos
    pub new_photos: bool,
    /// Notify on comments
    pub comments: bool,
    /// Notify on invitation activity
    pub invitations: bool,
    /// Notify reviewers of pending approvals
    pub approvals: bool,
}

impl NotificationPreferences {
    /// Whether notifications of `kind` are enabled.
    pub fn allows(&self, kind: NotificationKind) -> bool {
        match kind {
            NotificationKind::NewPhotos => self.new_photos,
            NotificationKind::Comments => self.comments,
            NotificationKind::Invitations => self.invitations,
            NotificationKind::Approvals => self.approvals,
        }
    }
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            new_photos: true,
            comments: true,
            invitations: true,
            approvals: true,
        }
    }
}

/// Sharing behaviour for the group. All on by default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SharingPreferences {
    /// Offer recipient suggestions for new photos
    pub smart_suggestions: bool,
    /// Keep shared albums synced in the background
    pub auto_sync: bool,
    /// Sync only over Wi-Fi
    pub wifi_only: bool,
}

impl SharingPreferences {
    /// Whether background sync may run on the current connection.
    pub fn sync_allowed(&self, on_wifi: bool) -> bool {
        self.auto_sync && (on_wifi || !self.wifi_only)
    }
}

impl Default for SharingPreferences {
    fn default() -> Self {
        Self {
            smart_suggestions: true,
            auto_sync: true,
            wifi_only: true,
        }
    }
}

/// Per-group preferences, changed through
/// [`MembershipRegistry::update_preferences`](crate::MembershipRegistry::update_preferences).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupPreferences {
    /// Notification toggles
    pub notifications: NotificationPreferences,
    /// Sharing toggles
    pub sharing: SharingPreferences,
}

impl ConfigValidation for NotificationPreferences {
    fn validate(&self) -> HearthResult<()> {
        // Every combination of toggles is valid.
        Ok(())
    }
}

impl ConfigValidation for SharingPreferences {
    fn validate(&self) -> HearthResult<()> {
        Ok(())
    }
}

impl ConfigValidation for GroupPreferences {
    fn validate(&self) -> HearthResult<()> {
        self.notifications.validate()?;
        self.sharing.validate()
    }
}
