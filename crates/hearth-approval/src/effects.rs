//! Effect commands produced by approval transitions

use crate::request::ApprovalRequest;
use hearth_core::{AlbumId, ApprovalRequestId, PhotoRef};
use serde::{Deserialize, Serialize};

/// Side effect requested by an approval transition.
///
/// Photo attachment belongs to the storage collaborator. The caller runs
/// the command and then records the new photo on the album.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectCommand {
    /// Attach an approved photo to its album
    AttachPhoto {
        /// Approved request
        request_id: ApprovalRequestId,
        /// Photo to attach
        photo: PhotoRef,
        /// Destination album
        album_id: AlbumId,
    },
}

/// Result of an approval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovalOutcome {
    /// The request after the transition
    pub request: ApprovalRequest,
    /// Effects for the caller to execute
    pub effects: Vec<EffectCommand>,
}

impl ApprovalOutcome {
    pub(crate) fn attach(request: ApprovalRequest) -> Self {
        let effects = vec![EffectCommand::AttachPhoto {
            request_id: request.request_id,
            photo: request.photo.clone(),
            album_id: request.album_id,
        }];
        Self { request, effects }
    }
}
