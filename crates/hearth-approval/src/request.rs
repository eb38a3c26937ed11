//! Approval requests

use hearth_core::{AlbumId, ApprovalRequestId, MemberId, PhotoRef, PhysicalTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Approval request status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    /// Awaiting review
    Pending,
    /// Approved; the photo is attached
    Approved,
    /// Rejected by a reviewer
    Rejected,
}

impl ApprovalStatus {
    /// Fixed textual label.
    pub fn as_str(self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A child's upload waiting on a guardian decision.
///
/// Requests are never re-opened; a retry is a new request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalRequest {
    /// Request identifier
    pub request_id: ApprovalRequestId,
    /// Submitting child
    pub child_id: MemberId,
    /// Child's display name at submission
    pub child_name: String,
    /// Photo to attach on approval
    pub photo: PhotoRef,
    /// Target album
    pub album_id: AlbumId,
    /// Target album name at submission
    pub album_name: String,
    /// Submission time
    pub requested_at: PhysicalTime,
    /// Current status
    pub status: ApprovalStatus,
    /// Free text, stored as given
    pub rejection_reason: Option<String>,
    /// When the request was approved or rejected
    pub decided_at: Option<PhysicalTime>,
    /// Reviewer who decided
    pub decided_by: Option<MemberId>,
}

impl ApprovalRequest {
    /// Whether the request is still awaiting review.
    pub fn is_pending(&self) -> bool {
        self.status == ApprovalStatus::Pending
    }

    /// Whether this is an approved upload for `child_id` decided after `since`.
    pub(crate) fn approved_for_since(&self, child_id: &MemberId, since: PhysicalTime) -> bool {
        self.status == ApprovalStatus::Approved
            && &self.child_id == child_id
            && self.decided_at.is_some_and(|at| at > since)
    }

    /// Whether this is a pending request for `child_id` submitted after `since`.
    pub(crate) fn pending_for_since(&self, child_id: &MemberId, since: PhysicalTime) -> bool {
        self.is_pending() && &self.child_id == child_id && self.requested_at > since
    }
}
