//! Approval Workflow
//!
//! Child uploads become `ApprovalRequest`s that a guardian approves or
//! rejects:
//!
//! ```text
//! pending ──approve──▶ approved   (emits AttachPhoto)
//!    └─────reject────▶ rejected
//! ```
//!
//! Whether an upload needs approval at all is decided by the caller
//! through [`ApprovalWorkflow::requires_approval`]. Submissions outside the
//! allowed hours or past the daily limit are rejected, never queued.

use crate::config::ApprovalConfig;
use crate::effects::ApprovalOutcome;
use crate::request::{ApprovalRequest, ApprovalStatus};
use crate::settings::ParentalControlSettings;
use hearth_core::config::{ConfigValidation, ConfigValidator};
use hearth_core::{
    AlbumId, ApprovalRequestId, HearthError, HearthResult, MemberId, PhotoRef, PhysicalTime,
};
use hearth_social::{FamilyGroup, MemberRole, MembershipRegistry, RoleAction};

const ENTITY: &str = "approval_request";

/// Approval state for one family group.
#[derive(Debug, Clone)]
pub struct ApprovalWorkflow {
    settings: ParentalControlSettings,
    config: ApprovalConfig,
    requests: Vec<ApprovalRequest>,
}

impl ApprovalWorkflow {
    /// Create a workflow with the given settings.
    pub fn new(settings: ParentalControlSettings, config: ApprovalConfig) -> Self {
        Self {
            settings,
            config,
            requests: Vec::new(),
        }
    }

    /// Current parental control settings.
    pub fn settings(&self) -> &ParentalControlSettings {
        &self.settings
    }

    /// Active configuration.
    pub fn config(&self) -> &ApprovalConfig {
        &self.config
    }

    /// Whether an upload by a member with `role` must go through approval.
    pub fn requires_approval(&self, role: MemberRole) -> bool {
        self.settings.require_approval && role == MemberRole::Child
    }

    /// Whether a member with `role` may download album photos.
    pub fn download_allowed(&self, role: MemberRole) -> bool {
        !(self.settings.restrict_download && role == MemberRole::Child)
    }

    /// Replace the settings. Children may not change them.
    pub fn update_settings(
        &mut self,
        group: &FamilyGroup,
        actor: &MemberId,
        settings: ParentalControlSettings,
    ) -> HearthResult<()> {
        MembershipRegistry::authorize(group, actor, RoleAction::ManageParentalControls)?;
        settings.validate()?;

        self.settings = settings;
        tracing::debug!(
            group_id = %group.group_id,
            actor = %actor,
            require_approval = self.settings.require_approval,
            max_daily_uploads = self.settings.max_daily_uploads,
            "parental controls updated"
        );
        Ok(())
    }

    /// Submit a child's upload for review.
    pub fn submit(
        &mut self,
        group: &FamilyGroup,
        child_id: &MemberId,
        photo: PhotoRef,
        album_id: AlbumId,
        album_name: &str,
        now: PhysicalTime,
    ) -> HearthResult<ApprovalRequest> {
        let child = group
            .member(child_id)
            .filter(|m| m.is_active())
            .ok_or_else(|| {
                HearthError::permission_denied(format!("{child_id} is not an active member"))
            })?;

        if !self.requires_approval(child.role) {
            let message = if child.role == MemberRole::Child {
                "approval is disabled for this group".to_string()
            } else {
                format!("{} uploads do not go through approval", child.role)
            };
            return Err(HearthError::permission_denied(message));
        }

        let mut validator = ConfigValidator::new();
        validator.required("album_name", album_name);
        validator.result()?;

        self.check_allowed_hours(now)?;

        let limit = self.settings.max_daily_uploads;
        let claimed = self.approved_uploads_in_window(child_id, now)
            + self.pending_uploads_in_window(child_id, now);
        if claimed >= limit as usize {
            return Err(HearthError::DailyLimitExceeded { limit });
        }

        let request = ApprovalRequest {
            request_id: ApprovalRequestId::new(),
            child_id: *child_id,
            child_name: child.display_name.clone(),
            photo,
            album_id,
            album_name: album_name.trim().to_string(),
            requested_at: now,
            status: ApprovalStatus::Pending,
            rejection_reason: None,
            decided_at: None,
            decided_by: None,
        };

        tracing::debug!(
            request_id = %request.request_id,
            child_id = %child_id,
            album_id = %album_id,
            "approval requested"
        );
        self.requests.push(request.clone());
        Ok(request)
    }

    /// Approve a pending request.
    ///
    /// Fails with `DailyLimitExceeded`, leaving the request pending, when
    /// the child already has `max_daily_uploads` approved uploads in the
    /// window.
    pub fn approve(
        &mut self,
        request_id: &ApprovalRequestId,
        reviewer: &MemberId,
        group: &FamilyGroup,
        now: PhysicalTime,
    ) -> HearthResult<ApprovalOutcome> {
        MembershipRegistry::authorize(group, reviewer, RoleAction::ReviewApprovals)?;
        let child_id = self.pending_mut(request_id, "approve")?.child_id;

        let limit = self.settings.max_daily_uploads;
        if self.approved_uploads_in_window(&child_id, now) >= limit as usize {
            return Err(HearthError::DailyLimitExceeded { limit });
        }

        let request = self.pending_mut(request_id, "approve")?;

        request.status = ApprovalStatus::Approved;
        request.decided_at = Some(now);
        request.decided_by = Some(*reviewer);

        tracing::debug!(request_id = %request_id, reviewer = %reviewer, "upload approved");
        Ok(ApprovalOutcome::attach(request.clone()))
    }

    /// Reject a pending request.
    pub fn reject(
        &mut self,
        request_id: &ApprovalRequestId,
        reviewer: &MemberId,
        group: &FamilyGroup,
        reason: Option<String>,
        now: PhysicalTime,
    ) -> HearthResult<ApprovalRequest> {
        MembershipRegistry::authorize(group, reviewer, RoleAction::ReviewApprovals)?;
        let request = self.pending_mut(request_id, "reject")?;

        request.status = ApprovalStatus::Rejected;
        request.rejection_reason = reason;
        request.decided_at = Some(now);
        request.decided_by = Some(*reviewer);

        tracing::debug!(request_id = %request_id, reviewer = %reviewer, "upload rejected");
        Ok(request.clone())
    }

    /// Look up a request.
    pub fn get(&self, request_id: &ApprovalRequestId) -> Option<&ApprovalRequest> {
        self.requests.iter().find(|r| &r.request_id == request_id)
    }

    /// Requests awaiting review, oldest first.
    pub fn pending(&self) -> Vec<&ApprovalRequest> {
        self.requests.iter().filter(|r| r.is_pending()).collect()
    }

    /// Decided requests, most recent decision first.
    pub fn history(&self) -> Vec<&ApprovalRequest> {
        let mut decided: Vec<&ApprovalRequest> =
            self.requests.iter().filter(|r| !r.is_pending()).collect();
        decided.sort_by(|a, b| b.decided_at.cmp(&a.decided_at));
        decided
    }

    /// Approved uploads for `child_id` within the rolling window ending at `now`.
    pub fn approved_uploads_in_window(&self, child_id: &MemberId, now: PhysicalTime) -> usize {
        let since = now.minus_ms(self.config.limit_window_ms);
        self.requests
            .iter()
            .filter(|r| r.approved_for_since(child_id, since))
            .count()
    }

    /// Pending requests for `child_id` submitted within the window ending at `now`.
    pub fn pending_uploads_in_window(&self, child_id: &MemberId, now: PhysicalTime) -> usize {
        let since = now.minus_ms(self.config.limit_window_ms);
        self.requests
            .iter()
            .filter(|r| r.pending_for_since(child_id, since))
            .count()
    }

    fn check_allowed_hours(&self, now: PhysicalTime) -> HearthResult<()> {
        let hours = &self.settings.allowed_hours;
        let time = now
            .time_of_day(self.config.utc_offset_minutes)
            .ok_or_else(|| HearthError::invalid(format!("{now} has no wall-clock time")))?;

        if hours.contains(time)? {
            Ok(())
        } else {
            Err(HearthError::OutsideAllowedHours {
                start: hours.start.clone(),
                end: hours.end.clone(),
            })
        }
    }

    fn pending_mut(
        &mut self,
        request_id: &ApprovalRequestId,
        operation: &str,
    ) -> HearthResult<&mut ApprovalRequest> {
        let request = self
            .requests
            .iter_mut()
            .find(|r| &r.request_id == request_id)
            .ok_or_else(|| HearthError::not_found(format!("approval request {request_id}")))?;

        if !request.is_pending() {
            return Err(HearthError::invalid_transition(
                ENTITY,
                request.status.as_str(),
                operation,
            ));
        }
        Ok(request)
    }
}

impl Default for ApprovalWorkflow {
    fn default() -> Self {
        Self::new(ParentalControlSettings::default(), ApprovalConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use hearth_core::time::HOUR_MS;
    use hearth_core::PhotoId;
    use hearth_social::{GroupConfig, NewMember};

    // 2023-11-14T22:13:20Z
    const BASE_MS: u64 = 1_700_000_000_000;
    // 2023-11-15T12:00:00Z
    const NOON_MS: u64 = 1_700_049_600_000;

    fn test_photo(seed: u8) -> PhotoRef {
        PhotoRef::new(
            PhotoId::new_from_entropy([seed; 32]),
            format!("photos/{seed}.jpg"),
            2_048,
            PhysicalTime::from_ms(BASE_MS),
        )
    }

    fn test_group() -> (FamilyGroup, MemberId, MemberId) {
        let mut group = FamilyGroup::create(
            "Family",
            NewMember::new("Parent", "parent@example.com"),
            &GroupConfig::default(),
            PhysicalTime::from_ms(BASE_MS),
        )
        .unwrap();
        let organizer = group.organizer_id().unwrap();
        let child = MembershipRegistry::add_member(
            &mut group,
            NewMember::new("Kid", "kid@example.com").as_child(),
            PhysicalTime::from_ms(BASE_MS),
        )
        .unwrap();
        (group, organizer, child)
    }

    #[test]
    fn test_requires_approval_only_for_children() {
        let workflow = ApprovalWorkflow::default();
        assert!(workflow.requires_approval(MemberRole::Child));
        assert!(!workflow.requires_approval(MemberRole::Member));
        assert!(!workflow.requires_approval(MemberRole::Organizer));

        assert!(!workflow.download_allowed(MemberRole::Child));
        assert!(workflow.download_allowed(MemberRole::Member));
    }

    #[test]
    fn test_submit_outside_hours() {
        let (group, _, child) = test_group();
        let mut workflow = ApprovalWorkflow::default();

        // 22:13 UTC is past the default 20:00 close
        let result = workflow.submit(
            &group,
            &child,
            test_photo(1),
            AlbumId::new(),
            "Summer",
            PhysicalTime::from_ms(BASE_MS),
        );
        assert_matches!(result, Err(HearthError::OutsideAllowedHours { .. }));
        assert!(workflow.pending().is_empty());
    }

    #[test]
    fn test_offset_shifts_wall_clock() {
        let (group, _, child) = test_group();
        // 22:13 UTC is 17:13 at UTC-5
        let config = ApprovalConfig {
            utc_offset_minutes: -5 * 60,
            ..Default::default()
        };
        let mut workflow = ApprovalWorkflow::new(ParentalControlSettings::default(), config);
        assert!(workflow
            .submit(
                &group,
                &child,
                test_photo(1),
                AlbumId::new(),
                "Summer",
                PhysicalTime::from_ms(BASE_MS),
            )
            .is_ok());
    }

    #[test]
    fn test_history_most_recent_first() {
        let (group, organizer, child) = test_group();
        let mut workflow = ApprovalWorkflow::default();
        let album = AlbumId::new();

        let first = workflow
            .submit(&group, &child, test_photo(1), album, "A", PhysicalTime::from_ms(NOON_MS))
            .unwrap();
        let second = workflow
            .submit(&group, &child, test_photo(2), album, "A", PhysicalTime::from_ms(NOON_MS))
            .unwrap();

        workflow
            .approve(&second.request_id, &organizer, &group, PhysicalTime::from_ms(NOON_MS + 1))
            .unwrap();
        workflow
            .reject(
                &first.request_id,
                &organizer,
                &group,
                None,
                PhysicalTime::from_ms(NOON_MS + HOUR_MS),
            )
            .unwrap();

        let history: Vec<ApprovalRequestId> =
            workflow.history().iter().map(|r| r.request_id).collect();
        assert_eq!(history, vec![first.request_id, second.request_id]);
        assert!(workflow.pending().is_empty());
    }
}
