//! End-to-end invitation lifecycle against a live roster

use assert_matches::assert_matches;
use hearth_core::time::DAY_MS;
use hearth_core::{HearthError, PhysicalTime};
use hearth_invitation::{EffectCommand, InvitationConfig, InvitationService, InvitationStatus};
use hearth_social::{
    FamilyGroup, GroupConfig, MemberRole, MemberStatus, MembershipRegistry, NewMember,
};

// ============================================================================
// Test Helpers
// ============================================================================

fn test_time(offset_ms: u64) -> PhysicalTime {
    PhysicalTime::from_ms(1_700_000_000_000 + offset_ms)
}

fn small_group(max_members: usize) -> FamilyGroup {
    let config = GroupConfig {
        default_max_members: max_members,
    };
    FamilyGroup::create(
        "Family",
        NewMember::new("Organizer", "organizer@example.com"),
        &config,
        test_time(0),
    )
    .unwrap()
}

fn test_service(group: &FamilyGroup) -> InvitationService {
    InvitationService::new(group.group_id, InvitationConfig::default())
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn accept_before_expiry_adds_active_member() {
    let mut group = small_group(6);
    let mut service = test_service(&group);

    let outcome = service
        .send(&group, "x@example.com", test_time(0))
        .unwrap();
    let id = outcome.invitation.invitation_id;
    assert_matches!(
        &outcome.effects[..],
        [EffectCommand::DeliverInvitation { address, .. }] if address == "x@example.com"
    );

    let member_id = service
        .accept(&id, &mut group, "Xavi", test_time(DAY_MS))
        .unwrap();

    let member = group.member(&member_id).unwrap();
    assert_eq!(member.role, MemberRole::Member);
    assert_eq!(member.status, MemberStatus::Active);
    assert_eq!(member.contact, "x@example.com");

    let invitation = service.get(&id, test_time(DAY_MS)).unwrap();
    assert_eq!(invitation.status, InvitationStatus::Accepted);
    assert_eq!(invitation.member_id, Some(member_id));

    // Accepted is terminal
    assert_matches!(
        service.accept(&id, &mut group, "Xavi", test_time(DAY_MS + 1)),
        Err(HearthError::InvalidTransition { .. })
    );
    assert_eq!(group.member_count(), 2);
}

#[test]
fn accept_after_expiry_marks_expired() {
    let mut group = small_group(6);
    let mut service = test_service(&group);

    let id = service
        .send(&group, "x@example.com", test_time(0))
        .unwrap()
        .invitation
        .invitation_id;

    assert_matches!(
        service.accept(&id, &mut group, "Xavi", test_time(7 * DAY_MS + 1)),
        Err(HearthError::InvitationExpired { .. })
    );
    assert_eq!(group.member_count(), 1);
    assert_eq!(
        service.get(&id, test_time(0)).unwrap().status,
        InvitationStatus::Expired
    );

    // Expired is terminal
    assert_matches!(
        service.accept(&id, &mut group, "Xavi", test_time(7 * DAY_MS + 2)),
        Err(HearthError::InvalidTransition { .. })
    );
}

#[test]
fn cancel_then_accept_is_invalid() {
    let mut group = small_group(6);
    let mut service = test_service(&group);

    let id = service
        .send(&group, "x@example.com", test_time(0))
        .unwrap()
        .invitation
        .invitation_id;
    service.cancel(&id, test_time(1)).unwrap();

    assert_matches!(
        service.accept(&id, &mut group, "Xavi", test_time(2)),
        Err(HearthError::InvalidTransition { from, operation, .. })
            if from == "cancelled" && operation == "accept"
    );
    assert_eq!(group.member_count(), 1);
}

#[test]
fn capacity_is_rechecked_at_acceptance() {
    let mut group = small_group(2);
    let mut service = test_service(&group);

    // Invite while a slot is free
    let id = service
        .send(&group, "late@example.com", test_time(0))
        .unwrap()
        .invitation
        .invitation_id;

    // The slot is taken before the invitee responds
    MembershipRegistry::add_member(
        &mut group,
        NewMember::new("Second", "second@example.com"),
        test_time(1),
    )
    .unwrap();

    assert_matches!(
        service.accept(&id, &mut group, "Late", test_time(2)),
        Err(HearthError::CapacityExceeded { max: 2 })
    );
    assert_eq!(group.member_count(), 2);
    assert_eq!(
        service.get(&id, test_time(2)).unwrap().status,
        InvitationStatus::Sent
    );

    // Once a slot frees up the same invitation can still be accepted
    let second = group.member_by_contact("second@example.com").unwrap().member_id;
    MembershipRegistry::remove_member(&mut group, &second).unwrap();
    assert!(service.accept(&id, &mut group, "Late", test_time(3)).is_ok());
    assert_eq!(group.member_count(), 2);
}

#[test]
fn full_group_rejects_new_invitations() {
    let group = small_group(1);
    let mut service = test_service(&group);

    assert_matches!(
        service.send(&group, "x@example.com", test_time(0)),
        Err(HearthError::CapacityExceeded { max: 1 })
    );
    assert_eq!(service.pending_count(test_time(0)), 0);
}

#[test]
fn list_is_ordered_by_send_time() {
    let group = small_group(6);
    let mut service = test_service(&group);

    service.send(&group, "b@example.com", test_time(10)).unwrap();
    service.send(&group, "a@example.com", test_time(5)).unwrap();

    let addresses: Vec<String> = service
        .list(test_time(20))
        .into_iter()
        .map(|inv| inv.address)
        .collect();
    assert_eq!(addresses, vec!["a@example.com", "b@example.com"]);
}
