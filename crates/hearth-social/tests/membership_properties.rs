//! Property tests for roster invariants
//!
//! Random sequences of add/remove operations must never push a group past
//! its capacity, and the organizer must stay on the roster while anyone
//! else is present.

use hearth_core::{HearthError, MemberId, PhysicalTime};
use hearth_social::{FamilyGroup, GroupConfig, MemberRole, MembershipRegistry, NewMember};
use proptest::prelude::*;

// ============================================================================
// Test Helpers
// ============================================================================

fn test_time() -> PhysicalTime {
    PhysicalTime::from_ms(1_700_000_000_000)
}

fn test_member(seed: u8) -> NewMember {
    NewMember::new(format!("member {seed}"), format!("m{seed}@example.com"))
        .with_id(MemberId::new_from_entropy([seed; 32]))
}

#[derive(Debug, Clone)]
enum Op {
    Add(u8, bool),
    Remove(u8),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (2u8..40, any::<bool>()).prop_map(|(seed, child)| Op::Add(seed, child)),
        (1u8..40).prop_map(Op::Remove),
    ]
}

proptest! {
    #[test]
    fn capacity_never_exceeded(max in 1usize..8, ops in prop::collection::vec(arb_op(), 0..40)) {
        let config = GroupConfig { default_max_members: max };
        let mut group = FamilyGroup::create("Prop family", test_member(1), &config, test_time()).unwrap();

        for op in ops {
            let before = group.clone();
            let result = match op {
                Op::Add(seed, child) => {
                    let request = if child { test_member(seed).as_child() } else { test_member(seed) };
                    MembershipRegistry::add_member(&mut group, request, test_time()).map(|_| ())
                }
                Op::Remove(seed) => {
                    MembershipRegistry::remove_member(&mut group, &MemberId::new_from_entropy([seed; 32]))
                        .map(|_| ())
                }
            };

            prop_assert!(group.member_count() <= group.max_members());
            if result.is_err() {
                prop_assert_eq!(&group, &before, "failed operation must not mutate the group");
            }
            if let Err(HearthError::CapacityExceeded { max: reported }) = result {
                prop_assert_eq!(reported, max);
            }
            if let Some(organizer) = group.organizer_id() {
                prop_assert_eq!(
                    MembershipRegistry::role_of(&group, &organizer).unwrap(),
                    MemberRole::Organizer
                );
            } else {
                prop_assert_eq!(group.member_count(), 0);
            }
        }
    }
}

#[test]
fn sole_organizer_can_leave() {
    let mut group =
        FamilyGroup::create("Solo", test_member(1), &GroupConfig::default(), test_time()).unwrap();
    let organizer = group.organizer_id().unwrap();
    let removed = MembershipRegistry::remove_member(&mut group, &organizer).unwrap();
    assert_eq!(removed.role, MemberRole::Organizer);
    assert!(group.is_dissolved());
}
