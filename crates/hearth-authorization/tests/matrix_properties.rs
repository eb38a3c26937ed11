//! Property tests for the permission matrix and tier presets

use hearth_authorization::{Capability, PermissionMatrix, PermissionTier};
use hearth_core::{HearthError, MemberId};
use proptest::prelude::*;

fn test_member(seed: u8) -> MemberId {
    MemberId::new_from_entropy([seed; 32])
}

fn arb_capability() -> impl Strategy<Value = Capability> {
    prop::sample::select(Capability::ALL.to_vec())
}

fn arb_tier() -> impl Strategy<Value = PermissionTier> {
    prop::sample::select(PermissionTier::ALL.to_vec())
}

#[derive(Debug, Clone)]
enum Edit {
    Grant(u8, Capability),
    Revoke(u8, Capability),
    Preset(u8, PermissionTier),
}

fn arb_edit() -> impl Strategy<Value = Edit> {
    prop_oneof![
        (1u8..6, arb_capability()).prop_map(|(m, c)| Edit::Grant(m, c)),
        (1u8..6, arb_capability()).prop_map(|(m, c)| Edit::Revoke(m, c)),
        (1u8..6, arb_tier()).prop_map(|(m, t)| Edit::Preset(m, t)),
    ]
}

fn apply(matrix: &mut PermissionMatrix, edit: &Edit) -> Result<(), HearthError> {
    match edit {
        Edit::Grant(m, c) => {
            matrix.grant(test_member(*m), *c);
            Ok(())
        }
        Edit::Revoke(m, c) => matrix.revoke(test_member(*m), *c).map(|_| ()),
        Edit::Preset(m, t) => matrix.apply_preset(test_member(*m), *t),
    }
}

proptest! {
    /// currentTier(applyPreset(m, t)) == t regardless of prior grants
    #[test]
    fn preset_roundtrip(edits in prop::collection::vec(arb_edit(), 0..30), member in 2u8..6, tier in arb_tier()) {
        let mut matrix = PermissionMatrix::new(test_member(1));
        for edit in &edits {
            let _ = apply(&mut matrix, edit);
        }
        matrix.apply_preset(test_member(member), tier).unwrap();
        prop_assert_eq!(matrix.current_tier(&test_member(member)), tier);
        prop_assert!(matrix.is_canonical(&test_member(member)));
    }

    /// The creator keeps all five capabilities under any edit sequence,
    /// and rejected edits leave the matrix unchanged
    #[test]
    fn creator_keeps_full_control(edits in prop::collection::vec(arb_edit(), 0..40)) {
        let creator = test_member(1);
        let mut matrix = PermissionMatrix::new(creator);
        for edit in &edits {
            let before = matrix.clone();
            if let Err(err) = apply(&mut matrix, edit) {
                let is_invariant = matches!(err, HearthError::InvariantViolation { .. });
                prop_assert!(is_invariant);
                prop_assert_eq!(&matrix, &before);
            }
            for capability in Capability::ALL {
                prop_assert!(matrix.has_capability(&creator, capability));
            }
        }
    }

    /// Album members are exactly the union of the capability sets
    #[test]
    fn members_are_union_of_sets(edits in prop::collection::vec(arb_edit(), 0..30)) {
        let mut matrix = PermissionMatrix::new(test_member(1));
        for edit in &edits {
            let _ = apply(&mut matrix, edit);
        }
        for seed in 1u8..6 {
            let member = test_member(seed);
            let holds_any = !matrix.capabilities_of(&member).is_empty();
            prop_assert_eq!(matrix.members().contains(&member), holds_any);
        }
    }
}

#[test]
fn admin_preset_then_current_tier() {
    let mut matrix = PermissionMatrix::new(test_member(1));
    let member = test_member(2);
    matrix.apply_preset(member, PermissionTier::Admin).unwrap();
    assert_eq!(matrix.current_tier(&member), PermissionTier::Admin);
}
