use engine::status::{
    ac_bonus, apply, is_active, rage_bonus, tick_end_of_round, StatusEffect, StatusKind,
};

#[test]
fn reapplying_a_status_refreshes_instead_of_stacking() {
    let mut statuses = Vec::new();
    apply(&mut statuses, StatusEffect::raging());
    apply(&mut statuses, StatusEffect { kind: StatusKind::Raging, rounds_left: 1 });
    assert_eq!(statuses.len(), 1);
    // Refresh keeps the longer duration.
    assert_eq!(statuses[0].rounds_left, 3);
}

#[test]
fn shield_ward_grants_five_ac_for_one_round() {
    let mut statuses = Vec::new();
    apply(&mut statuses, StatusEffect::shield_ward());
    assert_eq!(ac_bonus(&statuses), 5);

    let mut expired = Vec::new();
    tick_end_of_round(&mut statuses, |kind| expired.push(kind));
    assert!(statuses.is_empty());
    assert_eq!(expired, vec![StatusKind::ShieldWard]);
    assert_eq!(ac_bonus(&statuses), 0);
}

#[test]
fn rage_lasts_three_rounds_and_adds_damage() {
    let mut statuses = Vec::new();
    apply(&mut statuses, StatusEffect::raging());
    assert_eq!(rage_bonus(&statuses), 2);

    for _ in 0..2 {
        tick_end_of_round(&mut statuses, |_| {});
        assert!(is_active(&statuses, StatusKind::Raging));
    }
    tick_end_of_round(&mut statuses, |_| {});
    assert!(!is_active(&statuses, StatusKind::Raging));
    assert_eq!(rage_bonus(&statuses), 0);
}

#[test]
fn dodge_clears_at_the_round_boundary() {
    let mut statuses = Vec::new();
    apply(&mut statuses, StatusEffect::dodging());
    assert!(is_active(&statuses, StatusKind::Dodging));
    tick_end_of_round(&mut statuses, |_| {});
    assert!(!is_active(&statuses, StatusKind::Dodging));
}

#[test]
fn independent_statuses_coexist_and_expire_separately() {
    let mut statuses = Vec::new();
    apply(&mut statuses, StatusEffect::raging());
    apply(&mut statuses, StatusEffect::shield_ward());
    assert_eq!(statuses.len(), 2);
    assert_eq!(ac_bonus(&statuses), 5);
    assert_eq!(rage_bonus(&statuses), 2);

    let mut expired = Vec::new();
    tick_end_of_round(&mut statuses, |kind| expired.push(kind));
    assert_eq!(expired, vec![StatusKind::ShieldWard]);
    assert!(is_active(&statuses, StatusKind::Raging));
}
