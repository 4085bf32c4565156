use engine::intent::{select_enemy_action, EnemyAction, Intent};
use engine::model::{EntityKind, Terrain};
use engine::AdMode;

#[test]
fn kinds_map_to_intents() {
    assert_eq!(Intent::for_kind(EntityKind::Beast), Intent::Aggressive);
    assert_eq!(Intent::for_kind(EntityKind::Dragon), Intent::Aggressive);
    assert_eq!(Intent::for_kind(EntityKind::Undead), Intent::Brute);
    assert_eq!(Intent::for_kind(EntityKind::Construct), Intent::Brute);
    assert_eq!(Intent::for_kind(EntityKind::Humanoid), Intent::Cautious);
    assert_eq!(Intent::for_kind(EntityKind::Fiend), Intent::Ambusher);
    assert_eq!(Intent::for_kind(EntityKind::Unknown), Intent::Aggressive);
}

#[test]
fn cautious_flees_when_badly_hurt() {
    let (action, mode) = select_enemy_action(Intent::Cautious, 0.2, 3, Terrain::Open);
    assert_eq!(action, EnemyAction::Flee);
    assert_eq!(mode, None);
}

#[test]
fn cautious_fights_defensively_when_bloodied() {
    let (action, mode) = select_enemy_action(Intent::Cautious, 0.4, 2, Terrain::Open);
    assert_eq!(action, EnemyAction::Attack);
    assert_eq!(mode, Some(AdMode::Disadvantage));
}

#[test]
fn aggressive_turns_reckless_when_cornered() {
    let (action, mode) = select_enemy_action(Intent::Aggressive, 0.25, 5, Terrain::Open);
    assert_eq!(action, EnemyAction::Reckless);
    assert_eq!(mode, Some(AdMode::Advantage));
}

#[test]
fn brute_never_flees_at_any_hp() {
    for hp in [0.05, 0.25, 0.5, 1.0] {
        let (action, _) = select_enemy_action(Intent::Brute, hp, 4, Terrain::Difficult);
        assert_eq!(action, EnemyAction::Attack);
    }
}

#[test]
fn ambusher_opens_with_advantage_then_settles() {
    let (action, mode) = select_enemy_action(Intent::Ambusher, 1.0, 1, Terrain::Cramped);
    assert_eq!(action, EnemyAction::Attack);
    assert_eq!(mode, Some(AdMode::Advantage));

    let (action, mode) = select_enemy_action(Intent::Ambusher, 1.0, 2, Terrain::Cramped);
    assert_eq!(action, EnemyAction::Attack);
    assert_eq!(mode, None);
}

#[test]
fn skirmisher_flee_threshold_shifts_with_terrain() {
    // At 0.45 hp: open terrain lowers the threshold to 0.4, so it fights.
    let (open, _) = select_enemy_action(Intent::Skirmisher, 0.45, 3, Terrain::Open);
    assert_eq!(open, EnemyAction::Attack);
    // Anywhere else the threshold stays at 0.5 and it runs.
    let (cramped, _) = select_enemy_action(Intent::Skirmisher, 0.45, 3, Terrain::Cramped);
    assert_eq!(cramped, EnemyAction::Flee);
}

#[test]
fn skirmisher_badly_hurt_always_flees() {
    let (action, _) = select_enemy_action(Intent::Skirmisher, 0.1, 2, Terrain::Open);
    assert_eq!(action, EnemyAction::Flee);
}

#[test]
fn every_intent_has_flavour_text() {
    for intent in [
        Intent::Aggressive,
        Intent::Cautious,
        Intent::Ambusher,
        Intent::Brute,
        Intent::Skirmisher,
    ] {
        assert!(!intent.flavour().is_empty());
    }
}
