//! Derived combat statistics.
//!
//! Everything here is a pure function of the character record. Derived
//! numbers are recomputed at combat start rather than cached on the
//! character, so stale persisted stats can never drift into a battle.

use crate::model::{Ability, AbilityScores, Character};
use crate::status;

/// Proficiency bonus as a step function of level.
pub fn proficiency_bonus(level: i32) -> i32 {
    if level >= 17 {
        6
    } else if level >= 13 {
        5
    } else if level >= 9 {
        4
    } else if level >= 5 {
        3
    } else {
        2
    }
}

const WEAPON_BY_CLASS: &[(&str, &str, Ability)] = &[
    ("barbarian", "d12", Ability::Str),
    ("fighter", "d10", Ability::Str),
    ("paladin", "d8", Ability::Str),
    ("ranger", "d8", Ability::Dex),
    ("rogue", "d6", Ability::Dex),
    ("monk", "d6", Ability::Dex),
    ("bard", "d6", Ability::Dex),
    ("cleric", "d8", Ability::Str),
    ("druid", "d8", Ability::Dex),
    ("sorcerer", "d6", Ability::Cha),
    ("wizard", "d6", Ability::Int),
    ("warlock", "d8", Ability::Cha),
    ("artificer", "d8", Ability::Int),
];

const SPELL_ABILITY: &[(&str, Ability)] = &[
    ("wizard", Ability::Int),
    ("artificer", Ability::Int),
    ("sorcerer", Ability::Cha),
    ("bard", Ability::Cha),
    ("warlock", Ability::Cha),
    ("cleric", Ability::Wis),
    ("druid", Ability::Wis),
    ("ranger", Ability::Wis),
    ("paladin", Ability::Cha),
];

fn weapon_profile(class_slug: &str) -> (&'static str, Ability) {
    WEAPON_BY_CLASS
        .iter()
        .find(|(slug, _, _)| *slug == class_slug)
        .map(|(_, die, ability)| (*die, *ability))
        .unwrap_or(("d6", Ability::Str))
}

fn spell_mod(class_slug: &str, scores: &AbilityScores) -> i32 {
    SPELL_ABILITY
        .iter()
        .find(|(slug, _)| *slug == class_slug)
        .map(|(_, ability)| scores.mod_of(*ability))
        .unwrap_or_else(|| scores.best_mental_mod())
}

/// Armour class from worn armour (substring match over the inventory),
/// the dexterity contribution cap that armour imposes, a +2 shield
/// bonus, and any active status bonus. Floored at 10.
fn armour_class(player: &Character) -> i32 {
    let dex = player.attributes.mod_of(Ability::Dex);
    let inventory: Vec<String> = player.inventory.iter().map(|i| i.to_lowercase()).collect();
    let worn = |piece: &str| inventory.iter().any(|item| item.contains(piece));

    let (base, dex_cap) = if worn("chain mail") {
        (16, Some(0))
    } else if worn("scale mail") {
        (14, Some(2))
    } else if worn("chain shirt") {
        (13, Some(2))
    } else if worn("leather armor") {
        (11, None)
    } else {
        (10, None)
    };

    let shield = if worn("shield") { 2 } else { 0 };
    let dex_contrib = dex_cap.map_or(dex, |cap| dex.min(cap));
    (base + dex_contrib + shield + status::ac_bonus(&player.statuses)).max(10)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedStats {
    pub weapon_die: String,
    pub weapon_mod: i32,
    pub proficiency: i32,
    pub attack_bonus: i32,
    pub damage_die: String,
    pub damage_mod: i32,
    pub ac: i32,
    pub spell_mod: i32,
    pub spell_attack_bonus: i32,
}

/// Derive combat stats from attributes, gear, and class.
pub fn derive(player: &Character) -> DerivedStats {
    let slug = player.class_slug();
    let (die, ability) = weapon_profile(&slug);
    let weapon_mod = player.attributes.mod_of(ability);
    let proficiency = proficiency_bonus(player.level);
    let spell_mod = spell_mod(&slug, &player.attributes);
    DerivedStats {
        weapon_die: die.to_string(),
        weapon_mod,
        proficiency,
        attack_bonus: proficiency + weapon_mod,
        damage_die: die.to_string(),
        damage_mod: weapon_mod,
        ac: armour_class(player),
        spell_mod,
        spell_attack_bonus: proficiency + spell_mod,
    }
}
