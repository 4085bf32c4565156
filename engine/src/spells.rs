//! The static spell catalogue consulted by the combat engine's
//! spell-casting sub-resolver. The catalogue carries each spell's slot
//! level directly (0 = cantrip), so no repository lookup is needed in
//! the middle of a round.

use std::sync::OnceLock;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::Ability;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// Attack roll with the spellcasting modifier.
    SpellAttack,
    /// Target saves against `8 + proficiency + spell_mod`.
    Save,
    /// No roll; the effect always applies.
    Auto,
}

#[derive(Debug, Clone, Copy)]
pub struct SpellDefinition {
    pub slug: &'static str,
    pub level: i32,
    pub resolution: Resolution,
    pub damage_dice: Option<&'static str>,
    pub damage_type: Option<&'static str>,
    pub save_ability: Option<Ability>,
    pub notes: Option<&'static str>,
}

impl SpellDefinition {
    const fn new(slug: &'static str, level: i32, resolution: Resolution) -> Self {
        Self {
            slug,
            level,
            resolution,
            damage_dice: None,
            damage_type: None,
            save_ability: None,
            notes: None,
        }
    }

    const fn dice(mut self, dice: &'static str, damage_type: &'static str) -> Self {
        self.damage_dice = Some(dice);
        self.damage_type = Some(damage_type);
        self
    }

    const fn save(mut self, ability: Ability) -> Self {
        self.save_ability = Some(ability);
        self
    }

    const fn note(mut self, notes: &'static str) -> Self {
        self.notes = Some(notes);
        self
    }
}

/// Ordered catalogue: insertion order is display order, which also
/// makes the "first known spell" fallback stable.
pub fn catalogue() -> &'static IndexMap<&'static str, SpellDefinition> {
    static CATALOGUE: OnceLock<IndexMap<&'static str, SpellDefinition>> = OnceLock::new();
    CATALOGUE.get_or_init(|| {
        use Resolution::*;
        let spells = [
            SpellDefinition::new("fire-bolt", 0, SpellAttack).dice("1d10", "fire"),
            SpellDefinition::new("ray-of-frost", 0, SpellAttack).dice("1d8", "cold"),
            SpellDefinition::new("sacred-flame", 0, Save).dice("1d8", "radiant").save(Ability::Dex),
            SpellDefinition::new("eldritch-blast", 0, SpellAttack).dice("1d10", "force"),
            SpellDefinition::new("vicious-mockery", 0, Save).dice("1d4", "psychic").save(Ability::Wis),
            SpellDefinition::new("magic-missile", 1, Auto).dice("3d4+3", "force"),
            SpellDefinition::new("burning-hands", 1, Save).dice("3d6", "fire").save(Ability::Dex),
            SpellDefinition::new("cure-wounds", 1, Auto).dice("1d8+mod", "healing"),
            SpellDefinition::new("shield", 1, Auto).note("+5 AC until your next turn"),
            SpellDefinition::new("hex", 1, Auto)
                .dice("1d6", "necrotic")
                .note("Mark target; full rider not yet modelled."),
        ];
        spells.into_iter().map(|spell| (spell.slug, spell)).collect()
    })
}

pub fn lookup(slug: &str) -> Option<&'static SpellDefinition> {
    catalogue().get(slug)
}

/// Lowercase, alphanumerics kept, everything else collapsed to single
/// hyphens: `"Magic Missile"` -> `"magic-missile"`.
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split(|ch: char| !ch.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
