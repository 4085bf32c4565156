//! Domain records shared by the combat engine and the encounter planner.
//!
//! Entities are templates: combat always works on a [`Entity::battle_copy`]
//! so damage never leaks back into a shared roster.

use serde::{Deserialize, Serialize};

use crate::ability_mod;
use crate::status::StatusEffect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ability {
    Str,
    Dex,
    Con,
    Int,
    Wis,
    Cha,
}

fn default_score() -> i32 {
    10
}

/// The canonical six-key ability block. Legacy rosters used alternate
/// names (might/agility/wit/spirit); those are resolved once here, at
/// deserialization or via [`AbilityScores::from_named`], never at roll
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores {
    #[serde(rename = "strength", alias = "might", default = "default_score")]
    pub str_: i32,
    #[serde(rename = "dexterity", alias = "agility", default = "default_score")]
    pub dex: i32,
    #[serde(rename = "constitution", default = "default_score")]
    pub con: i32,
    #[serde(rename = "intelligence", alias = "wit", default = "default_score")]
    pub int_: i32,
    #[serde(rename = "wisdom", default = "default_score")]
    pub wis: i32,
    #[serde(rename = "charisma", alias = "spirit", default = "default_score")]
    pub cha: i32,
}

impl Default for AbilityScores {
    fn default() -> Self {
        Self { str_: 10, dex: 10, con: 10, int_: 10, wis: 10, cha: 10 }
    }
}

impl AbilityScores {
    /// Build a score block from loosely named pairs, preferring the
    /// canonical name over its alias and defaulting missing scores to 10.
    pub fn from_named<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, i32)>,
    {
        let mut scores = Self::default();
        let mut canonical_seen = [false; 6];
        for (name, value) in pairs {
            let (slot, canonical) = match name.to_lowercase().as_str() {
                "strength" => (0, true),
                "might" => (0, false),
                "dexterity" => (1, true),
                "agility" => (1, false),
                "constitution" => (2, true),
                "intelligence" => (3, true),
                "wit" => (3, false),
                "wisdom" => (4, true),
                "charisma" => (5, true),
                "spirit" => (5, false),
                _ => continue,
            };
            if canonical_seen[slot] && !canonical {
                continue;
            }
            let field = match slot {
                0 => &mut scores.str_,
                1 => &mut scores.dex,
                2 => &mut scores.con,
                3 => &mut scores.int_,
                4 => &mut scores.wis,
                _ => &mut scores.cha,
            };
            *field = value;
            canonical_seen[slot] |= canonical;
        }
        scores
    }

    pub fn score_of(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Str => self.str_,
            Ability::Dex => self.dex,
            Ability::Con => self.con,
            Ability::Int => self.int_,
            Ability::Wis => self.wis,
            Ability::Cha => self.cha,
        }
    }

    pub fn mod_of(&self, ability: Ability) -> i32 {
        ability_mod(self.score_of(ability))
    }

    /// Best of INT/WIS/CHA, used when a class has no mapped casting ability.
    pub fn best_mental_mod(&self) -> i32 {
        self.mod_of(Ability::Int)
            .max(self.mod_of(Ability::Wis))
            .max(self.mod_of(Ability::Cha))
    }
}

fn default_hp() -> i32 {
    10
}

fn default_damage_die() -> String {
    "d6".to_string()
}

fn default_true() -> bool {
    true
}

fn default_multiplier() -> f64 {
    1.0
}

fn default_speed() -> i32 {
    30
}

fn default_difficulty() -> String {
    "normal".to_string()
}

/// The player-controlled combatant. Mutated in place by the combat
/// engine; the caller persists the instance carried in
/// [`crate::CombatResult`]. Invariants: `0 <= hp_current <= hp_max` and
/// `spell_slots_current <= spell_slots_max`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default = "default_score")]
    pub level: i32,
    #[serde(default)]
    pub xp: i32,
    #[serde(default)]
    pub money: i32,
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub race: Option<String>,
    #[serde(default)]
    pub race_traits: Vec<String>,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub background_features: Vec<String>,
    #[serde(default)]
    pub proficiencies: Vec<String>,
    #[serde(default)]
    pub attributes: AbilityScores,
    #[serde(default = "default_hp")]
    pub hp_max: i32,
    #[serde(default = "default_hp")]
    pub hp_current: i32,
    #[serde(default = "default_score")]
    pub armour_class: i32,
    #[serde(default)]
    pub attack_bonus: i32,
    #[serde(default = "default_damage_die")]
    pub damage_die: String,
    #[serde(default)]
    pub inventory: Vec<String>,
    /// Ephemeral combat state (rage, dodge, shield ward). Cleared
    /// between battles by status expiry, not by the repository.
    #[serde(default)]
    pub statuses: Vec<StatusEffect>,
    #[serde(default)]
    pub spell_slots_max: i32,
    #[serde(default)]
    pub spell_slots_current: i32,
    #[serde(default)]
    pub cantrips: Vec<String>,
    #[serde(default)]
    pub known_spells: Vec<String>,
    #[serde(default = "default_multiplier")]
    pub incoming_damage_multiplier: f64,
    #[serde(default = "default_multiplier")]
    pub outgoing_damage_multiplier: f64,
    #[serde(default = "default_true")]
    pub alive: bool,
    #[serde(default)]
    pub location_id: Option<i64>,
    #[serde(default)]
    pub faction_id: Option<String>,
    #[serde(default = "default_speed")]
    pub speed: i32,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
}

impl Character {
    pub fn class_slug(&self) -> String {
        self.class_name.as_deref().unwrap_or("").to_lowercase()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Beast,
    Undead,
    Humanoid,
    Fiend,
    Construct,
    Dragon,
    #[serde(other)]
    #[default]
    Unknown,
}

fn default_entity_die() -> String {
    "d4".to_string()
}

/// An enemy template or battle-scoped instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: i64,
    pub name: String,
    #[serde(default = "default_score")]
    pub level: i32,
    #[serde(default)]
    pub kind: EntityKind,
    #[serde(default)]
    pub hp: i32,
    #[serde(default)]
    pub hp_max: i32,
    #[serde(default)]
    pub hp_current: i32,
    #[serde(default = "default_score")]
    pub armour_class: i32,
    #[serde(default)]
    pub attack_bonus: i32,
    #[serde(default = "default_entity_die")]
    pub damage_die: String,
    /// Flat saving-throw modifier used by save-based spells. Most
    /// roster entries leave it at 0.
    #[serde(default)]
    pub save_bonus: i32,
    #[serde(default)]
    pub faction_id: Option<String>,
    #[serde(default)]
    pub location_id: Option<i64>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub loot_tags: Vec<String>,
}

impl Entity {
    /// Clone for one battle, resolving unset hp fields. Templates are
    /// never mutated by combat.
    pub fn battle_copy(&self) -> Entity {
        let mut copy = self.clone();
        if copy.hp_max <= 0 {
            copy.hp_max = copy.hp.max(1);
        }
        if copy.hp_current <= 0 {
            copy.hp_current = copy.hp_max;
        }
        copy
    }

    pub fn hp_fraction(&self) -> f64 {
        f64::from(self.hp_current) / f64::from(self.hp_max.max(1))
    }

    /// Danger heuristic for encounter budgeting. Deliberately weighs
    /// survivability over burst damage so tanky enemies do not swamp
    /// low-level parties.
    pub fn threat_rating(&self) -> f64 {
        let avg_damage = average_roll(&self.damage_die);
        let mitigation = f64::from(self.armour_class - 10) * 0.2;
        (f64::from(self.hp.max(self.hp_max)) / 2.0
            + avg_damage
            + mitigation
            + f64::from(self.attack_bonus) * 0.5)
            .max(1.0)
    }
}

/// Expected value of an `NdX+M` expression; unparseable terms count 0.
fn average_roll(spec: &str) -> f64 {
    let spec = spec.trim().to_lowercase().replace(' ', "");
    let mut total = 0.0;
    for part in spec.split('+') {
        if let Some((num_str, die_str)) = part.split_once('d') {
            let num: f64 = if num_str.is_empty() { 1.0 } else { num_str.parse().unwrap_or(0.0) };
            let sides: f64 = die_str.parse().unwrap_or(0.0);
            if sides > 0.0 {
                total += num.max(1.0) * (sides + 1.0) / 2.0;
            }
        } else if let Ok(flat) = part.parse::<f64>() {
            total += flat;
        }
    }
    total
}

/// Overworld clock and threat state; persisted by its repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub current_turn: u64,
    #[serde(default)]
    pub threat_level: i32,
    #[serde(default)]
    pub flags: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub rng_seed: u64,
}

impl World {
    pub fn advance_turns(&mut self, ticks: u64) {
        self.current_turn += ticks;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Distance {
    #[default]
    Close,
    Mid,
    Far,
}

impl Distance {
    /// One dash-step toward melee.
    pub fn closer(self) -> Distance {
        match self {
            Distance::Far => Distance::Mid,
            Distance::Mid | Distance::Close => Distance::Close,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Distance::Close => "close",
            Distance::Mid => "mid",
            Distance::Far => "far",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Terrain {
    #[default]
    Open,
    Cramped,
    Difficult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player,
    Enemy,
}

/// Ephemeral per-encounter parameters. They bias behaviour but never
/// hard-gate which actions are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SceneContext {
    #[serde(default)]
    pub distance: Distance,
    #[serde(default)]
    pub terrain: Terrain,
    #[serde(default)]
    pub surprise: Option<Side>,
}
