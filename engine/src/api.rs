//! Headless simulation API over the built-in content: serde configs in,
//! serde reports out. This is what the CLI and the Monte Carlo harness
//! drive.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::combat::{ActionChoice, CombatEngine, PlayerAction, ScriptedChooser, Verbosity};
use crate::content::{MemoryDefinitions, MemoryStore};
use crate::encounter::{EncounterService, PlanSource};
use crate::model::{AbilityScores, Character, SceneContext};
use crate::Dice;

fn default_class() -> String {
    "fighter".to_string()
}

fn default_level() -> i32 {
    1
}

fn default_max_enemies() -> usize {
    3
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BattleConfig {
    pub entity_id: i64,
    #[serde(default = "default_class")]
    pub class_name: String,
    #[serde(default = "default_level")]
    pub level: i32,
    #[serde(default)]
    pub seed: u64,
    #[serde(default)]
    pub verbosity: Verbosity,
    /// Action script, e.g. `["dodge", "cast-spell:magic-missile"]`.
    /// Exhausted scripts fall back to attacking.
    #[serde(default)]
    pub script: Vec<String>,
    #[serde(default)]
    pub scene: SceneContext,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct BattleReport {
    pub winner: String,
    pub rounds: u32,
    pub fled: bool,
    pub player_hp_end: i32,
    pub enemy_hp_end: i32,
    pub xp_gained: i32,
    pub log: Vec<String>,
}

/// Parse one script token: an action label (case-insensitive, spaces or
/// hyphens) with an optional `:spell-slug` suffix.
pub fn parse_action(token: &str) -> Option<ActionChoice> {
    let (action, spell) = match token.split_once(':') {
        Some((action, spell)) => (action, Some(spell.trim().to_string())),
        None => (token, None),
    };
    let action = match action.trim().to_lowercase().replace(' ', "-").as_str() {
        "attack" => PlayerAction::Attack,
        "rage-attack" | "rage" => PlayerAction::RageAttack,
        "cast-spell" | "cast" => PlayerAction::CastSpell,
        "dash" => PlayerAction::Dash,
        "dodge" => PlayerAction::Dodge,
        "use-item" | "item" => PlayerAction::UseItem,
        "flee" => PlayerAction::Flee,
        _ => return None,
    };
    Some(ActionChoice { action, spell })
}

/// A ready-to-fight adventurer of the given class, with starting gear
/// matching the class's derivation table.
pub fn sample_adventurer(class_name: &str, level: i32) -> Character {
    let slug = class_name.to_lowercase();
    let (attributes, inventory, hp_max) = match slug.as_str() {
        "fighter" => (
            AbilityScores { str_: 16, dex: 14, con: 14, int_: 10, wis: 12, cha: 8 },
            vec!["Chain Mail".to_string(), "Shield".to_string(), "Healing Potion".to_string()],
            12,
        ),
        "rogue" => (
            AbilityScores { str_: 10, dex: 16, con: 12, int_: 13, wis: 12, cha: 10 },
            vec!["Leather Armor".to_string(), "Healing Potion".to_string()],
            10,
        ),
        "barbarian" => (
            AbilityScores { str_: 17, dex: 13, con: 16, int_: 8, wis: 10, cha: 10 },
            vec!["Healing Potion".to_string()],
            14,
        ),
        "wizard" => (
            AbilityScores { str_: 8, dex: 14, con: 12, int_: 16, wis: 12, cha: 10 },
            vec!["Healing Potion".to_string()],
            8,
        ),
        _ => (AbilityScores::default(), vec!["Healing Potion".to_string()], 10),
    };
    let caster = matches!(slug.as_str(), "wizard" | "sorcerer" | "cleric" | "druid" | "bard");
    let hp_max = hp_max + (level - 1) * 6;
    Character {
        id: None,
        name: "Adventurer".to_string(),
        level,
        xp: 0,
        money: 10,
        class_name: Some(slug.clone()),
        race: Some("human".to_string()),
        race_traits: Vec::new(),
        background: None,
        background_features: Vec::new(),
        proficiencies: Vec::new(),
        attributes,
        hp_max,
        hp_current: hp_max,
        armour_class: 10,
        attack_bonus: 2,
        damage_die: "d6".to_string(),
        inventory,
        statuses: Vec::new(),
        spell_slots_max: if caster { 2 } else { 0 },
        spell_slots_current: if caster { 2 } else { 0 },
        cantrips: if caster { vec!["Fire Bolt".to_string()] } else { Vec::new() },
        known_spells: if caster {
            vec!["Magic Missile".to_string(), "Shield".to_string()]
        } else {
            Vec::new()
        },
        incoming_damage_multiplier: 1.0,
        outgoing_damage_multiplier: 1.0,
        alive: true,
        location_id: None,
        faction_id: None,
        speed: 30,
        difficulty: "normal".to_string(),
    }
}

pub fn run_battle(cfg: BattleConfig) -> Result<BattleReport> {
    let store = MemoryStore::builtin().context("loading builtin entity roster")?;
    let enemy = store
        .get(cfg.entity_id)
        .with_context(|| format!("no entity with id {}", cfg.entity_id))?;

    let player = sample_adventurer(&cfg.class_name, cfg.level);
    let xp_before = player.xp;
    let mut dice = Dice::from_seed(cfg.seed);
    let mut chooser =
        ScriptedChooser::new(cfg.script.iter().filter_map(|token| parse_action(token)));
    let engine = CombatEngine::new(cfg.verbosity);
    let result = engine.fight_turn_based(&mut dice, player, &enemy, &mut chooser, cfg.scene);

    let winner = if result.fled {
        "fled"
    } else if result.player_won {
        "player"
    } else if result.player.hp_current <= 0 {
        "enemy"
    } else {
        "draw"
    };
    Ok(BattleReport {
        winner: winner.to_string(),
        rounds: result.rounds,
        fled: result.fled,
        player_hp_end: result.player.hp_current,
        enemy_hp_end: result.enemy.hp_current,
        xp_gained: result.player.xp - xp_before,
        log: result.log.visible().map(str::to_string).collect(),
    })
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PlanConfig {
    pub location_id: i64,
    #[serde(default = "default_level")]
    pub player_level: i32,
    #[serde(default)]
    pub world_turn: u64,
    #[serde(default)]
    pub faction_bias: Option<String>,
    #[serde(default = "default_max_enemies")]
    pub max_enemies: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PlanReport {
    pub definition_id: Option<String>,
    pub source: PlanSource,
    pub seed: u64,
    pub enemies: Vec<PlannedEnemy>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PlannedEnemy {
    pub id: i64,
    pub name: String,
    pub level: i32,
}

pub fn plan_encounter(cfg: PlanConfig) -> Result<PlanReport> {
    let store = MemoryStore::builtin().context("loading builtin entity roster")?;
    let definitions = MemoryDefinitions::builtin().context("loading builtin encounters")?;
    let service = EncounterService::new(&store, Some(&definitions));
    let plan = service.generate_plan(
        cfg.location_id,
        cfg.player_level,
        cfg.world_turn,
        cfg.faction_bias.as_deref(),
        cfg.max_enemies,
    );
    let seed = EncounterService::context_seed(
        cfg.location_id,
        cfg.player_level,
        cfg.world_turn,
        cfg.faction_bias.as_deref(),
        cfg.max_enemies,
    );
    Ok(PlanReport {
        definition_id: plan.definition_id,
        source: plan.source,
        seed,
        enemies: plan
            .enemies
            .into_iter()
            .map(|entity| PlannedEnemy { id: entity.id, name: entity.name, level: entity.level })
            .collect(),
    })
}
