//! The turn-based battle resolver.
//!
//! The engine owns sequencing and dice; the presentation layer supplies
//! an [`ActionChooser`] that picks from the options offered each round,
//! so the whole fight can run headless under a scripted chooser.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::intent::{select_enemy_action, EnemyAction, Intent};
use crate::model::{Ability, Character, Distance, Entity, SceneContext, Side};
use crate::spells::{self, Resolution};
use crate::stats;
use crate::status::{self, StatusEffect, StatusKind};
use crate::{attack, weapon_damage, AdMode, AttackResult, Dice};

/// Guard against runaway loops, not a game rule. A battle that reaches
/// the cap ends as a draw: nobody wins, nobody flees, no XP.
const MAX_ROUNDS: u32 = 50;

/// Narration tiers; each tier includes everything below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Verbosity {
    #[default]
    Compact,
    Normal,
    Debug,
}

#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub text: String,
    pub level: Verbosity,
    /// True when the entry sat above the active verbosity at emission
    /// time. Suppressed lines are recorded, never silently dropped.
    pub suppressed: bool,
}

/// Ordered, append-only combat narration. Filtering happens when a line
/// is emitted, not by truncating a full log afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct CombatLog {
    verbosity: Verbosity,
    entries: Vec<LogEntry>,
}

impl CombatLog {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity, entries: Vec::new() }
    }

    pub fn push(&mut self, level: Verbosity, text: impl Into<String>) {
        let suppressed = level > self.verbosity;
        self.entries.push(LogEntry { text: text.into(), level, suppressed });
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Lines at or below the active verbosity, in emission order.
    pub fn visible(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter(|e| !e.suppressed).map(|e| e.text.as_str())
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.entries.iter().any(|e| e.text.contains(needle))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerAction {
    Attack,
    RageAttack,
    CastSpell,
    Dash,
    Dodge,
    UseItem,
    Flee,
}

impl PlayerAction {
    pub fn label(self) -> &'static str {
        match self {
            PlayerAction::Attack => "Attack",
            PlayerAction::RageAttack => "Rage Attack",
            PlayerAction::CastSpell => "Cast Spell",
            PlayerAction::Dash => "Dash",
            PlayerAction::Dodge => "Dodge",
            PlayerAction::UseItem => "Use Item",
            PlayerAction::Flee => "Flee",
        }
    }
}

/// A chosen action, optionally naming a spell slug for [`PlayerAction::CastSpell`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionChoice {
    pub action: PlayerAction,
    pub spell: Option<String>,
}

impl ActionChoice {
    pub fn cast(slug: impl Into<String>) -> Self {
        Self { action: PlayerAction::CastSpell, spell: Some(slug.into()) }
    }
}

impl From<PlayerAction> for ActionChoice {
    fn from(action: PlayerAction) -> Self {
        Self { action, spell: None }
    }
}

/// Strategy seam between the engine and any frontend. Implementations
/// must pick from `options`; anything else degrades to Dodge (the
/// engine logs the fallback rather than crashing).
pub trait ActionChooser {
    fn choose(
        &mut self,
        options: &[PlayerAction],
        player: &Character,
        enemy: &Entity,
        round: u32,
        scene: &SceneContext,
    ) -> ActionChoice;
}

impl<F> ActionChooser for F
where
    F: FnMut(&[PlayerAction], &Character, &Entity, u32, &SceneContext) -> ActionChoice,
{
    fn choose(
        &mut self,
        options: &[PlayerAction],
        player: &Character,
        enemy: &Entity,
        round: u32,
        scene: &SceneContext,
    ) -> ActionChoice {
        self(options, player, enemy, round, scene)
    }
}

/// Deterministic chooser for tests and headless simulation: plays a
/// fixed script, then attacks forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedChooser {
    script: VecDeque<ActionChoice>,
}

impl ScriptedChooser {
    pub fn new(script: impl IntoIterator<Item = ActionChoice>) -> Self {
        Self { script: script.into_iter().collect() }
    }
}

impl ActionChooser for ScriptedChooser {
    fn choose(
        &mut self,
        _options: &[PlayerAction],
        _player: &Character,
        _enemy: &Entity,
        _round: u32,
        _scene: &SceneContext,
    ) -> ActionChoice {
        self.script.pop_front().unwrap_or_else(|| PlayerAction::Attack.into())
    }
}

/// Outcome of one battle. `player` is the authoritative post-battle
/// state; callers persist it before any other mutation.
#[derive(Debug, Clone, Serialize)]
pub struct CombatResult {
    pub player: Character,
    pub enemy: Entity,
    pub log: CombatLog,
    pub player_won: bool,
    pub fled: bool,
    pub rounds: u32,
}

pub struct CombatEngine {
    verbosity: Verbosity,
}

impl Default for CombatEngine {
    fn default() -> Self {
        Self::new(Verbosity::Compact)
    }
}

impl CombatEngine {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    /// Multi-round battle between the player and one enemy.
    ///
    /// The enemy template is cloned before the first roll; the player is
    /// mutated in place and carried out through the result.
    pub fn fight_turn_based(
        &self,
        dice: &mut Dice,
        mut player: Character,
        enemy: &Entity,
        chooser: &mut dyn ActionChooser,
        mut scene: SceneContext,
    ) -> CombatResult {
        let mut log = CombatLog::new(self.verbosity);
        let mut foe = enemy.battle_copy();
        if player.hp_max <= 0 {
            player.hp_max = player.hp_current.max(1);
        }
        player.hp_current = player.hp_current.clamp(0, player.hp_max);

        let derived = stats::derive(&player);
        player.armour_class = derived.ac;
        let proficiency = derived.proficiency;
        let weapon_mod = derived.weapon_mod;
        let spell_mod = derived.spell_mod;
        let class_slug = player.class_slug();
        let is_rogue = class_slug == "rogue";
        let rage_capable = class_slug == "barbarian";
        let mut sneak_available = is_rogue;

        let initiative_player = roll_initiative(
            dice,
            scene.surprise == Some(Side::Player),
            player.attributes.mod_of(Ability::Dex),
        );
        let initiative_enemy =
            roll_initiative(dice, scene.surprise == Some(Side::Enemy), foe.attack_bonus);
        // Ties favour the player.
        let player_first = initiative_player >= initiative_enemy;
        log.push(
            Verbosity::Normal,
            format!("Initiative: you {initiative_player} vs {} {initiative_enemy}.", foe.name),
        );
        let order: [Side; 2] =
            if player_first { [Side::Player, Side::Enemy] } else { [Side::Enemy, Side::Player] };

        let mut round = 0u32;
        loop {
            if player.hp_current <= 0 || foe.hp_current <= 0 {
                break;
            }
            round += 1;
            if round > MAX_ROUNDS {
                round = MAX_ROUNDS;
                log.push(
                    Verbosity::Compact,
                    "Exhaustion takes both of you; the battle ends without a victor.",
                );
                break;
            }
            if is_rogue {
                sneak_available = true;
            }
            log.push(Verbosity::Debug, format!("-- Round {round} --"));
            debug!(round, player_hp = player.hp_current, enemy_hp = foe.hp_current, "round begins");
            let intent = Intent::for_kind(foe.kind);
            let mut flavour_spent = false;

            'round: for side in order {
                if player.hp_current <= 0 || foe.hp_current <= 0 {
                    break;
                }
                match side {
                    Side::Player => {
                        let opening = if player_first && round == 1 {
                            Some(AdMode::Advantage)
                        } else {
                            None
                        };
                        let mut options = vec![
                            PlayerAction::Attack,
                            PlayerAction::Dash,
                            PlayerAction::Dodge,
                            PlayerAction::UseItem,
                            PlayerAction::Flee,
                        ];
                        if player.spell_slots_current > 0 || !player.cantrips.is_empty() {
                            options.insert(1, PlayerAction::CastSpell);
                        }
                        if rage_capable && !status::is_active(&player.statuses, StatusKind::Raging)
                        {
                            options.insert(1, PlayerAction::RageAttack);
                        }

                        let choice = chooser.choose(&options, &player, &foe, round, &scene);
                        let mut action = choice.action;
                        if !options.contains(&action) {
                            log.push(
                                Verbosity::Normal,
                                format!(
                                    "{} is not an option right now; you fall back to defense.",
                                    action.label()
                                ),
                            );
                            action = PlayerAction::Dodge;
                        }

                        if action == PlayerAction::RageAttack {
                            status::apply(&mut player.statuses, StatusEffect::raging());
                            log.push(Verbosity::Normal, "You fly into a rage!");
                            action = PlayerAction::Attack;
                        }

                        match action {
                            PlayerAction::Attack | PlayerAction::RageAttack => {
                                let result = attack_roll(
                                    dice,
                                    &mut log,
                                    opening,
                                    0,
                                    proficiency,
                                    weapon_mod,
                                    foe.armour_class,
                                    &player.name,
                                );
                                if result.hit {
                                    let sneak = if sneak_available { Some("d6") } else { None };
                                    let dmg = weapon_damage(
                                        dice,
                                        &derived.damage_die,
                                        derived.damage_mod,
                                        result.crit,
                                        sneak,
                                        status::rage_bonus(&player.statuses),
                                    );
                                    foe.hp_current = (foe.hp_current - dmg).max(0);
                                    log.push(
                                        Verbosity::Compact,
                                        format!(
                                            "You deal {dmg} damage to {} ({}/{}).",
                                            foe.name, foe.hp_current, foe.hp_max
                                        ),
                                    );
                                    sneak_available = false;
                                } else {
                                    log.push(Verbosity::Compact, "Your strike fails to connect.");
                                }
                            }
                            PlayerAction::CastSpell => {
                                self.resolve_spell(
                                    dice,
                                    &mut log,
                                    &mut player,
                                    &mut foe,
                                    choice.spell.as_deref(),
                                    spell_mod,
                                    proficiency,
                                );
                            }
                            PlayerAction::Dodge => {
                                status::apply(&mut player.statuses, StatusEffect::dodging());
                                log.push(
                                    Verbosity::Compact,
                                    "You focus on defense; incoming attacks have disadvantage.",
                                );
                            }
                            PlayerAction::UseItem => {
                                if let Some(pos) =
                                    player.inventory.iter().position(|i| i == "Healing Potion")
                                {
                                    player.inventory.remove(pos);
                                    let heal = dice.roll_expr("2d4+2", 0);
                                    player.hp_current =
                                        (player.hp_current + heal).min(player.hp_max);
                                    log.push(
                                        Verbosity::Compact,
                                        format!(
                                            "You drink a potion and heal {heal} HP ({}/{}).",
                                            player.hp_current, player.hp_max
                                        ),
                                    );
                                } else {
                                    log.push(Verbosity::Compact, "No usable items found.");
                                }
                            }
                            PlayerAction::Flee => {
                                let roll = i32::from(dice.d20(AdMode::Normal).kept) + weapon_mod;
                                if roll >= 12 {
                                    log.push(Verbosity::Compact, "You slip away from the fight!");
                                    player.alive = player.hp_current > 0;
                                    return CombatResult {
                                        player,
                                        enemy: foe,
                                        log,
                                        player_won: false,
                                        fled: true,
                                        rounds: round,
                                    };
                                }
                                log.push(Verbosity::Compact, "You fail to escape.");
                            }
                            PlayerAction::Dash => {
                                scene.distance = scene.distance.closer();
                                log.push(
                                    Verbosity::Compact,
                                    format!(
                                        "You dash forward. Distance is now {}.",
                                        scene.distance.label()
                                    ),
                                );
                            }
                        }
                    }
                    Side::Enemy => {
                        if !flavour_spent {
                            log.push(Verbosity::Normal, intent.flavour());
                            flavour_spent = true;
                        }
                        let (enemy_action, mut enemy_mode) =
                            select_enemy_action(intent, foe.hp_fraction(), round, scene.terrain);

                        if enemy_action == EnemyAction::Flee {
                            log.push(
                                Verbosity::Compact,
                                format!("{} tries to flee the battle!", foe.name),
                            );
                            foe.hp_current = 0;
                            break 'round;
                        }

                        if scene.distance == Distance::Far {
                            log.push(Verbosity::Compact, format!("{} closes in.", foe.name));
                            scene.distance = Distance::Mid;
                            continue;
                        }
                        if scene.distance == Distance::Mid {
                            // Ranged combat is not modelled; a long-reach
                            // swing is just a disadvantaged one.
                            enemy_mode = Some(AdMode::Disadvantage);
                        }
                        if enemy_action == EnemyAction::Reckless {
                            enemy_mode = Some(AdMode::Advantage);
                            foe.armour_class = (foe.armour_class - 2).max(8);
                            log.push(
                                Verbosity::Compact,
                                format!("{} fights recklessly, leaving openings.", foe.name),
                            );
                        }

                        let mode = if status::is_active(&player.statuses, StatusKind::Dodging) {
                            Some(AdMode::Disadvantage)
                        } else {
                            enemy_mode
                        };
                        // Recompute so a mid-fight shield ward counts.
                        let target_ac = stats::derive(&player).ac;
                        let result = attack_roll(
                            dice,
                            &mut log,
                            mode,
                            foe.attack_bonus,
                            0,
                            0,
                            target_ac,
                            &foe.name,
                        );
                        if result.hit {
                            let dmg =
                                weapon_damage(dice, &foe.damage_die, 0, result.crit, None, 0);
                            player.hp_current = (player.hp_current - dmg).max(0);
                            log.push(
                                Verbosity::Compact,
                                format!(
                                    "{} hits you for {dmg} damage ({}/{}).",
                                    foe.name, player.hp_current, player.hp_max
                                ),
                            );
                        } else {
                            log.push(Verbosity::Compact, format!("{} misses you.", foe.name));
                        }
                    }
                }
            }

            status::tick_end_of_round(&mut player.statuses, |kind| {
                let line = match kind {
                    StatusKind::Raging => "Your rage subsides.",
                    StatusKind::ShieldWard => "The shimmering barrier fades.",
                    StatusKind::Dodging => return,
                };
                log.push(Verbosity::Normal, line);
            });
        }

        player.alive = player.hp_current > 0;
        let mut player_won = false;
        if foe.hp_current <= 0 {
            let xp = (foe.level * 5).max(1);
            player.xp += xp;
            log.push(Verbosity::Compact, format!("{} falls. +{xp} XP.", foe.name));
            player_won = player.hp_current > 0;
        }

        CombatResult { player, enemy: foe, log, player_won, fled: false, rounds: round }
    }

    /// Single-exchange variant for lightweight callers: one player
    /// attack, then one counter-attack if the enemy survives. Uses the
    /// character's persisted stats and the difficulty multipliers.
    pub fn fight_simple(
        &self,
        dice: &mut Dice,
        mut player: Character,
        enemy: &Entity,
    ) -> CombatResult {
        let mut log = CombatLog::new(self.verbosity);
        let mut foe = enemy.battle_copy();

        self.simple_player_attack(dice, &mut log, &mut player, &mut foe);

        if foe.hp_current <= 0 {
            let xp = (foe.level * 5).max(1);
            player.xp += xp;
            log.push(Verbosity::Compact, format!("The {} collapses. (+{xp} XP)", foe.name));
            player.alive = player.hp_current > 0;
            return CombatResult {
                player,
                enemy: foe,
                log,
                player_won: true,
                fled: false,
                rounds: 1,
            };
        }

        self.simple_enemy_attack(dice, &mut log, &mut player, &mut foe);

        let player_won = player.hp_current > 0;
        if !player_won {
            log.push(Verbosity::Compact, "You drop to the ground, consciousness fading...");
        }
        player.alive = player.hp_current > 0;
        CombatResult { player, enemy: foe, log, player_won, fled: false, rounds: 1 }
    }

    fn simple_player_attack(
        &self,
        dice: &mut Dice,
        log: &mut CombatLog,
        player: &mut Character,
        foe: &mut Entity,
    ) {
        let roll = i32::from(dice.d20(AdMode::Normal).kept);
        let total = roll + player.attack_bonus;
        if roll == 20 {
            let raw = dice.roll_die(&player.damage_die) + dice.roll_die(&player.damage_die);
            let dmg = scale_damage(raw, player.outgoing_damage_multiplier);
            foe.hp_current = (foe.hp_current - dmg).max(0);
            log.push(
                Verbosity::Normal,
                format!(
                    "Critical hit! You roll a natural 20 and deal {dmg} damage ({}/{} HP left).",
                    foe.hp_current, foe.hp_max
                ),
            );
        } else if total >= foe.armour_class {
            let raw = dice.roll_die(&player.damage_die);
            let dmg = scale_damage(raw, player.outgoing_damage_multiplier);
            foe.hp_current = (foe.hp_current - dmg).max(0);
            log.push(
                Verbosity::Compact,
                format!(
                    "You roll {roll} + {} = {total} and hit for {dmg} damage ({}/{} HP left).",
                    player.attack_bonus, foe.hp_current, foe.hp_max
                ),
            );
        } else {
            log.push(
                Verbosity::Compact,
                format!("You roll {roll} + {} = {total} and miss.", player.attack_bonus),
            );
        }
    }

    fn simple_enemy_attack(
        &self,
        dice: &mut Dice,
        log: &mut CombatLog,
        player: &mut Character,
        foe: &mut Entity,
    ) {
        let roll = i32::from(dice.d20(AdMode::Normal).kept);
        let total = roll + foe.attack_bonus;
        if roll == 20 {
            let raw = dice.roll_die(&foe.damage_die) + dice.roll_die(&foe.damage_die);
            let dmg = scale_damage(raw, player.incoming_damage_multiplier);
            player.hp_current = (player.hp_current - dmg).max(0);
            log.push(
                Verbosity::Normal,
                format!(
                    "Critical! The {} lands a brutal blow for {dmg} damage ({}/{} HP left).",
                    foe.name, player.hp_current, player.hp_max
                ),
            );
        } else if total >= player.armour_class {
            let raw = dice.roll_die(&foe.damage_die);
            let dmg = scale_damage(raw, player.incoming_damage_multiplier);
            player.hp_current = (player.hp_current - dmg).max(0);
            log.push(
                Verbosity::Compact,
                format!(
                    "The {} rolls {roll} + {} = {total} and hits for {dmg} damage ({}/{} HP left).",
                    foe.name, foe.attack_bonus, player.hp_current, player.hp_max
                ),
            );
        } else {
            log.push(
                Verbosity::Compact,
                format!(
                    "The {} rolls {roll} + {} = {total} and misses you.",
                    foe.name, foe.attack_bonus
                ),
            );
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn resolve_spell(
        &self,
        dice: &mut Dice,
        log: &mut CombatLog,
        player: &mut Character,
        foe: &mut Entity,
        slug: Option<&str>,
        spell_mod: i32,
        proficiency: i32,
    ) {
        let fallback = player.known_spells.first().map(|name| spells::slugify(name));
        let slug = match slug.map(str::to_string).or(fallback) {
            Some(slug) => slug,
            None => {
                log.push(Verbosity::Compact, "You have no spells to cast.");
                return;
            }
        };
        let definition = match spells::lookup(&slug) {
            Some(definition) => definition,
            None => {
                log.push(Verbosity::Compact, format!("{slug} is not implemented in combat yet."));
                return;
            }
        };

        if definition.level > 0 {
            if player.spell_slots_current <= 0 {
                log.push(Verbosity::Compact, "No spell slots remaining.");
                return;
            }
            player.spell_slots_current -= 1;
            log.push(Verbosity::Compact, "You expend a spell slot.");
        }

        let spell_dc = 8 + proficiency + spell_mod;
        match definition.resolution {
            Resolution::SpellAttack => {
                let result = attack_roll(
                    dice,
                    log,
                    None,
                    0,
                    proficiency,
                    spell_mod,
                    foe.armour_class,
                    &player.name,
                );
                if result.hit {
                    let expr = definition.damage_dice.unwrap_or("1d6");
                    let mut dmg = dice.roll_expr(expr, spell_mod);
                    if result.crit {
                        dmg += dice.roll_expr(expr, 0);
                    }
                    apply_spell_effect(log, player, foe, dmg, definition.damage_type);
                } else {
                    log.push(Verbosity::Compact, "Your spell fizzles past the enemy.");
                }
            }
            Resolution::Save => {
                let save_roll = i32::from(dice.d20(AdMode::Normal).kept) + foe.save_bonus;
                log.push(
                    Verbosity::Debug,
                    format!("{} attempts a save: {save_roll} vs DC {spell_dc}.", foe.name),
                );
                if save_roll >= spell_dc {
                    log.push(Verbosity::Compact, format!("{} resists the spell.", foe.name));
                    return;
                }
                let dmg = dice.roll_expr(definition.damage_dice.unwrap_or("1d6"), spell_mod);
                apply_spell_effect(log, player, foe, dmg, definition.damage_type);
            }
            Resolution::Auto => {
                let dmg = dice.roll_expr(definition.damage_dice.unwrap_or("1d4"), spell_mod);
                if definition.damage_type == Some("healing") {
                    apply_spell_effect(log, player, foe, dmg, Some("healing"));
                } else if definition.slug == "shield" {
                    status::apply(&mut player.statuses, StatusEffect::shield_ward());
                    log.push(
                        Verbosity::Compact,
                        "A shimmering barrier grants +5 AC until your next turn.",
                    );
                } else {
                    apply_spell_effect(log, player, foe, dmg, definition.damage_type);
                }
            }
        }
    }
}

fn roll_initiative(dice: &mut Dice, surprise: bool, bonus: i32) -> i32 {
    let mode = if surprise { AdMode::Advantage } else { AdMode::Normal };
    i32::from(dice.d20(mode).kept) + bonus
}

/// Roll to hit and narrate the raw dice and the arithmetic at debug
/// tier. Miss/hit narration is the caller's.
#[allow(clippy::too_many_arguments)]
fn attack_roll(
    dice: &mut Dice,
    log: &mut CombatLog,
    mode: Option<AdMode>,
    attack_bonus: i32,
    proficiency: i32,
    ability_bonus: i32,
    target_ac: i32,
    attacker: &str,
) -> AttackResult {
    let mode = mode.unwrap_or(AdMode::Normal);
    let result = attack(dice, mode, attack_bonus + proficiency + ability_bonus, target_ac);
    match (mode, result.rolls.1) {
        (AdMode::Advantage, Some(alt)) => log.push(
            Verbosity::Debug,
            format!("{attacker} rolls {} and {alt} (advantage).", result.rolls.0),
        ),
        (AdMode::Disadvantage, Some(alt)) => log.push(
            Verbosity::Debug,
            format!("{attacker} rolls {} and {alt} (disadvantage).", result.rolls.0),
        ),
        _ => log.push(Verbosity::Debug, format!("{attacker} rolls {}.", result.rolls.0)),
    }
    log.push(
        Verbosity::Debug,
        format!(
            "Attack total: {} + {attack_bonus} (atk) + {proficiency} (prof) + {ability_bonus} (ability) = {} vs AC {target_ac}.",
            result.roll, result.total
        ),
    );
    result
}

/// Healing restores the caster, capped at max HP; anything else is
/// damage to the foe, floored at 1.
fn apply_spell_effect(
    log: &mut CombatLog,
    player: &mut Character,
    foe: &mut Entity,
    amount: i32,
    damage_type: Option<&str>,
) {
    if damage_type == Some("healing") {
        player.hp_current = (player.hp_current + amount).min(player.hp_max);
        log.push(
            Verbosity::Compact,
            format!("You restore {amount} HP ({}/{}).", player.hp_current, player.hp_max),
        );
    } else {
        let amount = amount.max(1);
        foe.hp_current = (foe.hp_current - amount).max(0);
        log.push(
            Verbosity::Compact,
            format!(
                "The spell hits {} for {amount} {} ({}/{}).",
                foe.name,
                damage_type.unwrap_or("damage"),
                foe.hp_current,
                foe.hp_max
            ),
        );
    }
}

fn scale_damage(raw: i32, multiplier: f64) -> i32 {
    ((f64::from(raw) * multiplier) as i32).max(1)
}
