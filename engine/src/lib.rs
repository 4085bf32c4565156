//! Dice-driven, turn-based RPG core: seeded rolls, derived combat
//! statistics, a multi-round battle resolver, and a deterministic
//! encounter planner. Presentation and persistence live elsewhere and
//! talk to this crate through the traits in [`combat`] and [`encounter`].

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub mod api;
pub mod combat;
pub mod content;
pub mod encounter;
pub mod intent;
pub mod model;
pub mod spells;
pub mod stats;
pub mod status;

pub use combat::{ActionChoice, ActionChooser, CombatEngine, CombatLog, CombatResult, Verbosity};
pub use model::{Ability, AbilityScores, Character, Entity, EntityKind, SceneContext};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AdMode {
    Normal,
    Advantage,
    Disadvantage,
}

/// One resolved d20: the raw dice (second die only under advantage or
/// disadvantage) and the die that counts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct D20 {
    pub rolls: (u8, Option<u8>),
    pub kept: u8,
}

pub struct Dice {
    rng: ChaCha8Rng,
}

impl Dice {
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    pub fn from_entropy() -> Self {
        Self { rng: ChaCha8Rng::from_entropy() }
    }

    pub fn d20(&mut self, mode: AdMode) -> D20 {
        let first = self.rng.gen_range(1..=20u8);
        match mode {
            AdMode::Normal => D20 { rolls: (first, None), kept: first },
            AdMode::Advantage => {
                let second = self.rng.gen_range(1..=20u8);
                D20 { rolls: (first, Some(second)), kept: first.max(second) }
            }
            AdMode::Disadvantage => {
                let second = self.rng.gen_range(1..=20u8);
                D20 { rolls: (first, Some(second)), kept: first.min(second) }
            }
        }
    }

    /// Roll a single die described as `"dN"` or a bare integer string.
    /// Sides are clamped to at least 2; malformed input resolves to 1.
    /// Dice specs come from data files, so this never panics.
    pub fn roll_die(&mut self, spec: &str) -> i32 {
        let spec = spec.trim();
        let digits = spec.strip_prefix('d').unwrap_or(spec);
        match digits.parse::<i64>() {
            Ok(sides) => self.rng.gen_range(1..=sides.max(2)) as i32,
            Err(_) => 1,
        }
    }

    /// Roll a `+`-joined expression of `NdX` groups, the literal token
    /// `mod` (contributes `max(ability_mod, 0)`), and flat integers.
    /// Unknown terms are skipped; the result is floored at 0.
    pub fn roll_expr(&mut self, expr: &str, ability_mod: i32) -> i32 {
        if expr.is_empty() {
            return 0;
        }
        let expr = expr.to_lowercase().replace(' ', "");
        let mut total: i64 = 0;
        for part in expr.split('+') {
            if let Some((num_str, die_str)) = part.split_once('d') {
                let num = if num_str.is_empty() {
                    1
                } else {
                    match num_str.parse::<i64>() {
                        Ok(n) => n,
                        Err(_) => continue,
                    }
                };
                let sides = if die_str.is_empty() {
                    6
                } else {
                    match die_str.parse::<i64>() {
                        Ok(s) => s,
                        Err(_) => continue,
                    }
                };
                for _ in 0..num.max(1) {
                    total += self.rng.gen_range(1..=sides.max(2));
                }
            } else if part == "mod" {
                total += i64::from(ability_mod.max(0));
            } else if let Ok(flat) = part.parse::<i64>() {
                total += flat;
            }
        }
        total.max(0) as i32
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AttackResult {
    pub rolls: (u8, Option<u8>),
    /// The kept d20.
    pub roll: i32,
    pub total: i32,
    pub ac: i32,
    pub hit: bool,
    pub crit: bool,
}

/// Roll a d20 (with advantage/disadvantage), add the combined bonus,
/// compare vs the target AC. A natural 20 always hits and always crits.
pub fn attack(dice: &mut Dice, mode: AdMode, bonus: i32, target_ac: i32) -> AttackResult {
    let d = dice.d20(mode);
    let roll = i32::from(d.kept);
    let total = roll + bonus;
    let crit = roll == 20;
    AttackResult {
        rolls: d.rolls,
        roll,
        total,
        ac: target_ac,
        hit: crit || total >= target_ac,
        crit,
    }
}

/// Weapon (or natural-attack) damage: base die, doubled dice on a crit,
/// plus an optional sneak die, `max(ability_bonus, 0)`, and a flat rage
/// bonus. Floored at 1 so a hit always hurts.
pub fn weapon_damage(
    dice: &mut Dice,
    die: &str,
    ability_bonus: i32,
    crit: bool,
    sneak_die: Option<&str>,
    rage_bonus: i32,
) -> i32 {
    let mut dmg = dice.roll_die(die);
    if crit {
        dmg += dice.roll_die(die);
    }
    if let Some(sneak) = sneak_die {
        dmg += dice.roll_die(sneak);
    }
    (dmg + ability_bonus.max(0) + rage_bonus).max(1)
}

/// Ability modifier = floor((score - 10) / 2) for integer scores.
pub fn ability_mod(score: i32) -> i32 {
    // `div_euclid` with positive divisor matches mathematical floor division.
    (score - 10).div_euclid(2)
}
