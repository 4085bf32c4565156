//! Enemy behaviour: a coarse intent per creature kind, and a pure
//! per-round action selector driven by hp fraction, round number, and
//! terrain.

use crate::model::{EntityKind, Terrain};
use crate::AdMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Aggressive,
    Cautious,
    Ambusher,
    Brute,
    Skirmisher,
}

impl Intent {
    pub fn for_kind(kind: EntityKind) -> Intent {
        match kind {
            EntityKind::Beast | EntityKind::Dragon => Intent::Aggressive,
            EntityKind::Undead | EntityKind::Construct => Intent::Brute,
            EntityKind::Humanoid => Intent::Cautious,
            EntityKind::Fiend => Intent::Ambusher,
            EntityKind::Unknown => Intent::Aggressive,
        }
    }

    pub fn flavour(self) -> &'static str {
        match self {
            Intent::Aggressive => "The foe lunges without hesitation.",
            Intent::Cautious => "The foe eyes an escape route.",
            Intent::Ambusher => "The foe strikes from the shadows.",
            Intent::Brute => "The foe marches forward, uncaring of pain.",
            Intent::Skirmisher => "The foe darts in and out of reach.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyAction {
    Attack,
    Flee,
    /// Attack with advantage at the cost of the enemy's own AC.
    Reckless,
}

/// Choose the enemy's action for this round. Terrain only nudges the
/// skirmisher flee threshold (±0.1); every other branch ignores it.
pub fn select_enemy_action(
    intent: Intent,
    hp_fraction: f64,
    round: u32,
    terrain: Terrain,
) -> (EnemyAction, Option<AdMode>) {
    if hp_fraction <= 0.25 {
        if matches!(intent, Intent::Cautious | Intent::Skirmisher) {
            return (EnemyAction::Flee, None);
        }
        if intent == Intent::Aggressive {
            return (EnemyAction::Reckless, Some(AdMode::Advantage));
        }
    }
    if hp_fraction <= 0.5 && intent == Intent::Cautious {
        // Defensive posture: keeps swinging, but half-heartedly.
        return (EnemyAction::Attack, Some(AdMode::Disadvantage));
    }

    match intent {
        Intent::Ambusher => {
            let mode = if round == 1 { Some(AdMode::Advantage) } else { None };
            (EnemyAction::Attack, mode)
        }
        Intent::Brute => (EnemyAction::Attack, None),
        Intent::Skirmisher => {
            let bias = if terrain == Terrain::Open { 0.1 } else { 0.0 };
            if hp_fraction < 0.5 - bias {
                (EnemyAction::Flee, None)
            } else {
                (EnemyAction::Attack, None)
            }
        }
        _ => (EnemyAction::Attack, None),
    }
}
