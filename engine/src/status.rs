//! Transient combat statuses.
//!
//! These replace the old string-keyed flag bag with a small tagged
//! union: each effect carries its remaining duration and expires at a
//! round boundary, so the whole state machine is auditable on its own.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    /// Barbarian rage: +2 outgoing melee damage.
    Raging,
    /// Incoming attacks roll at disadvantage until the round ends.
    Dodging,
    /// Shield spell barrier: +5 AC for exactly one round.
    ShieldWard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEffect {
    pub kind: StatusKind,
    /// Decremented once per round; the effect ends when it reaches 0.
    pub rounds_left: u32,
}

impl StatusEffect {
    pub fn raging() -> Self {
        Self { kind: StatusKind::Raging, rounds_left: 3 }
    }

    pub fn dodging() -> Self {
        Self { kind: StatusKind::Dodging, rounds_left: 1 }
    }

    pub fn shield_ward() -> Self {
        Self { kind: StatusKind::ShieldWard, rounds_left: 1 }
    }

    pub fn ac_bonus(&self) -> i32 {
        match self.kind {
            StatusKind::ShieldWard => 5,
            _ => 0,
        }
    }
}

/// Add an effect; re-applying an active kind refreshes its duration
/// instead of stacking a duplicate.
pub fn apply(statuses: &mut Vec<StatusEffect>, effect: StatusEffect) {
    if let Some(existing) = statuses.iter_mut().find(|s| s.kind == effect.kind) {
        existing.rounds_left = existing.rounds_left.max(effect.rounds_left);
    } else {
        statuses.push(effect);
    }
}

pub fn is_active(statuses: &[StatusEffect], kind: StatusKind) -> bool {
    statuses.iter().any(|s| s.kind == kind)
}

pub fn ac_bonus(statuses: &[StatusEffect]) -> i32 {
    statuses.iter().map(StatusEffect::ac_bonus).sum()
}

/// Flat damage bonus while raging.
pub fn rage_bonus(statuses: &[StatusEffect]) -> i32 {
    if is_active(statuses, StatusKind::Raging) {
        2
    } else {
        0
    }
}

/// End-of-round tick: decrement every duration and drop expired
/// effects, reporting each expiry to the caller for narration.
pub fn tick_end_of_round(statuses: &mut Vec<StatusEffect>, mut expired: impl FnMut(StatusKind)) {
    for status in statuses.iter_mut() {
        status.rounds_left = status.rounds_left.saturating_sub(1);
    }
    statuses.retain(|status| {
        if status.rounds_left == 0 {
            expired(status.kind);
            false
        } else {
            true
        }
    });
}
