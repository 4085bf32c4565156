//! Deterministic encounter planning.
//!
//! Every roll in this module comes from an owned generator seeded by the
//! caller (or by a stable hash of the encounter context), never from
//! global state: replanning the same context always reproduces the same
//! definition and the same enemy id sequence.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use rand::distributions::{Distribution, WeightedIndex};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::Entity;

fn default_count() -> u32 {
    1
}

fn default_level_min() -> i32 {
    1
}

fn default_level_max() -> i32 {
    20
}

fn default_threat() -> f64 {
    1.0
}

/// A weighted (entity, count-range) ingredient of a definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncounterSlot {
    pub entity_id: i64,
    #[serde(default = "default_count")]
    pub min_count: u32,
    #[serde(default = "default_count")]
    pub max_count: u32,
    #[serde(default = "default_count")]
    pub weight: u32,
}

/// Blueprint describing how an encounter is assembled. Never mutated
/// once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncounterDefinition {
    pub id: String,
    pub name: String,
    #[serde(default = "default_level_min")]
    pub level_min: i32,
    #[serde(default = "default_level_max")]
    pub level_max: i32,
    #[serde(default)]
    pub faction_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub slots: Vec<EncounterSlot>,
    #[serde(default = "default_threat")]
    pub base_threat: f64,
    /// Empty means unrestricted.
    #[serde(default)]
    pub location_ids: Vec<i64>,
}

impl EncounterDefinition {
    pub fn matches_level(&self, level: i32) -> bool {
        self.level_min <= level && level <= self.level_max
    }

    pub fn applies_to_location(&self, location_id: i64) -> bool {
        self.location_ids.is_empty() || self.location_ids.contains(&location_id)
    }

    /// Each slot replicated by its weight: variety without a full
    /// weighted-sampling pass during assembly.
    pub fn weighted_slots(&self) -> Vec<&EncounterSlot> {
        let mut expanded = Vec::new();
        for slot in &self.slots {
            for _ in 0..slot.weight.max(1) {
                expanded.push(slot);
            }
        }
        expanded
    }
}

/// Entity lookup collaborator; persistence implementations live outside
/// the core.
pub trait EntityStore {
    fn get_many(&self, ids: &[i64]) -> Vec<Entity>;
    fn list_by_location(&self, location_id: i64) -> Vec<Entity>;
    fn list_for_level(&self, level: i32, tolerance: i32) -> Vec<Entity>;

    fn list_by_level_band(&self, min: i32, max: i32) -> Vec<Entity> {
        let mid = (min + max) / 2;
        self.list_for_level(mid, max - mid)
    }
}

pub trait DefinitionStore {
    fn list_for_location(&self, location_id: i64) -> Vec<EncounterDefinition>;
    fn list_global(&self) -> Vec<EncounterDefinition>;
}

/// Assembles concrete enemy lists from weighted definitions.
pub struct EncounterPlanner<'a> {
    entities: &'a dyn EntityStore,
}

impl<'a> EncounterPlanner<'a> {
    pub fn new(entities: &'a dyn EntityStore) -> Self {
        Self { entities }
    }

    fn load_entities(&self, definitions: &[&EncounterDefinition]) -> HashMap<i64, Entity> {
        let mut ids: Vec<i64> = definitions
            .iter()
            .flat_map(|definition| definition.slots.iter().map(|slot| slot.entity_id))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        if ids.is_empty() {
            return HashMap::new();
        }
        self.entities.get_many(&ids).into_iter().map(|entity| (entity.id, entity)).collect()
    }

    fn score_definition(
        definition: &EncounterDefinition,
        player_level: i32,
        faction_bias: Option<&str>,
    ) -> f64 {
        let mut score = definition.base_threat;
        // Prefer definitions whose band actually contains the player.
        if player_level < definition.level_min {
            score *= 0.5;
        } else if player_level > definition.level_max {
            score *= 0.75;
        } else {
            score *= 1.25;
        }
        if faction_bias.is_some() && definition.faction_id.as_deref() == faction_bias {
            score *= 1.3;
        }
        score.max(0.1)
    }

    fn pick_definition<'d>(
        definitions: &[&'d EncounterDefinition],
        player_level: i32,
        faction_bias: Option<&str>,
        rng: &mut ChaCha8Rng,
    ) -> Option<&'d EncounterDefinition> {
        if definitions.is_empty() {
            return None;
        }
        let weights: Vec<f64> = definitions
            .iter()
            .map(|definition| Self::score_definition(definition, player_level, faction_bias))
            .collect();
        let index = WeightedIndex::new(&weights).ok()?;
        Some(definitions[index.sample(rng)])
    }

    fn pick_count(slot: &EncounterSlot, rng: &mut ChaCha8Rng) -> u32 {
        if slot.min_count >= slot.max_count {
            slot.min_count.max(1)
        } else {
            rng.gen_range(slot.min_count..=slot.max_count)
        }
    }

    fn assemble(
        definition: &EncounterDefinition,
        lookup: &HashMap<i64, Entity>,
        rng: &mut ChaCha8Rng,
        target_threat: f64,
    ) -> Vec<Entity> {
        // Small leeway keeps encounters varied at tight budgets.
        let budget = target_threat * 1.1;
        let mut planned: Vec<Entity> = Vec::new();

        for slot in definition.weighted_slots() {
            let entity = match lookup.get(&slot.entity_id) {
                Some(entity) => entity,
                None => continue,
            };
            let count = Self::pick_count(slot, rng);
            for _ in 0..count {
                if !planned.is_empty() {
                    let accumulated: f64 = planned.iter().map(Entity::threat_rating).sum();
                    if accumulated >= budget {
                        break;
                    }
                }
                planned.push(entity.clone());
            }
        }

        if planned.is_empty() {
            // Never return an empty encounter for a chosen definition.
            if let Some(entity) =
                definition.slots.first().and_then(|slot| lookup.get(&slot.entity_id))
            {
                planned.push(entity.clone());
            }
        }
        planned
    }

    /// Select a deterministic set of entities for the given context.
    /// The same seed and arguments always produce the same definition
    /// and the same enemy sequence.
    pub fn plan_encounter(
        &self,
        definitions: &[EncounterDefinition],
        player_level: i32,
        location_id: i64,
        seed: u64,
        faction_bias: Option<&str>,
        max_enemies: usize,
    ) -> (Option<EncounterDefinition>, Vec<Entity>) {
        let applicable: Vec<&EncounterDefinition> = definitions
            .iter()
            .filter(|definition| {
                definition.matches_level(player_level)
                    && definition.applies_to_location(location_id)
            })
            .collect();
        if applicable.is_empty() {
            return (None, Vec::new());
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let lookup = self.load_entities(&applicable);
        let chosen = match Self::pick_definition(&applicable, player_level, faction_bias, &mut rng)
        {
            Some(chosen) => chosen,
            None => return (None, Vec::new()),
        };
        debug!(seed, definition = %chosen.id, "encounter definition selected");

        let threat_budget = f64::from((player_level * 7).max(5));
        let mut enemies = Self::assemble(chosen, &lookup, &mut rng, threat_budget);
        enemies.truncate(max_enemies);
        (Some(chosen.clone()), enemies)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlanSource {
    Definition,
    Location,
    LevelBand,
    Empty,
}

#[derive(Debug, Clone, Serialize)]
pub struct EncounterPlan {
    pub enemies: Vec<Entity>,
    pub definition_id: Option<String>,
    pub faction_bias: Option<String>,
    pub source: PlanSource,
}

/// Encounter generation with fallbacks: definitions first, then the
/// location's resident entities, then a level band around the player.
pub struct EncounterService<'a> {
    entities: &'a dyn EntityStore,
    definitions: Option<&'a dyn DefinitionStore>,
}

impl<'a> EncounterService<'a> {
    pub fn new(entities: &'a dyn EntityStore, definitions: Option<&'a dyn DefinitionStore>) -> Self {
        Self { entities, definitions }
    }

    /// Stable hash of the full planning context. Re-querying the same
    /// context yields the same seed, and therefore the same plan.
    pub fn context_seed(
        location_id: i64,
        player_level: i32,
        world_turn: u64,
        faction_bias: Option<&str>,
        max_enemies: usize,
    ) -> u64 {
        let mut hasher = DefaultHasher::new();
        location_id.hash(&mut hasher);
        player_level.hash(&mut hasher);
        world_turn.hash(&mut hasher);
        faction_bias.hash(&mut hasher);
        (max_enemies as u64).hash(&mut hasher);
        hasher.finish()
    }

    /// Weighted picks without replacement; a faction match doubles an
    /// entity's weight.
    fn weighted_pick(
        rng: &mut ChaCha8Rng,
        pool: &[Entity],
        count: usize,
        faction_bias: Option<&str>,
    ) -> Vec<Entity> {
        let mut remaining: Vec<Entity> = pool.to_vec();
        let mut picks = Vec::new();
        for _ in 0..count {
            if remaining.is_empty() {
                break;
            }
            let weights: Vec<u32> = remaining
                .iter()
                .map(|entity| {
                    if faction_bias.is_some() && entity.faction_id.as_deref() == faction_bias {
                        2
                    } else {
                        1
                    }
                })
                .collect();
            let index = match WeightedIndex::new(&weights) {
                Ok(index) => index,
                Err(_) => break,
            };
            picks.push(remaining.remove(index.sample(rng)));
        }
        picks
    }

    /// Deterministic encounter plan for the given context.
    pub fn generate_plan(
        &self,
        location_id: i64,
        player_level: i32,
        world_turn: u64,
        faction_bias: Option<&str>,
        max_enemies: usize,
    ) -> EncounterPlan {
        let seed =
            Self::context_seed(location_id, player_level, world_turn, faction_bias, max_enemies);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        debug!(seed, location_id, player_level, world_turn, "planning encounter");

        if let Some(definition_store) = self.definitions {
            let mut definitions = definition_store.list_for_location(location_id);
            if definitions.is_empty() {
                definitions = definition_store.list_global();
            }
            let planner = EncounterPlanner::new(self.entities);
            let (chosen, enemies) = planner.plan_encounter(
                &definitions,
                player_level,
                location_id,
                seed,
                faction_bias,
                max_enemies,
            );
            if !enemies.is_empty() {
                return EncounterPlan {
                    enemies,
                    definition_id: chosen.map(|definition| definition.id),
                    faction_bias: faction_bias.map(str::to_string),
                    source: PlanSource::Definition,
                };
            }
        }

        let by_location = self.entities.list_by_location(location_id);
        if !by_location.is_empty() {
            let count = max_enemies.max(1).min(by_location.len());
            let enemies = Self::weighted_pick(&mut rng, &by_location, count, faction_bias);
            return EncounterPlan {
                enemies,
                definition_id: None,
                faction_bias: faction_bias.map(str::to_string),
                source: PlanSource::Location,
            };
        }

        let band =
            self.entities.list_by_level_band((player_level - 1).max(1), player_level + 2);
        if band.is_empty() {
            return EncounterPlan {
                enemies: Vec::new(),
                definition_id: None,
                faction_bias: faction_bias.map(str::to_string),
                source: PlanSource::Empty,
            };
        }
        let count = max_enemies.max(1).min(band.len());
        let enemies = Self::weighted_pick(&mut rng, &band, count, faction_bias);
        EncounterPlan {
            enemies,
            definition_id: None,
            faction_bias: faction_bias.map(str::to_string),
            source: PlanSource::LevelBand,
        }
    }

    /// Enemy list only, deterministic per world turn.
    pub fn generate(
        &self,
        location_id: i64,
        player_level: i32,
        world_turn: u64,
        faction_bias: Option<&str>,
        max_enemies: usize,
    ) -> Vec<Entity> {
        self.generate_plan(location_id, player_level, world_turn, faction_bias, max_enemies)
            .enemies
    }

    /// Single-enemy convenience wrapper used by the overworld loop.
    pub fn find_encounter(&self, location_id: i64, character_level: i32) -> Option<Entity> {
        self.generate(location_id, character_level, 0, None, 1).into_iter().next()
    }
}
