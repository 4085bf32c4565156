//! Built-in content bundles and the in-memory stores that serve them.
//!
//! Real repositories (SQL or otherwise) implement the same traits
//! outside the core; these doubles exist so the CLI and tests can run
//! without any persistence layer.

use thiserror::Error;

use crate::encounter::{DefinitionStore, EncounterDefinition, EntityStore};
use crate::model::Entity;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse content JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

pub fn builtin_entities() -> &'static str {
    include_str!("../content/entities/core.json")
}

pub fn builtin_encounters() -> &'static str {
    include_str!("../content/encounters/core.json")
}

pub fn load_entities(json: &str) -> Result<Vec<Entity>, ContentError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_definitions(json: &str) -> Result<Vec<EncounterDefinition>, ContentError> {
    Ok(serde_json::from_str(json)?)
}

/// Vec-backed entity roster.
pub struct MemoryStore {
    entities: Vec<Entity>,
}

impl MemoryStore {
    pub fn new(entities: Vec<Entity>) -> Self {
        Self { entities }
    }

    pub fn builtin() -> Result<Self, ContentError> {
        Ok(Self::new(load_entities(builtin_entities())?))
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn get(&self, id: i64) -> Option<Entity> {
        self.entities.iter().find(|entity| entity.id == id).cloned()
    }
}

impl EntityStore for MemoryStore {
    fn get_many(&self, ids: &[i64]) -> Vec<Entity> {
        ids.iter().filter_map(|id| self.get(*id)).collect()
    }

    fn list_by_location(&self, location_id: i64) -> Vec<Entity> {
        self.entities
            .iter()
            .filter(|entity| entity.location_id == Some(location_id))
            .cloned()
            .collect()
    }

    fn list_for_level(&self, level: i32, tolerance: i32) -> Vec<Entity> {
        self.entities
            .iter()
            .filter(|entity| (entity.level - level).abs() <= tolerance)
            .cloned()
            .collect()
    }
}

/// Vec-backed definition catalogue.
pub struct MemoryDefinitions {
    definitions: Vec<EncounterDefinition>,
}

impl MemoryDefinitions {
    pub fn new(definitions: Vec<EncounterDefinition>) -> Self {
        Self { definitions }
    }

    pub fn builtin() -> Result<Self, ContentError> {
        Ok(Self::new(load_definitions(builtin_encounters())?))
    }

    pub fn definitions(&self) -> &[EncounterDefinition] {
        &self.definitions
    }
}

impl DefinitionStore for MemoryDefinitions {
    fn list_for_location(&self, location_id: i64) -> Vec<EncounterDefinition> {
        self.definitions
            .iter()
            .filter(|definition| definition.location_ids.contains(&location_id))
            .cloned()
            .collect()
    }

    fn list_global(&self) -> Vec<EncounterDefinition> {
        self.definitions
            .iter()
            .filter(|definition| definition.location_ids.is_empty())
            .cloned()
            .collect()
    }
}
