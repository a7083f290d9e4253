// Copyright 2026 the Chronos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chronos_model::{Entity, EntityId};
use thiserror::Error;

/// Error from an [`EntityStore`] operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// An entity with this id already exists.
    #[error("an entity with id `{0}` already exists")]
    DuplicateId(EntityId),
    /// No entity has this id.
    #[error("no entity with id `{0}`")]
    UnknownId(EntityId),
}

/// The authoritative, ordered entity list.
///
/// Every successful change bumps [`EntityStore::revision`], so dependants can
/// tell cheaply whether derived data such as the layout is stale.
#[derive(Clone, Debug, Default)]
pub struct EntityStore {
    entities: Vec<Entity>,
    revision: u64,
}

impl EntityStore {
    /// Creates a store holding `entities` in order.
    ///
    /// Ids are not checked here; with duplicates, lookups find the first.
    #[must_use]
    pub fn new(entities: Vec<Entity>) -> Self {
        Self {
            entities,
            revision: 0,
        }
    }

    /// All entities, in order.
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Number of entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns `true` if the store holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Change counter, bumped by every successful mutation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Looks up an entity by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id.as_str() == id)
    }

    /// Returns `true` if an entity with `id` exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Replaces the whole list.
    pub fn replace_all(&mut self, entities: Vec<Entity>) {
        self.entities = entities;
        self.bump();
    }

    /// Appends an entity with a new id.
    pub fn insert(&mut self, entity: Entity) -> Result<(), StoreError> {
        if self.contains(entity.id.as_str()) {
            return Err(StoreError::DuplicateId(entity.id));
        }
        self.entities.push(entity);
        self.bump();
        Ok(())
    }

    /// Replaces the entity with the same id, keeping its position.
    pub fn update(&mut self, entity: Entity) -> Result<(), StoreError> {
        let slot = self
            .entities
            .iter_mut()
            .find(|e| e.id == entity.id)
            .ok_or_else(|| StoreError::UnknownId(entity.id.clone()))?;
        *slot = entity;
        self.bump();
        Ok(())
    }

    /// Removes and returns the entity with `id`.
    pub fn remove(&mut self, id: &str) -> Result<Entity, StoreError> {
        let index = self
            .entities
            .iter()
            .position(|e| e.id.as_str() == id)
            .ok_or_else(|| StoreError::UnknownId(EntityId::from(id)))?;
        let removed = self.entities.remove(index);
        self.bump();
        Ok(removed)
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}
