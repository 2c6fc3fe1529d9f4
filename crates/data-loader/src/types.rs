//! Core domain types for learner interaction data.
//!
//! This module defines the records the rest of the workspace passes around:
//! - Type aliases for the three identifier spaces (items, learners, interactions)
//! - `Item` and `InteractionLog` records
//! - `ItemStats` aggregates
//! - `InteractionIndex`, the in-memory store everything is queried from

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================
// Ids are signed: zero and negative values are ordinary ids, not sentinels.

/// Identifier of an item a learner interacts with
pub type ItemId = i64;

/// Identifier of a learner
pub type LearnerId = i64;

/// Identifier of a single interaction record
pub type InteractionId = i64;

/// The interaction kind most records carry
pub const DEFAULT_KIND: &str = "attempt";

// =============================================================================
// Item
// =============================================================================

/// An entry in the item catalog (a lab, a task, a quiz...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    #[serde(rename = "type")]
    pub item_type: String,
    pub title: String,
    /// Creation timestamp, kept exactly as it appears in the source
    pub created_at: String,
}

// =============================================================================
// Interaction Log
// =============================================================================

/// One action of a learner on an item.
///
/// Records are built by the loader and never mutated afterwards; filters
/// only ever select among them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InteractionLog {
    pub id: InteractionId,
    pub learner_id: LearnerId,
    pub item_id: ItemId,
    /// Free-form tag such as "attempt" or "view"
    pub kind: String,
}

impl InteractionLog {
    pub fn new(
        id: InteractionId,
        learner_id: LearnerId,
        item_id: ItemId,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            id,
            learner_id,
            item_id,
            kind: kind.into(),
        }
    }

    /// Shorthand for the common "attempt" record
    pub fn attempt(id: InteractionId, learner_id: LearnerId, item_id: ItemId) -> Self {
        Self::new(id, learner_id, item_id, DEFAULT_KIND)
    }
}

// =============================================================================
// Statistics Types
// =============================================================================

/// Precomputed per-item aggregates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStats {
    pub interaction_count: usize,
    /// Number of distinct learners that touched the item
    pub learner_count: usize,
}

// =============================================================================
// InteractionIndex - The In-Memory Store
// =============================================================================

/// Holds every item and interaction plus lookup indices.
///
/// `interactions` keeps insertion order; the per-item and per-learner lists
/// keep the same relative order as the global log.
#[derive(Debug)]
pub struct InteractionIndex {
    pub(crate) items: HashMap<ItemId, Item>,
    pub(crate) interactions: Vec<InteractionLog>,

    /// All interactions on each item
    pub(crate) item_interactions: HashMap<ItemId, Vec<InteractionLog>>,
    /// All interactions by each learner
    pub(crate) learner_interactions: HashMap<LearnerId, Vec<InteractionLog>>,

    pub(crate) item_stats: HashMap<ItemId, ItemStats>,
}

impl InteractionIndex {
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
            interactions: Vec::new(),
            item_interactions: HashMap::new(),
            learner_interactions: HashMap::new(),
            item_stats: HashMap::new(),
        }
    }

    /// Get an item from the catalog
    pub fn get_item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    /// Catalog items sorted by id
    pub fn items(&self) -> Vec<&Item> {
        let mut items: Vec<&Item> = self.items.values().collect();
        items.sort_by_key(|item| item.id);
        items
    }

    /// Every interaction, in the order it was inserted
    pub fn interactions(&self) -> &[InteractionLog] {
        &self.interactions
    }

    /// All interactions on an item (empty slice if none)
    pub fn get_item_interactions(&self, item_id: ItemId) -> &[InteractionLog] {
        self.item_interactions
            .get(&item_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// All interactions by a learner (empty slice if none)
    pub fn get_learner_interactions(&self, learner_id: LearnerId) -> &[InteractionLog] {
        self.learner_interactions
            .get(&learner_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Precomputed statistics for an item
    pub fn get_item_stats(&self, item_id: ItemId) -> Option<&ItemStats> {
        self.item_stats.get(&item_id)
    }

    /// Ids of every item that has at least one interaction, sorted
    pub fn interacted_item_ids(&self) -> Vec<ItemId> {
        let mut ids: Vec<ItemId> = self.item_interactions.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn insert_item(&mut self, item: Item) {
        self.items.insert(item.id, item);
    }

    /// Append an interaction and update the per-item and per-learner lists
    pub fn insert_interaction(&mut self, log: InteractionLog) {
        self.item_interactions
            .entry(log.item_id)
            .or_default()
            .push(log.clone());

        self.learner_interactions
            .entry(log.learner_id)
            .or_default()
            .push(log.clone());

        self.interactions.push(log);
    }

    /// (items, interactions)
    pub fn counts(&self) -> (usize, usize) {
        (self.items.len(), self.interactions.len())
    }
}

impl Default for InteractionIndex {
    fn default() -> Self {
        Self::new()
    }
}
