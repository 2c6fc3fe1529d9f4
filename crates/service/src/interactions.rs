//! # Interaction Service
//!
//! Coordinates the store and the filter pipeline to answer:
//! 1. Interaction listings, optionally narrowed by item, learner and kind
//! 2. The item catalog with per-item statistics
//! 3. Per-learner summaries
//! 4. Batches of listings, run concurrently on the blocking pool

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use data_loader::{InteractionIndex, InteractionLog, Item, ItemId, ItemStats, LearnerId};
use pipeline::{filter_by_item_id, FilterPipeline, InteractionQuery};

/// A catalog item together with its interaction statistics
#[derive(Debug, Clone, Serialize)]
pub struct ItemSummary {
    pub item: Item,
    pub stats: ItemStats,
}

/// What one learner has done across all items
#[derive(Debug, Clone, Serialize)]
pub struct LearnerSummary {
    pub learner_id: LearnerId,
    pub interaction_count: usize,
    /// Distinct items the learner interacted with, sorted
    pub item_ids: Vec<ItemId>,
    /// Interaction count per kind
    pub kinds: BTreeMap<String, usize>,
}

/// Answers interaction queries against a shared index.
///
/// Cloning is cheap: the index and the pipeline are behind `Arc`.
#[derive(Clone)]
pub struct InteractionService {
    index: Arc<InteractionIndex>,
    filter_pipeline: Arc<FilterPipeline>,
}

impl InteractionService {
    pub fn new(index: Arc<InteractionIndex>) -> Self {
        let filter_pipeline = FilterPipeline::standard();
        debug!("Interaction filters: {:?}", filter_pipeline.filter_names());
        Self {
            index,
            filter_pipeline: Arc::new(filter_pipeline),
        }
    }

    /// Names of the filters applied to non item-only queries, in order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filter_pipeline.filter_names()
    }

    pub fn index(&self) -> &InteractionIndex {
        &self.index
    }

    /// List interactions matching `query`, in store order.
    ///
    /// An item-only query goes straight through `filter_by_item_id`; anything
    /// else runs the standard pipeline over every stored interaction.
    pub fn list_interactions(&self, query: &InteractionQuery) -> Result<Vec<InteractionLog>> {
        let start = Instant::now();
        let all = self.index.interactions();

        let result = if query.is_item_only() {
            filter_by_item_id(all, query.item_id).into_owned()
        } else {
            self.filter_pipeline
                .apply(all.to_vec(), query)
                .context("Failed to apply interaction filters")?
        };

        debug!(
            "Listed {} of {} interactions for {:?} in {:.2?}",
            result.len(),
            all.len(),
            query,
            start.elapsed()
        );
        Ok(result)
    }

    /// The item catalog sorted by id, with zero stats for untouched items
    pub fn list_items(&self) -> Vec<ItemSummary> {
        self.index
            .items()
            .into_iter()
            .map(|item| ItemSummary {
                item: item.clone(),
                stats: self
                    .index
                    .get_item_stats(item.id)
                    .copied()
                    .unwrap_or_default(),
            })
            .collect()
    }

    /// Summarise a learner's activity; fails if the learner has none
    pub fn learner_summary(&self, learner_id: LearnerId) -> Result<LearnerSummary> {
        let logs = self.index.get_learner_interactions(learner_id);
        if logs.is_empty() {
            return Err(anyhow!("Learner {} has no interactions", learner_id));
        }

        let mut kinds: BTreeMap<String, usize> = BTreeMap::new();
        let mut seen = HashSet::new();
        let mut item_ids = Vec::new();
        for log in logs {
            *kinds.entry(log.kind.clone()).or_insert(0) += 1;
            if seen.insert(log.item_id) {
                item_ids.push(log.item_id);
            }
        }
        item_ids.sort_unstable();

        Ok(LearnerSummary {
            learner_id,
            interaction_count: logs.len(),
            item_ids,
            kinds,
        })
    }

    /// Answer several queries concurrently; results come back in query order
    pub async fn list_interactions_batch(
        &self,
        queries: Vec<InteractionQuery>,
    ) -> Result<Vec<Vec<InteractionLog>>> {
        let start = Instant::now();
        let query_count = queries.len();

        let handles: Vec<_> = queries
            .into_iter()
            .map(|query| {
                let service = self.clone();
                tokio::task::spawn_blocking(move || service.list_interactions(&query))
            })
            .collect();

        let mut results = Vec::with_capacity(handles.len());
        for handle in handles {
            let logs = handle.await.context("Listing task panicked")??;
            results.push(logs);
        }

        info!(
            "Answered {} interaction queries in {:.2?}",
            query_count,
            start.elapsed()
        );
        Ok(results)
    }
}
