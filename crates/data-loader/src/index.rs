//! InteractionIndex loading, statistics and validation.

use crate::error::{DataLoadError, Result};
use crate::parser::{self, INTERACTIONS_FILE, ITEMS_FILE};
use crate::types::*;
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

impl InteractionIndex {
    /// Load the item catalog and interaction log from a directory.
    ///
    /// Steps:
    /// 1. Parse items.dat and interactions.dat in parallel
    /// 2. Insert everything, keeping interaction file order
    /// 3. Compute item statistics
    /// 4. Validate data integrity
    ///
    /// items.dat is optional; without it the catalog is empty and
    /// interactions are not checked against it.
    pub fn load_from_files(data_dir: &Path) -> Result<Self> {
        info!("Loading interaction data from {:?}", data_dir);

        let items_path = data_dir.join(ITEMS_FILE);
        let interactions_path = data_dir.join(INTERACTIONS_FILE);

        let (items, interactions) = rayon::join(
            || {
                if items_path.exists() {
                    parser::parse_items(&items_path)
                } else {
                    debug!("No {} in {:?}, starting with an empty catalog", ITEMS_FILE, data_dir);
                    Ok(Vec::new())
                }
            },
            || parser::parse_interactions(&interactions_path),
        );
        let items = items?;
        let interactions = interactions?;

        info!(
            "Parsed {} items and {} interactions",
            items.len(),
            interactions.len()
        );

        let mut index = InteractionIndex::new();
        for item in items {
            index.insert_item(item);
        }
        for log in interactions {
            index.insert_interaction(log);
        }

        index.compute_item_stats();
        index.validate()?;

        info!("InteractionIndex built and validated");
        Ok(index)
    }

    /// Compute interaction and distinct-learner counts for every item that
    /// has interactions. Catalog items without interactions get no entry.
    pub fn compute_item_stats(&mut self) {
        self.item_stats = self
            .item_interactions
            .par_iter()
            .map(|(&item_id, logs)| (item_id, compute_stats(logs)))
            .collect();
    }

    /// Check that:
    /// - interaction ids are unique
    /// - every interaction has a non-empty kind
    /// - every interaction references a catalog item (only when a catalog is loaded)
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.interactions.len());
        for log in &self.interactions {
            if !seen.insert(log.id) {
                return Err(DataLoadError::ValidationError(format!(
                    "duplicate interaction id {}",
                    log.id
                )));
            }
            if log.kind.trim().is_empty() {
                return Err(DataLoadError::InvalidValue {
                    field: "kind".to_string(),
                    value: log.kind.clone(),
                });
            }
            if !self.items.is_empty() && !self.items.contains_key(&log.item_id) {
                return Err(DataLoadError::MissingReference {
                    entity: "Item".to_string(),
                    id: log.item_id,
                });
            }
        }
        Ok(())
    }
}

fn compute_stats(logs: &[InteractionLog]) -> ItemStats {
    let learners: HashSet<LearnerId> = logs.iter().map(|log| log.learner_id).collect();
    ItemStats {
        interaction_count: logs.len(),
        learner_count: learners.len(),
    }
}
