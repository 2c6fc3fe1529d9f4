//! Filter interactions by their kind tag.

use crate::query::InteractionQuery;
use crate::traits::Filter;
use anyhow::Result;
use data_loader::InteractionLog;

/// Keeps only interactions whose kind equals `query.kind` exactly
/// (case-sensitive); a no-op when it is unset.
pub struct KindFilter;

impl Filter for KindFilter {
    fn name(&self) -> &str {
        "KindFilter"
    }

    fn apply(
        &self,
        interactions: Vec<InteractionLog>,
        query: &InteractionQuery,
    ) -> Result<Vec<InteractionLog>> {
        let Some(kind) = query.kind.as_deref() else {
            return Ok(interactions);
        };

        let filtered: Vec<InteractionLog> = interactions
            .into_iter()
            .filter(|log| log.kind == kind)
            .collect();
        Ok(filtered)
    }
}
