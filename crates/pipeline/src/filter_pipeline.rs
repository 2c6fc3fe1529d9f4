//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::filters::{ItemFilter, KindFilter, LearnerFilter};
use crate::query::InteractionQuery;
use crate::traits::Filter;
use anyhow::Result;
use data_loader::InteractionLog;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(ItemFilter)
///     .add_filter(LearnerFilter);
///
/// let filtered = pipeline.apply(interactions, &query)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The pipeline behind interaction listings: item, then learner, then kind.
    pub fn standard() -> Self {
        Self::new()
            .add_filter(ItemFilter)
            .add_filter(LearnerFilter)
            .add_filter(KindFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the filters, in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply all filters in sequence.
    ///
    /// ## Algorithm
    /// 1. Start with the input interactions
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return final filtered set
    ///
    /// # Returns
    /// * `Ok(Vec<InteractionLog>)` - The records that passed every filter, in input order
    /// * `Err` - If any filter fails
    pub fn apply(
        &self,
        interactions: Vec<InteractionLog>,
        query: &InteractionQuery,
    ) -> Result<Vec<InteractionLog>> {
        let mut current = interactions;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, query)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
