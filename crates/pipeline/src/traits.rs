//! Core traits for the filtering pipeline.

use crate::query::InteractionQuery;
use anyhow::Result;
use data_loader::InteractionLog;

/// Core trait for filtering interaction logs.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` lets one pipeline serve concurrent queries
/// - Filters take ownership of the Vec<InteractionLog> and return the kept subset
/// - Implementations must keep the relative order of the records they keep
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of interactions.
    ///
    /// # Arguments
    /// * `interactions` - The records to filter (takes ownership)
    /// * `query` - The constraints requested by the caller
    ///
    /// # Returns
    /// * `Ok(Vec<InteractionLog>)` - The kept records, in input order
    /// * `Err` - If filtering fails
    fn apply(
        &self,
        interactions: Vec<InteractionLog>,
        query: &InteractionQuery,
    ) -> Result<Vec<InteractionLog>>;
}
