//! Filter interactions down to a single learner.

use crate::query::InteractionQuery;
use crate::traits::Filter;
use anyhow::Result;
use data_loader::InteractionLog;

/// Keeps only interactions made by `query.learner_id`; a no-op when it is unset.
pub struct LearnerFilter;

impl Filter for LearnerFilter {
    fn name(&self) -> &str {
        "LearnerFilter"
    }

    fn apply(
        &self,
        interactions: Vec<InteractionLog>,
        query: &InteractionQuery,
    ) -> Result<Vec<InteractionLog>> {
        let Some(learner_id) = query.learner_id else {
            return Ok(interactions);
        };

        let filtered: Vec<InteractionLog> = interactions
            .into_iter()
            .filter(|log| log.learner_id == learner_id)
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_learner_filter() {
        let logs = vec![
            InteractionLog::attempt(1, 1, 1),
            InteractionLog::attempt(2, 2, 1),
            InteractionLog::attempt(3, 1, 2),
        ];
        let query = InteractionQuery::new().with_learner(Some(1));

        let filtered = LearnerFilter.apply(logs, &query).unwrap();

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].id, 1);
        assert_eq!(filtered[1].id, 3);
    }

    #[test]
    fn test_learner_filter_without_learner() {
        let logs = vec![InteractionLog::attempt(1, 1, 1), InteractionLog::attempt(2, 2, 1)];

        let filtered = LearnerFilter.apply(logs, &InteractionQuery::new()).unwrap();

        assert_eq!(filtered.len(), 2);
    }
}
