//! Filter interactions down to a single item.
//!
//! `filter_by_item_id` is the borrowed, allocation-free-when-possible form
//! used directly by listing code; `ItemFilter` is the same predicate as a
//! pipeline stage.

use crate::query::InteractionQuery;
use crate::traits::Filter;
use anyhow::Result;
use data_loader::{InteractionLog, ItemId};
use std::borrow::Cow;

/// Select the interactions on `item_id`, keeping their relative order.
///
/// With `None` the input slice is handed back as is. With `Some(id)` the
/// matching records are copied out; learner and kind play no part, and
/// zero or negative ids are compared like any other value.
pub fn filter_by_item_id(
    interactions: &[InteractionLog],
    item_id: Option<ItemId>,
) -> Cow<'_, [InteractionLog]> {
    match item_id {
        None => Cow::Borrowed(interactions),
        Some(item_id) => Cow::Owned(
            interactions
                .iter()
                .filter(|log| log.item_id == item_id)
                .cloned()
                .collect(),
        ),
    }
}

/// Keeps only interactions on `query.item_id`; a no-op when it is unset.
pub struct ItemFilter;

impl Filter for ItemFilter {
    fn name(&self) -> &str {
        "ItemFilter"
    }

    fn apply(
        &self,
        interactions: Vec<InteractionLog>,
        query: &InteractionQuery,
    ) -> Result<Vec<InteractionLog>> {
        let Some(item_id) = query.item_id else {
            return Ok(interactions);
        };

        let filtered: Vec<InteractionLog> = interactions
            .into_iter()
            .filter(|log| log.item_id == item_id)
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(logs: &[InteractionLog]) -> Vec<i64> {
        logs.iter().map(|log| log.id).collect()
    }

    #[test]
    fn test_none_borrows_input() {
        let logs = vec![InteractionLog::attempt(1, 1, 1), InteractionLog::attempt(2, 2, 2)];

        let result = filter_by_item_id(&logs, None);

        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(&*result, &logs[..]);
    }

    #[test]
    fn test_some_selects_matching_in_order() {
        let logs = vec![
            InteractionLog::attempt(1, 1, 2),
            InteractionLog::attempt(2, 2, 1),
            InteractionLog::attempt(3, 3, 2),
        ];

        let result = filter_by_item_id(&logs, Some(2));

        assert_eq!(ids(&result), vec![1, 3]);
        // Input untouched
        assert_eq!(ids(&logs), vec![1, 2, 3]);
    }

    #[test]
    fn test_item_filter_matches_free_function() {
        let logs = vec![
            InteractionLog::attempt(1, 1, 7),
            InteractionLog::new(2, 1, 8, "view"),
            InteractionLog::new(3, 2, 7, "view"),
        ];
        let query = InteractionQuery::for_item(7);

        let filtered = ItemFilter.apply(logs.clone(), &query).unwrap();

        assert_eq!(filtered, filter_by_item_id(&logs, Some(7)).into_owned());
    }

    #[test]
    fn test_item_filter_passes_through_without_item() {
        let logs = vec![InteractionLog::attempt(1, 1, 7), InteractionLog::attempt(2, 1, 8)];

        let filtered = ItemFilter.apply(logs.clone(), &InteractionQuery::new()).unwrap();

        assert_eq!(filtered, logs);
    }
}
