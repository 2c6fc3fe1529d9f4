//! Query parameters shared by every filter.

use data_loader::{ItemId, LearnerId};

/// Optional constraints on an interaction listing.
///
/// Every field left as `None` places no constraint on the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionQuery {
    pub item_id: Option<ItemId>,
    pub learner_id: Option<LearnerId>,
    pub kind: Option<String>,
}

impl InteractionQuery {
    /// A query with no constraints
    pub fn new() -> Self {
        Self::default()
    }

    /// A query restricted to one item
    pub fn for_item(item_id: ItemId) -> Self {
        Self::new().with_item(Some(item_id))
    }

    pub fn with_item(mut self, item_id: Option<ItemId>) -> Self {
        self.item_id = item_id;
        self
    }

    pub fn with_learner(mut self, learner_id: Option<LearnerId>) -> Self {
        self.learner_id = learner_id;
        self
    }

    pub fn with_kind(mut self, kind: Option<impl Into<String>>) -> Self {
        self.kind = kind.map(Into::into);
        self
    }

    /// True when no constraint other than the item is set
    pub fn is_item_only(&self) -> bool {
        self.learner_id.is_none() && self.kind.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let query = InteractionQuery::for_item(0)
            .with_learner(Some(-3))
            .with_kind(Some("attempt"));

        assert_eq!(query.item_id, Some(0));
        assert_eq!(query.learner_id, Some(-3));
        assert_eq!(query.kind.as_deref(), Some("attempt"));
        assert!(!query.is_item_only());
    }

    #[test]
    fn test_is_item_only() {
        assert!(InteractionQuery::new().is_item_only());
        assert!(InteractionQuery::for_item(-1).is_item_only());
        assert!(InteractionQuery::new().with_kind(None::<String>).is_item_only());
        assert!(!InteractionQuery::for_item(1).with_learner(Some(1)).is_item_only());
        assert!(!InteractionQuery::new().with_kind(Some("view")).is_item_only());
    }
}
