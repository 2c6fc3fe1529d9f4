//! Filter implementations for the interaction pipeline.
//!
//! Each filter reads one field of the `InteractionQuery` and leaves the
//! input untouched when that field is unset.

pub mod item;
pub mod kind;
pub mod learner;

// Re-export for convenience
pub use item::{ItemFilter, filter_by_item_id};
pub use kind::KindFilter;
pub use learner::LearnerFilter;
