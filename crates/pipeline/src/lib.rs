//! Filtering of learner interaction logs.
//!
//! This crate provides:
//! - `filter_by_item_id`, the single-item selection used by listing code
//! - Filter trait and implementations (item, learner, kind)
//! - FilterPipeline for composing filters
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterPipeline, InteractionQuery, filter_by_item_id};
//!
//! // Single item, borrowing the store's slice
//! let on_item = filter_by_item_id(index.interactions(), Some(3));
//!
//! // Full query
//! let pipeline = FilterPipeline::standard();
//! let query = InteractionQuery::for_item(3).with_learner(Some(1));
//! let logs = pipeline.apply(index.interactions().to_vec(), &query)?;
//! ```

pub mod traits;
pub mod query;
pub mod filters;
pub mod filter_pipeline;

// Re-export main types
pub use traits::Filter;
pub use query::InteractionQuery;
pub use filters::filter_by_item_id;
pub use filter_pipeline::FilterPipeline;
