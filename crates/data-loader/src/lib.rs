//! # Data Loader Crate
//!
//! Loads the item catalog and learner interaction log into memory.
//!
//! ## Main Components
//!
//! - **types**: Domain types (Item, InteractionLog, ItemStats, InteractionIndex)
//! - **parser**: Parse `::`-separated .dat files into Rust structs
//! - **index**: Build the index, compute per-item statistics, validate
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::InteractionIndex;
//! use std::path::Path;
//!
//! let index = InteractionIndex::load_from_files(Path::new("data/sample"))?;
//!
//! let logs = index.get_item_interactions(1);
//! println!("Item 1 has {} interactions", logs.len());
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod index;

pub use error::{DataLoadError, Result};
pub use types::{
    // Type aliases
    ItemId,
    LearnerId,
    InteractionId,
    // Core types
    Item,
    InteractionLog,
    ItemStats,
    InteractionIndex,
    DEFAULT_KIND,
};
