//! Service crate for the learner interaction backend.
//!
//! This crate answers the queries the interaction and item endpoints
//! serve, on top of a shared read-only `InteractionIndex`.

pub mod interactions;

pub use interactions::{InteractionService, ItemSummary, LearnerSummary};
