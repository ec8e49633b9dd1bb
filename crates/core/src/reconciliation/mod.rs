//! Joining employment relationships to income by organization identity.

pub mod engine;
pub mod types;


pub use engine::reconcile;
pub use types::{MatchedPair, Reconciliation};
