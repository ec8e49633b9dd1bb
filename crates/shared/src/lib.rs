//! Shared types, errors, and configuration for the sick-pay basis core.
//!
//! This crate provides common building blocks used by every other crate:
//! - Validated identifiers (organization numbers, actor ids)
//! - Month granularity for income periods
//! - The closed error taxonomy and its presentation mapping
//! - Result combinators for composing fallible upstream lookups
//! - Configuration and logging setup

pub mod config;
pub mod error;
pub mod mod11;
pub mod outcome;
pub mod telemetry;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult, ErrorBody, ErrorKind};
pub use outcome::{Outcome, sequence};
