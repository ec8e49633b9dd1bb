//! Core business logic for the sick-pay basis.
//!
//! This crate contains pure business logic with ZERO transport or storage
//! dependencies. Upstream registries are reached only through the traits in
//! [`upstream`].
//!
//! # Modules
//!
//! - `organization` - Organizations and legal-entity membership
//! - `employment` - Employment relationships and agreements
//! - `income` - Income records and the income filter pipeline
//! - `reconciliation` - Joining employment to income by organization identity
//! - `period` - Periods and day accounting
//! - `history` - Sick-pay history lookups
//! - `diagnostics` - Data quality diagnostics
//! - `overview` - Employment and income overview service
//! - `basis` - Calculation and comparison basis service
//! - `fault` - Classification of upstream faults into the error taxonomy

pub mod basis;
pub mod diagnostics;
pub mod employment;
pub mod fault;
pub mod history;
pub mod income;
pub mod organization;
pub mod overview;
pub mod period;
pub mod reconciliation;
pub mod upstream;
