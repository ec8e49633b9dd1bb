//! Income records and the income filter pipeline.

pub mod error;
pub mod filter;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::{IncomeFault, IncomeFaultMapper, MappingError};
pub use filter::{IncomeFilter, by_membership, require_business_unit};
pub use types::{Income, IncomeCategory, Payer, RawIncome, RawParty};
