//! Sick-pay benefit history.

pub mod error;
pub mod service;

pub use error::{BenefitHistoryFault, BenefitHistoryFaultMapper};
pub use service::BenefitHistoryService;
