//! Employment and income overview.

pub mod service;
pub mod types;

pub use service::EmploymentIncomeService;
pub use types::EmploymentIncomeOverview;
