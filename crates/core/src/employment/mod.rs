//! Employment relationships and agreements.

pub mod error;
pub mod inspect;
pub mod types;

pub use error::{EmploymentError, EmploymentFault, EmploymentFaultMapper};
pub use inspect::inspect_employments;
pub use types::{Agreement, Employer, Employment, EmploymentKind, Leave};
