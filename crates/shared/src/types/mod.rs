//! Common types used across the application.

pub mod id;
pub mod month;

pub use id::{ActorId, IdError, OrgNumber, PersonNumber};
pub use month::{MonthError, YearMonth};
