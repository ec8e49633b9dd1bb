//! Periods, day accounting, and sick-pay payment decisions.

pub mod error;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::PeriodError;
pub use types::{PaymentDecision, Period, approved_day_total};
