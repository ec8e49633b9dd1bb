//! Period error types.

use chrono::NaiveDate;
use sickpay_shared::AppError;
use thiserror::Error;

/// Errors raised when constructing a period.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodError {
    /// The last day lies before the first day.
    #[error("Period end {tom} is before start {fom}")]
    EndBeforeStart {
        /// First day.
        fom: NaiveDate,
        /// Last day.
        tom: NaiveDate,
    },
}

impl From<PeriodError> for AppError {
    fn from(err: PeriodError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
