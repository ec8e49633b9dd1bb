//! Employment error types.

use sickpay_shared::{AppError, ErrorKind};
use thiserror::Error;

use crate::fault::FaultMapper;

/// Errors raised while constructing employment values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmploymentError {
    /// An employment must have exactly one current agreement.
    #[error("Employment must have exactly one current agreement, found {0}")]
    CurrentAgreementCount(usize),
}

impl From<EmploymentError> for AppError {
    fn from(err: EmploymentError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

/// Raw faults reported by the employment registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmploymentFault {
    /// Caller is not allowed to see the subject's employments.
    #[error("security restriction: {0}")]
    SecurityRestriction(String),

    /// The registry rejected the request.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The requested employment history does not exist.
    #[error("employment history not found: {0}")]
    HistoryNotFound(String),

    /// Any other fault.
    #[error("{0}")]
    Other(String),
}

/// Maps employment registry faults.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmploymentFaultMapper;

impl FaultMapper for EmploymentFaultMapper {
    type Fault = EmploymentFault;

    fn upstream(&self) -> &'static str {
        "employment"
    }

    fn classify(&self, fault: &EmploymentFault) -> ErrorKind {
        match fault {
            EmploymentFault::SecurityRestriction(_) | EmploymentFault::InvalidInput(_) => {
                ErrorKind::UpstreamError
            }
            EmploymentFault::HistoryNotFound(_) => ErrorKind::NotFound,
            EmploymentFault::Other(_) => ErrorKind::Unknown,
        }
    }
}
