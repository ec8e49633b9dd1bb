//! Income error types.

use sickpay_shared::ErrorKind;
use sickpay_shared::types::IdError;
use thiserror::Error;

use crate::fault::FaultMapper;

/// Reasons a raw income record cannot become a domain income.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// The raw income kind is not one we know.
    #[error("unknown income kind: {0}")]
    UnknownKind(String),

    /// A coded income kind arrived without its description code.
    #[error("income kind {0} is missing its description code")]
    MissingCode(String),

    /// The payer is of an unknown party type.
    #[error("unknown payer type: {0}")]
    UnknownPayer(String),

    /// The payer identifier failed validation.
    #[error("invalid payer identifier: {0}")]
    InvalidPayer(#[from] IdError),
}

/// Raw faults reported by the income registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IncomeFault {
    /// Caller has no access to the requested filter code.
    #[error("no access to filter: {0}")]
    NoAccessToFilter(String),

    /// The registry rejected the request.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The registry reported a security deviation.
    #[error("security deviation: {0}")]
    SecurityDeviation(String),

    /// Any other fault.
    #[error("{0}")]
    Other(String),
}

/// Maps income registry faults.
#[derive(Debug, Clone, Copy, Default)]
pub struct IncomeFaultMapper;

impl FaultMapper for IncomeFaultMapper {
    type Fault = IncomeFault;

    fn upstream(&self) -> &'static str {
        "income"
    }

    fn classify(&self, fault: &IncomeFault) -> ErrorKind {
        match fault {
            IncomeFault::NoAccessToFilter(_)
            | IncomeFault::InvalidInput(_)
            | IncomeFault::SecurityDeviation(_) => ErrorKind::UpstreamError,
            IncomeFault::Other(_) => ErrorKind::Unknown,
        }
    }
}
