//! Organization registry faults.

use sickpay_shared::ErrorKind;
use thiserror::Error;

use crate::fault::FaultMapper;

/// Raw faults reported by the organization registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrganizationFault {
    /// The registry has no organization with the number.
    #[error("organization not found: {0}")]
    NotFound(String),

    /// The registry rejected the request.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The response could not be mapped to a domain organization.
    #[error("unmappable organization response: {0}")]
    Unmappable(String),

    /// Any other fault.
    #[error("{0}")]
    Other(String),
}

/// Maps organization registry faults.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrganizationFaultMapper;

impl FaultMapper for OrganizationFaultMapper {
    type Fault = OrganizationFault;

    fn upstream(&self) -> &'static str {
        "organization"
    }

    fn classify(&self, fault: &OrganizationFault) -> ErrorKind {
        match fault {
            OrganizationFault::NotFound(_) => ErrorKind::NotFound,
            OrganizationFault::InvalidInput(_) => ErrorKind::InvalidInput,
            OrganizationFault::Unmappable(_) | OrganizationFault::Other(_) => ErrorKind::Unknown,
        }
    }
}
