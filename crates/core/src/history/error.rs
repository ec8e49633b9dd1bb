//! Benefit history faults.

use sickpay_shared::ErrorKind;
use sickpay_shared::config::BenefitHistoryConfig;
use thiserror::Error;

use crate::fault::FaultMapper;

/// Raw faults reported by the benefit history registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BenefitHistoryFault {
    /// Caller is not allowed to see the subject's history.
    #[error("security restriction: {0}")]
    SecurityRestriction(String),

    /// The registry rejected the request.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The registry does not know the person.
    #[error("person not found: {0}")]
    PersonNotFound(String),

    /// A free-text fault message from the registry.
    #[error("{0}")]
    Message(String),

    /// Any other fault.
    #[error("unexpected fault: {0}")]
    Other(String),
}

/// Maps benefit history faults.
///
/// Outages arrive as message faults; a message containing the configured
/// marker means the registry's databases are unavailable.
#[derive(Debug, Clone)]
pub struct BenefitHistoryFaultMapper {
    unavailable_marker: String,
}

impl BenefitHistoryFaultMapper {
    /// Creates a mapper recognizing `unavailable_marker` in message faults.
    #[must_use]
    pub fn new(unavailable_marker: impl Into<String>) -> Self {
        Self {
            unavailable_marker: unavailable_marker.into(),
        }
    }

    /// Creates a mapper from configuration.
    #[must_use]
    pub fn from_config(config: &BenefitHistoryConfig) -> Self {
        Self::new(config.unavailable_marker.clone())
    }
}

impl Default for BenefitHistoryFaultMapper {
    fn default() -> Self {
        Self::from_config(&BenefitHistoryConfig::default())
    }
}

impl FaultMapper for BenefitHistoryFaultMapper {
    type Fault = BenefitHistoryFault;

    fn upstream(&self) -> &'static str {
        "benefit_history"
    }

    fn classify(&self, fault: &BenefitHistoryFault) -> ErrorKind {
        match fault {
            BenefitHistoryFault::SecurityRestriction(_) | BenefitHistoryFault::InvalidInput(_) => {
                ErrorKind::UpstreamError
            }
            BenefitHistoryFault::PersonNotFound(_) => ErrorKind::NotFound,
            BenefitHistoryFault::Message(message)
                if message.contains(self.unavailable_marker.as_str()) =>
            {
                ErrorKind::UpstreamUnavailable
            }
            BenefitHistoryFault::Message(_) => ErrorKind::UpstreamError,
            BenefitHistoryFault::Other(_) => ErrorKind::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(BenefitHistoryFault::SecurityRestriction("x".into()), ErrorKind::UpstreamError)]
    #[case(BenefitHistoryFault::InvalidInput("x".into()), ErrorKind::UpstreamError)]
    #[case(BenefitHistoryFault::PersonNotFound("x".into()), ErrorKind::NotFound)]
    #[case(
        BenefitHistoryFault::Message("Feil: Basene i Infotrygd er ikke tilgjengelige".into()),
        ErrorKind::UpstreamUnavailable
    )]
    #[case(BenefitHistoryFault::Message("Ugyldig sak".into()), ErrorKind::UpstreamError)]
    #[case(BenefitHistoryFault::Other("x".into()), ErrorKind::Unknown)]
    fn test_default_classification(#[case] fault: BenefitHistoryFault, #[case] expected: ErrorKind) {
        assert_eq!(BenefitHistoryFaultMapper::default().classify(&fault), expected);
    }

    #[test]
    fn test_marker_is_configurable() {
        let mapper = BenefitHistoryFaultMapper::new("registry offline");
        let fault = BenefitHistoryFault::Message("registry offline since 02:00".into());

        let err = mapper.map_fault(fault);
        assert_eq!(err.kind(), ErrorKind::UpstreamUnavailable);
        assert_eq!(err.status_code(), 503);
    }
}
