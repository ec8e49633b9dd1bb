//! Classification of raw upstream faults into the error taxonomy.
//!
//! Every upstream domain defines its own fault enum and a mapper that
//! implements [`FaultMapper`]. The provided [`FaultMapper::map_fault`] is the
//! single place where faults become [`AppError`]s, so logging of
//! unclassified faults cannot be skipped.

use std::fmt;

use sickpay_shared::{AppError, ErrorKind};
use tracing::{error, info};

/// Maps the faults of one upstream domain to the error taxonomy.
pub trait FaultMapper {
    /// Raw fault signal reported by the upstream collaborator.
    type Fault: fmt::Display;

    /// Name of the upstream, used in log fields.
    fn upstream(&self) -> &'static str;

    /// Pure classification of a fault.
    fn classify(&self, fault: &Self::Fault) -> ErrorKind;

    /// Classifies and logs a fault, producing the taxonomy error.
    ///
    /// `Unknown` faults are always logged at error severity with the
    /// original cause.
    fn map_fault(&self, fault: Self::Fault) -> AppError {
        let kind = self.classify(&fault);
        let cause = fault.to_string();

        if kind == ErrorKind::Unknown {
            error!(
                upstream = self.upstream(),
                cause = %cause,
                "unclassified upstream fault, mapping to Unknown"
            );
        } else {
            info!(
                upstream = self.upstream(),
                kind = ?kind,
                cause = %cause,
                "received error during lookup"
            );
        }

        AppError::new(kind, format!("{}: {cause}", self.upstream()))
    }
}
