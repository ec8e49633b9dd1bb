//! Benefit history service.

use chrono::NaiveDate;
use sickpay_shared::{AppResult, Outcome};
use sickpay_shared::types::ActorId;
use tracing::info;

use super::error::BenefitHistoryFaultMapper;
use crate::fault::FaultMapper;
use crate::period::approved_day_total;
use crate::diagnostics::{DataQualitySignal, DataQualitySink};
use crate::upstream::BenefitHistoryLookup;

/// Sums approved sick-pay days from the benefit history.
pub struct BenefitHistoryService<'a> {
    lookup: &'a dyn BenefitHistoryLookup,
    mapper: BenefitHistoryFaultMapper,
    sink: &'a dyn DataQualitySink,
}

impl<'a> BenefitHistoryService<'a> {
    /// Creates the service.
    #[must_use]
    pub const fn new(
        lookup: &'a dyn BenefitHistoryLookup,
        mapper: BenefitHistoryFaultMapper,
        sink: &'a dyn DataQualitySink,
    ) -> Self {
        Self {
            lookup,
            mapper,
            sink,
        }
    }

    /// Total approved sick-pay days for `actor` in `[from, to]`.
    ///
    /// Overlapping decisions are counted independently.
    ///
    /// # Errors
    ///
    /// Returns the mapped upstream error if the history lookup fails.
    pub fn approved_days(&self, actor: &ActorId, from: NaiveDate, to: NaiveDate) -> AppResult<u64> {
        let decisions = self
            .lookup
            .payment_decisions(actor, from, to)
            .map_error(|fault| self.mapper.map_fault(fault))?;

        let days = approved_day_total(&decisions);
        info!(decisions = decisions.len(), days, "summed approved sick-pay days");
        self.sink.emit(DataQualitySignal::ApprovedDays { days });

        Ok(days)
    }
}
