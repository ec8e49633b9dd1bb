//! Income filter pipeline.
//!
//! Stages run in a fixed order: recipient, payment month, category mapping,
//! and, for employer-scoped queries, organization membership. Every dropped
//! record produces a distinct diagnostic.

use rust_decimal::Decimal;
use sickpay_shared::types::{ActorId, YearMonth};
use sickpay_shared::{AppError, AppResult};
use tracing::{error, warn};

use super::types::{Income, Payer, RawIncome, RawParty};
use crate::organization::Organization;
use crate::diagnostics::{DataQualitySignal, DataQualitySink};

/// Filters raw income for one subject and month window.
pub struct IncomeFilter<'a> {
    actor: &'a ActorId,
    from: YearMonth,
    to: YearMonth,
    sink: &'a dyn DataQualitySink,
}

impl<'a> IncomeFilter<'a> {
    /// Creates a filter for `actor` over `[from, to]`.
    #[must_use]
    pub fn new(
        actor: &'a ActorId,
        from: YearMonth,
        to: YearMonth,
        sink: &'a dyn DataQualitySink,
    ) -> Self {
        Self {
            actor,
            from,
            to,
            sink,
        }
    }

    /// Runs the recipient, period, and mapping stages.
    #[must_use]
    pub fn apply(&self, raw: Vec<RawIncome>) -> Vec<Income> {
        for record in &raw {
            self.sink.emit(DataQualitySignal::IncomeByKind {
                kind: record.kind.clone(),
            });
            self.sink.emit(DataQualitySignal::IncomeByPayerType {
                payer_type: record.payer.type_name().to_string(),
            });
        }

        let raw = self.by_recipient(raw);
        let raw = self.by_period(raw);
        self.map_categories(raw)
    }

    /// Keeps records reported for the subject's actor id.
    #[must_use]
    pub fn by_recipient(&self, raw: Vec<RawIncome>) -> Vec<RawIncome> {
        raw.into_iter()
            .filter(|record| match &record.recipient {
                RawParty::Actor(id) if id == self.actor.as_str() => true,
                RawParty::Actor(_) => {
                    self.sink.emit(DataQualitySignal::IncomeForOtherSubject);
                    false
                }
                other => {
                    warn!(
                        recipient_kind = other.type_name(),
                        "income recipient is not identified by actor id"
                    );
                    self.sink.emit(DataQualitySignal::RecipientNotActor {
                        recipient_kind: other.type_name().to_string(),
                    });
                    false
                }
            })
            .collect()
    }

    /// Keeps records paid within the window, both ends inclusive.
    #[must_use]
    pub fn by_period(&self, raw: Vec<RawIncome>) -> Vec<RawIncome> {
        raw.into_iter()
            .filter(|record| {
                let inside = record.paid_in.is_within(self.from, self.to);
                if !inside {
                    self.sink.emit(DataQualitySignal::IncomeOutsidePeriod {
                        month: record.paid_in,
                    });
                }
                inside
            })
            .collect()
    }

    /// Maps records to domain incomes, dropping those that cannot be mapped.
    #[must_use]
    pub fn map_categories(&self, raw: Vec<RawIncome>) -> Vec<Income> {
        raw.into_iter()
            .filter_map(|record| match record.to_income() {
                Ok(income) => {
                    if income.amount < Decimal::ZERO {
                        self.sink.emit(DataQualitySignal::NegativeAmount {
                            payer: income.payer.identity().to_string(),
                        });
                    }
                    Some(income)
                }
                Err(e) => {
                    error!(error = %e, kind = %record.kind, "dropping unmappable income");
                    self.sink.emit(DataQualitySignal::UnmappableIncome {
                        kind: record.kind,
                        reason: e.to_string(),
                    });
                    None
                }
            })
            .collect()
    }
}

/// Fails unless `target` is a business unit.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` naming the organization's actual type.
pub fn require_business_unit(target: &Organization) -> AppResult<()> {
    if target.is_business_unit() {
        return Ok(());
    }
    Err(AppError::InvalidInput(format!(
        "{} is a {}, expected a business unit",
        target.org_number,
        target.type_name()
    )))
}

/// Keeps income paid by `target` or by a legal entity it belongs to.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if `target` is not a business unit. The
/// check runs before any record is inspected.
pub fn by_membership(
    incomes: Vec<Income>,
    target: &Organization,
    sink: &dyn DataQualitySink,
) -> AppResult<Vec<Income>> {
    require_business_unit(target)?;

    let kept = incomes
        .into_iter()
        .filter(|income| {
            let keep = match &income.payer {
                Payer::Organization(org) => *org == target.org_number || target.belongs_to(org),
                Payer::Person(_) | Payer::Actor(_) => false,
            };
            if !keep {
                sink.emit(DataQualitySignal::IncomeFromOtherOrganization {
                    payer: income.payer.identity().to_string(),
                });
            }
            keep
        })
        .collect();

    Ok(kept)
}
