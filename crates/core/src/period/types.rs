//! Period and payment decision types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::PeriodError;

/// An inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPeriod")]
pub struct Period {
    fom: NaiveDate,
    tom: NaiveDate,
}

#[derive(Deserialize)]
struct RawPeriod {
    fom: NaiveDate,
    tom: NaiveDate,
}

impl TryFrom<RawPeriod> for Period {
    type Error = PeriodError;

    fn try_from(raw: RawPeriod) -> Result<Self, Self::Error> {
        Self::new(raw.fom, raw.tom)
    }
}

impl Period {
    /// Creates a period.
    ///
    /// # Errors
    ///
    /// Returns `PeriodError::EndBeforeStart` if `tom < fom`.
    pub fn new(fom: NaiveDate, tom: NaiveDate) -> Result<Self, PeriodError> {
        if tom < fom {
            return Err(PeriodError::EndBeforeStart { fom, tom });
        }
        Ok(Self { fom, tom })
    }

    /// First day.
    #[must_use]
    pub const fn fom(&self) -> NaiveDate {
        self.fom
    }

    /// Last day.
    #[must_use]
    pub const fn tom(&self) -> NaiveDate {
        self.tom
    }

    /// Returns true if `day` falls within the period, both ends inclusive.
    #[must_use]
    pub fn contains(&self, day: NaiveDate) -> bool {
        day >= self.fom && day <= self.tom
    }

    /// Number of days covered, counting both ends.
    #[must_use]
    pub fn day_count(&self) -> u64 {
        if self.fom == self.tom {
            return 1;
        }
        // tom >= fom by construction, so the difference is never negative.
        (self.tom - self.fom).num_days().unsigned_abs() + 1
    }

    /// Returns true if the periods share at least one day.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.fom <= other.tom && other.fom <= self.tom
    }

    /// Returns true if `other` lies fully inside this period.
    #[must_use]
    pub fn contains_period(&self, other: &Self) -> bool {
        self.fom <= other.fom && other.tom <= self.tom
    }
}

/// A sick-pay payment decision from the benefit history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaymentDecision {
    /// Benefit is paid for the period at the given percentage.
    Payable {
        /// Period the decision covers.
        period: Period,
        /// Payout percentage (0-100).
        payout_percentage: Decimal,
    },
    /// No benefit is paid for the period.
    NotPayable {
        /// Period the decision covers.
        period: Period,
    },
}

impl PaymentDecision {
    /// Period the decision covers.
    #[must_use]
    pub const fn period(&self) -> &Period {
        match self {
            Self::Payable { period, .. } | Self::NotPayable { period } => period,
        }
    }

    /// Returns true for payable decisions with a positive payout percentage.
    #[must_use]
    pub fn is_approved(&self) -> bool {
        match self {
            Self::Payable {
                payout_percentage, ..
            } => *payout_percentage > Decimal::ZERO,
            Self::NotPayable { .. } => false,
        }
    }
}

/// Sum of day counts over approved decisions.
///
/// Overlapping periods are counted independently, not merged.
#[must_use]
pub fn approved_day_total(decisions: &[PaymentDecision]) -> u64 {
    decisions
        .iter()
        .filter(|d| d.is_approved())
        .map(|d| d.period().day_count())
        .sum()
}
