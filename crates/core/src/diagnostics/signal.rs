//! Diagnostic signals emitted by the engines.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use sickpay_shared::types::YearMonth;

/// Bucket bounds for approved sick-pay days per request.
pub const APPROVED_DAYS_BUCKETS: &[u64] = &[0, 7, 14, 31, 100, 248, 300, 365];

/// Bucket bounds for income records matched to one employment.
pub const MATCHED_INCOME_BUCKETS: &[u64] = &[0, 1, 2, 3, 4, 5, 10];

/// Bucket bounds for employments per subject.
pub const EMPLOYMENT_COUNT_BUCKETS: &[u64] =
    &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 15, 20, 40, 60, 80, 100];

/// A data quality observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "signal", rename_all = "snake_case")]
pub enum DataQualitySignal {
    /// An employment had no income from any affiliated payer.
    EmploymentWithoutIncome {
        /// Employer identity.
        employer: String,
        /// Employment kind name.
        kind: &'static str,
    },
    /// Income from a payer that matched no employment.
    IncomeWithoutEmployment {
        /// Payer identity.
        payer: String,
        /// Number of income records from the payer.
        count: usize,
        /// Record count per category name.
        categories: BTreeMap<&'static str, usize>,
    },
    /// A record belonged to another subject.
    IncomeForOtherSubject,
    /// A record's recipient was not identified by actor id.
    RecipientNotActor {
        /// Kind of identifier the recipient carried.
        recipient_kind: String,
    },
    /// A record's payment month fell outside the requested window.
    IncomeOutsidePeriod {
        /// Payment month of the record.
        month: YearMonth,
    },
    /// A record could not be mapped to a category or payer.
    UnmappableIncome {
        /// Raw income kind.
        kind: String,
        /// Why mapping failed.
        reason: String,
    },
    /// A record's payer was neither the target organization nor a legal
    /// entity it belongs to.
    IncomeFromOtherOrganization {
        /// Payer identity.
        payer: String,
    },
    /// A mapped record carried a negative amount.
    NegativeAmount {
        /// Payer identity.
        payer: String,
    },
    /// One raw record seen, by payer type.
    IncomeByPayerType {
        /// Payer type name.
        payer_type: String,
    },
    /// One raw record seen, by raw income kind.
    IncomeByKind {
        /// Raw income kind.
        kind: String,
    },
    /// A percentage outside `0..=100`.
    PercentOutOfRange {
        /// Which percentage.
        field: &'static str,
        /// Reported value.
        value: Decimal,
    },
    /// An agreement or leave whose first day is after its last day.
    FomAfterTom {
        /// Which record.
        field: &'static str,
        /// First day.
        fom: NaiveDate,
        /// Last day.
        tom: NaiveDate,
    },
    /// An employment that starts after it ends.
    StartAfterEnd {
        /// Employer identity.
        employer: String,
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },
    /// A date that has not happened yet.
    DateInFuture {
        /// Which date.
        field: &'static str,
        /// Reported date.
        date: NaiveDate,
    },
    /// Several employments registered with the same employer.
    EmploymentsAtSameEmployer {
        /// Employer identity.
        employer: String,
        /// Number of employments with the employer.
        count: usize,
    },
    /// Freelance relationships reported for one subject.
    FreelanceEmployments {
        /// Number of freelance relationships.
        count: usize,
    },
    /// Employments found for one subject.
    EmploymentCount {
        /// Number of employments.
        count: usize,
    },
    /// Approved sick-pay days in one request.
    ApprovedDays {
        /// Day total.
        days: u64,
    },
    /// Income records matched to one employment.
    MatchedIncomeCount {
        /// Number of matched records.
        count: usize,
    },
}

fn as_u64(n: usize) -> u64 {
    u64::try_from(n).unwrap_or(u64::MAX)
}

impl DataQualitySignal {
    /// Stable metric-style name of the signal.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::EmploymentWithoutIncome { .. } => "employment_without_income",
            Self::IncomeWithoutEmployment { .. } => "income_without_employment",
            Self::IncomeForOtherSubject => "income_for_other_subject",
            Self::RecipientNotActor { .. } => "recipient_not_actor",
            Self::IncomeOutsidePeriod { .. } => "income_outside_period",
            Self::UnmappableIncome { .. } => "unmappable_income",
            Self::IncomeFromOtherOrganization { .. } => "income_from_other_organization",
            Self::NegativeAmount { .. } => "negative_amount",
            Self::IncomeByPayerType { .. } => "income_by_payer_type",
            Self::IncomeByKind { .. } => "income_by_kind",
            Self::PercentOutOfRange { .. } => "percent_out_of_range",
            Self::FomAfterTom { .. } => "fom_after_tom",
            Self::StartAfterEnd { .. } => "start_after_end",
            Self::DateInFuture { .. } => "date_in_future",
            Self::EmploymentsAtSameEmployer { .. } => "employments_at_same_employer",
            Self::FreelanceEmployments { .. } => "freelance_employments",
            Self::EmploymentCount { .. } => "employment_count",
            Self::ApprovedDays { .. } => "approved_days",
            Self::MatchedIncomeCount { .. } => "matched_income_count",
        }
    }

    /// Amount a counter for this signal grows by.
    #[must_use]
    pub fn weight(&self) -> u64 {
        match self {
            Self::IncomeWithoutEmployment { count, .. } | Self::FreelanceEmployments { count } => {
                as_u64(*count)
            }
            // Only the employments beyond the first are duplicates.
            Self::EmploymentsAtSameEmployer { count, .. } => as_u64(count.saturating_sub(1)),
            _ => 1,
        }
    }

    /// Label of labelled counters, if the signal is one.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::IncomeByPayerType { payer_type } => Some(payer_type.as_str()),
            Self::IncomeByKind { kind } => Some(kind.as_str()),
            Self::EmploymentWithoutIncome { kind, .. } => Some(*kind),
            Self::PercentOutOfRange { field, .. }
            | Self::FomAfterTom { field, .. }
            | Self::DateInFuture { field, .. } => Some(*field),
            _ => None,
        }
    }

    /// Observed value and bucket bounds, if the signal feeds a histogram.
    #[must_use]
    pub fn observation(&self) -> Option<(u64, &'static [u64])> {
        match self {
            Self::ApprovedDays { days } => Some((*days, APPROVED_DAYS_BUCKETS)),
            Self::MatchedIncomeCount { count } => Some((as_u64(*count), MATCHED_INCOME_BUCKETS)),
            Self::EmploymentCount { count } => Some((as_u64(*count), EMPLOYMENT_COUNT_BUCKETS)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmatched_income_is_weighted_by_count() {
        let signal = DataQualitySignal::IncomeWithoutEmployment {
            payer: "889640782".into(),
            count: 3,
            categories: BTreeMap::from([("wage", 3)]),
        };
        assert_eq!(signal.weight(), 3);
        assert_eq!(signal.name(), "income_without_employment");
    }

    #[test]
    fn test_same_employer_counts_duplicates_only() {
        let signal = DataQualitySignal::EmploymentsAtSameEmployer {
            employer: "889640782".into(),
            count: 3,
        };
        assert_eq!(signal.weight(), 2);
    }

    #[test]
    fn test_histogram_signals_carry_observation() {
        assert_eq!(
            DataQualitySignal::ApprovedDays { days: 31 }.observation(),
            Some((31, APPROVED_DAYS_BUCKETS))
        );
        assert_eq!(DataQualitySignal::IncomeForOtherSubject.observation(), None);
    }

    #[test]
    fn test_serializes_with_signal_tag() {
        let json = serde_json::to_value(DataQualitySignal::IncomeByKind {
            kind: "Loennsinntekt".into(),
        })
        .unwrap();
        assert_eq!(json["signal"], "income_by_kind");
        assert_eq!(json["kind"], "Loennsinntekt");
    }
}
