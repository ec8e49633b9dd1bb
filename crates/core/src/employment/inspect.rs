//! Data quality inspection of employments as they enter the overview.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::types::{Agreement, Employment};
use crate::diagnostics::{DataQualitySignal, DataQualitySink};

/// Reports suspicious employment data to `sink`.
///
/// Nothing is rejected: every employment stays in the result whatever is
/// reported here. `today` bounds what counts as a future date.
pub fn inspect_employments(
    employments: &[Employment],
    today: NaiveDate,
    sink: &dyn DataQualitySink,
) {
    sink.emit(DataQualitySignal::EmploymentCount {
        count: employments.len(),
    });

    for employment in employments {
        inspect_dates(employment, today, sink);

        for agreement in employment.agreements() {
            inspect_percent("position_percent", agreement.position_percent(), sink);
            if let Agreement::Historic { fom, tom, .. } = agreement {
                inspect_interval("agreement", *fom, *tom, sink);
            }
        }

        for leave in employment.leaves() {
            inspect_percent("leave_percent", Some(leave.percent), sink);
            if let Some(tom) = leave.tom {
                inspect_interval("leave", leave.fom, tom, sink);
            }
        }
    }

    inspect_same_employer(employments, sink);
}

fn inspect_dates(employment: &Employment, today: NaiveDate, sink: &dyn DataQualitySink) {
    let Some(end) = employment.end() else {
        return;
    };

    if employment.start() > end {
        sink.emit(DataQualitySignal::StartAfterEnd {
            employer: employment.employer().identity().to_string(),
            start: employment.start(),
            end,
        });
    }
    if end > today {
        sink.emit(DataQualitySignal::DateInFuture {
            field: "employment_end",
            date: end,
        });
    }
}

fn inspect_percent(field: &'static str, value: Option<Decimal>, sink: &dyn DataQualitySink) {
    let Some(value) = value else {
        return;
    };
    if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        sink.emit(DataQualitySignal::PercentOutOfRange { field, value });
    }
}

fn inspect_interval(
    field: &'static str,
    fom: NaiveDate,
    tom: NaiveDate,
    sink: &dyn DataQualitySink,
) {
    if fom > tom {
        sink.emit(DataQualitySignal::FomAfterTom { field, fom, tom });
    }
}

fn inspect_same_employer(employments: &[Employment], sink: &dyn DataQualitySink) {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for employment in employments {
        let employer = employment.employer().identity();
        let count = counts.entry(employer).or_insert(0);
        if *count == 0 {
            order.push(employer);
        }
        *count += 1;
    }

    for employer in order {
        let count = counts.get(employer).copied().unwrap_or(0);
        if count > 1 {
            sink.emit(DataQualitySignal::EmploymentsAtSameEmployer {
                employer: employer.to_string(),
                count,
            });
        }
    }
}
