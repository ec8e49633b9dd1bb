//! Tests for period accounting.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rstest::rstest;
use rust_decimal_macros::dec;

use super::error::PeriodError;
use super::types::{PaymentDecision, Period, approved_day_total};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn period(fom: NaiveDate, tom: NaiveDate) -> Period {
    Period::new(fom, tom).unwrap()
}

#[rstest]
#[case(date(2019, 5, 1), date(2019, 5, 1), 1)]
#[case(date(2019, 5, 1), date(2019, 5, 31), 31)]
#[case(date(2019, 2, 1), date(2019, 2, 28), 28)]
#[case(date(2019, 12, 31), date(2020, 1, 1), 2)]
fn test_day_count(#[case] fom: NaiveDate, #[case] tom: NaiveDate, #[case] expected: u64) {
    assert_eq!(period(fom, tom).day_count(), expected);
}

#[test]
fn test_rejects_end_before_start() {
    assert_eq!(
        Period::new(date(2019, 5, 2), date(2019, 5, 1)),
        Err(PeriodError::EndBeforeStart {
            fom: date(2019, 5, 2),
            tom: date(2019, 5, 1),
        })
    );
}

#[test]
fn test_contains_is_inclusive() {
    let may = period(date(2019, 5, 1), date(2019, 5, 31));
    assert!(may.contains(date(2019, 5, 1)));
    assert!(may.contains(date(2019, 5, 31)));
    assert!(!may.contains(date(2019, 6, 1)));
    assert!(!may.contains(date(2019, 4, 30)));
}

#[test]
fn test_overlap_and_containment() {
    let may = period(date(2019, 5, 1), date(2019, 5, 31));
    let last_day = period(date(2019, 5, 31), date(2019, 6, 10));
    let june = period(date(2019, 6, 1), date(2019, 6, 30));
    let mid_may = period(date(2019, 5, 10), date(2019, 5, 20));

    assert!(may.overlaps(&last_day));
    assert!(!may.overlaps(&june));
    assert!(may.contains_period(&mid_may));
    assert!(!may.contains_period(&last_day));
}

#[test]
fn test_deserialize_rejects_inverted_period() {
    let json = r#"{"fom":"2019-05-02","tom":"2019-05-01"}"#;
    assert!(serde_json::from_str::<Period>(json).is_err());
}

#[test]
fn test_approved_day_total_skips_unpaid_decisions() {
    let decisions = vec![
        PaymentDecision::Payable {
            period: period(date(2019, 5, 1), date(2019, 5, 31)),
            payout_percentage: dec!(100),
        },
        PaymentDecision::Payable {
            period: period(date(2019, 6, 1), date(2019, 6, 10)),
            payout_percentage: dec!(0),
        },
        PaymentDecision::NotPayable {
            period: period(date(2019, 7, 1), date(2019, 7, 31)),
        },
        PaymentDecision::Payable {
            period: period(date(2019, 8, 1), date(2019, 8, 1)),
            payout_percentage: dec!(50),
        },
    ];

    assert_eq!(approved_day_total(&decisions), 32);
}

#[test]
fn test_overlapping_approved_periods_are_not_merged() {
    let may = period(date(2019, 5, 1), date(2019, 5, 31));
    let decisions = vec![
        PaymentDecision::Payable {
            period: may,
            payout_percentage: dec!(100),
        },
        PaymentDecision::Payable {
            period: may,
            payout_percentage: dec!(100),
        },
    ];

    assert_eq!(approved_day_total(&decisions), 62);
}

proptest! {
    /// Day count equals the inclusive number of days between the ends.
    #[test]
    fn test_day_count_matches_length(offset in 0u64..3650, length in 0u64..400) {
        let fom = date(2010, 1, 1) + Days::new(offset);
        let tom = fom + Days::new(length);
        prop_assert_eq!(period(fom, tom).day_count(), length + 1);
    }

    /// Overlap is symmetric, and containment implies overlap.
    #[test]
    fn test_overlap_symmetric(a in 0u64..100, b in 0u64..30, c in 0u64..100, d in 0u64..30) {
        let base = date(2019, 1, 1);
        let first = period(base + Days::new(a), base + Days::new(a + b));
        let second = period(base + Days::new(c), base + Days::new(c + d));

        prop_assert_eq!(first.overlaps(&second), second.overlaps(&first));
        if first.contains_period(&second) {
            prop_assert!(first.overlaps(&second));
        }
    }
}
