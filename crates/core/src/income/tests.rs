//! Tests for income mapping and the filter pipeline.

use chrono::NaiveDate;
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sickpay_shared::ErrorKind;
use sickpay_shared::types::{ActorId, OrgNumber, YearMonth};

use super::error::{IncomeFault, IncomeFaultMapper, MappingError};
use super::filter::{IncomeFilter, by_membership};
use super::types::{Income, IncomeCategory, Payer, RawIncome, RawParty};
use crate::fault::FaultMapper;
use crate::organization::{Membership, Organization};
use crate::diagnostics::DataQualityRecorder;

const ACTOR: &str = "1831212532188";

fn actor() -> ActorId {
    ActorId::new(ACTOR).unwrap()
}

fn month(s: &str) -> YearMonth {
    s.parse().unwrap()
}

fn org(s: &str) -> OrgNumber {
    OrgNumber::new(s).unwrap()
}

fn raw(payer: &str, paid_in: &str) -> RawIncome {
    RawIncome {
        recipient: RawParty::Actor(ACTOR.into()),
        payer: RawParty::Organization(payer.into()),
        paid_in: month(paid_in),
        amount: dec!(2500),
        kind: "Loennsinntekt".into(),
        description: None,
    }
}

fn wage(payer: &str) -> Income {
    Income {
        payer: Payer::Organization(org(payer)),
        period: month("2019-01"),
        amount: dec!(2500),
        category: IncomeCategory::Wage,
    }
}

fn business_unit(number: &str, legal_entity: &str) -> Organization {
    Organization::business_unit(
        org(number),
        Some("Butikk".into()),
        vec![Membership::new(
            org(legal_entity),
            NaiveDate::from_ymd_opt(2015, 1, 1).unwrap(),
        )],
    )
}

#[rstest]
#[case("Loennsinntekt", None, IncomeCategory::Wage)]
#[case("YtelseFraOffentlige", Some("sykepenger"), IncomeCategory::Benefit { code: "sykepenger".into() })]
#[case("PensjonEllerTrygd", Some("ufoerepensjon"), IncomeCategory::Pension { code: "ufoerepensjon".into() })]
#[case("Naeringsinntekt", Some("naeringsinntekt"), IncomeCategory::Business { code: "naeringsinntekt".into() })]
fn test_category_from_raw(
    #[case] kind: &str,
    #[case] description: Option<&str>,
    #[case] expected: IncomeCategory,
) {
    assert_eq!(IncomeCategory::from_raw(kind, description), Ok(expected));
}

#[test]
fn test_category_mapping_failures() {
    assert_eq!(
        IncomeCategory::from_raw("Fradrag", None),
        Err(MappingError::UnknownKind("Fradrag".into()))
    );
    assert_eq!(
        IncomeCategory::from_raw("YtelseFraOffentlige", None),
        Err(MappingError::MissingCode("YtelseFraOffentlige".into()))
    );
}

#[rstest]
#[case(IncomeFault::NoAccessToFilter("8-28".into()), ErrorKind::UpstreamError)]
#[case(IncomeFault::InvalidInput("x".into()), ErrorKind::UpstreamError)]
#[case(IncomeFault::SecurityDeviation("x".into()), ErrorKind::UpstreamError)]
#[case(IncomeFault::Other("x".into()), ErrorKind::Unknown)]
fn test_fault_classification(#[case] fault: IncomeFault, #[case] expected: ErrorKind) {
    assert_eq!(IncomeFaultMapper.classify(&fault), expected);
}

#[test]
fn test_other_recipient_is_excluded_regardless_of_period_and_category() {
    let recorder = DataQualityRecorder::new();
    let actor = actor();
    let filter = IncomeFilter::new(&actor, month("2019-01"), month("2019-02"), &recorder);

    let mut foreign = raw("889640782", "2019-01");
    foreign.recipient = RawParty::Actor("1111111111111".into());
    let mut by_person = raw("889640782", "2019-01");
    by_person.recipient = RawParty::Person("12345678901".into());

    let result = filter.apply(vec![foreign, by_person, raw("889640782", "2019-01")]);

    assert_eq!(result, vec![wage("889640782")]);
    assert_eq!(recorder.counter("income_for_other_subject"), 1);
    assert_eq!(recorder.counter("recipient_not_actor"), 1);
}

#[test]
fn test_only_records_within_window_remain() {
    let recorder = DataQualityRecorder::new();
    let actor = actor();
    let filter = IncomeFilter::new(&actor, month("2019-01"), month("2019-02"), &recorder);

    let result = filter.apply(vec![raw("889640782", "2018-12"), raw("889640782", "2019-02")]);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].period, month("2019-02"));
    assert_eq!(recorder.counter("income_outside_period"), 1);
}

#[test]
fn test_unmappable_records_are_dropped_not_failed() {
    let recorder = DataQualityRecorder::new();
    let actor = actor();
    let filter = IncomeFilter::new(&actor, month("2019-01"), month("2019-02"), &recorder);

    let mut unknown_kind = raw("889640782", "2019-01");
    unknown_kind.kind = "Fradrag".into();
    let bad_org = raw("889640781", "2019-01");
    let mut unknown_payer = raw("889640782", "2019-01");
    unknown_payer.payer = RawParty::Unknown("Trygdekontor".into());

    let result = filter.apply(vec![unknown_kind, bad_org, unknown_payer]);

    assert!(result.is_empty());
    assert_eq!(recorder.counter("unmappable_income"), 3);
}

#[test]
fn test_every_raw_record_is_counted_by_kind_and_payer_type() {
    let recorder = DataQualityRecorder::new();
    let actor = actor();
    let filter = IncomeFilter::new(&actor, month("2019-01"), month("2019-02"), &recorder);

    let mut by_person = raw("889640782", "2018-01");
    by_person.payer = RawParty::Person("12345678901".into());
    let _ = filter.apply(vec![raw("889640782", "2019-01"), by_person]);

    assert_eq!(recorder.labelled_counter("income_by_kind", "Loennsinntekt"), 2);
    assert_eq!(recorder.labelled_counter("income_by_payer_type", "organization"), 1);
    assert_eq!(recorder.labelled_counter("income_by_payer_type", "person"), 1);
}

#[test]
fn test_negative_amount_is_kept_and_flagged() {
    let recorder = DataQualityRecorder::new();
    let actor = actor();
    let filter = IncomeFilter::new(&actor, month("2019-01"), month("2019-02"), &recorder);

    let mut refund = raw("889640782", "2019-01");
    refund.amount = dec!(-100);
    let result = filter.apply(vec![refund]);

    assert_eq!(result.len(), 1);
    assert!(result[0].amount < Decimal::ZERO);
    assert_eq!(recorder.counter("negative_amount"), 1);
}

#[test]
fn test_membership_keeps_target_and_its_legal_entity() {
    let recorder = DataQualityRecorder::new();
    let target = business_unit("889640782", "995277670");

    let result = by_membership(
        vec![wage("889640782"), wage("995277670"), wage("983887457")],
        &target,
        &recorder,
    )
    .unwrap();

    assert_eq!(result, vec![wage("889640782"), wage("995277670")]);
    assert_eq!(recorder.counter("income_from_other_organization"), 1);
}

#[test]
fn test_membership_rejects_non_business_unit_before_filtering() {
    let recorder = DataQualityRecorder::new();
    let target = Organization::legal_entity(org("995277670"), None, Vec::new());

    let err = by_membership(vec![wage("983887457")], &target, &recorder).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert_eq!(recorder.counter("income_from_other_organization"), 0);
}
