//! End-to-end pipeline tests across the triage crates

use triage_core::{Maybe, Outcome, WarningPolicy};
use triage_either::MaybeEitherExt;
use triage_test::{
    assert_absent, assert_failure, assert_left, assert_present, assert_right, assert_success,
    assert_warning, check_reading, parse_reading, OutOfRange, FAIL_LIMIT, WARN_LIMIT,
};

fn graded(text: &str) -> Outcome<i64, OutOfRange> {
    parse_reading(text)
        .to_value_outcome::<OutOfRange>("no reading supplied")
        .unwrap()
        .and_then(|value| check_reading(value).unwrap())
}

#[test]
fn test_clean_reading_flows_to_success() {
    let outcome = graded("42");
    assert_success(&outcome);
    assert_eq!(outcome.value(), Ok(&42));
}

#[test]
fn test_missing_reading_fails_with_the_pipeline_message() {
    let outcome = graded("not a number");
    assert_failure(&outcome, "no reading supplied");
    assert_absent(&outcome.to_maybe());
}

#[test]
fn test_soft_breach_warns_and_keeps_the_value() {
    let outcome = graded("120");
    assert_warning(&outcome, "reading 120 is above the soft limit");
    assert_present(&outcome.clone().to_maybe(), &120);

    let mut successes = 0;
    let outcome = outcome.on_success(|_| successes += 1, WarningPolicy::Tolerate);
    assert_eq!(successes, 1);
    assert_warning(&outcome, "reading 120 is above the soft limit");
}

#[test]
fn test_soft_breach_escalates_under_the_strict_policy() {
    let mut alerts = 0;
    let outcome = graded("120").on_failure_with(
        |seen| {
            // The action observes the warning before it is rebuilt.
            assert!(seen.is_warning());
            alerts += 1;
        },
        || OutOfRange {
            observed: 120,
            limit: WARN_LIMIT,
        },
        WarningPolicy::Escalate,
    );
    assert_eq!(alerts, 1);
    assert_failure(&outcome, "reading 120 is above the soft limit");
    assert_eq!(
        outcome.error(),
        Maybe::Some(&OutOfRange {
            observed: 120,
            limit: WARN_LIMIT
        })
    );
}

#[test]
fn test_hard_breach_fails_with_the_typed_error() {
    let outcome = graded("5000");
    assert_failure(&outcome, "reading 5000 exceeds the hard limit");
    assert_eq!(
        outcome.error(),
        Maybe::Some(&OutOfRange {
            observed: 5000,
            limit: FAIL_LIMIT
        })
    );
}

#[test]
fn test_default_escalation_error_when_none_is_supplied() {
    let outcome = graded("120").on_failure(|_| {}, WarningPolicy::Escalate);
    assert_eq!(outcome.error(), Maybe::Some(&OutOfRange::default()));
}

#[test]
fn test_absent_reading_takes_the_left_track() {
    let either = parse_reading("offline").to_either("sensor offline");
    assert_left(&either, &"sensor offline");

    let either = parse_reading("99").to_either("sensor offline");
    assert_right(&either, &99);
}

#[test]
fn test_factory_left_is_built_only_on_absence() {
    let either = parse_reading("7").to_either_with(|| -> String { panic!("factory must not run") });
    assert_right(&either, &7);

    let either = parse_reading("?").to_either_with(|| String::from("no data"));
    assert_left(&either, &String::from("no data"));
}

#[test]
fn test_warning_survives_mapping_but_not_the_next_stage() {
    let outcome = graded("120").map(|value| value * 2);
    assert_warning(&outcome, "reading 120 is above the soft limit");
    assert_eq!(outcome.value(), Ok(&240));

    let outcome = graded("120").and_then(|_| Outcome::ok(0));
    assert_success(&outcome);
}

#[test]
fn test_round_trip_through_the_value_channel() {
    let start = parse_reading("88");
    let round: Maybe<i64> = start
        .to_value_outcome::<OutOfRange>("gone")
        .unwrap()
        .to_maybe();
    assert_present(&round, &88);
}
