//! Track-aware assertions
//!
//! Each helper panics with the state it actually saw, so a failing pipeline
//! test names the track it ended on instead of a bare boolean.

use std::fmt;

use triage_core::{Maybe, Outcome};
use triage_either::Either;

/// Asserts that `maybe` is present and carries `expected`.
#[track_caller]
pub fn assert_present<T>(maybe: &Maybe<T>, expected: &T)
where
    T: PartialEq + fmt::Debug,
{
    match maybe {
        Maybe::Some(value) if value == expected => {}
        Maybe::Some(value) => panic!(
            "expected a present Maybe carrying {:?}, found {:?}",
            expected, value
        ),
        Maybe::None => panic!("expected a present Maybe carrying {:?}, found None", expected),
    }
}

/// Asserts that `maybe` is absent.
#[track_caller]
pub fn assert_absent<T: fmt::Debug>(maybe: &Maybe<T>) {
    if let Maybe::Some(value) = maybe {
        panic!("expected an absent Maybe, found {:?}", value);
    }
}

/// Asserts a pure success, warnings included are a failure of the test.
#[track_caller]
pub fn assert_success<T, E>(outcome: &Outcome<T, E>) {
    if !outcome.is_success() {
        panic!("expected Success, found {}", outcome);
    }
}

/// Asserts a warning carrying exactly `message`.
#[track_caller]
pub fn assert_warning<T, E>(outcome: &Outcome<T, E>, message: &str) {
    if !outcome.is_warning() {
        panic!("expected Warning: {}, found {}", message, outcome);
    }
    if outcome.message() != Maybe::Some(message) {
        panic!("expected Warning: {}, found {}", message, outcome);
    }
}

/// Asserts a failure carrying exactly `message`.
#[track_caller]
pub fn assert_failure<T, E>(outcome: &Outcome<T, E>, message: &str) {
    if !outcome.is_failure() {
        panic!("expected Failure: {}, found {}", message, outcome);
    }
    if outcome.message() != Maybe::Some(message) {
        panic!("expected Failure: {}, found {}", message, outcome);
    }
}

/// Asserts that `either` sits on the left track with `expected`.
#[track_caller]
pub fn assert_left<L, R>(either: &Either<L, R>, expected: &L)
where
    L: PartialEq + fmt::Debug,
    R: fmt::Debug,
{
    match either {
        Either::Left(left) if left == expected => {}
        other => panic!("expected Left({:?}), found {:?}", expected, other),
    }
}

/// Asserts that `either` sits on the right track with `expected`.
#[track_caller]
pub fn assert_right<L, R>(either: &Either<L, R>, expected: &R)
where
    L: fmt::Debug,
    R: PartialEq + fmt::Debug,
{
    match either {
        Either::Right(right) if right == expected => {}
        other => panic!("expected Right({:?}), found {:?}", expected, other),
    }
}
