//! Bridges between `Maybe` and `Outcome`
//!
//! Presence maps to success and absence to failure, with the failure message
//! supplied by the caller or falling back to [`NO_VALUE_MESSAGE`]. Warnings
//! sit on the success side of every bridge, so converting a warning to a
//! `Maybe` keeps its value and drops the message.

use crate::contract::ContractResult;
use crate::maybe::Maybe;
use crate::outcome::Outcome;
use crate::state::{validate_message, OutcomeState};

/// Failure message used when a conversion from an absent `Maybe` does not
/// name its own.
pub const NO_VALUE_MESSAGE: &str = "Maybe has no value";

impl<T> Maybe<T> {
    /// Reads this `Maybe` as a unit outcome: success when present, a failure
    /// carrying `failure_message` when absent. The message is validated
    /// before presence is looked at, so an empty message is rejected even
    /// when the value is there.
    pub fn to_outcome<E>(&self, failure_message: impl Into<String>) -> ContractResult<Outcome<(), E>> {
        let message = failure_message.into();
        validate_message(&message)?;
        Ok(match self {
            Maybe::Some(_) => Outcome::ok(()),
            Maybe::None => Outcome {
                state: OutcomeState::Failure(message, Maybe::None),
            },
        })
    }

    /// Like [`Maybe::to_outcome`], keeping the value on the success side.
    pub fn to_value_outcome<E>(
        self,
        failure_message: impl Into<String>,
    ) -> ContractResult<Outcome<T, E>> {
        let message = failure_message.into();
        validate_message(&message)?;
        Ok(match self {
            Maybe::Some(value) => Outcome::ok(value),
            Maybe::None => Outcome {
                state: OutcomeState::Failure(message, Maybe::None),
            },
        })
    }
}

impl<T, E> Outcome<T, E> {
    /// Collapses the outcome to its value channel: present on success or
    /// warning, absent on failure. Messages and typed errors do not survive.
    pub fn to_maybe(self) -> Maybe<T> {
        match self.state {
            OutcomeState::Success(value) | OutcomeState::Warning(value, _) => Maybe::Some(value),
            OutcomeState::Failure(..) => Maybe::None,
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Maybe<T> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.to_maybe()
    }
}

impl<T, E> From<Maybe<T>> for Outcome<T, E> {
    /// Presence becomes success; absence becomes a failure that reads
    /// `"Maybe has no value"`.
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Some(value) => Outcome::ok(value),
            Maybe::None => Outcome {
                state: OutcomeState::Failure(String::from(NO_VALUE_MESSAGE), Maybe::None),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::ContractViolation;

    #[test]
    fn test_to_outcome_maps_presence_to_success() {
        let present = Maybe::some(5);
        let outcome: Outcome = present.to_outcome("missing reading").unwrap();
        assert!(outcome.is_success());
        assert_eq!(outcome.message(), Maybe::<&str>::None);
    }

    #[test]
    fn test_to_outcome_maps_absence_to_failure() {
        let absent: Maybe<i32> = Maybe::none();
        let outcome: Outcome = absent.to_outcome("missing reading").unwrap();
        assert!(outcome.is_failure());
        assert_eq!(outcome.message(), Maybe::Some("missing reading"));
        assert_eq!(outcome.error(), Maybe::<&()>::None);
    }

    #[test]
    fn test_to_outcome_validates_message_before_presence() {
        let present = Maybe::some(5);
        assert!(matches!(
            present.to_outcome::<()>(""),
            Err(ContractViolation::InvalidArgument { .. })
        ));

        let absent: Maybe<i32> = Maybe::none();
        assert!(matches!(
            absent.to_outcome::<()>(""),
            Err(ContractViolation::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_to_value_outcome_carries_value() {
        let outcome: Outcome<i32> = Maybe::some(5).to_value_outcome("gone").unwrap();
        assert!(outcome.is_success());
        assert_eq!(outcome.value(), Ok(&5));

        let outcome: Outcome<i32> = Maybe::<i32>::none().to_value_outcome("gone").unwrap();
        assert!(outcome.is_failure());
        assert_eq!(outcome.message(), Maybe::Some("gone"));
    }

    #[test]
    fn test_to_maybe_keeps_warning_value() {
        let warned: Outcome<i32> = Outcome::warn(9, "stale cache").unwrap();
        assert_eq!(warned.to_maybe(), Maybe::some(9));
    }

    #[test]
    fn test_to_maybe_drops_failure_details() {
        let failed: Outcome<i32, &str> = Outcome::fail_with("f", "cause").unwrap();
        assert_eq!(failed.to_maybe(), Maybe::<i32>::none());
    }

    #[test]
    fn test_from_maybe_uses_default_message() {
        let outcome: Outcome<i32> = Outcome::from(Maybe::<i32>::none());
        assert!(outcome.is_failure());
        assert_eq!(outcome.message(), Maybe::Some(NO_VALUE_MESSAGE));

        let outcome: Outcome<i32> = Outcome::from(Maybe::some(3));
        assert!(outcome.is_success());
        assert_eq!(outcome.value(), Ok(&3));
    }

    #[test]
    fn test_from_outcome_matches_to_maybe() {
        let warned: Outcome<i32> = Outcome::warn(2, "w").unwrap();
        let via_from: Maybe<i32> = Maybe::from(warned);
        assert_eq!(via_from, Maybe::some(2));
    }

    #[test]
    fn test_maybe_round_trip_preserves_value_channel() {
        let start = Maybe::some(11);
        let round: Maybe<i32> = start.to_value_outcome::<()>("gone").unwrap().to_maybe();
        assert_eq!(round, Maybe::some(11));

        let start: Maybe<i32> = Maybe::none();
        let round: Maybe<i32> = start.to_value_outcome::<()>("gone").unwrap().to_maybe();
        assert_eq!(round, Maybe::<i32>::none());
    }
}
