//! Outcome state machine internals
//!
//! `OutcomeState` is the tri-state logic value every `Outcome` embeds by
//! composition: exactly one of success, warning, or failure, with the value,
//! message, and typed-error slots attached to the variants that own them.
//! States never mutate; escalation and re-derivation always build a new one.

use crate::contract::{ContractResult, ContractViolation};
use crate::maybe::Maybe;

/// How combinators treat a warning when deciding between the success and
/// failure paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WarningPolicy {
    /// A warning behaves like a success; forward progress continues.
    Tolerate,
    /// A warning is routed to failure semantics (escalation).
    Escalate,
}

impl Default for WarningPolicy {
    fn default() -> Self {
        WarningPolicy::Tolerate
    }
}

/// The tri-state disposition shared by every outcome shape.
///
/// INVARIANT: a warning or failure message is never empty; constructors go
/// through [`validate_message`] before building one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum OutcomeState<T, E> {
    /// The computation fully succeeded and produced `T`.
    Success(T),
    /// The computation produced `T` but flagged a non-fatal concern.
    Warning(T, String),
    /// The computation failed; no value exists, a typed error may.
    Failure(String, Maybe<E>),
}

impl<T, E> OutcomeState<T, E> {
    #[inline]
    pub(crate) fn is_success(&self) -> bool {
        matches!(self, OutcomeState::Success(_))
    }

    #[inline]
    pub(crate) fn is_warning(&self) -> bool {
        matches!(self, OutcomeState::Warning(..))
    }

    #[inline]
    pub(crate) fn is_failure(&self) -> bool {
        matches!(self, OutcomeState::Failure(..))
    }

    /// The warning or failure message; absent on pure success.
    pub(crate) fn message(&self) -> Maybe<&str> {
        match self {
            OutcomeState::Success(_) => Maybe::None,
            OutcomeState::Warning(_, message) => Maybe::Some(message.as_str()),
            OutcomeState::Failure(message, _) => Maybe::Some(message.as_str()),
        }
    }

    /// The typed error; meaningful only on failure, absent everywhere else.
    pub(crate) fn error(&self) -> Maybe<&E> {
        match self {
            OutcomeState::Failure(_, error) => error.as_ref(),
            _ => Maybe::None,
        }
    }
}

/// Checks a warning/failure message at construction time. Messages are
/// mandatory; an empty one is API misuse, not a domain outcome.
pub(crate) fn validate_message(message: &str) -> ContractResult<()> {
    if message.is_empty() {
        return Err(ContractViolation::invalid_argument(
            "warning/failure message must not be empty",
        ));
    }
    Ok(())
}
