//! Tri-state operation outcomes
//!
//! `Outcome<T, E>` reports success, warning, or failure for one computation,
//! optionally carrying a value and a typed error. The parameter defaults
//! recover the simpler shapes: `Outcome` is unit-valued with a unit error,
//! `Outcome<T>` carries a value, `Outcome<(), E>` carries a typed error, and
//! `Outcome<T, E>` carries both.
//!
//! A warning travels the success path until a combinator is told to escalate
//! it; escalation constructs a new failure, it never mutates.

use std::fmt;

use crate::contract::{ContractResult, ContractViolation};
use crate::maybe::Maybe;
use crate::state::{validate_message, OutcomeState, WarningPolicy};

/// The result of a computation: success, warning, or failure.
///
/// ```
/// use triage_core::{Outcome, WarningPolicy};
///
/// let saved: Outcome<u32> = Outcome::warn(7, "legacy record format")?;
/// let mut alerts = 0;
/// let saved = saved.on_failure(|_| alerts += 1, WarningPolicy::Tolerate);
/// assert!(saved.is_warning());
/// assert_eq!(alerts, 0);
/// assert_eq!(saved.value(), Ok(&7));
/// # Ok::<(), triage_core::ContractViolation>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome<T = (), E = ()> {
    pub(crate) state: OutcomeState<T, E>,
}

impl<T, E> Outcome<T, E> {
    /// A successful outcome carrying `value`. The unit shape spells this
    /// `Outcome::ok(())`.
    #[inline]
    pub fn ok(value: T) -> Self {
        Outcome {
            state: OutcomeState::Success(value),
        }
    }

    /// A warning outcome: the computation produced `value` but flagged a
    /// concern. The message is mandatory; empty is a contract violation.
    pub fn warn(value: T, message: impl Into<String>) -> ContractResult<Self> {
        let message = message.into();
        validate_message(&message)?;
        Ok(Outcome {
            state: OutcomeState::Warning(value, message),
        })
    }

    /// A failed outcome with a mandatory message and no typed error.
    pub fn fail(message: impl Into<String>) -> ContractResult<Self> {
        let message = message.into();
        validate_message(&message)?;
        Ok(Outcome {
            state: OutcomeState::Failure(message, Maybe::None),
        })
    }

    /// A failed outcome carrying a typed error alongside the message.
    pub fn fail_with(message: impl Into<String>, error: E) -> ContractResult<Self> {
        let message = message.into();
        validate_message(&message)?;
        Ok(Outcome {
            state: OutcomeState::Failure(message, Maybe::Some(error)),
        })
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.state.is_success()
    }

    #[inline]
    pub fn is_warning(&self) -> bool {
        self.state.is_warning()
    }

    #[inline]
    pub fn is_failure(&self) -> bool {
        self.state.is_failure()
    }

    /// Borrows the carried value. Readable on success and warning; reading a
    /// failure's value is an `InvalidState` violation.
    pub fn value(&self) -> ContractResult<&T> {
        match &self.state {
            OutcomeState::Success(value) | OutcomeState::Warning(value, _) => Ok(value),
            OutcomeState::Failure(..) => Err(ContractViolation::invalid_state(
                "value read on a failed Outcome",
            )),
        }
    }

    /// Takes the carried value; same contract as [`Outcome::value`].
    pub fn into_value(self) -> ContractResult<T> {
        match self.state {
            OutcomeState::Success(value) | OutcomeState::Warning(value, _) => Ok(value),
            OutcomeState::Failure(..) => Err(ContractViolation::invalid_state(
                "value read on a failed Outcome",
            )),
        }
    }

    /// The warning or failure message; absent on pure success.
    #[inline]
    pub fn message(&self) -> Maybe<&str> {
        self.state.message()
    }

    /// The typed error; absent unless a failure carries one. Reading this on
    /// a success or warning is answered with absent, not a violation.
    #[inline]
    pub fn error(&self) -> Maybe<&E> {
        self.state.error()
    }

    /// Runs `action` on the carried value when the outcome counts as a
    /// success under `policy`: on Success always, on Warning only under
    /// [`WarningPolicy::Tolerate`]. Yields the outcome back unchanged.
    pub fn on_success<F>(self, action: F, policy: WarningPolicy) -> Self
    where
        F: FnOnce(&T),
    {
        match &self.state {
            OutcomeState::Success(value) => action(value),
            OutcomeState::Warning(value, _) if policy == WarningPolicy::Tolerate => action(value),
            _ => {}
        }
        self
    }

    /// Runs `action` when the outcome counts as a failure under `policy`: on
    /// Failure always, on Warning only under [`WarningPolicy::Escalate`]. An
    /// escalated warning is then rebuilt as a failure carrying the warning's
    /// message and `E::default()` in the error slot.
    pub fn on_failure<F>(self, action: F, policy: WarningPolicy) -> Self
    where
        F: FnOnce(&Self),
        E: Default,
    {
        self.on_failure_with(action, E::default, policy)
    }

    /// Like [`Outcome::on_failure`], with the escalation error supplied by
    /// the caller's factory. The factory runs only if escalation happens.
    pub fn on_failure_with<F, G>(self, action: F, error_factory: G, policy: WarningPolicy) -> Self
    where
        F: FnOnce(&Self),
        G: FnOnce() -> E,
    {
        if self.state.is_failure() {
            action(&self);
            self
        } else if self.state.is_warning() && policy == WarningPolicy::Escalate {
            action(&self);
            self.escalate(error_factory())
        } else {
            self
        }
    }

    /// Rebuilds a warning as a failure with the same message. Any other
    /// state passes through untouched.
    fn escalate(self, error: E) -> Self {
        match self.state {
            OutcomeState::Warning(_, message) => {
                tracing::debug!(warning = %message, "escalated to failure");
                Outcome {
                    state: OutcomeState::Failure(message, Maybe::Some(error)),
                }
            }
            state => Outcome { state },
        }
    }

    /// Transforms the carried value, keeping the state: a warning stays a
    /// warning with its message, a failure passes through untouched.
    pub fn map<U, F>(self, converter: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        let state = match self.state {
            OutcomeState::Success(value) => OutcomeState::Success(converter(value)),
            OutcomeState::Warning(value, message) => {
                OutcomeState::Warning(converter(value), message)
            }
            OutcomeState::Failure(message, error) => OutcomeState::Failure(message, error),
        };
        Outcome { state }
    }

    /// Chains a dependent computation. A failure propagates without running
    /// the continuation; success and warning both feed their value through,
    /// and the continuation's outcome wins (a warning does not downgrade it).
    pub fn and_then<U, F>(self, continuation: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self.state {
            OutcomeState::Success(value) | OutcomeState::Warning(value, _) => continuation(value),
            OutcomeState::Failure(message, error) => Outcome {
                state: OutcomeState::Failure(message, error),
            },
        }
    }
}

impl<T: Default, E> Default for Outcome<T, E> {
    /// A successful outcome around the value type's default.
    fn default() -> Self {
        Outcome::ok(T::default())
    }
}

impl<T, E> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            OutcomeState::Success(_) => f.write_str("Success"),
            OutcomeState::Warning(_, message) => write!(f, "Warning: {}", message),
            OutcomeState::Failure(message, _) => write!(f, "Failure: {}", message),
        }
    }
}
