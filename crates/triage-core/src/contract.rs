//! Contract violation errors
//!
//! API misuse is reported through this channel: reading a value that is not
//! there, or constructing a warning/failure without a message. Modeled
//! domain failures never travel through it; those are `Outcome` states.

use thiserror::Error;

/// Misuse of the triage API itself.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractViolation {
    // Construction errors
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: &'static str },

    // Access errors
    #[error("Invalid state: {reason}")]
    InvalidState { reason: &'static str },
}

impl ContractViolation {
    /// Raised when a caller hands a constructor an unusable argument.
    pub(crate) fn invalid_argument(reason: &'static str) -> Self {
        tracing::trace!(reason, "contract violation raised");
        ContractViolation::InvalidArgument { reason }
    }

    /// Raised when an accessor is called in a state that cannot honor it.
    pub(crate) fn invalid_state(reason: &'static str) -> Self {
        tracing::trace!(reason, "contract violation raised");
        ContractViolation::InvalidState { reason }
    }

    /// The human-readable reason carried by the violation.
    #[inline]
    pub fn reason(&self) -> &'static str {
        match self {
            ContractViolation::InvalidArgument { reason } => reason,
            ContractViolation::InvalidState { reason } => reason,
        }
    }
}

/// Result type for contract-checked triage operations
pub type ContractResult<T> = Result<T, ContractViolation>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_reason() {
        let violation = ContractViolation::invalid_argument("message must not be empty");
        assert_eq!(
            violation.to_string(),
            "Invalid argument: message must not be empty"
        );

        let violation = ContractViolation::invalid_state("value read on an absent Maybe");
        assert_eq!(
            violation.to_string(),
            "Invalid state: value read on an absent Maybe"
        );
    }

    #[test]
    fn test_reason_accessor() {
        let violation = ContractViolation::invalid_state("no value");
        assert_eq!(violation.reason(), "no value");
    }

    #[test]
    fn test_violations_compare_by_kind_and_reason() {
        assert_eq!(
            ContractViolation::invalid_argument("x"),
            ContractViolation::InvalidArgument { reason: "x" }
        );
        assert_ne!(
            ContractViolation::invalid_argument("x"),
            ContractViolation::invalid_state("x")
        );
    }
}
