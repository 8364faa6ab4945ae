//! Optional value container
//!
//! `Maybe<T>` expresses presence or absence of a value without resorting to
//! sentinel values. Construction is strict (`some`, `try_some`) while the
//! `Option<T>` bridges are the lenient entry points that demote an empty
//! source to the absent state.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::contract::{ContractResult, ContractViolation};

/// Hash word written for the absent state, shared by every payload type.
const ABSENT_HASH_MARKER: u64 = 0x4e4f_4e45; // "NONE"

/// A value that may be absent.
///
/// The variants are public so callers can pattern-match, but the documented
/// construction surface is [`Maybe::some`], [`Maybe::none`] and the
/// conversion entry points.
///
/// ```
/// use triage_core::Maybe;
///
/// let found = Maybe::some(21).map(|n: i32| n * 2);
/// assert_eq!(found, Maybe::Some(42));
/// assert_eq!(found.unwrap_or(0), 42);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Maybe<T> {
    /// A present value.
    Some(T),
    /// No value.
    None,
}

impl<T> Maybe<T> {
    /// Wraps a live value as present.
    #[inline]
    pub fn some(value: T) -> Self {
        Maybe::Some(value)
    }

    /// The canonical absent value; adapts to any payload type.
    #[inline]
    pub fn none() -> Self {
        Maybe::None
    }

    /// Strict construction from a nullable source: an empty `Option` is a
    /// contract violation rather than a silent demotion to absent.
    pub fn try_some(value: Option<T>) -> ContractResult<Self> {
        match value {
            Some(value) => Ok(Maybe::Some(value)),
            None => Err(ContractViolation::invalid_argument(
                "present Maybe constructed from an empty Option",
            )),
        }
    }

    /// True when a value is present.
    #[inline]
    pub const fn has_value(&self) -> bool {
        matches!(self, Maybe::Some(_))
    }

    /// True when no value is present.
    #[inline]
    pub const fn has_no_value(&self) -> bool {
        matches!(self, Maybe::None)
    }

    /// Borrows the contained value; absent is an `InvalidState` violation.
    pub fn value(&self) -> ContractResult<&T> {
        match self {
            Maybe::Some(value) => Ok(value),
            Maybe::None => Err(ContractViolation::invalid_state(
                "value read on an absent Maybe",
            )),
        }
    }

    /// Takes the contained value; absent is an `InvalidState` violation.
    pub fn into_value(self) -> ContractResult<T> {
        match self {
            Maybe::Some(value) => Ok(value),
            Maybe::None => Err(ContractViolation::invalid_state(
                "value read on an absent Maybe",
            )),
        }
    }

    /// A borrowing view, for pipelines that must not consume the container.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match *self {
            Maybe::Some(ref value) => Maybe::Some(value),
            Maybe::None => Maybe::None,
        }
    }

    /// Lenient exit to the standard library type.
    #[inline]
    pub fn to_option(self) -> Option<T> {
        match self {
            Maybe::Some(value) => Some(value),
            Maybe::None => None,
        }
    }

    /// Runs `action` on the contained value, then yields the container back
    /// unchanged for fluent chaining. Absent containers skip the action.
    pub fn if_present<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Maybe::Some(value) = &self {
            action(value);
        }
        self
    }

    /// Counterpart of [`Maybe::if_present`]: runs `action` only when absent.
    pub fn if_absent<F>(self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if self.has_no_value() {
            action();
        }
        self
    }

    /// Runs exactly one of the two callbacks, then yields the container back.
    pub fn if_present_or_else<F, G>(self, on_value: F, on_absent: G) -> Self
    where
        F: FnOnce(&T),
        G: FnOnce(),
    {
        match &self {
            Maybe::Some(value) => on_value(value),
            Maybe::None => on_absent(),
        }
        self
    }

    /// Transforms the contained value. The converter never runs when absent.
    pub fn map<U, F>(self, converter: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Some(value) => Maybe::Some(converter(value)),
            Maybe::None => Maybe::None,
        }
    }

    /// Chains a computation that itself may come up empty.
    pub fn and_then<U, F>(self, continuation: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Some(value) => continuation(value),
            Maybe::None => Maybe::None,
        }
    }

    /// Keeps the value only when the predicate accepts it.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Some(value) if predicate(&value) => Maybe::Some(value),
            _ => Maybe::None,
        }
    }

    /// The contained value, or `fallback` when absent.
    #[inline]
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => fallback,
        }
    }

    /// The contained value, or the factory's result when absent.
    pub fn unwrap_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => fallback(),
        }
    }

    /// The contained value, or `T::default()` when absent.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    /// The container itself when present, otherwise the factory's container.
    /// A factory that returns absent is legal and yields absent.
    pub fn or_else<F>(self, fallback: F) -> Self
    where
        F: FnOnce() -> Maybe<T>,
    {
        match self {
            Maybe::Some(value) => Maybe::Some(value),
            Maybe::None => fallback(),
        }
    }

    /// One-step transform-or-default extraction.
    pub fn map_or<U, F>(self, fallback: U, converter: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Some(value) => converter(value),
            Maybe::None => fallback,
        }
    }

    /// Like [`Maybe::map_or`], with the fallback computed lazily.
    pub fn map_or_else<U, D, F>(self, fallback: D, converter: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Some(value) => converter(value),
            Maybe::None => fallback(),
        }
    }

    /// Converts to a `Result`, surfacing exactly the caller-supplied error
    /// when absent. The library never substitutes its own error value.
    pub fn ok_or<E>(self, error: E) -> Result<T, E> {
        match self {
            Maybe::Some(value) => Ok(value),
            Maybe::None => Err(error),
        }
    }

    /// Like [`Maybe::ok_or`], with the error computed only when absent.
    pub fn ok_or_else<E, F>(self, error: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Maybe::Some(value) => Ok(value),
            Maybe::None => Err(error()),
        }
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Reduces one level of nesting: absent-of-anything and
    /// present-of-absent both collapse to absent.
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        match self {
            Maybe::Some(inner) => inner,
            Maybe::None => Maybe::None,
        }
    }
}

impl<'s> Maybe<&'s str> {
    /// Absent for the empty string, present otherwise.
    pub fn none_if_empty(value: &'s str) -> Self {
        if value.is_empty() {
            Maybe::None
        } else {
            Maybe::Some(value)
        }
    }

    /// Absent for empty or all-whitespace strings, present otherwise.
    pub fn none_if_blank(value: &'s str) -> Self {
        if value.trim().is_empty() {
            Maybe::None
        } else {
            Maybe::Some(value)
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::None
    }
}

/// Lenient nullable-source entry point: `None` demotes to absent.
impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Maybe::Some(value),
            None => Maybe::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.to_option()
    }
}

/// Nested containers always reduce to a single level.
impl<T> From<Maybe<Maybe<T>>> for Maybe<T> {
    fn from(nested: Maybe<Maybe<T>>) -> Self {
        nested.flatten()
    }
}

/// Equality through the flattened view of a nested container.
impl<T: PartialEq> PartialEq<Maybe<Maybe<T>>> for Maybe<T> {
    fn eq(&self, other: &Maybe<Maybe<T>>) -> bool {
        match (self, other) {
            (Maybe::Some(a), Maybe::Some(Maybe::Some(b))) => a == b,
            (Maybe::None, Maybe::None) | (Maybe::None, Maybe::Some(Maybe::None)) => true,
            _ => false,
        }
    }
}

impl<T: PartialEq> PartialEq<Maybe<T>> for Maybe<Maybe<T>> {
    fn eq(&self, other: &Maybe<T>) -> bool {
        other == self
    }
}

/// A present value hashes exactly like the bare value; absent hashes to one
/// fixed marker shared by every payload type.
impl<T: Hash> Hash for Maybe<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Maybe::Some(value) => value.hash(state),
            Maybe::None => state.write_u64(ABSENT_HASH_MARKER),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Maybe::Some(value) => value.fmt(f),
            Maybe::None => f.write_str("None"),
        }
    }
}
