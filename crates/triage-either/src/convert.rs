//! Bridging `Maybe` onto the two tracks
//!
//! A present value lands on the `Right` track; absence is replaced by a
//! caller-supplied `Left`. The `_with` form defers building the `Left` until
//! absence is established.

use triage_core::Maybe;

use crate::either::Either;

/// Conversions from optionality to [`Either`].
pub trait MaybeEitherExt<T> {
    /// `Right` when present, otherwise `Left(left)`.
    fn to_either<L>(self, left: L) -> Either<L, T>;

    /// `Right` when present, otherwise `Left(left_factory())`. The factory
    /// is not consulted for a present value.
    fn to_either_with<L, F>(self, left_factory: F) -> Either<L, T>
    where
        F: FnOnce() -> L;
}

impl<T> MaybeEitherExt<T> for Maybe<T> {
    fn to_either<L>(self, left: L) -> Either<L, T> {
        match self {
            Maybe::Some(value) => Either::Right(value),
            Maybe::None => Either::Left(left),
        }
    }

    fn to_either_with<L, F>(self, left_factory: F) -> Either<L, T>
    where
        F: FnOnce() -> L,
    {
        match self {
            Maybe::Some(value) => Either::Right(value),
            Maybe::None => Either::Left(left_factory()),
        }
    }
}
