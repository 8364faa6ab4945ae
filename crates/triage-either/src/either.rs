//! Two-track values
//!
//! `Either<L, R>` holds exactly one of two values. By the convention the
//! bridge in [`crate::convert`] follows, `Right` is the track a present value
//! lands on and `Left` carries the alternative.

use std::fmt;

use triage_core::Maybe;

/// One of two values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// The left value, absent when this is a `Right`.
    pub fn left(self) -> Maybe<L> {
        match self {
            Either::Left(left) => Maybe::Some(left),
            Either::Right(_) => Maybe::None,
        }
    }

    /// The right value, absent when this is a `Left`.
    pub fn right(self) -> Maybe<R> {
        match self {
            Either::Left(_) => Maybe::None,
            Either::Right(right) => Maybe::Some(right),
        }
    }

    /// Transforms the left value, leaving a `Right` untouched.
    pub fn map_left<M, F>(self, converter: F) -> Either<M, R>
    where
        F: FnOnce(L) -> M,
    {
        match self {
            Either::Left(left) => Either::Left(converter(left)),
            Either::Right(right) => Either::Right(right),
        }
    }

    /// Transforms the right value, leaving a `Left` untouched.
    pub fn map_right<M, F>(self, converter: F) -> Either<L, M>
    where
        F: FnOnce(R) -> M,
    {
        match self {
            Either::Left(left) => Either::Left(left),
            Either::Right(right) => Either::Right(converter(right)),
        }
    }

    /// Swaps the tracks.
    pub fn swap(self) -> Either<R, L> {
        match self {
            Either::Left(left) => Either::Right(left),
            Either::Right(right) => Either::Left(right),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Either::Left(left) => write!(f, "Left({})", left),
            Either::Right(right) => write!(f, "Right({})", right),
        }
    }
}
