//! Sequence-aware combinators
//!
//! When the payload of a `Maybe` is itself iterable, these combinators reach
//! through the container and work per element. Availability is a compile-time
//! capability bound on the payload type, never a runtime type check. An
//! absent container answers `false` to every query and stays absent through
//! every transformation.

use crate::maybe::Maybe;

impl<T> Maybe<T> {
    /// True when present and the contained sequence has at least one element.
    pub fn has_items<'a>(&'a self) -> bool
    where
        &'a T: IntoIterator,
    {
        match self {
            Maybe::Some(sequence) => sequence.into_iter().next().is_some(),
            Maybe::None => false,
        }
    }

    /// True when present and any element satisfies the predicate.
    pub fn any_item<'a, P>(&'a self, predicate: P) -> bool
    where
        &'a T: IntoIterator,
        P: FnMut(<&'a T as IntoIterator>::Item) -> bool,
    {
        match self {
            Maybe::Some(sequence) => sequence.into_iter().any(predicate),
            Maybe::None => false,
        }
    }

    /// True when present and every element satisfies the predicate. A present
    /// empty sequence satisfies any predicate vacuously.
    pub fn all_items<'a, P>(&'a self, predicate: P) -> bool
    where
        &'a T: IntoIterator,
        P: FnMut(<&'a T as IntoIterator>::Item) -> bool,
    {
        match self {
            Maybe::Some(sequence) => sequence.into_iter().all(predicate),
            Maybe::None => false,
        }
    }

    /// True when present and some element equals `value`.
    pub fn contains_item<'a, 'b, U>(&'a self, value: &'b U) -> bool
    where
        U: ?Sized,
        &'a T: IntoIterator,
        <&'a T as IntoIterator>::Item: PartialEq<&'b U>,
    {
        match self {
            Maybe::Some(sequence) => sequence.into_iter().any(|item| item == value),
            Maybe::None => false,
        }
    }

    /// Collects the elements that satisfy the predicate. Zero matches
    /// normalize to absent, never to present-with-empty.
    pub fn where_items<P>(self, predicate: P) -> Maybe<Vec<T::Item>>
    where
        T: IntoIterator,
        P: FnMut(&T::Item) -> bool,
    {
        match self {
            Maybe::Some(sequence) => {
                let matches: Vec<T::Item> = sequence.into_iter().filter(predicate).collect();
                if matches.is_empty() {
                    Maybe::None
                } else {
                    Maybe::Some(matches)
                }
            }
            Maybe::None => Maybe::None,
        }
    }

    /// Runs `action` for every element, then yields the container back for
    /// fluent chaining. Absent containers skip the action entirely.
    pub fn for_each_items<'a, F>(&'a self, action: F) -> &'a Self
    where
        &'a T: IntoIterator,
        F: FnMut(<&'a T as IntoIterator>::Item),
    {
        if let Maybe::Some(sequence) = self {
            sequence.into_iter().for_each(action);
        }
        self
    }
}

/// Entry points lifting any iterable into a `Maybe`, absorbing emptiness.
pub trait SequenceExt: IntoIterator + Sized {
    /// The first element, or absent for an empty sequence.
    fn first_or_none(self) -> Maybe<Self::Item> {
        Maybe::from(self.into_iter().next())
    }

    /// The first element satisfying the predicate, or absent.
    fn first_match_or_none<P>(self, predicate: P) -> Maybe<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Maybe::from(self.into_iter().find(predicate))
    }

    /// The last element, or absent for an empty sequence.
    fn last_or_none(self) -> Maybe<Self::Item> {
        Maybe::from(self.into_iter().last())
    }

    /// The last element satisfying the predicate, or absent.
    fn last_match_or_none<P>(self, mut predicate: P) -> Maybe<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut found = Maybe::None;
        for item in self {
            if predicate(&item) {
                found = Maybe::Some(item);
            }
        }
        found
    }
}

impl<I: IntoIterator> SequenceExt for I {}
