//! Key-driven value equality
//!
//! A value object is equal to another exactly when their equality keys are
//! equal. The type names its key once; [`value_equality!`] derives
//! `PartialEq`, `Eq`, and `Hash` from it, so equality and hashing cannot
//! drift apart. Normalization (case folding, rounding) belongs in
//! [`ValueObject::equality_key`], and identity fields stay out of it.

use std::hash::Hash;

/// A type whose equality is defined by a key derived from its fields.
///
/// ```
/// use triage_core::Maybe;
/// use triage_values::{value_equality, ValueObject};
///
/// #[derive(Debug, Clone)]
/// struct Address {
///     house_number: Maybe<u32>,
///     street: String,
/// }
///
/// impl ValueObject for Address {
///     type Key = (Maybe<u32>, String);
///
///     fn equality_key(&self) -> Self::Key {
///         (self.house_number, self.street.clone())
///     }
/// }
///
/// value_equality!(Address);
///
/// let a = Address { house_number: Maybe::some(12), street: "Acacia Ave".into() };
/// let b = Address { house_number: Maybe::some(12), street: "Acacia Ave".into() };
/// assert_eq!(a, b);
/// ```
pub trait ValueObject {
    /// The comparison key. Composite objects nest the keys of their parts.
    type Key: Eq + Hash;

    fn equality_key(&self) -> Self::Key;
}

/// Implements `PartialEq`, `Eq`, and `Hash` for a [`ValueObject`] in terms
/// of its equality key.
#[macro_export]
macro_rules! value_equality {
    ($type:ty) => {
        impl ::core::cmp::PartialEq for $type {
            fn eq(&self, other: &Self) -> bool {
                $crate::ValueObject::equality_key(self) == $crate::ValueObject::equality_key(other)
            }
        }

        impl ::core::cmp::Eq for $type {}

        impl ::core::hash::Hash for $type {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                ::core::hash::Hash::hash(&$crate::ValueObject::equality_key(self), state);
            }
        }
    };
}
