//! Triage Values - Key-driven value object equality
//!
//! This crate keeps equality and hashing in lockstep for domain value types:
//! - The ValueObject trait names a type's comparison key
//! - value_equality! derives PartialEq, Eq, and Hash from that key

pub mod object;

pub use object::*;
