//! Triage Core - Optionality and tri-state outcome primitives
//!
//! This crate defines the value types the triage crates build on:
//! - Explicit optionality (Maybe, presence probes, combinators)
//! - Sequence-aware helpers for optional collections
//! - Tri-state outcomes (Success, Warning, Failure) with warning policies
//! - Bridges between optionality and outcomes
//! - Contract violations for misuse of the above

pub mod contract;
pub mod maybe;
pub mod sequence;
pub mod state;
pub mod outcome;
pub mod convert;

pub use contract::*;
pub use maybe::*;
pub use sequence::*;
pub use state::*;
pub use outcome::*;
pub use convert::*;
