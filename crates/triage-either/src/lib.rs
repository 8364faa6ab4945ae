//! Triage Either - Two-track values
//!
//! This crate adds the two-track side of the triage family:
//! - Either values (Left, Right) with track-local maps and swap
//! - Bridges that put a present Maybe on the Right track

pub mod either;
pub mod convert;

pub use either::*;
pub use convert::*;
