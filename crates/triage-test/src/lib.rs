//! Triage Test Kit - Assertion helpers and shared fixtures
//!
//! This crate provides:
//! - Track-aware assertions for Maybe, Outcome, and Either
//! - A sensor-reading fixture for pipeline tests
//! - Criterion benchmarks for the hot combinators

pub mod asserts;
pub mod fixtures;

pub use asserts::*;
pub use fixtures::*;
