//! Pure policy evaluation (no IO).
//!
//! Input: a policy evaluation produced elsewhere by a rule engine.
//! Output: severity buckets, the failing set, and a verdict.

#![forbid(unsafe_code)]

pub mod buckets;
pub mod gate;
pub mod label;
pub mod policy;
pub mod test_support;

mod engine;

#[cfg(test)]
mod proptest;

pub use engine::{DomainOutcome, ViolationRow, evaluate, failing_rows, violation_rows};
