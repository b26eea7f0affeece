//! Use case orchestration for rulegate.
//!
//! This crate provides the application layer: the evaluation pass that
//! coordinates the rule engine, the domain core, rendering, and the report
//! sink. It is intentionally thin; the decision logic lives in
//! `rulegate-domain`.

#![forbid(unsafe_code)]

mod check;

pub use check::{CheckInput, CheckOutput, Outcome, ReportSink, RuleEngine, run_check};
