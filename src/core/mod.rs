// src/core/mod.rs

/// Wire shapes returned by the audit service and the derived score types.
pub mod models;

/// The error type shared by every fallible operation in the crate.
pub mod errors;

/// The scoring engine: audit summary in, score and letter grade out.
pub mod score;

/// Static domain lists the product benchmarks against.
pub mod catalog;

/// Benchmark rows and tables built from a catalog list and its audits.
pub mod benchmark;

/// Reading audit documents from disk or stdin.
pub mod loader;

/// Per-domain graded reports.
pub mod report;

pub mod domain;
