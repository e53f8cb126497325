// src/lib.rs

//! Score-and-letter-grade derivation for website security audit summaries.
//!
//! The audit itself (TLS checks, header probing) is performed by an external
//! service. This crate consumes the summary that service returns and turns it
//! into a 0-100 score and an A-F letter grade, plus the benchmark tables built
//! on top of that grade.

pub mod config;
pub mod core;

pub use crate::core::errors::{AuditResult, ErrorKind};
pub use crate::core::models::{AuditResponse, AuditSummary, LetterGrade, ScoreResult};
pub use crate::core::score::{compute_score_and_letter, letter_for_score};
