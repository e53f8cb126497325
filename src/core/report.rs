// src/core/report.rs

use crate::core::errors::AuditResult;
use crate::core::models::{
    AuditResponse, AuditSummary, HeaderStatus, LetterGrade, ScoreResult, SslDetails,
};
use crate::core::score::{score_with_policy, ScorePolicy};
use serde::Serialize;
use tracing::{debug, warn};

/// Presence status of one named header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderCheck {
    pub name: String,
    pub status: HeaderStatus,
}

/// Everything known about one domain's audit, with the grade computed locally.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradedAudit {
    pub domain: String,
    pub score: u8,
    pub letter: LetterGrade,
    pub ssl_valid: bool,
    pub headers_total: u32,
    pub headers_missing: u32,
    pub headers_present: u32,
    pub headers: Vec<HeaderCheck>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl: Option<SslDetails>,
}

/// Grades one audit response.
///
/// Only fails under [`ScorePolicy::Strict`], when the summary reports more
/// missing headers than were checked.
pub fn grade_audit(audit: &AuditResponse, policy: ScorePolicy) -> AuditResult<GradedAudit> {
    let result = score_with_policy(&audit.summary, policy)?;
    check_wire_grade(&audit.domain, &audit.summary, result);

    let headers = audit
        .headers
        .iter()
        .map(|(name, status)| HeaderCheck {
            name: name.clone(),
            status: HeaderStatus::from_value(status),
        })
        .collect();

    debug!(domain = %audit.domain, score = result.score, letter = %result.letter, "Audit graded.");

    Ok(GradedAudit {
        domain: audit.domain.clone(),
        score: result.score,
        letter: result.letter,
        ssl_valid: audit.summary.ssl_valid,
        headers_total: audit.summary.total_headers_checked,
        headers_missing: audit.summary.headers_missing,
        headers_present: audit.summary.headers_present(),
        headers,
        ssl: audit.ssl.clone(),
    })
}

/// Logs when the service shipped its own grade and it disagrees with ours.
/// The local grade always wins.
fn check_wire_grade(domain: &str, summary: &AuditSummary, result: ScoreResult) {
    if let Some(wire_score) = summary.score {
        if wire_score.round() != f64::from(result.score) {
            warn!(
                domain,
                wire_score,
                computed = result.score,
                "Ignoring precomputed score from audit service."
            );
        }
    }
    if let Some(wire_letter) = summary.letter_grade.as_deref() {
        if !wire_letter.trim().eq_ignore_ascii_case(result.letter.into()) {
            warn!(
                domain,
                wire_letter,
                computed = %result.letter,
                "Ignoring precomputed letter grade from audit service."
            );
        }
    }
}
