// src/core/loader.rs

//! Reading audit documents that were fetched by something else.
//!
//! A document is either one audit response (`{"domain": .., "summary": ..}`),
//! a JSON array of them, or a bare summary object. Bare summaries and
//! responses without a `domain` take the caller's fallback domain, usually the
//! file stem.

use crate::core::benchmark::BenchmarkTable;
use crate::core::catalog::BenchmarkSite;
use crate::core::errors::{AuditResult, ErrorKind};
use crate::core::models::{AuditResponse, AuditSummary};
use serde_json::Value;
use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const SUMMARY_FIELDS: [&str; 3] = ["total_headers_checked", "headers_missing", "ssl_valid"];

/// Parses one audit document.
///
/// # Arguments
/// * `text` - The raw JSON.
/// * `fallback_domain` - Domain used for entries that do not name one.
///
/// # Returns
/// Every audit in the document, in document order.
pub fn parse_audit_document(text: &str, fallback_domain: &str) -> AuditResult<Vec<AuditResponse>> {
    let value: Value = serde_json::from_str(text)?;
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| response_from_value(item, fallback_domain))
            .collect(),
        other => Ok(vec![response_from_value(other, fallback_domain)?]),
    }
}

fn response_from_value(value: Value, fallback_domain: &str) -> AuditResult<AuditResponse> {
    let (has_summary, looks_like_summary) = match &value {
        Value::Object(map) => (
            map.contains_key("summary"),
            SUMMARY_FIELDS.iter().any(|field| map.contains_key(*field)),
        ),
        _ => return Err(ErrorKind::UnrecognizedDocument),
    };

    if has_summary {
        let mut response: AuditResponse = serde_json::from_value(value)?;
        if response.domain.trim().is_empty() {
            response.domain = fallback_domain.to_string();
        }
        Ok(response)
    } else if looks_like_summary {
        let summary: AuditSummary = serde_json::from_value(value)?;
        Ok(AuditResponse {
            domain: fallback_domain.to_string(),
            summary,
            ..Default::default()
        })
    } else {
        Err(ErrorKind::UnrecognizedDocument)
    }
}

/// Reads and parses an audit document from disk. The file stem is the
/// fallback domain, so `example.com.json` grades as `example.com`.
pub fn read_audit_file(path: &Path) -> AuditResult<Vec<AuditResponse>> {
    debug!(path = %path.display(), "Reading audit document.");
    let text = std::fs::read_to_string(path).map_err(|source| ErrorKind::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let fallback = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    parse_audit_document(&text, &fallback)
}

/// Where the audit for `domain` is expected inside a benchmark directory.
pub fn audit_path(dir: &Path, domain: &str) -> PathBuf {
    dir.join(format!("{domain}.json"))
}

/// Builds the benchmark table for `sites` from the audits stored in `dir`.
///
/// A missing, unreadable or malformed file does not fail the table: the
/// affected row is simply left without a score.
pub fn load_benchmark(sites: &[BenchmarkSite], dir: &Path) -> BenchmarkTable {
    info!(dir = %dir.display(), sites = sites.len(), "Loading benchmark audits.");
    let table = BenchmarkTable::build(sites, |site| lookup_audit(dir, site));
    let stats = table.stats();
    info!(scored = stats.scored, unknown = stats.unknown, "Benchmark table built.");
    table
}

fn lookup_audit(dir: &Path, site: &BenchmarkSite) -> Option<AuditResponse> {
    let path = audit_path(dir, &site.domain);
    match read_audit_file(&path) {
        Ok(audits) => {
            let matching = audits
                .iter()
                .position(|a| a.domain.eq_ignore_ascii_case(&site.domain));
            if matching.is_none() && !audits.is_empty() {
                warn!(
                    domain = %site.domain,
                    path = %path.display(),
                    "Audit file names a different domain, using its first entry."
                );
            }
            audits.into_iter().nth(matching.unwrap_or(0))
        }
        Err(ErrorKind::Io { source, .. }) if source.kind() == IoErrorKind::NotFound => {
            debug!(domain = %site.domain, "No audit on disk.");
            None
        }
        Err(e) => {
            warn!(domain = %site.domain, error = %e, "Could not load audit, row will be unknown.");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::LetterGrade;
    use crate::core::score::compute_score_and_letter;
    use std::fs;

    #[test]
    fn single_response() {
        let audits = parse_audit_document(
            r#"{"domain": "github.com", "summary": {"total_headers_checked": 6, "headers_missing": 1, "ssl_valid": true}}"#,
            "ignored",
        )
        .unwrap();
        assert_eq!(audits.len(), 1);
        assert_eq!(audits[0].domain, "github.com");
        assert_eq!(audits[0].summary.headers_missing, 1);
    }

    #[test]
    fn bare_summary_takes_fallback_domain() {
        let audits = parse_audit_document(
            r#"{"total_headers_checked": 0, "headers_missing": 0, "ssl_valid": true}"#,
            "example.com",
        )
        .unwrap();
        assert_eq!(audits[0].domain, "example.com");
        assert!(audits[0].headers.is_empty());
    }

    #[test]
    fn array_of_responses_keeps_order() {
        let audits = parse_audit_document(
            r#"[
                {"domain": "b.com", "summary": {"ssl_valid": true}},
                {"summary": {"ssl_valid": false}}
            ]"#,
            "fallback.com",
        )
        .unwrap();
        let domains: Vec<&str> = audits.iter().map(|a| a.domain.as_str()).collect();
        assert_eq!(domains, ["b.com", "fallback.com"]);
    }

    #[test]
    fn unrecognized_and_malformed_documents() {
        assert!(matches!(
            parse_audit_document(r#"{"status": "queued"}"#, "x"),
            Err(ErrorKind::UnrecognizedDocument)
        ));
        assert!(matches!(parse_audit_document("42", "x"), Err(ErrorKind::UnrecognizedDocument)));
        assert!(matches!(
            parse_audit_document("{not json", "x"),
            Err(ErrorKind::MalformedAudit(_))
        ));
        assert!(matches!(
            parse_audit_document(r#"{"summary": "pending"}"#, "x"),
            Err(ErrorKind::MalformedAudit(_))
        ));
    }

    #[test]
    fn loose_ssl_details_still_grade() {
        let audits = parse_audit_document(
            r#"{
                "summary": {"total_headers_checked": 6, "headers_missing": 0, "ssl_valid": true},
                "ssl": {"issuer": [["commonName", "R11"]], "days_remaining": 74.6}
            }"#,
            "example.com",
        )
        .unwrap();
        assert_eq!(audits[0].domain, "example.com");
        let result = compute_score_and_letter(&audits[0].summary);
        assert_eq!((result.score, result.letter), (100, LetterGrade::A));
    }

    #[test]
    fn benchmark_row_scores_despite_odd_ssl_and_headers() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            audit_path(dir.path(), "odd.io"),
            r#"{
                "domain": "odd.io",
                "summary": {"total_headers_checked": 6, "headers_missing": 1, "ssl_valid": true},
                "headers": {"Content-Security-Policy": 0},
                "ssl": {"valid": 1, "not_after": 1767225600, "error": {"code": 7}}
            }"#,
        )
        .unwrap();
        let table = load_benchmark(&[BenchmarkSite::new("Odd", "odd.io", None)], dir.path());
        assert_eq!(table.rows[0].score, Some(93));
    }

    #[test]
    fn file_stem_is_fallback_domain() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stripe.com.json");
        fs::write(
            &path,
            r#"{"total_headers_checked": 6, "headers_missing": 0, "ssl_valid": true}"#,
        )
        .unwrap();
        let audits = read_audit_file(&path).unwrap();
        assert_eq!(audits[0].domain, "stripe.com");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_audit_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ErrorKind::Io { .. }));
    }

    #[test]
    fn benchmark_tolerates_missing_and_broken_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            audit_path(dir.path(), "good.io"),
            r#"{"domain": "good.io", "summary": {"total_headers_checked": 6, "headers_missing": 0, "ssl_valid": true}}"#,
        )
        .unwrap();
        fs::write(audit_path(dir.path(), "broken.io"), "<html>502 Bad Gateway</html>").unwrap();

        let sites = vec![
            BenchmarkSite::new("Broken", "broken.io", None),
            BenchmarkSite::new("Absent", "absent.io", None),
            BenchmarkSite::new("Good", "good.io", None),
        ];
        let table = load_benchmark(&sites, dir.path());

        let rows: Vec<(&str, Option<u8>)> =
            table.rows.iter().map(|r| (r.domain.as_str(), r.score)).collect();
        assert_eq!(rows, [("good.io", Some(100)), ("broken.io", None), ("absent.io", None)]);
    }

    #[test]
    fn benchmark_picks_matching_entry_from_array() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            audit_path(dir.path(), "two.io"),
            r#"[
                {"domain": "one.io", "summary": {"total_headers_checked": 6, "headers_missing": 6, "ssl_valid": false}},
                {"domain": "TWO.io", "summary": {"total_headers_checked": 6, "headers_missing": 0, "ssl_valid": true}}
            ]"#,
        )
        .unwrap();
        let table = load_benchmark(&[BenchmarkSite::new("Two", "two.io", None)], dir.path());
        assert_eq!(table.rows[0].score, Some(100));
    }
}
