// src/output.rs

use auditgrade::core::benchmark::{BenchmarkStats, BenchmarkTable};
use auditgrade::core::catalog::BenchmarkList;
use auditgrade::core::models::{value_text, SslDetails};
use auditgrade::core::report::GradedAudit;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::{self, Write};

#[derive(Serialize)]
pub struct GradeOutput<'a> {
    pub generated_at: DateTime<Utc>,
    pub reports: &'a [GradedAudit],
}

#[derive(Serialize)]
pub struct BenchmarkOutput<'a> {
    pub generated_at: DateTime<Utc>,
    pub list: String,
    pub title: &'static str,
    #[serde(flatten)]
    pub table: &'a BenchmarkTable,
    pub stats: &'a BenchmarkStats,
}

/// Plain-text report for one graded domain.
pub fn graded_audit_text(report: &GradedAudit) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_graded_audit(&mut out, report)?;
    Ok(out)
}

fn write_graded_audit(out: &mut String, report: &GradedAudit) -> fmt::Result {
    let domain = if report.domain.is_empty() {
        "(unknown domain)"
    } else {
        report.domain.as_str()
    };

    writeln!(out, "{domain}")?;
    writeln!(out, "  Grade:   {} ({}/100)", report.letter, report.score)?;
    writeln!(out, "  SSL:     {}", if report.ssl_valid { "Valid" } else { "Invalid" })?;
    writeln!(
        out,
        "  Headers: {}/{} present, {} missing",
        report.headers_present, report.headers_total, report.headers_missing
    )?;

    if let Some(ssl) = &report.ssl {
        write_ssl_details(out, ssl)?;
    }

    let width = report.headers.iter().map(|h| h.name.chars().count()).max().unwrap_or(0);
    for header in &report.headers {
        writeln!(out, "    {:<width$}  {}", header.name, header.status.label())?;
    }
    Ok(())
}

/// Certificate lines as the service reported them. These are shown next to,
/// never instead of, the summary's SSL verdict.
fn write_ssl_details(out: &mut String, ssl: &SslDetails) -> fmt::Result {
    if let Some(valid) = &ssl.valid {
        let verdict = match ssl.is_valid() {
            Some(true) => "Yes".to_string(),
            Some(false) => "No".to_string(),
            None => value_text(valid),
        };
        writeln!(out, "  Valid:   {verdict}")?;
    }
    let fields = [
        ("Issuer:  ", &ssl.issuer),
        ("Expires: ", &ssl.not_after),
        ("Days remaining: ", &ssl.days_remaining),
        ("SSL error: ", &ssl.error),
    ];
    for (label, value) in fields {
        if let Some(value) = value {
            writeln!(out, "  {label}{}", value_text(value))?;
        }
    }
    Ok(())
}

/// Column-aligned benchmark table followed by a one-line summary.
pub fn benchmark_text(
    list: BenchmarkList,
    table: &BenchmarkTable,
    stats: &BenchmarkStats,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_benchmark(&mut out, list, table, stats)?;
    Ok(out)
}

fn write_benchmark(
    out: &mut String,
    list: BenchmarkList,
    table: &BenchmarkTable,
    stats: &BenchmarkStats,
) -> fmt::Result {
    let header = ["#", "Product", "Domain", "Grade", "Score", "SSL", "Headers"];
    let lines: Vec<[String; 7]> = table
        .rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            [
                (index + 1).to_string(),
                row.name.clone(),
                row.domain.clone(),
                row.letter_display().to_string(),
                row.score_display(),
                row.ssl_display().to_string(),
                row.headers_display(),
            ]
        })
        .collect();

    let mut widths = header.map(str::len);
    for line in &lines {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    writeln!(out, "{}", list.title())?;
    writeln!(out)?;
    write_row(out, header.iter().copied(), &widths)?;
    for line in &lines {
        write_row(out, line.iter().map(String::as_str), &widths)?;
    }
    writeln!(out)?;

    let mean = stats
        .mean_score
        .map(|m| format!("{m:.1}"))
        .unwrap_or_else(|| "N/A".to_string());
    let distribution: Vec<String> = stats
        .distribution
        .iter()
        .map(|(letter, count)| format!("{letter}:{count}"))
        .collect();
    writeln!(
        out,
        "Scored: {}  Unknown: {}  Mean: {}  Grades: {}",
        stats.scored,
        stats.unknown,
        mean,
        distribution.join(" ")
    )
}

fn write_row<'a>(
    out: &mut String,
    cells: impl Iterator<Item = &'a str>,
    widths: &[usize; 7],
) -> fmt::Result {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    writeln!(out, "{}", padded.join("  ").trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use auditgrade::core::catalog::BenchmarkSite;
    use auditgrade::core::models::{AuditResponse, AuditSummary};
    use auditgrade::core::report::grade_audit;
    use auditgrade::core::score::ScorePolicy;
    use serde_json::json;

    #[test]
    fn graded_text_lists_headers() {
        let mut audit = AuditResponse {
            domain: "example.com".to_string(),
            summary: AuditSummary::new(2, 1, false),
            ..Default::default()
        };
        audit.headers.insert("X-Frame-Options".to_string(), json!("✅ Present"));
        audit.headers.insert("CSP".to_string(), json!("❌ Missing"));
        let report = grade_audit(&audit, ScorePolicy::Permissive).unwrap();

        let text = graded_audit_text(&report).unwrap();
        assert!(text.starts_with("example.com\n"));
        assert!(text.contains("Grade:   D (40/100)"));
        assert!(text.contains("SSL:     Invalid"));
        assert!(text.contains("Headers: 1/2 present, 1 missing"));
        assert!(text.contains("    CSP              Missing"));
        assert!(text.contains("    X-Frame-Options  Present"));
    }

    #[test]
    fn header_names_align_by_characters() {
        let mut audit = AuditResponse {
            domain: "example.com".to_string(),
            summary: AuditSummary::new(2, 1, true),
            ..Default::default()
        };
        audit.headers.insert("Ünïcode-Policy".to_string(), json!("✅ Present"));
        audit.headers.insert("X-Frame-Options".to_string(), json!("❌ Missing"));
        let report = grade_audit(&audit, ScorePolicy::Permissive).unwrap();

        let text = graded_audit_text(&report).unwrap();
        assert!(text.contains("    Ünïcode-Policy   Present\n"));
        assert!(text.contains("    X-Frame-Options  Missing\n"));
    }

    #[test]
    fn certificate_details_are_listed_with_their_own_verdict() {
        let audit = AuditResponse {
            domain: "example.com".to_string(),
            summary: AuditSummary::new(6, 0, true),
            ssl: Some(SslDetails {
                valid: Some(json!(false)),
                issuer: Some(json!([["commonName", "R11"]])),
                days_remaining: Some(json!(74.6)),
                ..Default::default()
            }),
            ..Default::default()
        };
        let report = grade_audit(&audit, ScorePolicy::Permissive).unwrap();

        let text = graded_audit_text(&report).unwrap();
        assert!(text.contains("  SSL:     Valid\n"));
        assert!(text.contains("  Valid:   No\n"));
        assert!(text.contains(r#"  Issuer:  [["commonName","R11"]]"#));
        assert!(text.contains("  Days remaining: 74.6\n"));
        assert!(!text.contains("Expires"));
    }

    #[test]
    fn benchmark_text_has_unknown_rows_and_summary() {
        let sites = vec![
            BenchmarkSite::new("Known", "known.io", None),
            BenchmarkSite::new("Unknown", "unknown.io", None),
        ];
        let table = BenchmarkTable::build(&sites, |site| {
            (site.domain == "known.io").then(|| AuditResponse {
                domain: "known.io".to_string(),
                summary: AuditSummary::new(6, 0, true),
                ..Default::default()
            })
        });
        let text = benchmark_text(BenchmarkList::Saas, &table, &table.stats()).unwrap();

        assert!(text.starts_with("SaaS website security benchmarks\n"));
        assert!(text.contains("1  Known    known.io    A      100/100  Valid    6/6"));
        assert!(text.contains("2  Unknown  unknown.io  ?      N/A      Unknown  N/A"));
        assert!(text.contains("Scored: 1  Unknown: 1  Mean: 100.0  Grades: A:1 B:0 C:0 D:0 F:0"));
    }
}
