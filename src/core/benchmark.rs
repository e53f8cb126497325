// src/core/benchmark.rs

use crate::core::catalog::BenchmarkSite;
use crate::core::models::{AuditResponse, LetterGrade};
use crate::core::score::compute_score_and_letter;
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

/// One line of a benchmark table.
///
/// Every derived field is `None` when no audit was available for the site, so
/// the row can still be shown with its name and domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkRow {
    pub name: String,
    pub domain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub score: Option<u8>,
    pub letter: Option<LetterGrade>,
    pub ssl_valid: Option<bool>,
    pub headers_present: Option<u32>,
    pub headers_total: Option<u32>,
}

impl BenchmarkRow {
    pub fn from_audit(site: &BenchmarkSite, audit: Option<&AuditResponse>) -> Self {
        let mut row = Self {
            name: site.name.clone(),
            domain: site.domain.clone(),
            note: site.note.clone(),
            score: None,
            letter: None,
            ssl_valid: None,
            headers_present: None,
            headers_total: None,
        };

        if let Some(audit) = audit {
            let summary = &audit.summary;
            let result = compute_score_and_letter(summary);
            row.score = Some(result.score);
            row.letter = Some(result.letter);
            row.ssl_valid = Some(summary.ssl_valid);
            row.headers_present = Some(summary.headers_present());
            row.headers_total = Some(summary.total_headers_checked);
        }

        row
    }

    pub fn score_display(&self) -> String {
        match self.score {
            Some(score) => format!("{score}/100"),
            None => "N/A".to_string(),
        }
    }

    pub fn headers_display(&self) -> String {
        match (self.headers_present, self.headers_total) {
            (Some(present), Some(total)) => format!("{present}/{total}"),
            _ => "N/A".to_string(),
        }
    }

    pub fn ssl_display(&self) -> &'static str {
        match self.ssl_valid {
            Some(true) => "Valid",
            Some(false) => "Not valid",
            None => "Unknown",
        }
    }

    pub fn letter_display(&self) -> &'static str {
        self.letter.map(<&'static str>::from).unwrap_or("?")
    }
}

/// Aggregate figures over a benchmark table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkStats {
    pub scored: usize,
    pub unknown: usize,
    /// Mean over scored rows only, `None` when there are none.
    pub mean_score: Option<f64>,
    /// Row count per grade. Every grade is present, zero or not.
    pub distribution: BTreeMap<LetterGrade, usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkTable {
    pub rows: Vec<BenchmarkRow>,
}

impl BenchmarkTable {
    /// Builds one row per site using whatever `lookup` returns for it, then
    /// orders rows by score, best first. Sites without an audit go last and
    /// ties keep catalog order.
    pub fn build<F>(sites: &[BenchmarkSite], mut lookup: F) -> Self
    where
        F: FnMut(&BenchmarkSite) -> Option<AuditResponse>,
    {
        let mut rows: Vec<BenchmarkRow> = sites
            .iter()
            .map(|site| {
                let audit = lookup(site);
                BenchmarkRow::from_audit(site, audit.as_ref())
            })
            .collect();

        // Reverse(None) is the greatest key, so unknown rows sort last.
        rows.sort_by_key(|row| Reverse(row.score));
        Self { rows }
    }

    pub fn stats(&self) -> BenchmarkStats {
        let mut distribution: BTreeMap<LetterGrade, usize> =
            LetterGrade::iter().map(|letter| (letter, 0)).collect();
        let mut total: u64 = 0;
        let mut scored = 0;

        for row in &self.rows {
            if let (Some(score), Some(letter)) = (row.score, row.letter) {
                scored += 1;
                total += u64::from(score);
                *distribution.entry(letter).or_insert(0) += 1;
            }
        }

        BenchmarkStats {
            scored,
            unknown: self.rows.len() - scored,
            mean_score: (scored > 0).then(|| total as f64 / scored as f64),
            distribution,
        }
    }
}
