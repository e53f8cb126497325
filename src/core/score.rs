// src/core/score.rs

//! The scoring engine.
//!
//! SSL validity and header absence are penalised independently and the
//! penalties add up: an invalid certificate costs 40 points, missing headers
//! cost up to 40 points in proportion to how many of the checked headers were
//! absent, and a summary where no header could be checked at all costs a flat
//! 20. The result is clamped to `0..=100` and mapped onto a letter grade.
//!
//! Every function here is pure. Existing reports depend on the exact
//! arithmetic, so changes to the constants below change published grades.

use crate::core::errors::{AuditResult, ErrorKind};
use crate::core::models::{AuditSummary, LetterGrade, ScoreResult};

const MAX_SCORE: i64 = 100;
const SSL_INVALID_PENALTY: i64 = 40;
const MISSING_HEADERS_MAX_PENALTY: f64 = 40.0;
const NO_HEADERS_CHECKED_PENALTY: i64 = 20;

/// Inclusive lower bounds, evaluated top-down.
const GRADE_THRESHOLDS: [(i64, LetterGrade); 4] = [
    (90, LetterGrade::A),
    (75, LetterGrade::B),
    (60, LetterGrade::C),
    (40, LetterGrade::D),
];

/// How a summary whose `headers_missing` exceeds `total_headers_checked` is
/// treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScorePolicy {
    /// Score it anyway. The oversized ratio only deepens the deduction and the
    /// clamp keeps the score at or above zero.
    #[default]
    Permissive,
    /// Reject it with [`ErrorKind::InvalidSummary`].
    Strict,
}

/// Derives the score and letter grade for an audit summary.
///
/// Total over every summary, including degenerate ones. Any precomputed
/// `score` or `letter_grade` carried by the summary is ignored.
pub fn compute_score_and_letter(summary: &AuditSummary) -> ScoreResult {
    let mut score = MAX_SCORE;

    if !summary.ssl_valid {
        score -= SSL_INVALID_PENALTY;
    }

    if summary.total_headers_checked > 0 {
        let missing_ratio =
            f64::from(summary.headers_missing) / f64::from(summary.total_headers_checked);
        // f64::round rounds half away from zero; the operand is never negative.
        score -= (missing_ratio * MISSING_HEADERS_MAX_PENALTY).round() as i64;
    } else {
        score -= NO_HEADERS_CHECKED_PENALTY;
    }

    let score = score.clamp(0, MAX_SCORE);

    ScoreResult {
        score: score as u8,
        letter: letter_for_score(score),
    }
}

/// Maps a score onto its letter grade. Scores above 100 grade as `A` and
/// negative scores as `F`.
pub fn letter_for_score(score: i64) -> LetterGrade {
    GRADE_THRESHOLDS
        .iter()
        .find(|(lower_bound, _)| score >= *lower_bound)
        .map(|(_, letter)| *letter)
        .unwrap_or(LetterGrade::F)
}

/// Like [`compute_score_and_letter`], but honours `policy`.
pub fn score_with_policy(summary: &AuditSummary, policy: ScorePolicy) -> AuditResult<ScoreResult> {
    if policy == ScorePolicy::Strict {
        validate(summary)?;
    }
    Ok(compute_score_and_letter(summary))
}

/// Fails when more headers are reported missing than were checked.
pub fn validate(summary: &AuditSummary) -> AuditResult<()> {
    if summary.headers_missing > summary.total_headers_checked {
        return Err(ErrorKind::InvalidSummary {
            headers_missing: summary.headers_missing,
            total_headers_checked: summary.total_headers_checked,
        });
    }
    Ok(())
}

/// Scores a summary that may not have been retrieved. `None` stays `None`, so
/// callers can render the row as unknown instead of failing.
pub fn score_if_available(summary: Option<&AuditSummary>) -> Option<ScoreResult> {
    summary.map(compute_score_and_letter)
}

impl AuditSummary {
    pub fn validate(&self) -> AuditResult<()> {
        validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn score(total: u32, missing: u32, ssl_valid: bool) -> ScoreResult {
        compute_score_and_letter(&AuditSummary::new(total, missing, ssl_valid))
    }

    #[test]
    fn perfect_summary() {
        assert_eq!(score(6, 0, true), ScoreResult { score: 100, letter: LetterGrade::A });
    }

    #[test]
    fn one_missing_header_rounds_up() {
        // 1/6 * 40 = 6.67, rounded to 7
        assert_eq!(score(6, 1, true), ScoreResult { score: 93, letter: LetterGrade::A });
    }

    #[test]
    fn everything_wrong() {
        assert_eq!(score(6, 6, false), ScoreResult { score: 20, letter: LetterGrade::F });
    }

    #[test]
    fn nothing_checked_costs_a_flat_twenty() {
        assert_eq!(score(0, 0, true), ScoreResult { score: 80, letter: LetterGrade::B });
        assert_eq!(score(0, 0, false), ScoreResult { score: 40, letter: LetterGrade::D });
        // headers_missing is irrelevant when nothing was checked
        assert_eq!(score(0, 4, true), ScoreResult { score: 80, letter: LetterGrade::B });
    }

    #[test]
    fn half_missing_without_ssl() {
        assert_eq!(score(6, 3, false), ScoreResult { score: 40, letter: LetterGrade::D });
    }

    #[test]
    fn half_point_rounds_away_from_zero() {
        // 1/16 * 40 = 2.5
        assert_eq!(score(16, 1, true).score, 97);
        // 3/16 * 40 = 7.5
        assert_eq!(score(16, 3, true).score, 92);
    }

    #[test]
    fn overflowing_missing_count_clamps_to_zero() {
        assert_eq!(score(2, 10, false), ScoreResult { score: 0, letter: LetterGrade::F });
        assert_eq!(score(1, u32::MAX, false), ScoreResult { score: 0, letter: LetterGrade::F });
        assert_eq!(score(6, 9, true), ScoreResult { score: 40, letter: LetterGrade::D });
    }

    #[test]
    fn score_always_in_range() {
        for total in 0..=12 {
            for missing in 0..=15 {
                for ssl_valid in [true, false] {
                    let result = score(total, missing, ssl_valid);
                    assert!(result.score <= 100, "{total}/{missing}/{ssl_valid}");
                    assert_eq!(result.letter, letter_for_score(i64::from(result.score)));
                }
            }
        }
    }

    #[test]
    fn wire_precomputed_grade_is_ignored() {
        let mut summary = AuditSummary::new(6, 6, false);
        summary.score = Some(99.0);
        summary.letter_grade = Some("A".to_string());
        assert_eq!(
            compute_score_and_letter(&summary),
            ScoreResult { score: 20, letter: LetterGrade::F }
        );
    }

    #[test]
    fn idempotent() {
        let summary = AuditSummary::new(7, 2, true);
        assert_eq!(compute_score_and_letter(&summary), compute_score_and_letter(&summary));
    }

    #[test]
    fn threshold_boundaries() {
        let cases = [
            (100, LetterGrade::A),
            (90, LetterGrade::A),
            (89, LetterGrade::B),
            (75, LetterGrade::B),
            (74, LetterGrade::C),
            (60, LetterGrade::C),
            (59, LetterGrade::D),
            (40, LetterGrade::D),
            (39, LetterGrade::F),
            (0, LetterGrade::F),
        ];
        for (score, expected) in cases {
            assert_eq!(letter_for_score(score), expected, "score {score}");
        }
        assert_eq!(letter_for_score(150), LetterGrade::A);
        assert_eq!(letter_for_score(-5), LetterGrade::F);
    }

    #[test]
    fn grade_never_improves_as_score_drops() {
        let mut previous = letter_for_score(100);
        for score in (0..100).rev() {
            let current = letter_for_score(score);
            assert!(!current.is_better_than(previous), "score {score}");
            previous = current;
        }
        // every grade is reachable
        for letter in LetterGrade::iter() {
            assert!((0..=100).any(|s| letter_for_score(s) == letter));
        }
    }

    #[test]
    fn strict_policy_rejects_overflow() {
        let summary = AuditSummary::new(3, 4, true);
        assert!(matches!(
            score_with_policy(&summary, ScorePolicy::Strict),
            Err(ErrorKind::InvalidSummary { headers_missing: 4, total_headers_checked: 3 })
        ));
        assert!(summary.validate().is_err());

        let permissive = score_with_policy(&summary, ScorePolicy::Permissive).unwrap();
        assert_eq!(permissive, compute_score_and_letter(&summary));
    }

    #[test]
    fn strict_policy_accepts_consistent_summaries() {
        let summary = AuditSummary::new(6, 6, true);
        assert_eq!(
            score_with_policy(&summary, ScorePolicy::Strict).unwrap(),
            ScoreResult { score: 60, letter: LetterGrade::C }
        );
        assert!(AuditSummary::new(0, 0, false).validate().is_ok());
    }

    #[test]
    fn missing_summary_stays_unknown() {
        assert_eq!(score_if_available(None), None);
        assert_eq!(
            score_if_available(Some(&AuditSummary::new(6, 0, true))).map(|r| r.score),
            Some(100)
        );
    }
}
