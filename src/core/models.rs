// src/core/models.rs

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

// --- Wire Models ---

/// Treats an explicit JSON `null` the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts a JSON object for `T` and treats any other JSON type as absent.
///
/// Used for the informational parts of a response, which must never stop the
/// summary from being graded.
fn object_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(value @ Value::Object(_)) => T::deserialize(value).map_err(D::Error::custom),
        _ => Ok(T::default()),
    }
}

/// Deserializes `T` when the JSON fits and falls back to `T::default()` when it
/// does not.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .and_then(|value| T::deserialize(value).ok())
        .unwrap_or_default())
}

/// Display text for an informational wire value: strings as-is, anything else
/// as compact JSON.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// The minimal security-posture snapshot the audit service computes for a domain.
///
/// Counts that are absent (or `null`) on the wire default to zero and
/// `ssl_valid` defaults to `false`, which is how the scoring engine expects a
/// summary with nothing checked to look.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditSummary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_headers_checked: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub headers_missing: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ssl_valid: bool,
    /// Precomputed score some versions of the service attach. Informational
    /// only: the grade is always recomputed locally, and a value that is not a
    /// number is dropped.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// Precomputed grade, informational only (see `score`).
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub letter_grade: Option<String>,
}

impl AuditSummary {
    pub fn new(total_headers_checked: u32, headers_missing: u32, ssl_valid: bool) -> Self {
        Self {
            total_headers_checked,
            headers_missing,
            ssl_valid,
            score: None,
            letter_grade: None,
        }
    }

    /// Number of checked headers that were present.
    pub fn headers_present(&self) -> u32 {
        self.total_headers_checked.saturating_sub(self.headers_missing)
    }
}

/// Certificate details as reported by the audit service.
///
/// Nothing here feeds the grade, so every field keeps whatever JSON the service
/// sent (an issuer may be a string or a list of name pairs, `days_remaining`
/// may be fractional). Unknown fields are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SslDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_after: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_remaining: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl SslDetails {
    /// The certificate verdict, when the service sent a boolean.
    pub fn is_valid(&self) -> Option<bool> {
        self.valid.as_ref().and_then(Value::as_bool)
    }
}

/// Body of `GET /audit/{domain}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub domain: String,
    pub summary: AuditSummary,
    /// Header name to presence status, usually a string such as `"✅ Present"`.
    #[serde(default, deserialize_with = "object_or_default")]
    pub headers: BTreeMap<String, Value>,
    #[serde(
        default,
        deserialize_with = "object_or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub ssl: Option<SslDetails>,
}

/// Presence status of a single security header, parsed for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderStatus {
    Present,
    Missing,
    Other(String),
}

impl HeaderStatus {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed {
            "✅ Present" => HeaderStatus::Present,
            "❌ Missing" => HeaderStatus::Missing,
            s if s.eq_ignore_ascii_case("present") => HeaderStatus::Present,
            s if s.eq_ignore_ascii_case("missing") => HeaderStatus::Missing,
            s => HeaderStatus::Other(s.to_string()),
        }
    }

    /// Parses a status of any JSON type. Non-string statuses are kept as
    /// their JSON text.
    pub fn from_value(raw: &Value) -> Self {
        match raw {
            Value::String(s) => Self::parse(s),
            Value::Null => HeaderStatus::Other("unknown".to_string()),
            other => HeaderStatus::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            HeaderStatus::Present => "Present",
            HeaderStatus::Missing => "Missing",
            HeaderStatus::Other(raw) => raw,
        }
    }
}

// --- Derived Models ---

/// A single-character ordinal grade.
///
/// Ordering follows declaration order, best grade first, so `A < F` under
/// `Ord`. Use [`LetterGrade::is_better_than`] when the intent is "better".
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
}

impl LetterGrade {
    pub fn is_better_than(self, other: LetterGrade) -> bool {
        self < other
    }
}

/// The score and grade derived from one [`AuditSummary`]. Recomputed on every
/// use, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Always within `0..=100`.
    pub score: u8,
    pub letter: LetterGrade,
}
