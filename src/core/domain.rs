// src/core/domain.rs

use crate::core::errors::{AuditResult, ErrorKind};
use std::borrow::Cow;
use tracing::debug;
use url::Url;

/// Reduces user input such as `https://Example.com/pricing` to a bare host
/// name (`example.com`).
///
/// Input without a scheme is tried as `https://<input>`. Anything the URL
/// parser rejects is returned trimmed but otherwise untouched, so the audit
/// service gets to decide whether it is a domain. Empty input and the literal
/// `undefined` yield `None`.
pub fn normalize_domain(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "undefined" {
        return None;
    }

    let with_scheme: Cow<'_, str> = if trimmed.starts_with("http") {
        Cow::Borrowed(trimmed)
    } else {
        Cow::Owned(format!("https://{trimmed}"))
    };

    match Url::parse(&with_scheme) {
        Ok(url) => match url.host_str() {
            Some(host) if !host.is_empty() => Some(host.to_string()),
            _ => Some(trimmed.to_string()),
        },
        Err(e) => {
            debug!(input = trimmed, error = %e, "Domain input is not a URL, keeping it as typed.");
            Some(trimmed.to_string())
        }
    }
}

/// [`normalize_domain`], failing with [`ErrorKind::InvalidDomain`] on empty input.
pub fn require_domain(raw: &str) -> AuditResult<String> {
    normalize_domain(raw).ok_or_else(|| ErrorKind::InvalidDomain(raw.to_string()))
}
