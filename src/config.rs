// src/config.rs

//! Audit service configuration.
//!
//! The scoring engine takes no configuration. The only setting in the crate is
//! the origin of the external audit service, which callers that fetch audits
//! need in order to build `GET {base_url}/audit/{domain}`.

use crate::core::errors::{AuditResult, ErrorKind};
use tracing::debug;
use url::Url;

/// Audit service origin used when nothing overrides it.
pub const DEFAULT_API_BASE: &str = "https://breachless-api.onrender.com";

/// Environment variable that overrides [`DEFAULT_API_BASE`].
pub const API_URL_ENV: &str = "AUDITGRADE_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditServiceConfig {
    base_url: Url,
}

impl AuditServiceConfig {
    /// Parses and checks a base URL. Only `http` and `https` origins that can
    /// carry path segments are accepted.
    pub fn new(base_url: &str) -> AuditResult<Self> {
        let base_url = Url::parse(base_url.trim())?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(ErrorKind::UnsupportedBaseUrl(base_url.to_string()));
        }
        Ok(Self { base_url })
    }

    /// Uses `base_url` when given, the default origin otherwise.
    pub fn from_override(base_url: Option<&str>) -> AuditResult<Self> {
        match base_url.filter(|s| !s.trim().is_empty()) {
            Some(url) => {
                debug!(base_url = url, "Using audit service base URL override.");
                Self::new(url)
            }
            None => Self::new(DEFAULT_API_BASE),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Endpoint for one domain's audit. The domain becomes a single
    /// percent-encoded path segment appended after any path the base URL has.
    pub fn audit_url(&self, domain: &str) -> AuditResult<Url> {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|_| ErrorKind::UnsupportedBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push("audit")
            .push(domain);
        Ok(url)
    }
}
