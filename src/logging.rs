// src/logging.rs

//! File logging.
//!
//! Stdout carries command output and stderr carries error reports, so tracing
//! only ever writes to `auditgrade.log` in the platform data directory.

use color_eyre::eyre::{Result, WrapErr};
use directories::ProjectDirs;
use lazy_static::lazy_static;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing_error::ErrorLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

lazy_static! {
    /// `AUDITGRADE_LOGLEVEL`, read when `RUST_LOG` is unset.
    pub static ref LOG_LEVEL_ENV: String =
        format!("{}_LOGLEVEL", env!("CARGO_CRATE_NAME").to_uppercase());
    pub static ref LOG_FILE_NAME: String = format!("{}.log", env!("CARGO_PKG_NAME"));
    static ref DEFAULT_DIRECTIVE: String = format!("{}=info", env!("CARGO_CRATE_NAME"));
}

/// Where and how verbosely to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub directory: PathBuf,
    pub directive: String,
}

impl LogSettings {
    /// Resolves the settings from `lookup`, which stands in for the process
    /// environment. `RUST_LOG` wins over `AUDITGRADE_LOGLEVEL`; blank values
    /// count as unset.
    pub fn resolve(data_dir: Option<PathBuf>, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let directive = ["RUST_LOG", LOG_LEVEL_ENV.as_str()]
            .into_iter()
            .filter_map(|name| lookup(name))
            .find(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DIRECTIVE.clone());
        let directory = data_dir.unwrap_or_else(|| Path::new(".").join(".data"));
        Self { directory, directive }
    }

    pub fn from_env() -> Self {
        let data_dir = ProjectDirs::from("com", "auditgrade", env!("CARGO_PKG_NAME"))
            .map(|dirs| dirs.data_local_dir().to_path_buf());
        Self::resolve(data_dir, |name| std::env::var(name).ok())
    }

    pub fn log_path(&self) -> PathBuf {
        self.directory.join(LOG_FILE_NAME.as_str())
    }
}

/// Installs the global subscriber and returns the log file's path. The file is
/// truncated on every run.
pub fn initialize_logging() -> Result<PathBuf> {
    let settings = LogSettings::from_env();
    std::fs::create_dir_all(&settings.directory)
        .wrap_err_with(|| format!("cannot create {}", settings.directory.display()))?;
    let log_path = settings.log_path();
    let log_file = File::create(&log_path)
        .wrap_err_with(|| format!("cannot create {}", log_path.display()))?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(EnvFilter::new(&settings.directive));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(ErrorLayer::default())
        .try_init()?;

    Ok(log_path)
}
