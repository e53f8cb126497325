// src/main.rs

use auditgrade::config::AuditServiceConfig;
use auditgrade::core::catalog::BenchmarkList;
use auditgrade::core::domain::require_domain;
use auditgrade::core::loader::{load_benchmark, parse_audit_document, read_audit_file};
use auditgrade::core::models::AuditResponse;
use auditgrade::core::report::{grade_audit, GradedAudit};
use auditgrade::core::score::ScorePolicy;
use chrono::Utc;
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

mod cli;
mod logging;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    match logging::initialize_logging() {
        Ok(log_path) => info!(log = %log_path.display(), "Logging initialized."),
        Err(e) => eprintln!("warning: file logging disabled: {e}"),
    }

    match cli.command {
        Commands::Grade { files, strict } => handle_grade(&files, strict, cli.json),
        Commands::Benchmark { list, dir } => handle_benchmark(list.into(), &dir, cli.json),
        Commands::Domains { list } => handle_domains(list.into(), cli.json),
        Commands::Url { domain } => handle_url(cli.api_url.as_deref(), &domain, cli.json),
    }
}

/// Reads every input, grades each audit it contains and prints the reports.
fn handle_grade(files: &[PathBuf], strict: bool, json: bool) -> Result<()> {
    let policy = if strict { ScorePolicy::Strict } else { ScorePolicy::Permissive };
    let stdin_only = [PathBuf::from("-")];
    let inputs = if files.is_empty() { &stdin_only[..] } else { files };

    let mut audits: Vec<AuditResponse> = Vec::new();
    for input in inputs {
        let parsed = read_input(input)
            .wrap_err_with(|| format!("failed to load {}", input.display()))?;
        audits.extend(parsed);
    }
    info!(inputs = inputs.len(), audits = audits.len(), ?policy, "Grading audits.");

    let reports = audits
        .iter()
        .map(|audit| {
            grade_audit(audit, policy).wrap_err_with(|| format!("failed to grade {}", audit.domain))
        })
        .collect::<Result<Vec<GradedAudit>>>()?;

    if json {
        let out = output::GradeOutput { generated_at: Utc::now(), reports: &reports };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        let texts = reports
            .iter()
            .map(output::graded_audit_text)
            .collect::<Result<Vec<String>, _>>()?;
        print!("{}", texts.join("\n"));
    }
    Ok(())
}

fn read_input(input: &Path) -> Result<Vec<AuditResponse>> {
    if input == Path::new("-") {
        let text = std::io::read_to_string(std::io::stdin())?;
        return Ok(parse_audit_document(&text, "")?);
    }
    Ok(read_audit_file(input)?)
}

fn handle_benchmark(list: BenchmarkList, dir: &Path, json: bool) -> Result<()> {
    if !dir.is_dir() {
        warn!(
            dir = %dir.display(),
            "Benchmark directory does not exist, every row will be unknown."
        );
    }
    let table = load_benchmark(&list.sites(), dir);
    let stats = table.stats();

    if json {
        let out = output::BenchmarkOutput {
            generated_at: Utc::now(),
            list: list.to_string(),
            title: list.title(),
            table: &table,
            stats: &stats,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print!("{}", output::benchmark_text(list, &table, &stats)?);
    }
    Ok(())
}

fn handle_domains(list: BenchmarkList, json: bool) -> Result<()> {
    let sites = list.sites();
    if json {
        println!("{}", serde_json::to_string_pretty(&sites)?);
    } else {
        for site in &sites {
            println!("{}", site.domain);
        }
    }
    Ok(())
}

fn handle_url(api_url: Option<&str>, raw_domain: &str, json: bool) -> Result<()> {
    let config = AuditServiceConfig::from_override(api_url)?;
    let domain = require_domain(raw_domain)?;
    let url = config.audit_url(&domain)?;
    info!(domain = %domain, base_url = %config.base_url(), url = %url, "Built audit endpoint URL.");

    if json {
        let out = serde_json::json!({
            "domain": domain,
            "base_url": config.base_url().as_str(),
            "url": url.as_str(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{url}");
    }
    Ok(())
}
