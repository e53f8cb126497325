// src/cli.rs

use auditgrade::core::catalog::BenchmarkList;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "auditgrade",
    version,
    about = "Grade website security audit summaries (SSL validity and security headers)"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "AUDITGRADE_API_URL",
        help = "Audit service origin used to build audit endpoint URLs"
    )]
    pub api_url: Option<String>,
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score and grade audit documents
    Grade {
        #[arg(help = "Audit JSON files; reads stdin when omitted or '-'")]
        files: Vec<PathBuf>,
        #[arg(long, help = "Reject summaries with more missing headers than checked")]
        strict: bool,
    },
    /// Grade every site of a benchmark list from <DIR>/<domain>.json files
    Benchmark {
        #[arg(value_enum)]
        list: ListArg,
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
    /// Print the domains of a benchmark list, one per line
    Domains {
        #[arg(value_enum)]
        list: ListArg,
    },
    /// Print the audit endpoint URL for a domain
    Url { domain: String },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ListArg {
    Saas,
    AiStartups,
    Curated,
    Samples,
}

impl From<ListArg> for BenchmarkList {
    fn from(value: ListArg) -> Self {
        match value {
            ListArg::Saas => BenchmarkList::Saas,
            ListArg::AiStartups => BenchmarkList::AiStartups,
            ListArg::Curated => BenchmarkList::Curated,
            ListArg::Samples => BenchmarkList::Samples,
        }
    }
}
