use clap::Parser;
use std::path::PathBuf;

/// Sanitize theme settings submissions against a field registry.
#[derive(Parser, Debug)]
#[command(name = "customizer", version, about)]
pub struct Args {
    /// Field registry (TOML). Defaults to the platform config directory.
    #[arg(short = 'f', long)]
    pub fields: Option<PathBuf>,

    /// Submission to sanitize (JSON object). Reads stdin when omitted.
    #[arg(short = 'i', long)]
    pub input: Option<PathBuf>,

    /// Print the registry's sanitized defaults instead of reading a submission.
    #[arg(long, conflicts_with = "input")]
    pub defaults: bool,

    /// Validate the registry and exit.
    #[arg(long, conflicts_with_all = ["input", "defaults"])]
    pub validate: bool,

    /// Print compact JSON.
    #[arg(long)]
    pub compact: bool,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
