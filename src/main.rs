//! coverage-matrix: derive a traceability matrix from a requirements register
//! and a test-results register.

#![forbid(unsafe_code)]

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, ValueEnum};
use coverage_core::render::{html, sheet, summary};
use coverage_core::{CoverageConfig, build_from_paths};
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// `<table>` markup
    Html,
    /// Sheet document in TOON
    Toon,
    /// Sheet document in JSON
    Json,
    /// Plain-text coverage summary
    Summary,
}

#[derive(Parser)]
#[command(name = "coverage-matrix")]
#[command(author, version, about = "Build a requirement/test traceability matrix")]
struct Cli {
    /// Requirements register (.toon or .json)
    #[arg(short, long)]
    requirements: PathBuf,

    /// Test-results register (.toon or .json)
    #[arg(short, long)]
    tests: PathBuf,

    /// Layout configuration (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = CoverageConfig::load(cli.config.as_deref())?;

    let report = match build_from_paths(&cli.requirements, &cli.tests, &config) {
        Ok(report) => report,
        Err(err) => {
            debug!(cause = ?err, "build failed");
            error!("processing failed, check the file format: {err}");
            return Err(anyhow!(err).context("processing failed, check the file format"));
        }
    };

    let rendered = match cli.format {
        OutputFormat::Html => html::matrix_table(&report, &config.tests.code_column, &config.marks),
        OutputFormat::Toon => sheet::to_toon(&report, &config)?,
        OutputFormat::Json => sheet::to_json(&report, &config)?,
        OutputFormat::Summary => summary::text_summary(&report),
    };

    match cli.output {
        Some(path) => {
            std::fs::write(&path, rendered).with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), "matrix written");
        }
        None => println!("{rendered}"),
    }
    Ok(())
}
