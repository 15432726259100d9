//! TailRisk CLI — quantile, CVaR, and tail report commands.
//!
//! Commands:
//! - `quantile` — value at a percentile rank of the sample set
//! - `cvar` — tail expectation for one direction at a given alpha
//! - `report` — both tail expectations plus quantile, mean, and dispersion
//!
//! Samples are read one per CSV record (first field) from `--input` or
//! stdin. All commands print pretty JSON to stdout.

mod config;

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use config::AnalysisConfig;
use tailrisk_core::{
    quantile, round_to, tail_expectation_with_policy, Tail, TailReport, TiePolicy,
};

#[derive(Parser)]
#[command(
    name = "tailrisk",
    about = "TailRisk CLI — order statistics and tail-risk measures over CSV samples"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Value at a percentile rank of the sample set.
    Quantile {
        /// Percentile in [0, 100].
        #[arg(long)]
        percent: f64,

        /// CSV file with one sample per record. Defaults to stdin.
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Tail expectation (CVaR) for one direction.
    Cvar {
        /// Tail mass in percent, in (0, 100].
        #[arg(long)]
        alpha: f64,

        /// Tail direction: lower (worst outcomes) or upper (best outcomes).
        #[arg(long, default_value = "lower")]
        tail: String,

        /// Split residual weight across pivot-equal samples.
        #[arg(long, default_value_t = false)]
        split_ties: bool,

        /// CSV file with one sample per record. Defaults to stdin.
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Full tail report: both CVaRs, quantile, mean, standard deviation.
    Report {
        /// Tail mass in percent. Overrides the config file.
        #[arg(long)]
        alpha: Option<f64>,

        /// Path to a TOML analysis config.
        #[arg(long)]
        config: Option<PathBuf>,

        /// CSV file with one sample per record. Defaults to stdin.
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Quantile { percent, input } => run_quantile(percent, input.as_deref()),
        Commands::Cvar {
            alpha,
            tail,
            split_ties,
            input,
        } => run_cvar(alpha, &tail, split_ties, input.as_deref()),
        Commands::Report {
            alpha,
            config,
            input,
        } => run_report(alpha, config.as_deref(), input.as_deref()),
    }
}

// ── Commands ─────────────────────────────────────────────────────────

#[derive(Serialize)]
struct QuantileOutput {
    percent: f64,
    quantile: f64,
    sample_size: usize,
}

fn run_quantile(percent: f64, input: Option<&Path>) -> Result<()> {
    let samples = read_samples(input)?;
    let output = QuantileOutput {
        percent,
        quantile: quantile(&samples, percent),
        sample_size: samples.len(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

#[derive(Serialize)]
struct CvarOutput {
    alpha: f64,
    tail: Tail,
    tie_policy: TiePolicy,
    cvar: f64,
    sample_size: usize,
}

fn run_cvar(alpha: f64, tail: &str, split_ties: bool, input: Option<&Path>) -> Result<()> {
    let tail = parse_tail(tail)?;
    let policy = if split_ties {
        TiePolicy::SplitAcrossTies
    } else {
        TiePolicy::FullPartial
    };

    let samples = read_samples(input)?;
    let cvar = tail_expectation_with_policy(&samples, alpha, tail, policy)
        .context("computing tail expectation")?;

    let output = CvarOutput {
        alpha,
        tail,
        tie_policy: policy,
        cvar,
        sample_size: samples.len(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn run_report(alpha: Option<f64>, config: Option<&Path>, input: Option<&Path>) -> Result<()> {
    let mut settings = match config {
        Some(path) => AnalysisConfig::load(path)?,
        None => AnalysisConfig::default(),
    };
    if let Some(alpha) = alpha {
        settings.alpha = alpha;
    }

    let samples = read_samples(input)?;
    let mut report = TailReport::compute_with_policy(&samples, settings.alpha, settings.tie_policy)
        .context("computing tail report")?;

    if let Some(digits) = settings.round_digits {
        report.cvar_lower = round_to(report.cvar_lower, digits);
        report.cvar_upper = round_to(report.cvar_upper, digits);
        report.quantile = round_to(report.quantile, digits);
        report.mean = round_to(report.mean, digits);
        report.std_dev = round_to(report.std_dev, digits);
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

// ── Input handling ───────────────────────────────────────────────────

fn parse_tail(s: &str) -> Result<Tail> {
    match s.to_ascii_lowercase().as_str() {
        "lower" => Ok(Tail::Lower),
        "upper" => Ok(Tail::Upper),
        other => bail!("unknown tail direction '{other}' (expected lower or upper)"),
    }
}

/// Read one sample per CSV record (first field) from a file or stdin.
fn read_samples(input: Option<&Path>) -> Result<Vec<f64>> {
    let reader: Box<dyn Read> = match input {
        Some(path) => Box::new(
            File::open(path).with_context(|| format!("opening input {}", path.display()))?,
        ),
        None => Box::new(std::io::stdin()),
    };

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut samples = Vec::new();
    for (line, record) in csv_reader.records().enumerate() {
        let record = record.with_context(|| format!("reading record {}", line + 1))?;
        let Some(field) = record.get(0) else {
            continue;
        };
        let field = field.trim();
        if field.is_empty() {
            continue;
        }
        let value: f64 = field
            .parse()
            .with_context(|| format!("parsing sample '{field}' on record {}", line + 1))?;
        samples.push(value);
    }
    Ok(samples)
}
