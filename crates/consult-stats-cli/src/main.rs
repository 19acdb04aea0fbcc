use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use consult_stats_core::{analyze, AnalysisOptions, BirthDatePolicy, Dataset};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Debug, Parser)]
#[command(
    name = "consult-stats",
    version,
    about = "Descriptive statistics over patient consultation records",
    long_about = "Reads a JSON array of consultation records and prints missing-value rates,\n\
        gender and age-group figures, prescription statistics, valid mobile counts\n\
        and the age/medicine-count correlation."
)]
struct Cli {
    /// JSON file holding an array of consultation records
    #[arg(default_value = "DataEngineeringQ2.json")]
    input: PathBuf,

    /// Compute ages as of this date (YYYY-MM-DD) instead of today
    #[arg(long, value_name = "DATE")]
    as_of: Option<NaiveDate>,

    /// Treat unparseable birth dates as missing instead of failing
    #[arg(long)]
    lenient_dates: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Increase verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn options(&self) -> AnalysisOptions {
        let mut options = AnalysisOptions::default();
        if let Some(date) = self.as_of {
            options = options.with_reference_date(date);
        }
        if self.lenient_dates {
            options = options.with_birth_date_policy(BirthDatePolicy::TreatAsMissing);
        }
        options
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let dataset = Dataset::open(&cli.input)
        .with_context(|| format!("Failed to load {}", cli.input.display()))?;
    let options = cli.options();
    tracing::info!(reference_date = %options.reference_date, "Analyzing {} records", dataset.len());

    let report = analyze(&dataset, options).context("Analysis failed")?;

    match cli.format {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Text => println!("{report}"),
    }
    Ok(())
}
