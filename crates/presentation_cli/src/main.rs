//! Holiday checker CLI
//!
//! Finds the dates in a PDF (or plain text) and reports which of them are
//! Brazilian public holidays.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod report;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use application::{HolidayCheckService, HolidayReport, HolidayResolver};
use clap::{Parser, Subcommand};
use infrastructure::{AppConfig, HolidayAdapter, OutputFormat, PdfTextAdapter, init_tracing};
use tracing::debug;

/// Holiday checker CLI
#[derive(Parser)]
#[command(name = "holiday-checker")]
#[command(author, version, about = "Find public holidays among the dates in a PDF", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (TOML, JSON or YAML)
    #[arg(short, long, global = true, env = "HOLIDAY_CHECKER_CONFIG")]
    config: Option<PathBuf>,

    /// Output format: text or json (overrides the configured default)
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the dates found in a PDF against public holidays
    ///
    /// Example: holiday-checker check ./agenda.pdf
    Check {
        /// Path to the PDF file
        pdf: PathBuf,
    },

    /// Check the dates found in plain text
    ///
    /// Example: holiday-checker scan "Reunião em 25/12/2025 e 01-01-2025"
    Scan {
        /// Text to scan
        #[arg(required_unless_present = "file")]
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
    },

    /// List the public holidays of a year
    Holidays {
        /// Calendar year, e.g. 2025
        year: i32,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Print a report on stdout and its lookup warnings on stderr
fn print_report(report: &HolidayReport, format: OutputFormat) -> anyhow::Result<()> {
    for warning in report::render_lookup_warnings(report) {
        eprintln!("{warning}");
    }
    print!("{}", report::render_report(report, format)?);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    init_tracing(log_filter_from_verbosity(cli.verbose), config.logging.format)?;

    let format = cli.format.unwrap_or(config.output.format);
    debug!(format = %format, base_url = %config.holidays.base_url, "Configuration loaded");

    let adapter = HolidayAdapter::with_config(&config.holidays)?;
    let resolver = HolidayResolver::new(Arc::new(adapter));
    let mut service = HolidayCheckService::new(Arc::new(PdfTextAdapter::new()), resolver);

    match cli.command {
        Commands::Check { pdf } => match service.check_document(&pdf).await {
            Ok(report) => print_report(&report, format)?,
            Err(e) => {
                eprintln!("❌ Could not read the PDF: {e}");
                std::process::exit(1);
            },
        },

        Commands::Scan { text, file } => {
            let text = match (text, file) {
                (Some(text), _) => text,
                (None, Some(path)) => std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                (None, None) => anyhow::bail!("Provide text or --file"),
            };

            let report = service.check_text(&text).await;
            print_report(&report, format)?;
        },

        Commands::Holidays { year } => {
            match service.resolver_mut().holidays_for_year(year).await {
                Ok(set) => {
                    print!("{}", report::render_holiday_set(set, format)?);
                    if format == OutputFormat::Json {
                        println!();
                    }
                },
                Err(e) => {
                    eprintln!("❌ Failed to fetch holidays for {year}: {e}");
                    std::process::exit(1);
                },
            }
        },
    }

    Ok(())
}
