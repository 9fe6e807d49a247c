//! tenk CLI binary.
//!
//! Fetches a company profile, key metrics or normalized annual financial
//! statements for one symbol and prints them in the requested format.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process;
use std::time::Duration;
use tenk::config::API_KEY_VAR;
use tenk::output::{
    ExportFormat, Exporter, render_metrics_text, render_profile_text, render_report_markdown,
    render_report_table,
};
use tenk::{FinancialsService, Settings};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "tenk")]
#[command(about = "tenk: normalized 10-K financials from Finnhub", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Finnhub API key
    #[arg(long, global = true, env = "FINNHUB_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Cache freshness window in seconds
    #[arg(long, global = true)]
    cache_ttl_secs: Option<u64>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the company profile
    Profile {
        /// Stock symbol
        symbol: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show key metrics with valuation, profitability and liquidity labels
    Metrics {
        /// Stock symbol
        symbol: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show normalized annual financial statements
    Financials {
        /// Stock symbol
        symbol: String,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(clap::Args)]
struct OutputArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
    PrettyJson,
    Csv,
    Markdown,
}

impl Format {
    const fn export_format(self) -> Option<ExportFormat> {
        match self {
            Self::Json => Some(ExportFormat::Json),
            Self::PrettyJson => Some(ExportFormat::PrettyJson),
            Self::Csv => Some(ExportFormat::Csv),
            Self::Text | Self::Markdown => None,
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env before parsing so clap sees FINNHUB_API_KEY from it
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(cli.verbose)?;

    let settings = load_settings(cli.api_key.as_deref(), cli.cache_ttl_secs)?;
    tracing::debug!(?settings, "Loaded settings");
    let service = FinancialsService::from_settings(&settings)?;

    let (content, output) = match cli.command {
        Commands::Profile { symbol, output } => {
            let profile = service.company_profile(&symbol).await?;
            let content = match output.format.export_format() {
                Some(format) => profile.export_to_string(format)?,
                None => render_profile_text(&profile),
            };
            (content, output)
        }
        Commands::Metrics { symbol, output } => {
            let metrics = service.key_metrics(&symbol).await?;
            let content = match output.format.export_format() {
                Some(format) => metrics.export_to_string(format)?,
                None => render_metrics_text(&metrics),
            };
            (content, output)
        }
        Commands::Financials { symbol, output } => {
            let report = service.financial_report(&symbol).await?;
            let content = match (output.format, output.format.export_format()) {
                (_, Some(format)) => report.export_to_string(format)?,
                (Format::Markdown, None) => render_report_markdown(&report),
                (_, None) => render_report_table(&report),
            };
            (content, output)
        }
    };

    match output.output {
        Some(path) => {
            std::fs::write(&path, content)?;
            println!("Wrote {}", path.display());
        }
        None => println!("{}", content),
    }

    Ok(())
}

fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn load_settings(
    api_key: Option<&str>,
    cache_ttl_secs: Option<u64>,
) -> Result<Settings, Box<dyn std::error::Error>> {
    let settings = match api_key {
        Some(key) => Settings::from_lookup(|name| {
            if name == API_KEY_VAR {
                Some(key.to_string())
            } else {
                std::env::var(name).ok()
            }
        })?,
        None => Settings::from_env()?,
    };

    Ok(match cache_ttl_secs {
        Some(secs) => settings.with_cache_ttl(Duration::from_secs(secs)),
        None => settings,
    })
}
