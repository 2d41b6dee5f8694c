use std::path::PathBuf;

use clap::Parser;
use jiff::Zoned;
use nestegg_core::RiskPreference;
use nestegg_core::orchestrator::{self, ProjectionRequest};

mod format;
mod logging;
mod provider_csv;
mod report;

use provider_csv::CsvPriceSource;

#[derive(Parser, Debug)]
#[command(name = "nestegg")]
#[command(about = "Project periodic-contribution portfolio growth against a market benchmark")]
struct Args {
    /// Risk preference: conservative, neutral, or aggressive
    #[arg(short, long, default_value = "neutral")]
    risk: String,

    /// Monthly contribution amount
    #[arg(short, long, default_value_t = 5_000.0)]
    monthly: f64,

    /// Projection horizon in years
    #[arg(short, long, default_value_t = 20)]
    years: u32,

    /// Investor age (echoed in the report header; not used in the projection)
    #[arg(short, long)]
    age: Option<u8>,

    /// Directory of per-symbol price history CSVs (default: ~/.nestegg)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// Emit the full report as JSON instead of tables
    #[arg(long)]
    json: bool,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".nestegg")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    logging::init(&args.log_level)?;

    // Unrecognized preferences fall through to the unmodified base basket.
    let risk = RiskPreference::from_str_opt(&args.risk).unwrap_or_else(|| {
        tracing::warn!("unrecognized risk preference {:?}, using neutral", args.risk);
        RiskPreference::Neutral
    });

    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
    let source = CsvPriceSource::new(data_dir);

    let request = ProjectionRequest {
        risk,
        monthly_contribution: args.monthly,
        years: args.years,
        age: args.age,
    };

    let today = Zoned::now().date();
    let report = orchestrator::run(&source, &request, today);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report::print_report(&request, &report);
    }

    Ok(())
}
