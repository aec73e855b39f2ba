//! Project daily profit reinvestment and savings growth
//!
//! Prints the day-by-day growth table, the summary figures and a text
//! chart, and can save the ledger as CSV or emit the raw result as JSON.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use reinvest_tracker::report::{
    export_ledger, format_currency, render_chart, render_summary, render_table, DEFAULT_CSV_NAME,
};
use reinvest_tracker::{
    CarryPolicy, ProjectionConfig, ProjectionEngine, ProjectionInput, ReportStyle,
};

#[derive(Debug, Parser)]
#[command(
    name = "track_growth",
    about = "Track daily reinvested profits and savings growth",
    long_about = None
)]
struct Args {
    /// Principal amount to start from
    #[arg(short = 'p', long, default_value_t = 10_000.0)]
    principal: f64,

    /// Number of days to project
    #[arg(short = 'd', long, default_value_t = 10)]
    days: u32,

    /// Daily profit percentage
    #[arg(short = 'r', long, default_value_t = 5.0)]
    daily_percent: f64,

    /// Read inputs from a JSON file instead of flags
    #[arg(long, value_name = "FILE", conflicts_with_all = ["principal", "days", "daily_percent"])]
    params: Option<PathBuf>,

    /// Settle each day's ledger row to whole cents before carrying it
    #[arg(long)]
    cent_ledger: bool,

    /// Save the ledger as CSV, by default to trade_growth_data.csv
    #[arg(long, value_name = "FILE", num_args = 0..=1, default_missing_value = DEFAULT_CSV_NAME)]
    csv: Option<PathBuf>,

    /// Print the projection result as JSON instead of reports
    #[arg(long)]
    json: bool,

    /// ASCII-only output without box drawing
    #[arg(long)]
    plain: bool,

    /// Skip the growth chart
    #[arg(long)]
    no_chart: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let input = match &args.params {
        Some(path) => load_params(path)?,
        None => ProjectionInput::new(args.principal, args.days, args.daily_percent),
    };
    input.validate()?;

    let carry = if args.cent_ledger {
        CarryPolicy::CentLedger
    } else {
        CarryPolicy::FullPrecision
    };
    let engine = ProjectionEngine::with_config(ProjectionConfig { carry });
    let result = engine.project(&input)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        if let Some(path) = &args.csv {
            export_ledger(path, &result.records)?;
        }
        return Ok(());
    }

    let style = if args.plain {
        ReportStyle::Plain
    } else {
        ReportStyle::Fancy
    };

    println!("Trade Profit Reinvestment & Savings Tracker");
    println!(
        "{} for {} days at {}% daily",
        format_currency(input.principal),
        input.days,
        input.daily_percent
    );

    println!("\nDaily Growth Table");
    print!("{}", render_table(&result.records, style));

    println!("\nSummary Overview");
    print!("{}", render_summary(&result, style));

    if !args.no_chart {
        println!("\nGrowth Visualization");
        print!("{}", render_chart(&result.growth_series(), style));
    }

    if let Some(path) = &args.csv {
        export_ledger(path, &result.records)?;
        println!("\nTable saved to {}", path.display());
    }

    Ok(())
}

fn load_params(path: &Path) -> Result<ProjectionInput> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Cannot read params file at {:?}", path))?;
    let input = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid params JSON in {:?}", path))?;
    Ok(input)
}
