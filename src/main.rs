//! CLI entry point for the CCSIT course-schedule scraper.
//!
//! Fetches the course listings for every department and cohort from the
//! university scheduling API, then writes one CSV per cohort.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use ccsit_scraper::config::FetchConfig;
use ccsit_scraper::export::export_tables;
use ccsit_scraper::fetch::{BasicClient, fetch_courses};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "ccsit_scraper")]
#[command(about = "Scrapes CCSIT course schedules into per-cohort CSV files", long_about = None)]
struct Cli {
    /// Directory to write the CSV files to
    #[arg(short, long, default_value = "public")]
    output_dir: PathBuf,

    /// Seconds to wait between requests to the schedule API
    #[arg(long, default_value_t = 1)]
    delay_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/ccsit_scraper.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("ccsit_scraper.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let config = FetchConfig {
        delay: Duration::from_secs(cli.delay_secs),
        ..FetchConfig::default()
    };

    info!(
        departments = config.departments.len(),
        delay_secs = cli.delay_secs,
        "Starting batch fetch"
    );

    let client = BasicClient::new()?;
    let (male, female) = fetch_courses(&client, &config).await?;

    info!(
        male_records = male.len(),
        female_records = female.len(),
        "Batch fetch complete"
    );

    export_tables(&cli.output_dir, &male, &female)?;

    Ok(())
}
