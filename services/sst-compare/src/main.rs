//! Command-line entry point for the GMI / MODIS SST comparison.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use gmi_reader::GmiError;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use sst_compare::{run, Config};

#[derive(Parser, Debug)]
#[command(name = "sst-compare")]
#[command(about = "Compare GMI and MODIS daily sea surface temperature")]
struct Args {
    /// Configuration file (YAML); defaults are used when omitted
    #[arg(short, long, env = "SST_COMPARE_CONFIG")]
    config: Option<PathBuf>,

    /// Day to compare (YYYY-MM-DD), overriding the configuration
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Directory for the figures, overriding the configuration
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Log level, used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

fn init_tracing(args: &Args) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr);

    if args.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(date) = args.date {
        config.date = date;
    }
    if let Some(dir) = &args.output_dir {
        config.plots.output_dir = dir.clone();
    }
    config.validate()?;
    Ok(config)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args);

    let result = load_config(&args).and_then(|config| {
        info!(config = ?args.config, date = %config.date, "Loaded configuration");
        run(&config)
    });

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            if matches!(e.downcast_ref::<GmiError>(), Some(GmiError::NoVariables { .. })) {
                eprintln!("problem reading file");
            }
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
