// File: crates/aqi-dashboard/src/main.rs
// Summary: Command-line dashboard: city list, forecasts, advice, and chart rendering.

mod commands;
mod config;
mod export;
mod view;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use aqi_core::CityTable;
use clap::Parser;

use crate::commands::{App, Command};
use crate::config::DashboardConfig;

#[derive(Parser)]
#[command(name = "aqi-dashboard")]
#[command(about = "Air quality forecasts and charts for Indian cities", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Use synthetic data only; never contact the live feed
    #[arg(long, global = true)]
    offline: bool,

    /// CSV city table replacing the built-in list
    #[arg(long, global = true)]
    cities: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

fn load_cities(path: Option<&PathBuf>) -> Result<CityTable> {
    match path {
        Some(p) => {
            let data = std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?;
            CityTable::from_csv(&data).with_context(|| format!("parsing {}", p.display()))
        }
        None => Ok(CityTable::builtin()?),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = DashboardConfig::load(cli.config.as_deref());
    if cli.offline {
        config.offline = true;
    }
    let cities = Arc::new(load_cities(cli.cities.as_ref())?);
    log::info!("{} cities loaded; season policy {:?}", cities.len(), config.season_policy());

    let feed = Arc::new(config.feed(cities)?);
    let app = App { config, feed };
    commands::run(cli.command, &app).await
}
