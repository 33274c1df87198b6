// File: crates/aqi-dashboard/src/commands.rs
// Summary: Subcommand implementations; every data path goes through the feed's fallback policy.

use std::path::PathBuf;
use std::sync::Arc;

use aqi_chart::{
    distribution_summary, pollutant_breakdown, Chart, ChartError, DistributionChart, RenderOptions, SeriesType,
};
use aqi_core::{
    ai_insight, health_measures, recommendation, AgeProfile, ForecastPoint, Metric, PollutantReading, Quality, Sample,
};
use aqi_feed::{CityReading, Feed, Refresher, Session};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Subcommand;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::DashboardConfig;
use crate::export::{out_name, write_series};
use crate::view::{selected_day, ActiveSeries, ViewMode};

#[derive(Subcommand)]
pub enum Command {
    /// List cities with their current readings
    Cities {
        /// Only cities whose name contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Seven-day forecast and outlook for a city
    Forecast {
        city: Option<String>,
        /// Print the raw records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Hourly breakdown of one forecast day
    Hourly {
        city: Option<String>,
        /// Day to break down (YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        day: Option<NaiveDate>,
        #[arg(long)]
        json: bool,
    },

    /// Thirty days of history up to today
    History {
        city: Option<String>,
        /// Seed the jitter for a reproducible series
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Current reading, forecast and history as one JSON record
    Snapshot {
        city: Option<String>,
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Protective equipment and advice for an AQI level
    Health {
        /// AQI to advise on; defaults to the city's current value
        #[arg(long)]
        aqi: Option<u32>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        age: Option<u32>,
    },

    /// AQI from raw pollutant concentrations
    Calc {
        #[arg(long, default_value = "")]
        pm25: String,
        #[arg(long, default_value = "")]
        pm10: String,
        #[arg(long, default_value = "")]
        o3: String,
        #[arg(long, default_value = "")]
        no2: String,
        #[arg(long, default_value = "")]
        so2: String,
        #[arg(long, default_value = "")]
        co: String,
        /// Reject non-numeric input instead of treating it as 0
        #[arg(long)]
        strict: bool,
    },

    /// Render the selected series to a PNG
    Render {
        city: Option<String>,
        #[arg(short, long, default_value = "7day")]
        view: ViewMode,
        #[arg(short, long, default_value = "aqi")]
        metric: Metric,
        #[arg(short = 't', long = "type", default_value = "line")]
        series_type: SeriesType,
        #[arg(short, long)]
        day: Option<NaiveDate>,
        /// Output path; defaults to <output_dir>/<city>_<view>_<metric>.png
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Skip axis and value labels
        #[arg(long)]
        no_labels: bool,
    },

    /// Quality-category tally and per-day pollutant breakdown
    Summary {
        city: Option<String>,
        /// Also render the tally as a pie chart PNG
        #[arg(long)]
        chart: bool,
        /// Pie output path; defaults to <output_dir>/<city>_7day_distribution.png
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Write the selected series to CSV
    Export {
        city: Option<String>,
        #[arg(short, long, default_value = "7day")]
        view: ViewMode,
        #[arg(short, long)]
        day: Option<NaiveDate>,
        #[arg(short, long)]
        out: Option<PathBuf>,
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Refresh the city list periodically until interrupted
    Watch { city: Option<String> },
}

pub struct App {
    pub config: DashboardConfig,
    pub feed: Arc<Feed>,
}

impl App {
    fn city(&self, city: Option<String>) -> String {
        let name = city.unwrap_or_else(|| self.config.default_city.clone());
        let m = self.feed.cities().lookup(&name);
        if m.is_fallback() {
            println!("Unknown city '{}'; showing {}", name, m.profile().name);
        }
        m.profile().name.clone()
    }
}

fn rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
}

pub async fn run(command: Command, app: &App) -> Result<()> {
    match command {
        Command::Cities { search } => cities(app, search.as_deref()).await,
        Command::Forecast { city, json } => forecast(app, &app.city(city), json).await,
        Command::Hourly { city, day, json } => hourly(app, &app.city(city), day, json).await,
        Command::History { city, seed } => history(app, &app.city(city), seed),
        Command::Snapshot { city, seed } => snapshot(app, &app.city(city), seed),
        Command::Health { aqi, city, age } => health(app, aqi, city, age),
        Command::Calc { pm25, pm10, o3, no2, so2, co, strict } => {
            calc(app, [pm25.as_str(), pm10.as_str(), o3.as_str(), no2.as_str(), so2.as_str(), co.as_str()], strict).await
        }
        Command::Render { city, view, metric, series_type, day, out, no_labels } => {
            let city = app.city(city);
            render(app, &city, view, metric, series_type, day, out, no_labels).await
        }
        Command::Summary { city, chart, out } => summary(app, &app.city(city), chart || out.is_some(), out).await,
        Command::Export { city, view, day, out, seed } => export(app, &app.city(city), view, day, out, seed).await,
        Command::Watch { city } => watch(app, app.city(city)).await,
    }
}

// ---- listing -----------------------------------------------------------------

fn print_city_table(readings: &[CityReading]) {
    println!("{:<20} {:>4}  {:<31} {:>5} {:>4}", "City", "AQI", "Quality", "Temp", "Hum");
    for r in readings {
        println!(
            "{:<20} {:>4}  {:<31} {:>3}°C {:>3}%",
            r.name, r.aqi, r.quality, r.temperature, r.humidity
        );
    }
}

async fn cities(app: &App, search: Option<&str>) -> Result<()> {
    let readings = app.feed.city_readings().await;
    log::info!("city list: {} readings ({})", readings.data.len(), readings.source);
    let q = search.map(|s| s.trim().to_lowercase());
    let shown: Vec<CityReading> = readings
        .data
        .into_iter()
        .filter(|r| q.as_deref().map_or(true, |q| r.name.to_lowercase().contains(q)))
        .collect();
    if shown.is_empty() {
        println!("No cities match.");
        return Ok(());
    }
    print_city_table(&shown);
    Ok(())
}

fn print_forecast(forecast: &[ForecastPoint]) {
    for d in forecast {
        println!(
            "{}  {:<9} AQI {:>3}  {:<31} {:>3}°C {:>3}%  PM2.5 {:>3}  PM10 {:>3}",
            d.date, d.day_name, d.aqi, d.quality, d.temperature, d.humidity, d.pollutants.pm25, d.pollutants.pm10
        );
    }
}

async fn forecast(app: &App, city: &str, json: bool) -> Result<()> {
    let f = app.feed.forecast(city).await;
    log::info!("forecast for {city} ({})", f.source);
    if json {
        println!("{}", serde_json::to_string_pretty(&f.data)?);
        return Ok(());
    }
    println!("7-day forecast for {city}");
    print_forecast(&f.data);
    if let Some(insight) = ai_insight(&f.data) {
        println!();
        println!("Outlook: {insight}");
    }
    Ok(())
}

async fn hourly(app: &App, city: &str, day: Option<NaiveDate>, json: bool) -> Result<()> {
    let f = app.feed.forecast(city).await.into_inner();
    let Some(day) = selected_day(&f, day) else {
        println!("No forecast data for {city}.");
        return Ok(());
    };
    let h = app.feed.hourly(city, day, &f).await;
    log::info!("hourly data for {city} on {day} ({})", h.source);
    if json {
        println!("{}", serde_json::to_string_pretty(&h.data)?);
        return Ok(());
    }
    println!("Hourly breakdown for {city} on {day}");
    for p in &h.data {
        println!("{}  AQI {:>3}  {:<31} {:>3}°C {:>3}%", p.hour, p.aqi, p.quality, p.temperature, p.humidity);
    }
    Ok(())
}

fn history(app: &App, city: &str, seed: Option<u64>) -> Result<()> {
    let profile = app.feed.cities().resolve(city);
    let h = app.feed.generator().historical(profile.base_aqi, &profile.name, &mut rng(seed));
    println!("30-day history for {city}");
    for p in &h {
        println!("{}  AQI {:>3}  {}", p.date, p.aqi, p.quality);
    }
    Ok(())
}

fn snapshot(app: &App, city: &str, seed: Option<u64>) -> Result<()> {
    let s = app.feed.generator().snapshot(city, &mut rng(seed));
    println!("{}", serde_json::to_string_pretty(&s)?);
    Ok(())
}

// ---- advice ------------------------------------------------------------------

fn health(app: &App, aqi: Option<u32>, city: Option<String>, age: Option<u32>) -> Result<()> {
    let aqi = match aqi {
        Some(a) => a,
        None => app.feed.cities().resolve(&app.city(city)).base_aqi,
    };
    let who = AgeProfile::from_age(age);
    let quality = Quality::from_aqi(aqi as f64);
    let m = health_measures(aqi, age);

    println!("AQI {aqi}: {quality}");
    println!("{}", recommendation(quality));
    if let Some(a) = who.age {
        println!("Age {a}: {:?}, {:?} risk", who.category, who.risk);
    }
    if !m.masks.is_empty() {
        println!("\nMasks");
        for mask in &m.masks {
            println!("  {} ({}) {}", mask.name, mask.price, mask.effectiveness);
        }
    }
    if !m.purifiers.is_empty() {
        println!("\nAir purifiers");
        for p in &m.purifiers {
            println!("  {} ({}, {}): {}", p.name, p.price, p.room_size, p.features.join(", "));
        }
    }
    println!("\nAdvice");
    for line in &m.general {
        println!("  - {line}");
    }
    Ok(())
}

async fn calc(app: &App, fields: [&str; 6], strict: bool) -> Result<()> {
    let reading = if strict {
        PollutantReading::parse_strict(fields)?
    } else {
        PollutantReading::parse_lenient(fields)
    };
    let r = app.feed.calculate(&reading).await;
    log::info!("AQI calculation ({})", r.source);
    println!("AQI {}: {}", r.data.aqi, r.data.quality);
    println!("{}", recommendation(r.data.quality));
    Ok(())
}

// ---- charts --------------------------------------------------------------------

/// Series for `view`, owned so the chart can borrow it.
struct ViewData {
    forecast: Vec<ForecastPoint>,
    hourly: Vec<aqi_core::HourlyPoint>,
    history: Vec<aqi_core::HistoricalPoint>,
    view: ViewMode,
}

impl ViewData {
    async fn load(app: &App, city: &str, view: ViewMode, day: Option<NaiveDate>, seed: Option<u64>) -> Self {
        let forecast = app.feed.forecast(city).await.into_inner();
        let mut data = Self { forecast, hourly: Vec::new(), history: Vec::new(), view };
        match view {
            ViewMode::SevenDay => {}
            ViewMode::Hourly => {
                if let Some(day) = selected_day(&data.forecast, day) {
                    data.hourly = app.feed.hourly(city, day, &data.forecast).await.into_inner();
                }
            }
            ViewMode::History => {
                let profile = app.feed.cities().resolve(city);
                data.history = app.feed.generator().historical(profile.base_aqi, &profile.name, &mut rng(seed));
            }
        }
        data
    }

    fn active(&self) -> ActiveSeries<'_> {
        match self.view {
            ViewMode::SevenDay => ActiveSeries::Daily(&self.forecast),
            ViewMode::Hourly => ActiveSeries::Hourly(&self.hourly),
            ViewMode::History => ActiveSeries::History(&self.history),
        }
    }
}

fn render_series<S: Sample>(
    series: &[S],
    metric: Metric,
    series_type: SeriesType,
    opts: &RenderOptions,
    out: &std::path::Path,
) -> Result<(), ChartError> {
    Chart::new(series, metric).with_type(series_type).render_to_png(opts, out)
}

#[allow(clippy::too_many_arguments)]
async fn render(
    app: &App,
    city: &str,
    view: ViewMode,
    metric: Metric,
    series_type: SeriesType,
    day: Option<NaiveDate>,
    out: Option<PathBuf>,
    no_labels: bool,
) -> Result<()> {
    let data = ViewData::load(app, city, view, day, None).await;
    let mut opts = app.config.render_options(view);
    opts.draw_labels = !no_labels;
    let out = out.unwrap_or_else(|| out_name(&app.config.output_dir, city, view.name(), metric.field(), "png"));

    let result = match data.active() {
        ActiveSeries::Daily(s) => render_series(s, metric, series_type, &opts, &out),
        ActiveSeries::Hourly(s) => render_series(s, metric, series_type, &opts, &out),
        ActiveSeries::History(s) => render_series(s, metric, series_type, &opts, &out),
    };
    match result {
        Ok(()) => {
            let values = data.active().values(metric);
            let shown: Vec<String> = values
                .iter()
                .map(|(label, v)| match v {
                    Some(v) => format!("{label} {}", (v + 0.5).floor()),
                    None => format!("{label} -"),
                })
                .collect();
            println!("{} {}: {}", city, metric, shown.join(", "));
            println!("Wrote {}", out.display());
            Ok(())
        }
        Err(ChartError::EmptySeries) => {
            println!("No data to display for {city} ({view}).");
            Ok(())
        }
        Err(e) => Err(e).with_context(|| format!("rendering {}", out.display())),
    }
}

async fn summary(app: &App, city: &str, chart: bool, out: Option<PathBuf>) -> Result<()> {
    let f = app.feed.forecast(city).await.into_inner();
    if f.is_empty() {
        println!("No forecast data for {city}.");
        return Ok(());
    }
    let tally = distribution_summary(&f);
    println!("Air quality distribution, {city} (7 days)");
    for (quality, count) in &tally {
        println!("  {:<31} {count}", quality);
    }
    println!("\nPollutant comparison");
    println!("  {:<4} {:>5} {:>5} {:>5} {:>5}", "Day", "PM2.5", "PM10", "O3", "NO2");
    for row in pollutant_breakdown(&f) {
        println!("  {:<4} {:>5} {:>5} {:>5} {:>5}", row.day, row.pm25, row.pm10, row.o3, row.no2);
    }

    if chart {
        let out = out.unwrap_or_else(|| out_name(&app.config.output_dir, city, ViewMode::SevenDay.name(), "distribution", "png"));
        DistributionChart::new(&tally)
            .render_to_png(&app.config.render_options(ViewMode::SevenDay), &out)
            .with_context(|| format!("rendering {}", out.display()))?;
        println!("\nWrote {}", out.display());
    }
    Ok(())
}

async fn export(
    app: &App,
    city: &str,
    view: ViewMode,
    day: Option<NaiveDate>,
    out: Option<PathBuf>,
    seed: Option<u64>,
) -> Result<()> {
    let data = ViewData::load(app, city, view, day, seed).await;
    let active = data.active();
    if active.is_empty() {
        println!("No data to export for {city} ({view}).");
        return Ok(());
    }
    let out = out.unwrap_or_else(|| out_name(&app.config.output_dir, city, view.name(), "series", "csv"));
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    let file = std::fs::File::create(&out).with_context(|| format!("creating {}", out.display()))?;
    let written = match active {
        ActiveSeries::Daily(s) => write_series(s, file),
        ActiveSeries::Hourly(s) => write_series(s, file),
        ActiveSeries::History(s) => write_series(s, file),
    };
    written.with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {} rows to {}", active.len(), out.display());
    Ok(())
}

// ---- live refresh ----------------------------------------------------------------

async fn watch(app: &App, city: String) -> Result<()> {
    let refresher = Refresher::spawn(app.feed.clone(), app.config.refresh_interval());
    let mut updates = refresher.subscribe();
    let session = Session::new();
    let (tx, mut outlooks) = tokio::sync::mpsc::unbounded_channel();

    println!("Refreshing every {}s; Ctrl-C to stop.", app.config.refresh_interval().as_secs());
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() { break; }
                let Some(readings) = updates.borrow_and_update().clone() else { continue };
                println!();
                print_city_table(&readings.data);

                // A newer refresh supersedes any outlook still in flight.
                let ticket = session.invalidate();
                let (feed, city, tx) = (app.feed.clone(), city.clone(), tx.clone());
                tokio::spawn(async move {
                    let f = feed.forecast(&city).await;
                    let _ = tx.send((ticket, f));
                });
            }
            Some((ticket, forecast)) = outlooks.recv() => {
                if let Some(f) = session.accept(ticket, forecast) {
                    if let Some(insight) = ai_insight(&f.data) {
                        println!("{city} outlook: {insight}");
                    }
                }
            }
            _ = &mut ctrl_c => {
                log::info!("interrupted; stopping refresh");
                break;
            }
        }
    }

    session.invalidate();
    refresher.shutdown();
    Ok(())
}
