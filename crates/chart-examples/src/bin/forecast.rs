// File: crates/chart-examples/src/bin/forecast.rs
// Summary: Renders Delhi's 7-day AQI forecast as a line chart and its PM2.5 as bars.

use aqi_chart::{Chart, RenderOptions, SeriesType};
use aqi_core::{CityTable, Generator, Metric};

fn main() {
    let cities = CityTable::builtin().expect("built-in city table");
    let delhi = cities.resolve("Delhi");
    let forecast = Generator::new(&cities).forecast(delhi.base_aqi, &delhi.name);

    let opts = RenderOptions::default();
    let line = std::path::PathBuf::from("target/out/example_forecast_aqi.png");
    Chart::new(&forecast, Metric::Aqi).render_to_png(&opts, &line).expect("render to png");
    println!("Wrote {}", line.display());

    let bars = std::path::PathBuf::from("target/out/example_forecast_pm25.png");
    Chart::new(&forecast, Metric::Pm25)
        .with_type(SeriesType::Bar)
        .render_to_png(&opts, &bars)
        .expect("render to png");
    println!("Wrote {}", bars.display());
}
