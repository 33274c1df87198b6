// File: crates/chart-examples/src/bin/hourly.rs
// Summary: Mumbai's hourly AQI on the dark theme, labelled every fourth hour.

use aqi_chart::{Chart, RenderOptions, Theme};
use aqi_core::{CityTable, Generator, Metric};

fn main() {
    let cities = CityTable::builtin().expect("built-in city table");
    let mumbai = cities.resolve("Mumbai");
    let hourly = Generator::new(&cities).hourly(mumbai.base_aqi, &mumbai.name);

    let opts = RenderOptions { theme: Theme::dark(), label_step: 4, ..RenderOptions::default() };
    let out = std::path::PathBuf::from("target/out/example_hourly_mumbai.png");
    Chart::new(&hourly, Metric::Aqi).render_to_png(&opts, &out).expect("render to png");
    println!("Wrote {}", out.display());
}
