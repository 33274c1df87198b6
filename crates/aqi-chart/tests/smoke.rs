// File: crates/aqi-chart/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use aqi_chart::{Chart, ChartError, RenderOptions, SeriesType};
use aqi_core::{CityTable, Generator, Metric};

#[test]
fn render_smoke_png() {
    let table = CityTable::builtin().unwrap();
    let forecast = Generator::new(&table).forecast(168, "Delhi");
    let chart = Chart::new(&forecast, Metric::Aqi);

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.with_type(SeriesType::Bar).render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn empty_series_is_an_error() {
    let table = CityTable::builtin().unwrap();
    let forecast = Generator::new(&table).forecast(168, "Delhi");
    let chart = Chart::new(&forecast[..0], Metric::Aqi);
    let err = chart.render_to_png_bytes(&RenderOptions::default()).unwrap_err();
    assert!(matches!(err, ChartError::EmptySeries));
}

#[test]
fn single_point_still_renders() {
    let table = CityTable::builtin().unwrap();
    let hourly = Generator::new(&table).hourly(90, "Pune");
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let (px, w, h, _) = Chart::new(&hourly[..1], Metric::Pm10).render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(px.len(), w as usize * h as usize * 4);
}
