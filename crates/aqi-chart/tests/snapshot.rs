// File: crates/aqi-chart/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders deterministic forecast charts (line and bar) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot files.
// - Else, if a snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use aqi_chart::{Chart, RenderOptions, SeriesType};
use aqi_core::{CityTable, Generator, Metric};
use chrono::NaiveDate;

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render(series_type: SeriesType, metric: Metric) -> Vec<u8> {
    let table = CityTable::builtin().unwrap();
    let forecast = Generator::new(&table)
        .with_today(NaiveDate::from_ymd_opt(2024, 12, 14).unwrap())
        .forecast(168, "Delhi");
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // deterministic
    Chart::new(&forecast, metric).with_type(series_type).render_to_png_bytes(&opts).expect("render bytes")
}

fn snapshot_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name)
}

#[test]
fn golden_forecast_line() {
    write_or_compare(&snapshot_path("forecast_line.png"), &render(SeriesType::Line, Metric::Aqi));
}

#[test]
fn golden_forecast_bars() {
    write_or_compare(&snapshot_path("forecast_bars.png"), &render(SeriesType::Bar, Metric::Pm25));
}
