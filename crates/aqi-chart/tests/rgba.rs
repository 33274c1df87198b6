// File: crates/aqi-chart/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use std::collections::BTreeMap;

use aqi_chart::{Chart, DistributionChart, RenderOptions, SeriesType};
use aqi_core::{CityTable, Generator, Metric, Quality};

fn rgb_at(px: &[u8], stride: usize, (x, y): (usize, usize)) -> (i32, i32, i32) {
    let i = y * stride + x * 4;
    (px[i] as i32, px[i + 1] as i32, px[i + 2] as i32)
}

fn near((r, g, b): (i32, i32, i32), hex: u32) -> bool {
    let (er, eg, eb) = ((hex >> 16) as i32 & 0xff, (hex >> 8) as i32 & 0xff, hex as i32 & 0xff);
    (r - er).abs() <= 8 && (g - eg).abs() <= 8 && (b - eb).abs() <= 8
}

#[test]
fn render_rgba8_buffer() {
    let table = CityTable::builtin().unwrap();
    let hourly = Generator::new(&table).hourly(120, "Lucknow");

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    opts.label_step = 4;
    let (px, w, h, stride) = Chart::new(&hourly, Metric::Aqi).render_to_rgba8(&opts).expect("rgba render");
    assert_eq!((w, h), (800, 320));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Background is opaque in the top-left pixel (RGBA)
    assert_eq!(px[3], 255);
}

#[test]
fn marker_ring_is_painted_at_each_point() {
    let table = CityTable::builtin().unwrap();
    let forecast = Generator::new(&table).forecast(168, "Delhi");
    let chart = Chart::new(&forecast, Metric::Aqi);

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let (px, _, _, stride) = chart.render_to_rgba8(&opts).expect("rgba render");

    // The inner dot carries the metric color (#8B5CF6) at the point's center.
    for p in chart.points(&opts) {
        let c = rgb_at(&px, stride, (p.x.round() as usize, p.y.round() as usize));
        assert!(near(c, 0x8b5cf6), "{c:?} at {}", p.label);
    }
}

#[test]
fn single_point_bar_shows_a_centered_dot() {
    let table = CityTable::builtin().unwrap();
    let hourly = Generator::new(&table).hourly(90, "Pune");

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let (px, _, _, stride) = Chart::new(&hourly[..1], Metric::Pm10)
        .with_type(SeriesType::Bar)
        .render_to_rgba8(&opts)
        .expect("rgba render");

    // PM10 is #F97316; the lone point sits at the plot center.
    let c = rgb_at(&px, stride, (400, 160));
    assert!(near(c, 0xf97316), "{c:?}");
}

#[test]
fn distribution_pie_uses_category_colors() {
    let counts = BTreeMap::from([(Quality::Good, 1), (Quality::Moderate, 3)]);
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let (px, w, h, stride) = DistributionChart::new(&counts).render_to_rgba8(&opts).expect("rgba render");
    assert_eq!((w, h), (800, 320));

    // Good owns the first quarter (12 to 3 o'clock), Moderate the rest.
    let upper_right = rgb_at(&px, stride, (442, 118));
    let lower_left = rgb_at(&px, stride, (358, 202));
    assert!(near(upper_right, 0x22c55e), "{upper_right:?}");
    assert!(near(lower_left, 0xeab308), "{lower_left:?}");
}
