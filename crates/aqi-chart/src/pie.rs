// File: crates/aqi-chart/src/pie.rs
// Summary: Quality-category pie for the distribution view, drawn on the same raster pipeline.

use std::collections::BTreeMap;
use std::path::Path;

use aqi_core::Quality;
use skia_safe as skia;

use crate::chart::{draw_centered, encode_png, rasterize, write_png, ChartError, RenderOptions, Rgba8, FONT_SIZE};
use crate::theme::quality_color;
use crate::types::PlotArea;

/// Angle of the first slice's leading edge (12 o'clock), in degrees.
pub const PIE_START: f32 = -90.0;
const SWATCH: f32 = 10.0;
const LEGEND_ROW: f32 = 18.0;

/// One wedge; angles in degrees, clockwise from the +x axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieSlice {
    pub quality: Quality,
    pub count: usize,
    pub start: f32,
    pub sweep: f32,
}

/// Wedges in category order, starting at 12 o'clock. Zero counts are skipped.
pub fn pie_slices(counts: &BTreeMap<Quality, usize>) -> Vec<PieSlice> {
    let total: usize = counts.values().sum();
    if total == 0 {
        return Vec::new();
    }
    let mut start = PIE_START;
    counts
        .iter()
        .filter(|(_, &n)| n > 0)
        .map(|(&quality, &count)| {
            let sweep = 360.0 * count as f32 / total as f32;
            let slice = PieSlice { quality, count, start, sweep };
            start += sweep;
            slice
        })
        .collect()
}

/// Category tally (see `distribution_summary`) rendered as a pie with a legend.
pub struct DistributionChart<'a> {
    pub counts: &'a BTreeMap<Quality, usize>,
}

impl<'a> DistributionChart<'a> {
    pub fn new(counts: &'a BTreeMap<Quality, usize>) -> Self {
        Self { counts }
    }

    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<Rgba8, ChartError> {
        let slices = pie_slices(self.counts);
        if slices.is_empty() {
            return Err(ChartError::EmptySeries);
        }
        log::debug!("rendering {}-slice distribution at {}x{}", slices.len(), opts.width, opts.height);
        rasterize(opts, |canvas| draw_pie(canvas, &slices, opts))
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, ChartError> {
        encode_png(self.render_to_rgba8(opts)?)
    }

    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<(), ChartError> {
        write_png(&self.render_to_png_bytes(opts)?, output_png_path.as_ref())
    }
}

fn draw_pie(canvas: &skia::Canvas, slices: &[PieSlice], opts: &RenderOptions) {
    let area = PlotArea::new(opts.width, opts.height, opts.insets);
    let r = area.width().min(area.height()) / 2.0;
    let (cx, cy) = (area.left + area.width() / 2.0, area.top + area.height() / 2.0);
    let oval = skia::Rect::from_xywh(cx - r, cy - r, 2.0 * r, 2.0 * r);

    canvas.clear(opts.theme.background);

    let mut edge = skia::Paint::default();
    edge.set_anti_alias(true);
    edge.set_style(skia::paint::Style::Stroke);
    edge.set_stroke_width(2.0);
    edge.set_color(opts.theme.background);

    for s in slices {
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_color(quality_color(s.quality));
        canvas.draw_arc(oval, s.start, s.sweep, true, &fill);
        if slices.len() > 1 {
            canvas.draw_arc(oval, s.start, s.sweep, true, &edge);
        }
    }

    if !opts.draw_labels {
        return;
    }
    let mut text = skia::Paint::default();
    text.set_anti_alias(true);
    text.set_color(opts.theme.axis_label);
    let mut font = skia::Font::default();
    font.set_size(FONT_SIZE);

    for (i, s) in slices.iter().enumerate() {
        let y = area.top + i as f32 * LEGEND_ROW;
        let mut swatch = skia::Paint::default();
        swatch.set_color(quality_color(s.quality));
        canvas.draw_rect(skia::Rect::from_xywh(area.left, y, SWATCH, SWATCH), &swatch);
        canvas.draw_str(format!("{} ({})", s.quality, s.count), (area.left + SWATCH + 6.0, y + SWATCH), &font, &text);
    }

    // Share of the largest category in the middle of the wedge it owns.
    if let Some(top) = slices.iter().max_by_key(|s| s.count) {
        let total: usize = slices.iter().map(|s| s.count).sum();
        let mid = (top.start + top.sweep / 2.0).to_radians();
        let at = (cx + 0.6 * r * mid.cos(), cy + 0.6 * r * mid.sin());
        let pct = format!("{}%", (100.0 * top.count as f64 / total as f64 + 0.5).floor());
        let mut label = text.clone();
        label.set_color(opts.theme.background);
        draw_centered(canvas, &pct, at, &font, &label);
    }
}
