// File: crates/aqi-chart/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use std::io::Cursor;
use std::path::Path;

use aqi_core::{Metric, Sample};
use skia_safe as skia;
use thiserror::Error;

use crate::geometry::{hit_test, ChartPoint, HIT_RADIUS};
use crate::grid::{label_indices, linspace, GRID_LINES};
use crate::projection::project_with;
use crate::scale::{compute_scale, ValueScale};
use crate::series::SeriesType;
use crate::theme::{metric_color, with_alpha, Theme};
use crate::tooltip::tooltip_text;
use crate::types::{Insets, PlotArea, HEIGHT, WIDTH};

/// Fraction of the per-point slot a bar occupies.
pub const BAR_FILL: f32 = 0.6;
/// Outer (ring) and inner marker radii.
pub const MARKER_OUTER: f32 = 6.0;
pub const MARKER_INNER: f32 = 4.0;
const LINE_WIDTH: f32 = 3.0;
pub(crate) const FONT_SIZE: f32 = 12.0;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("series is empty; nothing to render")]
    EmptySeries,
    #[error("failed to create {0}x{1} raster surface")]
    Surface(i32, i32),
    #[error("failed to read pixels back from the raster surface")]
    ReadPixels,
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Draw category labels under the plot and value labels above the points.
    pub draw_labels: bool,
    /// Label every n-th point (1 for daily series, 4 for hourly).
    pub label_step: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
            label_step: 1,
        }
    }
}

impl RenderOptions {
    fn area(&self) -> PlotArea {
        PlotArea::new(self.width, self.height, self.insets)
    }
}

/// One cubic Bezier piece of the smoothed line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicSegment {
    pub from: (f32, f32),
    pub c1: (f32, f32),
    pub c2: (f32, f32),
    pub to: (f32, f32),
}

/// Midpoint-controlled smoothing: both control points sit at the horizontal
/// midpoint, each at its own endpoint's height.
pub fn smooth_segments(points: &[ChartPoint]) -> Vec<CubicSegment> {
    points
        .windows(2)
        .map(|w| {
            let (a, b) = (&w[0], &w[1]);
            let cpx = (a.x + b.x) / 2.0;
            CubicSegment { from: (a.x, a.y), c1: (cpx, a.y), c2: (cpx, b.y), to: (b.x, b.y) }
        })
        .collect()
}

/// Bars centered on each point, anchored at the plot bottom.
pub fn bar_rects(points: &[ChartPoint], scale: &ValueScale, area: PlotArea) -> Vec<skia::Rect> {
    if points.is_empty() { return Vec::new(); }
    let bar_w = area.width() / points.len() as f32 * BAR_FILL;
    points
        .iter()
        .map(|p| {
            let bar_h = scale.normalize(p.value) as f32 * area.height();
            skia::Rect::from_xywh(p.x - bar_w / 2.0, area.bottom - bar_h, bar_w, bar_h)
        })
        .collect()
}

/// A series bound to the metric it plots.
pub struct Chart<'a, S: Sample> {
    pub series: &'a [S],
    pub metric: Metric,
    pub series_type: SeriesType,
}

impl<'a, S: Sample> Chart<'a, S> {
    pub fn new(series: &'a [S], metric: Metric) -> Self {
        Self { series, metric, series_type: SeriesType::Line }
    }

    pub fn with_type(mut self, series_type: SeriesType) -> Self {
        self.series_type = series_type;
        self
    }

    /// Points as they would be drawn with `opts`.
    pub fn points(&self, opts: &RenderOptions) -> Vec<ChartPoint> {
        match compute_scale(self.series, self.metric) {
            Some(scale) => project_with(self.series, self.metric, &scale, opts.area()),
            None => Vec::new(),
        }
    }

    /// Tooltip for the record under `cursor`, if any.
    pub fn tooltip_at(&self, opts: &RenderOptions, cursor: (f32, f32)) -> Option<String> {
        let points = self.points(opts);
        let hit = hit_test(cursor, &points, HIT_RADIUS)?;
        let idx = points.iter().position(|p| std::ptr::eq(p, hit))?;
        self.series.get(idx).map(|s| tooltip_text(s, self.metric))
    }

    /// Render into a tightly packed, unpremultiplied RGBA8 buffer.
    /// Returns `(pixels, width, height, row_bytes)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<Rgba8, ChartError> {
        let scale = compute_scale(self.series, self.metric).ok_or(ChartError::EmptySeries)?;
        log::debug!(
            "rendering {} {} points of {} at {}x{}",
            self.series.len(),
            self.series_type,
            self.metric,
            opts.width,
            opts.height
        );
        rasterize(opts, |canvas| self.draw(canvas, opts, &scale))
    }

    /// Render and encode as PNG in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, ChartError> {
        encode_png(self.render_to_rgba8(opts)?)
    }

    /// Render the chart to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<(), ChartError> {
        write_png(&self.render_to_png_bytes(opts)?, output_png_path.as_ref())
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions, scale: &ValueScale) {
        let area = opts.area();
        let color = metric_color(self.metric);
        let points = project_with(self.series, self.metric, scale, area);

        canvas.clear(opts.theme.background);
        draw_wash(canvas, opts, color);
        draw_grid(canvas, area, &opts.theme);

        match self.series_type {
            SeriesType::Bar => {
                draw_bars(canvas, &points, scale, area, color, &opts.theme);
                // A lone value has no height against its own scale.
                if points.len() == 1 {
                    draw_markers(canvas, &points, color, &opts.theme);
                }
            }
            SeriesType::Line => draw_line(canvas, &points, area, color, &opts.theme),
        }

        if opts.draw_labels {
            draw_labels(canvas, &points, opts);
        }
    }
}

// ---- raster output ------------------------------------------------------------

/// `(pixels, width, height, row_bytes)`, tightly packed unpremultiplied RGBA8.
pub type Rgba8 = (Vec<u8>, u32, u32, usize);

/// Run `draw` on a fresh `opts`-sized CPU surface and read the pixels back.
pub(crate) fn rasterize(opts: &RenderOptions, draw: impl FnOnce(&skia::Canvas)) -> Result<Rgba8, ChartError> {
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or(ChartError::Surface(opts.width, opts.height))?;
    draw(surface.canvas());

    let (w, h) = (opts.width as u32, opts.height as u32);
    let row_bytes = w as usize * 4;
    let mut pixels = vec![0u8; row_bytes * h as usize];
    let info = skia::ImageInfo::new(
        (opts.width, opts.height),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
        return Err(ChartError::ReadPixels);
    }
    Ok((pixels, w, h, row_bytes))
}

pub(crate) fn encode_png((pixels, w, h, _): Rgba8) -> Result<Vec<u8>, ChartError> {
    let img = image::RgbaImage::from_raw(w, h, pixels).ok_or(ChartError::ReadPixels)?;
    let mut out = Vec::new();
    img.write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)?;
    Ok(out)
}

pub(crate) fn write_png(bytes: &[u8], path: &Path) -> Result<(), ChartError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    Ok(())
}

// ---- helpers ----------------------------------------------------------------

fn vertical_gradient(top: f32, bottom: f32, colors: &[skia::Color], stops: Option<&[f32]>) -> Option<skia::Shader> {
    skia::Shader::linear_gradient(
        ((0.0, top), (0.0, bottom)),
        colors,
        stops,
        skia::TileMode::Clamp,
        None,
        None,
    )
}

fn draw_wash(canvas: &skia::Canvas, opts: &RenderOptions, color: skia::Color) {
    let mut paint = skia::Paint::default();
    paint.set_shader(vertical_gradient(
        0.0,
        opts.height as f32,
        &[with_alpha(color, 0x20), with_alpha(color, 0x05)],
        None,
    ));
    canvas.draw_rect(skia::Rect::from_wh(opts.width as f32, opts.height as f32), &paint);
}

fn draw_grid(canvas: &skia::Canvas, area: PlotArea, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    for y in linspace(area.top as f64, area.bottom as f64, GRID_LINES) {
        canvas.draw_line((area.left, y as f32), (area.right, y as f32), &paint);
    }
}

fn draw_bars(
    canvas: &skia::Canvas,
    points: &[ChartPoint],
    scale: &ValueScale,
    area: PlotArea,
    color: skia::Color,
    theme: &Theme,
) {
    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(2.0);
    border.set_color(theme.bar_border);

    for rect in bar_rects(points, scale, area) {
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_shader(vertical_gradient(rect.top, rect.bottom, &[color, with_alpha(color, 0x80)], None));
        canvas.draw_rect(rect, &fill);
        canvas.draw_rect(rect, &border);
    }
}

fn draw_line(canvas: &skia::Canvas, points: &[ChartPoint], area: PlotArea, color: skia::Color, theme: &Theme) {
    let (Some(first), Some(last)) = (points.first(), points.last()) else { return };
    let segments = smooth_segments(points);

    if !segments.is_empty() {
        // Area under the curve, closed along the plot bottom.
        let mut area_path = skia::Path::new();
        area_path.move_to((first.x, area.bottom));
        area_path.line_to((first.x, first.y));
        for s in &segments {
            area_path.cubic_to(s.c1, s.c2, s.to);
        }
        area_path.line_to((last.x, area.bottom));
        area_path.close();

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_shader(vertical_gradient(
            area.top,
            area.bottom,
            &[with_alpha(color, 0x40), with_alpha(color, 0x20), with_alpha(color, 0x05)],
            Some(&[0.0, 0.5, 1.0][..]),
        ));
        canvas.draw_path(&area_path, &fill);

        let mut line = skia::Path::new();
        line.move_to((first.x, first.y));
        for s in &segments {
            line.cubic_to(s.c1, s.c2, s.to);
        }
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(LINE_WIDTH);
        stroke.set_color(color);
        canvas.draw_path(&line, &stroke);
    }

    draw_markers(canvas, points, color, theme);
}

fn draw_markers(canvas: &skia::Canvas, points: &[ChartPoint], color: skia::Color, theme: &Theme) {
    let mut ring = skia::Paint::default();
    ring.set_anti_alias(true);
    ring.set_color(theme.marker_ring);
    let mut dot = skia::Paint::default();
    dot.set_anti_alias(true);
    dot.set_color(color);
    for p in points {
        canvas.draw_circle((p.x, p.y), MARKER_OUTER, &ring);
        canvas.draw_circle((p.x, p.y), MARKER_INNER, &dot);
    }
}

pub(crate) fn draw_centered(canvas: &skia::Canvas, text: &str, (x, y): (f32, f32), font: &skia::Font, paint: &skia::Paint) {
    let (w, _) = font.measure_str(text, Some(paint));
    canvas.draw_str(text, (x - w / 2.0, y), font, paint);
}

fn draw_labels(canvas: &skia::Canvas, points: &[ChartPoint], opts: &RenderOptions) {
    let mut label_paint = skia::Paint::default();
    label_paint.set_anti_alias(true);
    label_paint.set_color(opts.theme.axis_label);
    let mut value_paint = label_paint.clone();
    value_paint.set_color(opts.theme.value_label);

    let mut font = skia::Font::default();
    font.set_size(FONT_SIZE);
    let mut bold = font.clone();
    bold.set_embolden(true);

    for i in label_indices(points.len(), opts.label_step) {
        let p = &points[i];
        draw_centered(canvas, &p.label, (p.x, opts.height as f32 - 10.0), &font, &label_paint);
        let value = format!("{}", (p.value + 0.5).floor() as i64);
        draw_centered(canvas, &value, (p.x, p.y - 15.0), &bold, &value_paint);
    }
}
