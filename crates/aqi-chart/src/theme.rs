// File: crates/aqi-chart/src/theme.rs
// Summary: Light/Dark theming plus the per-metric and per-category palette.

use aqi_core::{Metric, Quality};
use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_label: skia::Color,
    pub value_label: skia::Color,
    pub marker_ring: skia::Color,
    pub bar_border: skia::Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(77, 156, 163, 175),
            axis_label: skia::Color::from_argb(255, 156, 163, 175),
            value_label: skia::Color::from_argb(255, 235, 235, 245),
            marker_ring: skia::Color::from_argb(255, 31, 41, 55),
            bar_border: skia::Color::from_argb(204, 18, 18, 20),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            // rgba(156, 163, 175, 0.3)
            grid: skia::Color::from_argb(77, 156, 163, 175),
            axis_label: skia::Color::from_argb(255, 0x6b, 0x72, 0x80),
            value_label: skia::Color::from_argb(255, 0x1f, 0x29, 0x37),
            marker_ring: skia::Color::WHITE,
            bar_border: skia::Color::from_argb(204, 255, 255, 255),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}

#[inline]
fn rgb(hex: u32) -> skia::Color {
    skia::Color::from_rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

/// Stroke/fill color of a plotted metric.
pub fn metric_color(metric: Metric) -> skia::Color {
    match metric {
        Metric::Aqi | Metric::No2 => rgb(0x8b5cf6),
        Metric::Pm25 => rgb(0xef4444),
        Metric::Pm10 => rgb(0xf97316),
        Metric::O3 => rgb(0x3b82f6),
        Metric::So2 => rgb(0xf59e0b),
        Metric::Co => rgb(0x10b981),
        Metric::Temperature => rgb(0xf43f5e),
        Metric::Humidity => rgb(0x06b6d4),
    }
}

/// Slice color for the category breakdown; every category past "sensitive" shares red.
pub fn quality_color(quality: Quality) -> skia::Color {
    match quality {
        Quality::Good => rgb(0x22c55e),
        Quality::Moderate => rgb(0xeab308),
        Quality::UnhealthyForSensitive => rgb(0xf97316),
        _ => rgb(0xef4444),
    }
}

/// `color` with its alpha replaced, CSS "#RRGGBBAA" style.
#[inline]
pub fn with_alpha(color: skia::Color, alpha: u8) -> skia::Color {
    color.with_a(alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_is_case_insensitive_with_light_fallback() {
        assert_eq!(find("DARK").name, "dark");
        assert_eq!(find("sepia").name, "light");
    }

    #[test]
    fn palette_matches_hex() {
        let c = metric_color(Metric::Pm25);
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (0xef, 0x44, 0x44, 0xff));
        assert_eq!(quality_color(Quality::Hazardous), quality_color(Quality::Unhealthy));
        assert_eq!(with_alpha(c, 0x40).a(), 0x40);
    }
}
