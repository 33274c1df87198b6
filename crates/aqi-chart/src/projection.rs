// File: crates/aqi-chart/src/projection.rs
// Summary: Maps a series' index/value pairs onto pixel coordinates inside the plot area.

use aqi_core::{Metric, Sample};

use crate::geometry::ChartPoint;
use crate::scale::{compute_scale, value_of, ValueScale};
use crate::types::{Insets, PlotArea};

/// Project `series` onto a `width` x `height` canvas.
///
/// Index `i` maps linearly from the left inset to the right edge of the plot;
/// values map through the fitted [`ValueScale`], inverted so larger values sit higher.
/// A single record is placed at the horizontal center and the vertical midpoint.
pub fn project<S: Sample>(series: &[S], metric: Metric, width: i32, height: i32, insets: Insets) -> Vec<ChartPoint> {
    match compute_scale(series, metric) {
        Some(scale) => project_with(series, metric, &scale, PlotArea::new(width, height, insets)),
        None => Vec::new(),
    }
}

pub(crate) fn project_with<S: Sample>(series: &[S], metric: Metric, scale: &ValueScale, area: PlotArea) -> Vec<ChartPoint> {
    let n = series.len();
    if n == 1 {
        let s = &series[0];
        return vec![ChartPoint {
            x: area.left + area.width() / 2.0,
            y: area.top + area.height() / 2.0,
            value: value_of(s, metric),
            label: s.label(),
        }];
    }
    let step = area.width() / (n.saturating_sub(1)).max(1) as f32;
    series
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let value = value_of(s, metric);
            ChartPoint {
                x: area.left + i as f32 * step,
                y: scale.to_px(value, area.top, area.height()),
                value,
                label: s.label(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aqi_core::{CityTable, Generator};

    #[test]
    fn ends_land_on_the_insets() {
        let t = CityTable::builtin().unwrap();
        let f = Generator::new(&t).forecast(168, "Delhi");
        let pts = project(&f, Metric::Aqi, 800, 320, Insets::uniform(50));
        assert_eq!(pts.len(), 7);
        assert_eq!(pts[0].x, 50.0);
        assert!((pts[6].x - 750.0).abs() < 1e-3);
        // day 0 carries the largest multiplier
        let top = pts.iter().min_by(|a, b| a.y.total_cmp(&b.y)).unwrap();
        assert_eq!(top.label, f[0].day_name);
        assert_eq!(top.y, 50.0);
    }

    #[test]
    fn single_point_is_centered() {
        let t = CityTable::builtin().unwrap();
        let f = Generator::new(&t).forecast(100, "Pune");
        let pts = project(&f[..1], Metric::Aqi, 800, 320, Insets::uniform(50));
        assert_eq!(pts.len(), 1);
        assert_eq!((pts[0].x, pts[0].y), (400.0, 160.0));
    }

    #[test]
    fn empty_projects_nothing() {
        let t = CityTable::builtin().unwrap();
        let f = Generator::new(&t).forecast(100, "Pune");
        assert!(project(&f[..0], Metric::Aqi, 800, 320, Insets::default()).is_empty());
    }
}
