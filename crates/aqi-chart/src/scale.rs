// File: crates/aqi-chart/src/scale.rs
// Summary: Value (Y) scale fitted to a series' min/max, with pixel transforms.

use aqi_core::{Metric, Sample};

/// Value of `metric` for one record; records that lack the field plot as 0.
#[inline]
pub fn value_of<S: Sample>(sample: &S, metric: Metric) -> f64 {
    sample.value(metric).unwrap_or(0.0)
}

/// Vertical value scale over the data range.
/// `range` is `max - min`, replaced by 1 when the two coincide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub min: f64,
    pub max: f64,
    pub range: f64,
}

impl ValueScale {
    pub fn new(min: f64, max: f64) -> Self {
        let span = max - min;
        let range = if span == 0.0 { 1.0 } else { span };
        Self { min, max, range }
    }

    /// Fraction of the range covered by `v`, 0 at `min` and 1 at `max`.
    #[inline]
    pub fn normalize(&self, v: f64) -> f64 {
        (v - self.min) / self.range
    }

    /// Map a value to a y pixel inside `[top, top + plot_h]`, inverted so larger is higher.
    #[inline]
    pub fn to_px(&self, v: f64, top: f32, plot_h: f32) -> f32 {
        top + plot_h - self.normalize(v) as f32 * plot_h
    }
}

/// Scan `series` for the min/max of `metric`. `None` for an empty series.
pub fn compute_scale<S: Sample>(series: &[S], metric: Metric) -> Option<ValueScale> {
    let mut values = series.iter().map(|s| value_of(s, metric));
    let first = values.next()?;
    let (min, max) = values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
    Some(ValueScale::new(min, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aqi_core::{HistoricalPoint, Quality};
    use chrono::NaiveDate;

    fn hist(aqis: &[u32]) -> Vec<HistoricalPoint> {
        let d0 = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        aqis.iter()
            .enumerate()
            .map(|(i, &aqi)| HistoricalPoint {
                date: d0 + chrono::Duration::days(i as i64),
                aqi,
                quality: Quality::from_aqi(aqi as f64),
            })
            .collect()
    }

    #[test]
    fn scale_spans_data() {
        let s = compute_scale(&hist(&[120, 80, 200]), Metric::Aqi).unwrap();
        assert_eq!((s.min, s.max, s.range), (80.0, 200.0, 120.0));
    }

    #[test]
    fn flat_series_gets_unit_range() {
        let s = compute_scale(&hist(&[90, 90]), Metric::Aqi).unwrap();
        assert_eq!(s.range, 1.0);
    }

    #[test]
    fn missing_metric_counts_as_zero() {
        let s = compute_scale(&hist(&[90, 95]), Metric::Pm25).unwrap();
        assert_eq!((s.min, s.max, s.range), (0.0, 0.0, 1.0));
    }

    #[test]
    fn empty_series_has_no_scale() {
        assert!(compute_scale(&hist(&[]), Metric::Aqi).is_none());
    }

    #[test]
    fn pixel_transform_is_inverted() {
        let s = ValueScale::new(50.0, 250.0);
        assert_eq!(s.to_px(250.0, 50.0, 220.0), 50.0);
        assert_eq!(s.to_px(50.0, 50.0, 220.0), 270.0);
        assert_eq!(s.to_px(150.0, 50.0, 220.0), 160.0);
    }
}
