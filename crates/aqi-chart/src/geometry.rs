// File: crates/aqi-chart/src/geometry.rs
// Summary: Projected chart points and nearest-point hit-testing for tooltips.

/// Pointer radius for hit-testing, in pixels.
pub const HIT_RADIUS: f32 = 15.0;

/// One projected sample; lives for a single render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartPoint {
    pub x: f32,
    pub y: f32,
    pub value: f64,
    pub label: String,
}

impl ChartPoint {
    #[inline]
    pub fn distance_to(&self, (cx, cy): (f32, f32)) -> f32 {
        ((self.x - cx).powi(2) + (self.y - cy).powi(2)).sqrt()
    }
}

/// First point strictly within `radius` of `cursor`, in series order.
pub fn hit_test(cursor: (f32, f32), points: &[ChartPoint], radius: f32) -> Option<&ChartPoint> {
    points.iter().find(|p| p.distance_to(cursor) < radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts() -> Vec<ChartPoint> {
        vec![
            ChartPoint { x: 50.0, y: 100.0, value: 1.0, label: "a".into() },
            ChartPoint { x: 60.0, y: 100.0, value: 2.0, label: "b".into() },
            ChartPoint { x: 300.0, y: 200.0, value: 3.0, label: "c".into() },
        ]
    }

    #[test]
    fn overlapping_radii_pick_the_first() {
        let p = pts();
        assert_eq!(hit_test((58.0, 100.0), &p, HIT_RADIUS).map(|p| p.label.as_str()), Some("a"));
    }

    #[test]
    fn radius_is_exclusive() {
        let p = pts();
        assert!(hit_test((315.0, 200.0), &p, HIT_RADIUS).is_none());
        assert!(hit_test((314.9, 200.0), &p, HIT_RADIUS).is_some());
    }
}
