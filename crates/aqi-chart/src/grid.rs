// File: crates/aqi-chart/src/grid.rs
// Summary: Simple grid/tick layout helpers.

/// Number of horizontal grid lines across the plot area.
pub const GRID_LINES: usize = 5;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Label every `step`-th point; a step of 0 is treated as 1.
pub fn label_indices(n: usize, step: usize) -> impl Iterator<Item = usize> {
    (0..n).step_by(step.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_includes_both_ends() {
        assert_eq!(linspace(50.0, 270.0, 5), vec![50.0, 105.0, 160.0, 215.0, 270.0]);
        assert_eq!(linspace(1.0, 2.0, 1), vec![1.0, 2.0]);
    }

    #[test]
    fn hourly_labels_every_fourth() {
        let idx: Vec<_> = label_indices(24, 4).collect();
        assert_eq!(idx, vec![0, 4, 8, 12, 16, 20]);
        assert_eq!(label_indices(3, 0).count(), 3);
    }
}
