// File: crates/aqi-chart/src/lib.rs
// Summary: Chart library entry point; projection, hit-testing and PNG rendering of AQI series.

pub mod chart;
pub mod series;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod projection;
pub mod theme;
pub mod summary;
pub mod pie;
pub mod tooltip;

pub use chart::{Chart, ChartError, RenderOptions, Rgba8};
pub use series::SeriesType;
pub use geometry::{hit_test, ChartPoint, HIT_RADIUS};
pub use scale::{compute_scale, ValueScale};
pub use projection::project;
pub use theme::Theme;
pub use pie::{pie_slices, DistributionChart, PieSlice};
pub use summary::{distribution_summary, pollutant_breakdown, PollutantRow};
pub use tooltip::tooltip_text;
pub use types::Insets;
