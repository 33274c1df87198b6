// File: crates/aqi-chart/src/types.rs
// Summary: Shared types and constants (sizes, paddings).

/// Default surface width in pixels.
pub const WIDTH: i32 = 800;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 320;
/// Default uniform plot padding in pixels.
pub const PADDING: u32 = 50;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Same margin on every side.
    pub const fn uniform(p: u32) -> Self {
        Self::new(p, p, p, p)
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::uniform(PADDING)
    }
}

/// Plot rectangle inside the insets, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotArea {
    pub fn new(width: i32, height: i32, insets: Insets) -> Self {
        Self {
            left: insets.left as f32,
            top: insets.top as f32,
            right: width as f32 - insets.right as f32,
            bottom: height as f32 - insets.bottom as f32,
        }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
}
