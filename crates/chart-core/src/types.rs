// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings, marker and font sizes).

/// Default surface width in pixels.
pub const WIDTH: i32 = 1000;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 600;

pub const TITLE_SIZE: f32 = 18.0;
pub const LABEL_SIZE: f32 = 14.0;
pub const TICK_SIZE: f32 = 12.0;
pub const MARKER_RADIUS: f32 = 4.0;

/// Screen margins around the plot area, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        // room for y tick labels + rotated axis label, title, x ticks + label
        Self::new(84, 28, 48, 64)
    }
}
