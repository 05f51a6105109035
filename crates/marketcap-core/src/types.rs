// File: crates/marketcap-core/src/types.rs
// Summary: Shared types and constants (sizes, margins, gutters).

/// Default surface width in pixels; hosts pass their container width instead.
pub const WIDTH: i32 = 848;
/// Fixed chart height in pixels.
pub const HEIGHT: i32 = 600;

/// Horizontal room reserved left of the plot for value ticks and the rotated axis title.
pub const Y_AXIS_GUTTER: u32 = 60;
/// Vertical room reserved below the plot for the category tick.
pub const X_AXIS_GUTTER: u32 = 30;

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
}

impl Default for Insets {
    /// Right margin leaves room for the vertical legend.
    fn default() -> Self {
        Self::new(40, 120, 20, 20)
    }
}
