// File: crates/marketcap-core/src/tooltip.rs
// Summary: Tooltip content for the hovered category and placement of its box.

use skia_safe as skia;

use crate::format::tooltip_value;
use crate::geometry::{clamp, RectF};
use crate::layout::ChartLayout;
use crate::series::BarSeries;

/// Distance between the pointer and the tooltip box.
pub const POINTER_OFFSET: f32 = 10.0;
pub const PADDING: f32 = 10.0;
pub const LINE_HEIGHT: f32 = 18.0;
pub const FONT_SIZE: f32 = 12.0;

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipEntry {
    pub name: &'static str,
    pub value_text: String,
    pub color: skia::Color,
}

impl TooltipEntry {
    /// `Tesla : $1.37T`
    pub fn text(&self) -> String {
        format!("{} : {}", self.name, self.value_text)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    /// Header line; the market cap chart leaves it empty.
    pub label: String,
    pub entries: Vec<TooltipEntry>,
    pub pointer: (f32, f32),
}

pub fn entries(series: &[BarSeries]) -> Vec<TooltipEntry> {
    series
        .iter()
        .map(|s| TooltipEntry { name: s.data_key, value_text: tooltip_value(s.data_key, s.value), color: s.fill })
        .collect()
}

/// Tooltip for a pointer at (`px`, `py`); `None` outside the plot.
pub fn tooltip_at(layout: &ChartLayout, series: &[BarSeries], px: f32, py: f32) -> Option<Tooltip> {
    if !layout.plot.contains(px, py) {
        return None;
    }
    Some(Tooltip { label: String::new(), entries: entries(series), pointer: (px, py) })
}

/// Box of `size` down-right of the pointer, flipped left/up when it would leave the surface.
pub fn place_box(pointer: (f32, f32), size: (f32, f32), surface: (i32, i32)) -> RectF {
    let (px, py) = pointer;
    let (w, h) = size;
    let (sw, sh) = (surface.0 as f32, surface.1 as f32);

    let mut x = px + POINTER_OFFSET;
    if x + w > sw {
        x = px - POINTER_OFFSET - w;
    }
    let mut y = py + POINTER_OFFSET;
    if y + h > sh {
        y = py - POINTER_OFFSET - h;
    }
    let x = clamp(x, 0.0, (sw - w).max(0.0));
    let y = clamp(y, 0.0, (sh - h).max(0.0));
    RectF::from_xywh(x, y, w, h)
}

/// Box height for `tooltip`: header row (even when empty) plus one row per entry.
pub fn box_height(tooltip: &Tooltip) -> f32 {
    PADDING * 2.0 + LINE_HEIGHT * (tooltip.entries.len() as f32 + 1.0)
}
