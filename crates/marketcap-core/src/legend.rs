// File: crates/marketcap-core/src/legend.rs
// Summary: Vertical legend placed in the right margin, centered on the plot.

use skia_safe as skia;

use crate::geometry::RectF;
use crate::series::BarSeries;

pub const SWATCH_SIZE: f32 = 14.0;
pub const ITEM_HEIGHT: f32 = 20.0;
/// Space between the plot's right edge and the swatches.
pub const LEGEND_GAP: f32 = 12.0;
pub const TEXT_GAP: f32 = 6.0;
pub const LEGEND_FONT_SIZE: f32 = 12.0;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendItem {
    pub label: &'static str,
    pub color: skia::Color,
    pub swatch: RectF,
    /// Left edge of the label text; the label is vertically centered on `text_y`.
    pub text_x: f32,
    pub text_y: f32,
}

pub fn layout_legend(series: &[BarSeries], plot: &RectF) -> Vec<LegendItem> {
    let x = plot.right + LEGEND_GAP;
    let total = ITEM_HEIGHT * series.len() as f32;
    let top = plot.center().1 - total * 0.5;
    let pad = (ITEM_HEIGHT - SWATCH_SIZE) * 0.5;

    series
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let row = top + i as f32 * ITEM_HEIGHT;
            LegendItem {
                label: s.data_key,
                color: s.fill,
                swatch: RectF::from_xywh(x, row + pad, SWATCH_SIZE, SWATCH_SIZE),
                text_x: x + SWATCH_SIZE + TEXT_GAP,
                text_y: row + ITEM_HEIGHT * 0.5,
            }
        })
        .collect()
}
