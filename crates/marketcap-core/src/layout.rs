// File: crates/marketcap-core/src/layout.rs
// Summary: Layout pass: plot area, value ticks and per-bar geometry for grouped/stacked bars.
// Notes:
// - The single category band spans the plot; 10% of it is left empty on each side.
// - Groups (stacks, or lone unstacked series) sit side by side, `BAR_GAP` apart, equal width.
// - Stacked segments accumulate upward from the axis minimum in series order.

use skia_safe as skia;

use crate::axis::Axis;
use crate::geometry::RectF;
use crate::label::LabelProps;
use crate::legend::LegendItem;
use crate::scale::ValueScale;
use crate::series::{bar_groups, BarSeries};
use crate::types::{Insets, X_AXIS_GUTTER, Y_AXIS_GUTTER};

/// Fraction of the category band left empty on each side.
pub const CATEGORY_GAP_RATIO: f32 = 0.1;
/// Pixels between adjacent bar groups.
pub const BAR_GAP: f32 = 4.0;

#[derive(Clone, Debug, PartialEq)]
pub struct BarRect {
    pub series_index: usize,
    pub data_key: &'static str,
    pub label_name: &'static str,
    pub value: f64,
    pub fill: skia::Color,
    pub rect: RectF,
}

impl BarRect {
    pub fn label_props(&self) -> LabelProps<'static> {
        LabelProps {
            x: self.rect.left,
            y: self.rect.top,
            width: self.rect.width(),
            height: self.rect.height(),
            value: self.value,
            name: self.label_name,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub y: f32,
    pub label: String,
}

/// Everything the renderer and hit-testing need, in surface pixels.
#[derive(Clone, Debug)]
pub struct ChartLayout {
    pub width: i32,
    pub height: i32,
    pub plot: RectF,
    /// Category band; spans the plot horizontally.
    pub band: RectF,
    pub scale: ValueScale,
    pub ticks: Vec<Tick>,
    pub bars: Vec<BarRect>,
    pub legend: Vec<LegendItem>,
}

impl ChartLayout {
    pub fn bar(&self, data_key: &str) -> Option<&BarRect> {
        self.bars.iter().find(|b| b.data_key == data_key)
    }
}

/// Surface minus margins and axis gutters. Never inverted, even on tiny surfaces.
pub fn plot_rect(width: i32, height: i32, insets: &Insets) -> RectF {
    let left = (insets.left + Y_AXIS_GUTTER) as f32;
    let top = insets.top as f32;
    let right = (width as f32 - insets.right as f32).max(left);
    let bottom = (height as f32 - (insets.bottom + X_AXIS_GUTTER) as f32).max(top);
    RectF::from_ltrb(left, top, right, bottom)
}

pub fn value_scale(plot: &RectF, axis: &Axis) -> ValueScale {
    ValueScale::new_linear(plot.top, plot.bottom, axis.min, axis.max)
}

pub fn layout_ticks(axis: &Axis, scale: &ValueScale) -> Vec<Tick> {
    axis.tick_labels()
        .into_iter()
        .map(|(value, label)| Tick { value, y: scale.to_px(value), label })
        .collect()
}

/// Width of each bar group inside `band`.
pub fn group_width(band_width: f32, groups: usize) -> f32 {
    if groups == 0 {
        return 0.0;
    }
    let offset = band_width * CATEGORY_GAP_RATIO;
    let usable = band_width - 2.0 * offset - BAR_GAP * (groups as f32 - 1.0);
    (usable / groups as f32).max(0.0)
}

pub fn layout_bars(series: &[BarSeries], band: &RectF, scale: &ValueScale) -> Vec<BarRect> {
    let groups = bar_groups(series);
    let bar_w = group_width(band.width(), groups.len());
    let offset = band.width() * CATEGORY_GAP_RATIO;

    let mut bars = Vec::with_capacity(series.len());
    for (g, members) in groups.iter().enumerate() {
        let x = band.left + offset + g as f32 * (bar_w + BAR_GAP);
        let mut base = scale.vmin;
        for &i in members {
            let s = &series[i];
            let y_bottom = scale.to_px(base);
            let y_top = scale.to_px(base + s.value);
            let h = (y_bottom - y_top).max(0.0);
            bars.push(BarRect {
                series_index: i,
                data_key: s.data_key,
                label_name: s.label_name,
                value: s.value,
                fill: s.fill,
                rect: RectF::from_xywh(x, y_bottom - h, bar_w, h),
            });
            base += s.value;
        }
    }
    // Series order, so lookups and drawing line up with the legend.
    bars.sort_by_key(|b| b.series_index);
    tracing::debug!(groups = groups.len(), bar_width = bar_w, bars = bars.len(), "laid out bars");
    bars
}
