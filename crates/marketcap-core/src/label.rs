// File: crates/marketcap-core/src/label.rs
// Summary: Adaptive bar label renderer; picks one or two text lines and a font size from bar height.
// Notes:
// - Pure data out; `chart.rs` turns a `LabelOverlay` into Skia draw calls.
// - Lines are centered on the bar; the two-line form straddles the center by `LINE_OFFSET`.

use crate::format::label_value;

/// Bars shorter than this get the stacked two-line label.
pub const COMPACT_BELOW: f32 = 40.0;
/// Bars shorter than this (but not compact) get the medium font.
pub const MEDIUM_BELOW: f32 = 60.0;

pub const COMPACT_FONT_SIZE: f32 = 8.0;
pub const MEDIUM_FONT_SIZE: f32 = 10.0;
pub const LARGE_FONT_SIZE: f32 = 12.0;

/// Vertical distance of each stacked line from the bar center.
pub const LINE_OFFSET: f32 = 5.0;

/// Which edge of the text box sits on the line's `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Baseline {
    Top,
    Middle,
    Bottom,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextLine {
    pub text: String,
    /// Horizontal center of the text.
    pub x: f32,
    pub y: f32,
    pub baseline: Baseline,
    pub font_size: f32,
    pub bold: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LabelOverlay {
    pub lines: Vec<TextLine>,
}

/// Placement and payload the layout pass hands to the label renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelProps<'a> {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Market cap in billions.
    pub value: f64,
    /// Label name of the bar's company.
    pub name: &'a str,
}

pub fn font_size_for_height(height: f32) -> f32 {
    if height < COMPACT_BELOW {
        COMPACT_FONT_SIZE
    } else if height < MEDIUM_BELOW {
        MEDIUM_FONT_SIZE
    } else {
        LARGE_FONT_SIZE
    }
}

pub fn render_label(props: &LabelProps<'_>) -> LabelOverlay {
    let cx = props.x + props.width / 2.0;
    let cy = props.y + props.height / 2.0;
    let font_size = font_size_for_height(props.height);
    let value = label_value(props.name, props.value);

    let line = |text: String, y: f32, baseline: Baseline| TextLine {
        text,
        x: cx,
        y,
        baseline,
        font_size,
        bold: true,
    };

    let lines = if props.height < COMPACT_BELOW {
        vec![
            line(props.name.to_string(), cy - LINE_OFFSET, Baseline::Bottom),
            line(value, cy + LINE_OFFSET, Baseline::Top),
        ]
    } else {
        vec![line(format!("{} ({})", props.name, value), cy, Baseline::Middle)]
    };

    LabelOverlay { lines }
}
