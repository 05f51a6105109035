// File: crates/marketcap-core/src/theme.rs
// Summary: Light/Dark theming for chart chrome (grid, axes, legend, tooltip). Bar fills come from the dataset.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub bar_label: skia::Color,
    pub legend_text: skia::Color,
    pub cursor: skia::Color,
    pub tooltip_bg: skia::Color,
    pub tooltip_border: skia::Color,
    pub tooltip_text: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            axis_line: skia::Color::from_argb(255, 0x66, 0x66, 0x66),
            axis_label: skia::Color::from_argb(255, 0x33, 0x33, 0x33),
            tick: skia::Color::from_argb(255, 0x66, 0x66, 0x66),
            bar_label: skia::Color::WHITE,
            legend_text: skia::Color::from_argb(255, 0x33, 0x33, 0x33),
            cursor: skia::Color::from_argb(80, 0xcc, 0xcc, 0xcc),
            tooltip_bg: skia::Color::from_argb(255, 255, 255, 255),
            tooltip_border: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            tooltip_text: skia::Color::from_argb(255, 0x33, 0x33, 0x33),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            bar_label: skia::Color::WHITE,
            legend_text: skia::Color::from_argb(255, 235, 235, 245),
            cursor: skia::Color::from_argb(60, 120, 120, 130),
            tooltip_bg: skia::Color::from_argb(240, 32, 32, 36),
            tooltip_border: skia::Color::from_argb(255, 80, 80, 90),
            tooltip_text: skia::Color::from_argb(255, 235, 235, 245),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    tracing::warn!(theme = name, "unknown theme; using light");
    Theme::light()
}
