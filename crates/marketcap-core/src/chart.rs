// File: crates/marketcap-core/src/chart.rs
// Summary: Bar chart assembly and headless PNG/RGBA rendering pipeline using Skia CPU raster surfaces.

use anyhow::{Context, Result};
use skia_safe as skia;
use tracing::debug;

use crate::axis::Axis;
use crate::dataset::{Company, MarketCapRecord, AUTOMAKERS};
use crate::error::ChartError;
use crate::grid::GRID_DASH;
use crate::label::{render_label, Baseline};
use crate::layout::{layout_bars, layout_ticks, plot_rect, value_scale, ChartLayout};
use crate::legend::{layout_legend, LEGEND_FONT_SIZE};
use crate::series::BarSeries;
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;
use crate::tooltip::{self, Tooltip};
use crate::types::{Insets, HEIGHT, WIDTH};

const TICK_FONT_SIZE: f32 = 12.0;
const AXIS_TITLE_FONT_SIZE: f32 = 12.0;
const TICK_LENGTH: f32 = 6.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Container width; the layout follows it.
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Draw all text (ticks, axis titles, bar labels, legend names, tooltip lines).
    pub draw_labels: bool,
    pub draw_legend: bool,
    /// Pointer position in surface pixels; shows the tooltip when over the plot.
    pub pointer: Option<(f32, f32)>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
            draw_legend: true,
            pointer: None,
        }
    }
}

impl RenderOptions {
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ChartError::InvalidSize { width: self.width, height: self.height });
        }
        Ok(())
    }
}

pub struct BarChart {
    pub record: MarketCapRecord,
    pub series: Vec<BarSeries>,
    pub y_axis: Axis,
    pub title: String,
    pub note: String,
}

impl Default for BarChart {
    fn default() -> Self { Self::market_cap() }
}

impl BarChart {
    /// Empty chart over `record`; series are added by the caller.
    pub fn new(record: MarketCapRecord) -> Self {
        Self {
            record,
            series: Vec::new(),
            y_axis: Axis::market_cap(),
            title: String::new(),
            note: String::new(),
        }
    }

    /// The automaker comparison: Tesla on its own, everyone else stacked next to it.
    pub fn market_cap() -> Self {
        let mut chart = Self::new(AUTOMAKERS);
        for company in Company::ALL {
            chart.add_series(BarSeries::for_company(&AUTOMAKERS, company));
        }
        chart.title = "Automotive Market Capitalization Comparison".to_string();
        chart.note = "Note: Data is approximate as of early 2024. Values are subject to market fluctuations.".to_string();
        chart
    }

    pub fn add_series(&mut self, series: BarSeries) {
        self.series.push(series);
    }

    pub fn category(&self) -> &'static str {
        self.record.category
    }

    /// Run the layout pass for a surface described by `opts`.
    pub fn layout(&self, opts: &RenderOptions) -> ChartLayout {
        let plot = plot_rect(opts.width, opts.height, &opts.insets);
        let scale = value_scale(&plot, &self.y_axis);
        let band = plot;
        let ticks = layout_ticks(&self.y_axis, &scale);
        let bars = layout_bars(&self.series, &band, &scale);
        let legend = layout_legend(&self.series, &plot);
        debug!(width = opts.width, height = opts.height, plot_w = plot.width(), plot_h = plot.height(), "chart layout");
        ChartLayout { width: opts.width, height: opts.height, plot, band, scale, ticks, bars, legend }
    }

    pub fn tooltip_at(&self, layout: &ChartLayout, px: f32, py: f32) -> Option<Tooltip> {
        tooltip::tooltip_at(layout, &self.series, px, py)
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Unpremultiplied RGBA8 pixels as `(pixels, width, height, row_bytes)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_surface(opts)?;
        let (w, h) = (opts.width, opts.height);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None::<skia::ColorSpace>);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            anyhow::bail!("reading back {}x{} pixels failed", w, h);
        }
        Ok((pixels, w as u32, h as u32, row_bytes))
    }

    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        opts.validate()?;
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(ChartError::Surface { width: opts.width, height: opts.height })?;
        let layout = self.layout(opts);
        let shaper = opts.draw_labels.then(TextShaper::new);
        self.draw(surface.canvas(), opts, &layout, shaper.as_ref());
        debug!(bars = layout.bars.len(), pointer = ?opts.pointer, "rendered chart");
        Ok(surface)
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions, layout: &ChartLayout, shaper: Option<&TextShaper>) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        draw_grid(canvas, layout, theme);
        if opts.pointer.is_some_and(|(x, y)| layout.plot.contains(x, y)) {
            draw_cursor(canvas, layout, theme);
        }
        draw_bars(canvas, layout);
        draw_axes(canvas, layout, theme, shaper, &self.y_axis, self.category(), opts.insets.left as f32);

        if let Some(shaper) = shaper {
            for bar in &layout.bars {
                let overlay = render_label(&bar.label_props());
                for line in &overlay.lines {
                    shaper.draw_line(canvas, line, theme.bar_label);
                }
            }
        }

        if opts.draw_legend {
            draw_legend(canvas, layout, theme, shaper);
        }

        if let Some((px, py)) = opts.pointer {
            if let Some(tip) = self.tooltip_at(layout, px, py) {
                draw_tooltip(canvas, layout, theme, shaper, &tip);
            }
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, layout: &ChartLayout, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.0);
    paint.set_path_effect(skia::PathEffect::dash(&GRID_DASH, 0.0));

    let p = &layout.plot;
    // horizontals at ticks
    for t in &layout.ticks {
        canvas.draw_line((p.left, t.y), (p.right, t.y), &paint);
    }
    // verticals at plot edges and the category center
    let cx = layout.band.center().0;
    for x in [p.left, cx, p.right] {
        canvas.draw_line((x, p.top), (x, p.bottom), &paint);
    }
}

fn draw_cursor(canvas: &skia::Canvas, layout: &ChartLayout, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.cursor);
    paint.set_style(skia::paint::Style::Fill);
    canvas.draw_rect(layout.band.to_skia(), &paint);
}

fn draw_bars(canvas: &skia::Canvas, layout: &ChartLayout) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    for bar in &layout.bars {
        paint.set_color(bar.fill);
        canvas.draw_rect(bar.rect.to_skia(), &paint);
    }
}

fn draw_axes(
    canvas: &skia::Canvas,
    layout: &ChartLayout,
    theme: &Theme,
    shaper: Option<&TextShaper>,
    y_axis: &Axis,
    category: &str,
    margin_left: f32,
) {
    let p = &layout.plot;
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.0);

    // X and Y axis lines
    canvas.draw_line((p.left, p.bottom), (p.right, p.bottom), &axis_paint);
    canvas.draw_line((p.left, p.top), (p.left, p.bottom), &axis_paint);

    // Tick marks
    axis_paint.set_color(theme.tick);
    for t in &layout.ticks {
        canvas.draw_line((p.left - TICK_LENGTH, t.y), (p.left, t.y), &axis_paint);
    }
    let cx = layout.band.center().0;
    canvas.draw_line((cx, p.bottom), (cx, p.bottom + TICK_LENGTH), &axis_paint);

    let Some(shaper) = shaper else { return };
    for t in &layout.ticks {
        shaper.draw(canvas, &t.label, p.left - TICK_LENGTH - 2.0, t.y, Anchor::End, Baseline::Middle, TICK_FONT_SIZE, theme.tick, false);
    }
    shaper.draw(canvas, category, cx, p.bottom + TICK_LENGTH + 2.0, Anchor::Middle, Baseline::Top, TICK_FONT_SIZE, theme.tick, false);

    // Axis title sits inside the left margin, rotated
    let (_, cy) = p.center();
    shaper.draw_vertical(canvas, &y_axis.label, (margin_left - AXIS_TITLE_FONT_SIZE).max(AXIS_TITLE_FONT_SIZE), cy, AXIS_TITLE_FONT_SIZE, theme.axis_label);
}

fn draw_legend(canvas: &skia::Canvas, layout: &ChartLayout, theme: &Theme, shaper: Option<&TextShaper>) {
    let mut swatch = skia::Paint::default();
    swatch.set_anti_alias(true);
    swatch.set_style(skia::paint::Style::Fill);
    for item in &layout.legend {
        swatch.set_color(item.color);
        canvas.draw_rect(item.swatch.to_skia(), &swatch);
        if let Some(shaper) = shaper {
            shaper.draw(canvas, item.label, item.text_x, item.text_y, Anchor::Start, Baseline::Middle, LEGEND_FONT_SIZE, theme.legend_text, false);
        }
    }
}

fn draw_tooltip(canvas: &skia::Canvas, layout: &ChartLayout, theme: &Theme, shaper: Option<&TextShaper>, tip: &Tooltip) {
    let lines: Vec<String> = tip.entries.iter().map(|e| e.text()).collect();
    let text_w = match shaper {
        Some(s) => lines
            .iter()
            .map(|l| s.measure_width(l, tooltip::FONT_SIZE, false))
            .fold(0.0f32, f32::max),
        // Rough width when text is disabled so the box still has a stable size.
        None => lines.iter().map(|l| l.len()).max().unwrap_or(0) as f32 * tooltip::FONT_SIZE * 0.6,
    };
    let size = (text_w + tooltip::PADDING * 2.0, tooltip::box_height(tip));
    let rect = tooltip::place_box(tip.pointer, size, (layout.width, layout.height));

    let mut bg = skia::Paint::default();
    bg.set_color(theme.tooltip_bg);
    bg.set_style(skia::paint::Style::Fill);
    canvas.draw_rect(rect.to_skia(), &bg);

    let mut border = skia::Paint::default();
    border.set_color(theme.tooltip_border);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(1.0);
    canvas.draw_rect(rect.to_skia(), &border);

    let Some(shaper) = shaper else { return };
    let x = rect.left + tooltip::PADDING;
    let mut y = rect.top + tooltip::PADDING + tooltip::LINE_HEIGHT * 0.5;
    shaper.draw(canvas, &tip.label, x, y, Anchor::Start, Baseline::Middle, tooltip::FONT_SIZE, theme.tooltip_text, false);
    for (entry, line) in tip.entries.iter().zip(&lines) {
        y += tooltip::LINE_HEIGHT;
        shaper.draw(canvas, line, x, y, Anchor::Start, Baseline::Middle, tooltip::FONT_SIZE, entry.color, false);
    }
}
