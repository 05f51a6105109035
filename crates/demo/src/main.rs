// File: crates/demo/src/main.rs
// Summary: Demo renders the automotive market cap chart to a PNG; optional pointer shows the tooltip.

use anyhow::{Context, Result};
use clap::Parser;
use marketcap_core::{theme, BarChart, RenderOptions};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "marketcap-demo", about = "Render the automotive market cap comparison to PNG")]
struct Cli {
    /// Output PNG path
    #[arg(short, long, default_value = "target/out/market_cap.png")]
    out: PathBuf,

    /// Container width in pixels
    #[arg(long, default_value_t = marketcap_core::types::WIDTH)]
    width: i32,

    /// Chart height in pixels
    #[arg(long, default_value_t = marketcap_core::types::HEIGHT)]
    height: i32,

    /// Theme preset (light, dark)
    #[arg(long, default_value = "light")]
    theme: String,

    /// Pointer position as X,Y; renders the tooltip for that spot
    #[arg(long, value_parser = parse_point)]
    pointer: Option<(f32, f32)>,

    /// Skip all text (useful for pixel comparisons)
    #[arg(long)]
    no_labels: bool,

    /// Skip the legend
    #[arg(long)]
    no_legend: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let opts = RenderOptions {
        width: cli.width,
        height: cli.height,
        theme: theme::find(&cli.theme),
        draw_labels: !cli.no_labels,
        draw_legend: !cli.no_legend,
        pointer: cli.pointer,
        ..RenderOptions::default()
    };
    opts.validate().context("invalid render options")?;

    let chart = BarChart::market_cap();
    info!("{}", chart.title);

    let layout = chart.layout(&opts);
    for bar in &layout.bars {
        let label = marketcap_core::render_label(&bar.label_props());
        let text = label.lines.iter().map(|l| l.text.as_str()).collect::<Vec<_>>().join(" / ");
        info!(series = bar.data_key, height = bar.rect.height(), font_size = label.lines[0].font_size, "{text}");
    }

    if let Some((px, py)) = opts.pointer {
        match chart.tooltip_at(&layout, px, py) {
            Some(tip) => {
                for entry in &tip.entries {
                    info!("tooltip {}", entry.text());
                }
            }
            None => info!(x = px, y = py, "pointer outside plot; no tooltip"),
        }
    }

    chart
        .render_to_png(&opts, &cli.out)
        .with_context(|| format!("failed to render '{}'", cli.out.display()))?;
    info!("Wrote {}", cli.out.display());
    info!("{}", chart.note);

    Ok(())
}

/// Parse `X,Y` into a pixel position.
fn parse_point(s: &str) -> Result<(f32, f32), String> {
    let (x, y) = s.split_once(',').ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
    let x = x.trim().parse::<f32>().map_err(|e| format!("bad X '{x}': {e}"))?;
    let y = y.trim().parse::<f32>().map_err(|e| format!("bad Y '{y}': {e}"))?;
    Ok((x, y))
}
