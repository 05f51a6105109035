// File: crates/marketcap-core/src/lib.rs
// Summary: Core library entry point; exports the market cap dataset, label renderer, layout and rendering API.

pub mod axis;
pub mod chart;
pub mod dataset;
pub mod error;
pub mod format;
pub mod geometry;
pub mod grid;
pub mod label;
pub mod layout;
pub mod legend;
pub mod scale;
pub mod series;
pub mod text;
pub mod theme;
pub mod tooltip;
pub mod types;

pub use axis::Axis;
pub use chart::{BarChart, RenderOptions};
pub use dataset::{Company, MarketCapRecord, AUTOMAKERS};
pub use error::ChartError;
pub use label::{render_label, LabelOverlay, LabelProps, TextLine};
pub use layout::{BarRect, ChartLayout};
pub use series::BarSeries;
pub use text::TextShaper;
pub use theme::Theme;
pub use tooltip::{Tooltip, TooltipEntry};
