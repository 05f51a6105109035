// File: crates/marketcap-core/src/axis.rs
// Summary: Value axis with a fixed domain and currency tick labels; category axis title.

use crate::format::tick_label;
use crate::grid::linspace;

/// Default number of value ticks, endpoints included.
pub const DEFAULT_TICK_COUNT: usize = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub tick_count: usize,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, tick_count: DEFAULT_TICK_COUNT }
    }

    /// Market cap axis: 0..1500 billions.
    pub fn market_cap() -> Self {
        Self::new("Market Cap (Billions USD)", 0.0, 1500.0)
    }

    /// Evenly spaced tick values across the domain.
    pub fn ticks(&self) -> Vec<f64> {
        linspace(self.min, self.max, self.tick_count)
    }

    /// `(value, "$<value>B")` per tick.
    pub fn tick_labels(&self) -> Vec<(f64, String)> {
        self.ticks().into_iter().map(|v| (v, tick_label(v))).collect()
    }
}
