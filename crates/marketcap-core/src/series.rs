// File: crates/marketcap-core/src/series.rs
// Summary: Bar series model; one series per company, optionally grouped into a stack.

use skia_safe as skia;

use crate::dataset::{Company, MarketCapRecord};

#[derive(Clone, Debug)]
pub struct BarSeries {
    /// Key into the record; also the legend and tooltip name.
    pub data_key: &'static str,
    /// Name passed to the bar label renderer.
    pub label_name: &'static str,
    pub value: f64,
    pub fill: skia::Color,
    /// Series sharing a stack id are drawn on top of each other in one bar.
    pub stack_id: Option<&'static str>,
}

impl BarSeries {
    pub fn new(data_key: &'static str, value: f64, fill: skia::Color) -> Self {
        Self { data_key, label_name: data_key, value, fill, stack_id: None }
    }

    pub fn with_label_name(mut self, name: &'static str) -> Self {
        self.label_name = name;
        self
    }

    pub fn stacked(mut self, stack_id: &'static str) -> Self {
        self.stack_id = Some(stack_id);
        self
    }

    /// Series for `company`, reading its value out of `record`.
    pub fn for_company(record: &MarketCapRecord, company: Company) -> Self {
        let s = Self::new(company.data_key(), record.get(company), company.fill())
            .with_label_name(company.label_name());
        match company.stack_id() {
            Some(id) => s.stacked(id),
            None => s,
        }
    }
}

/// Bar groups in first-appearance order. Each unstacked series is its own group.
/// Returns, per group, the indices of its series in draw (bottom-up) order.
pub fn bar_groups(series: &[BarSeries]) -> Vec<Vec<usize>> {
    let mut groups: Vec<(Option<&str>, Vec<usize>)> = Vec::new();
    for (i, s) in series.iter().enumerate() {
        match s.stack_id {
            Some(id) => match groups.iter().position(|(g, _)| *g == Some(id)) {
                Some(pos) => groups[pos].1.push(i),
                None => groups.push((Some(id), vec![i])),
            },
            None => groups.push((None, vec![i])),
        }
    }
    groups.into_iter().map(|(_, members)| members).collect()
}
