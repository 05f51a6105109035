// File: crates/marketcap-core/src/format.rs
// Summary: Currency text for bar labels, axis ticks and tooltips.

use crate::dataset::Company;

/// Fixed label text for the distinguished entry. Not derived from the billions value.
pub const DISTINGUISHED_TRILLIONS: &str = "$1.37T";

/// Print a number the way a JS template literal would: `230`, `1.5`, `0`.
pub fn format_number(v: f64) -> String {
    if v == 0.0 {
        // also folds -0.0
        return "0".to_string();
    }
    // f64 Display already omits a trailing `.0` and uses the shortest round-trip digits.
    format!("{v}")
}

/// `$<value>B`
pub fn billions(value: f64) -> String {
    format!("${}B", format_number(value))
}

/// `$<value/1000 with two decimals>T`
pub fn trillions_from_billions(value: f64) -> String {
    format!("${:.2}T", value / 1000.0)
}

/// Value text inside a bar label. `name` is the label name of the bar.
pub fn label_value(name: &str, value: f64) -> String {
    if name == Company::DISTINGUISHED.label_name() {
        DISTINGUISHED_TRILLIONS.to_string()
    } else {
        billions(value)
    }
}

/// Value text in the tooltip. `name` is the series data key.
pub fn tooltip_value(name: &str, value: f64) -> String {
    if name == Company::DISTINGUISHED.data_key() {
        trillions_from_billions(value)
    } else {
        billions(value)
    }
}

/// Value-axis tick text.
pub fn tick_label(value: f64) -> String {
    billions(value)
}
