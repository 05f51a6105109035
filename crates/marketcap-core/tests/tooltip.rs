// File: crates/marketcap-core/tests/tooltip.rs
// Purpose: Tooltip content and box placement.

use marketcap_core::tooltip::{place_box, POINTER_OFFSET};
use marketcap_core::{BarChart, RenderOptions};

#[test]
fn tooltip_lists_every_series_with_formatted_values() {
    let chart = BarChart::market_cap();
    let layout = chart.layout(&RenderOptions::default());
    let (cx, cy) = layout.plot.center();
    let tip = chart.tooltip_at(&layout, cx, cy).expect("inside plot");

    assert_eq!(tip.label, "");
    assert_eq!(tip.entries.len(), 10);
    assert_eq!(tip.entries[0].text(), "Tesla : $1.37T");
    assert_eq!(tip.entries[1].text(), "Toyota : $230B");
    assert_eq!(tip.entries[2].name, "Volkswagen");
    assert_eq!(tip.entries[2].value_text, "$120B");
    assert!(tip.entries.iter().skip(1).all(|e| e.value_text.ends_with('B')));
}

#[test]
fn no_tooltip_outside_the_plot() {
    let chart = BarChart::market_cap();
    let layout = chart.layout(&RenderOptions::default());
    assert!(chart.tooltip_at(&layout, 5.0, 5.0).is_none());
    assert!(chart.tooltip_at(&layout, layout.plot.right + 20.0, layout.plot.center().1).is_none());
}

#[test]
fn box_follows_the_pointer_and_stays_on_surface() {
    let r = place_box((100.0, 100.0), (150.0, 80.0), (848, 600));
    assert_eq!((r.left, r.top), (100.0 + POINTER_OFFSET, 100.0 + POINTER_OFFSET));

    // Near the bottom-right corner it flips to the other side.
    let r = place_box((800.0, 580.0), (150.0, 80.0), (848, 600));
    assert_eq!(r.right, 800.0 - POINTER_OFFSET);
    assert_eq!(r.bottom, 580.0 - POINTER_OFFSET);

    // Larger than the surface: pinned to the origin.
    let r = place_box((10.0, 10.0), (900.0, 700.0), (848, 600));
    assert_eq!((r.left, r.top), (0.0, 0.0));
}
