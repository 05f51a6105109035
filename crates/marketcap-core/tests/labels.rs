// File: crates/marketcap-core/tests/labels.rs
// Purpose: Adaptive bar label layout and text across the height thresholds.

use marketcap_core::label::{
    font_size_for_height, Baseline, COMPACT_FONT_SIZE, LARGE_FONT_SIZE, LINE_OFFSET, MEDIUM_FONT_SIZE,
};
use marketcap_core::{render_label, LabelProps};

fn props(name: &str, value: f64, height: f32) -> LabelProps<'_> {
    LabelProps { x: 100.0, y: 200.0, width: 80.0, height, value, name }
}

#[test]
fn medium_bar_gets_single_line_at_size_10() {
    let overlay = render_label(&props("Toyota", 230.0, 50.0));
    assert_eq!(overlay.lines.len(), 1);
    let line = &overlay.lines[0];
    assert_eq!(line.text, "Toyota ($230B)");
    assert_eq!(line.font_size, 10.0);
    assert_eq!(line.baseline, Baseline::Middle);
    assert!(line.bold);
}

#[test]
fn tall_distinguished_bar_uses_trillions() {
    let overlay = render_label(&props("Tesla", 1370.0, 500.0));
    assert_eq!(overlay.lines.len(), 1);
    assert_eq!(overlay.lines[0].text, "Tesla ($1.37T)");
    assert_eq!(overlay.lines[0].font_size, 12.0);
}

#[test]
fn short_bar_stacks_name_over_value() {
    let overlay = render_label(&props("Ford", 50.0, 25.0));
    let texts: Vec<&str> = overlay.lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, ["Ford", "$50B"]);
    assert!(overlay.lines.iter().all(|l| l.font_size == 8.0));
    assert_eq!(overlay.lines[0].baseline, Baseline::Bottom);
    assert_eq!(overlay.lines[1].baseline, Baseline::Top);
}

#[test]
fn lines_are_centered_on_the_bar() {
    let overlay = render_label(&props("Ford", 50.0, 20.0));
    let (cx, cy) = (100.0 + 40.0, 200.0 + 10.0);
    assert_eq!(overlay.lines[0].x, cx);
    assert_eq!(overlay.lines[1].x, cx);
    assert_eq!(overlay.lines[0].y, cy - LINE_OFFSET);
    assert_eq!(overlay.lines[1].y, cy + LINE_OFFSET);

    let single = render_label(&props("Toyota", 230.0, 90.0));
    assert_eq!(single.lines[0].x, cx);
    assert_eq!(single.lines[0].y, 200.0 + 45.0);
}

#[test]
fn thresholds_are_exclusive_below() {
    assert_eq!(font_size_for_height(0.0), COMPACT_FONT_SIZE);
    assert_eq!(font_size_for_height(39.99), COMPACT_FONT_SIZE);
    assert_eq!(font_size_for_height(40.0), MEDIUM_FONT_SIZE);
    assert_eq!(font_size_for_height(59.99), MEDIUM_FONT_SIZE);
    assert_eq!(font_size_for_height(60.0), LARGE_FONT_SIZE);

    assert_eq!(render_label(&props("GM", 50.0, 39.9)).lines.len(), 2);
    assert_eq!(render_label(&props("GM", 50.0, 40.0)).lines.len(), 1);
    assert_eq!(render_label(&props("GM", 50.0, 60.0)).lines[0].font_size, 12.0);
}

#[test]
fn distinguished_entry_never_shows_billions() {
    for height in [0.0, 10.0, 39.0, 40.0, 55.0, 60.0, 300.0] {
        let overlay = render_label(&props("Tesla", 1370.0, height));
        let joined: String = overlay.lines.iter().map(|l| l.text.as_str()).collect::<Vec<_>>().join("\n");
        assert!(joined.contains("$1.37T"), "height {height}: {joined}");
        assert!(!joined.contains('B'), "height {height}: {joined}");
    }
}

#[test]
fn trillions_text_is_fixed_not_recomputed() {
    // The label keeps its constant even if the bar carries a different value.
    let overlay = render_label(&props("Tesla", 2000.0, 100.0));
    assert_eq!(overlay.lines[0].text, "Tesla ($1.37T)");
}

#[test]
fn compact_layout_wins_regardless_of_value() {
    let overlay = render_label(&props("Toyota", 230.0, 12.0));
    assert_eq!(overlay.lines.len(), 2);
    assert_eq!(overlay.lines[1].text, "$230B");
}

#[test]
fn label_name_is_used_verbatim() {
    let overlay = render_label(&props("VW", 120.0, 45.0));
    assert_eq!(overlay.lines[0].text, "VW ($120B)");
}
