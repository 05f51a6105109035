// File: crates/marketcap-core/tests/format.rs
// Purpose: Currency text for labels, ticks and tooltips.

use marketcap_core::format::{
    billions, format_number, label_value, tick_label, tooltip_value, trillions_from_billions, DISTINGUISHED_TRILLIONS,
};

#[test]
fn numbers_print_like_template_literals() {
    assert_eq!(format_number(230.0), "230");
    assert_eq!(format_number(1.5), "1.5");
    assert_eq!(format_number(-0.0), "0");
    assert_eq!(format_number(1125.0), "1125");
}

#[test]
fn billions_and_trillions() {
    assert_eq!(billions(50.0), "$50B");
    assert_eq!(billions(12.5), "$12.5B");
    assert_eq!(trillions_from_billions(1370.0), "$1.37T");
    assert_eq!(trillions_from_billions(1000.0), "$1.00T");
}

#[test]
fn label_and_tooltip_agree_for_every_company() {
    for (company, value) in marketcap_core::AUTOMAKERS.iter() {
        let label = label_value(company.label_name(), value);
        let tip = tooltip_value(company.data_key(), value);
        assert_eq!(label, tip, "{company}");
        if company.is_distinguished() {
            assert_eq!(label, DISTINGUISHED_TRILLIONS);
        } else {
            assert_eq!(label, format!("${}B", value as i64));
        }
    }
}

#[test]
fn ticks_use_billions_suffix() {
    assert_eq!(tick_label(0.0), "$0B");
    assert_eq!(tick_label(375.0), "$375B");
    assert_eq!(tick_label(1500.0), "$1500B");
}
