// File: crates/marketcap-dioxus/src/bin/desktop_demo.rs
// Purpose: Launcher for the Dioxus desktop MarketCapChart demo.

#[cfg(feature = "desktop")]
fn main() {
    if let Err(e) = marketcap_dioxus::ui::run_demo_ui() {
        eprintln!("marketcap-dioxus demo error: {e}");
    }
}

#[cfg(not(feature = "desktop"))]
fn main() {
    if let Err(e) = marketcap_dioxus::run_demo_ui() {
        eprintln!("{e}");
    }
}
