// File: crates/marketcap-dioxus/src/lib.rs
// Summary: Dioxus host view for the market cap chart (desktop only).
// Notes:
// - UI deps sit behind the `desktop` feature, so the workspace builds without fetching Dioxus.
// - The component renders the chart to PNG and shows it as a data-URL <img>; pointer moves
//   re-render with the tooltip, container resizes re-run layout at the new width.

use std::rc::Rc;

use marketcap_core::{BarChart, RenderOptions, Theme};

/// The chart a mounted view renders from; built once and shared by the image and the captions.
pub fn shared_chart() -> Rc<BarChart> {
    Rc::new(BarChart::market_cap())
}

/// Render options for a container of `width_px` x `height_px` with an optional pointer.
pub fn options_for(width_px: i32, height_px: i32, theme: Theme, pointer: Option<(f32, f32)>) -> RenderOptions {
    RenderOptions {
        width: width_px.max(1),
        height: height_px.max(1),
        theme,
        pointer,
        ..RenderOptions::default()
    }
}

/// Title and footnote shown around the chart image.
pub fn captions(chart: &BarChart) -> (&str, &str) {
    (&chart.title, &chart.note)
}

#[cfg(feature = "desktop")]
pub mod ui {
    use super::*;
    use base64::Engine as _;
    use dioxus::prelude::*;

    /// Chart card: title, chart image sized to its container, footnote.
    #[component]
    pub fn MarketCapChart(
        #[props(default = marketcap_core::types::WIDTH)] width_px: i32,
        #[props(default = marketcap_core::types::HEIGHT)] height_px: i32,
        #[props(default = Theme::light())] theme: Theme,
    ) -> Element {
        let chart = use_hook(shared_chart);
        let mut width = use_signal(|| width_px);
        let mut pointer = use_signal(|| Option::<(f32, f32)>::None);

        let render_chart = Rc::clone(&chart);
        let img_src = use_memo(move || {
            let opts = options_for(width(), height_px, theme, pointer());
            match render_chart.render_to_png_bytes(&opts) {
                Ok(bytes) => {
                    let b64 = base64::engine::general_purpose::STANDARD.encode(bytes);
                    Some(format!("data:image/png;base64,{b64}"))
                }
                Err(e) => {
                    tracing::warn!(error = %e, "chart render failed");
                    None
                }
            }
        });

        let (title, note) = captions(&chart);

        rsx! {
            div { style: "width:100%; max-width:56rem; margin:0 auto; padding:1.5rem; background:#fff; border-radius:0.5rem; box-shadow:0 1px 3px rgba(0,0,0,0.1);",
                h2 { style: "font-size:1.5rem; font-weight:bold; text-align:center; margin-bottom:1.5rem;", "{title}" }
                div {
                    style: "width:100%; height:{height_px}px; position:relative;",
                    onresize: move |evt: Event<ResizeData>| {
                        if let Ok(size) = evt.data().get_content_box_size() {
                            let w = size.width.round() as i32;
                            if w > 0 && w != *width.peek() {
                                tracing::debug!(width = w, "container resized");
                                width.set(w);
                            }
                        }
                    },
                    onmousemove: move |evt: MouseEvent| {
                        let p = evt.element_coordinates();
                        pointer.set(Some((p.x as f32, p.y as f32)));
                    },
                    onmouseleave: move |_| pointer.set(None),
                    if let Some(src) = img_src() {
                        img { style: "display:block; width:{width}px; height:{height_px}px;", src }
                    }
                }
                p { style: "font-size:0.875rem; color:#6b7280; text-align:center; margin-top:1rem;", "{note}" }
            }
        }
    }

    /// Tiny demo launcher so consumers can quickly mount the component.
    pub fn run_demo_ui() -> Result<(), String> {
        #[component]
        fn App() -> Element {
            rsx! { super::ui::MarketCapChart {} }
        }

        // Dioxus 0.6 launch with explicit providers vec
        let cfg = dioxus_desktop::Config::new()
            .with_window(dioxus_desktop::WindowBuilder::new().with_title("Automotive Market Capitalization"));
        let providers: Vec<Box<dyn Fn() -> Box<dyn std::any::Any> + Send + Sync>> = Vec::new();
        let globals: Vec<Box<dyn std::any::Any>> = vec![Box::new(cfg)];
        dioxus_desktop::launch::launch(App, providers, globals);
    }
}

/// Fallback when the `desktop` feature is not enabled.
#[cfg(not(feature = "desktop"))]
pub fn run_demo_ui() -> Result<(), &'static str> {
    Err("marketcap-dioxus built without `desktop` feature; enable features to run UI demo")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_follow_the_container() {
        let opts = options_for(1200, 600, Theme::dark(), Some((10.0, 20.0)));
        assert_eq!((opts.width, opts.height), (1200, 600));
        assert_eq!(opts.theme.name, "dark");
        assert_eq!(opts.pointer, Some((10.0, 20.0)));
        assert!(opts.draw_labels && opts.draw_legend);

        // A collapsed container still yields a drawable surface.
        assert!(options_for(0, 0, Theme::light(), None).validate().is_ok());
    }

    #[test]
    fn captions_come_from_the_chart() {
        let chart = shared_chart();
        let (title, note) = captions(&chart);
        assert_eq!(title, "Automotive Market Capitalization Comparison");
        assert!(note.starts_with("Note: Data is approximate"));
    }

    #[test]
    fn image_and_captions_share_one_chart() {
        let chart = shared_chart();
        let for_image = Rc::clone(&chart);
        assert!(Rc::ptr_eq(&chart, &for_image));
        assert_eq!(Rc::strong_count(&chart), 2);

        let (title, _) = captions(&chart);
        assert_eq!(title, for_image.title);
        let opts = options_for(848, 600, Theme::light(), None);
        assert_eq!(for_image.layout(&opts).bars.len(), chart.series.len());
    }
}
