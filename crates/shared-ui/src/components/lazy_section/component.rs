use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::prelude::*;

use super::reveal::{disconnect_script, observe_script};
use super::{LazyAnimation, RevealState};

static NEXT_SECTION_ID: AtomicUsize = AtomicUsize::new(0);

/// Defers rendering its children until the section scrolls near the viewport.
///
/// Until then a fixed-height placeholder holds the space so the page does not
/// shift. The reveal happens once: after it, the observer is disconnected and
/// the children stay mounted even if the section scrolls away again.
///
/// If the host cannot observe intersections the children are rendered eagerly.
///
/// `threshold` is the visible fraction (`0.0..=1.0`) that triggers the reveal,
/// `root_margin` grows the viewport in CSS margin syntax, and `delay` is the
/// number of seconds before the entrance animation starts.
#[component]
pub fn LazySection(
    #[props(default = 0.1)] threshold: f64,
    #[props(default = "50px".to_string(), into)] root_margin: String,
    #[props(default)] animation: LazyAnimation,
    #[props(default)] delay: f64,
    #[props(default = 200)] placeholder_height: u32,
    class: Option<String>,
    children: Element,
) -> Element {
    let id = use_hook(|| {
        format!(
            "lazy-section-{}",
            NEXT_SECTION_ID.fetch_add(1, Ordering::Relaxed)
        )
    });
    let mut reveal = use_signal(RevealState::default);
    let threshold = threshold.clamp(0.0, 1.0);

    {
        let id = id.clone();
        let root_margin = root_margin.clone();
        use_effect(move || {
            if reveal.peek().is_revealed() {
                return;
            }
            let script = observe_script(&id, threshold, &root_margin);
            let id = id.clone();
            spawn(async move {
                let mut observer = document::eval(&script);
                loop {
                    match observer.recv::<f64>().await {
                        Ok(ratio) => {
                            if reveal.write().observe(ratio, threshold) {
                                tracing::debug!(section = %id, ratio, "lazy section revealed");
                                break;
                            }
                        }
                        Err(e) => {
                            tracing::warn!(section = %id, error = ?e, "intersection observation unavailable, rendering eagerly");
                            reveal.write().force();
                            break;
                        }
                    }
                }
                document::eval(&disconnect_script(&id));
            });
        });
    }

    {
        let id = id.clone();
        use_drop(move || {
            document::eval(&disconnect_script(&id));
        });
    }

    let class = match class {
        Some(extra) => format!("lazy-section {extra}"),
        None => "lazy-section".to_string(),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            id: "{id}",
            class: "{class}",
            "data-state": if reveal().is_revealed() { "revealed" } else { "waiting" },
            if reveal().is_revealed() {
                RevealedContent { animation, delay, {children} }
            } else {
                div {
                    class: "lazy-section-placeholder",
                    style: "min-height: {placeholder_height}px;",
                    "aria-busy": "true",
                }
            }
        }
    }
}

/// Children of a revealed section, wrapped in the preset's entrance animation.
///
/// The `None` preset renders the children bare.
#[component]
pub fn RevealedContent(
    #[props(default)] animation: LazyAnimation,
    #[props(default)] delay: f64,
    children: Element,
) -> Element {
    match animation.container_style(delay) {
        Some(style) => rsx! {
            div {
                class: "lazy-section-animated",
                "data-animation": animation.as_str(),
                style: "{style}",
                {children}
            }
        },
        None => rsx! { {children} },
    }
}
