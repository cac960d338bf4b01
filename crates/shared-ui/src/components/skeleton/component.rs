use dioxus::prelude::*;

/// A pulsing loading placeholder block.
///
/// Size it with `style` or an extra `class`; the base class only sets the
/// background and pulse animation.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let base = vec![Attribute::new("class", "skeleton", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            "aria-hidden": "true",
            ..merged,
        }
    }
}

/// A stack of text-line placeholders. The last line is drawn shorter so
/// the block reads as a paragraph.
#[component]
pub fn SkeletonText(#[props(default = 3)] lines: usize) -> Element {
    rsx! {
        div { class: "skeleton-text",
            for i in 0..lines {
                Skeleton { key: "{i}", class: line_class(i, lines) }
            }
        }
    }
}

fn line_class(index: usize, lines: usize) -> &'static str {
    if index + 1 == lines && lines > 1 {
        "skeleton-line skeleton-line-short"
    } else {
        "skeleton-line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skeleton_merges_extra_class() {
        let html = dioxus_ssr::render_element(rsx! {
            Skeleton { class: "skeleton-title" }
        });
        assert!(html.contains("skeleton"));
        assert!(html.contains("skeleton-title"));
        assert!(html.contains("aria-hidden=\"true\""));
    }

    #[test]
    fn skeleton_text_renders_requested_lines() {
        let html = dioxus_ssr::render_element(rsx! {
            SkeletonText { lines: 4 }
        });
        assert_eq!(html.matches("skeleton-line").count() - html.matches("skeleton-line-short").count(), 4);
        assert_eq!(html.matches("skeleton-line-short").count(), 1);
    }

    #[test]
    fn single_line_is_full_width() {
        let html = dioxus_ssr::render_element(rsx! {
            SkeletonText { lines: 1 }
        });
        assert!(!html.contains("skeleton-line-short"));
    }
}
