use dioxus::prelude::*;
use server::api::{get_snippet, list_snippets};
use shared_types::{AppError, Snippet};
use shared_ui::{LazyAnimation, LazySection, Skeleton};

use crate::motion::{stagger_delay, use_section_animation};
use crate::routes::Route;

const LOADING_ROWS: usize = 4;

#[component]
pub fn AdminSnippets() -> Element {
    let snippets = use_server_future(move || async move { list_snippets().await })?;
    let animation = use_section_animation(LazyAnimation::Slide);

    let result = snippets.read().as_ref().cloned();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin.css") }

        section { class: "admin-page",
            p { class: "admin-page-lede", "Reusable snippets for runbooks and support replies." }

            match result {
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "admin-empty", "No snippets yet." }
                },
                Some(Ok(list)) => rsx! {
                    div { class: "snippet-list",
                        for (i, snippet) in list.into_iter().enumerate() {
                            LazySection {
                                key: "{snippet.id}",
                                animation,
                                delay: stagger_delay(i),
                                placeholder_height: 180,
                                SnippetCard { snippet: snippet.clone() }
                            }
                        }
                    }
                },
                Some(Err(e)) => rsx! {
                    p { class: "admin-error", {AppError::friendly_message(&e.to_string())} }
                },
                None => rsx! { SnippetsLoading {} },
            }
        }
    }
}

#[component]
pub fn SnippetDetail(id: String) -> Element {
    let snippet = use_server_future(use_reactive!(|(id,)| async move { get_snippet(id).await }))?;
    let animation = use_section_animation(LazyAnimation::Scale);

    let result = snippet.read().as_ref().cloned();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin.css") }

        section { class: "admin-page",
            Link { to: Route::AdminSnippets {}, class: "admin-back-link", "All snippets" }

            match result {
                Some(Ok(snippet)) => rsx! {
                    LazySection { animation, threshold: 0.0,
                        SnippetCard { snippet }
                    }
                },
                Some(Err(e)) => rsx! {
                    p { class: "admin-error", {AppError::friendly_message(&e.to_string())} }
                },
                None => rsx! { SnippetsLoading {} },
            }
        }
    }
}

#[component]
fn SnippetCard(snippet: Snippet) -> Element {
    let lines = snippet.line_count();

    rsx! {
        article { class: "snippet-card",
            div { class: "snippet-card-head",
                Link {
                    to: Route::SnippetDetail { id: snippet.id.clone() },
                    class: "snippet-card-title",
                    "{snippet.title}"
                }
                span { class: "snippet-card-meta", "{snippet.language} · {lines} lines" }
            }
            pre { class: "snippet-card-code",
                code { class: "language-{snippet.language}", "{snippet.body}" }
            }
        }
    }
}

/// Skeleton for the snippets page: title rows over code blocks.
#[component]
pub fn SnippetsLoading() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin.css") }

        section { class: "admin-page snippets-loading", "aria-busy": "true",
            Skeleton { class: "skeleton-lede" }
            div { class: "snippet-list",
                for i in 0..LOADING_ROWS {
                    div { key: "{i}", class: "snippet-card",
                        div { class: "snippet-card-head",
                            Skeleton { class: "skeleton-heading" }
                            Skeleton { class: "skeleton-meta" }
                        }
                        Skeleton { class: "skeleton-code" }
                    }
                }
            }
        }
    }
}
