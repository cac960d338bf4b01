use dioxus::prelude::*;
use server::api::list_services;
use shared_types::{AppError, ServiceStatus, ServiceSummary};
use shared_ui::{LazyAnimation, LazySection, Skeleton, SkeletonText};

use crate::motion::{stagger_delay, use_section_animation};

/// Number of placeholder cards in the loading skeleton.
const LOADING_CARDS: usize = 6;

#[component]
pub fn AdminServices() -> Element {
    let services = use_server_future(move || async move { list_services().await })?;
    let animation = use_section_animation(LazyAnimation::Fade);

    let result = services.read().as_ref().cloned();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin.css") }

        section { class: "admin-page",
            p { class: "admin-page-lede", "Backend services and their current state." }

            match result {
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "admin-empty", "No services registered." }
                },
                Some(Ok(list)) => rsx! {
                    div { class: "service-grid",
                        for (i, service) in list.into_iter().enumerate() {
                            LazySection {
                                key: "{service.slug}",
                                animation,
                                delay: stagger_delay(i),
                                placeholder_height: 140,
                                ServiceCard { service: service.clone() }
                            }
                        }
                    }
                },
                Some(Err(e)) => rsx! {
                    p { class: "admin-error", {AppError::friendly_message(&e.to_string())} }
                },
                None => rsx! { ServicesLoading {} },
            }
        }
    }
}

#[component]
fn ServiceCard(service: ServiceSummary) -> Element {
    rsx! {
        article { class: "service-card",
            div { class: "service-card-head",
                h2 { class: "service-card-name", "{service.name}" }
                StatusBadge { status: service.status }
            }
            p { class: "service-card-description", "{service.description}" }
            code { class: "service-card-slug", "{service.slug}" }
        }
    }
}

#[component]
fn StatusBadge(status: ServiceStatus) -> Element {
    rsx! {
        span {
            class: "status-badge",
            "data-status": status.as_str(),
            {status.label()}
        }
    }
}

/// Skeleton for the services page: a grid of card outlines.
#[component]
pub fn ServicesLoading() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin.css") }

        section { class: "admin-page services-loading", "aria-busy": "true",
            Skeleton { class: "skeleton-lede" }
            div { class: "service-grid",
                for i in 0..LOADING_CARDS {
                    div { key: "{i}", class: "service-card",
                        div { class: "service-card-head",
                            Skeleton { class: "skeleton-heading" }
                            Skeleton { class: "skeleton-badge" }
                        }
                        SkeletonText { lines: 2 }
                        Skeleton { class: "skeleton-slug" }
                    }
                }
            }
        }
    }
}
