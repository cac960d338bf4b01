pub mod admin;
pub mod not_found;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCode, LdServer};
use dioxus_free_icons::Icon;
use shared_ui::PageProgress;

use admin::{AdminServices, AdminSnippets, ServicesLoading, SnippetDetail, SnippetsLoading};
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[redirect("/", || Route::AdminServices {})]
    #[layout(AdminLayout)]
    #[route("/admin/services")]
    AdminServices {},
    #[route("/admin/snippets")]
    AdminSnippets {},
    #[route("/admin/snippets/:id")]
    SnippetDetail { id: String },
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// Title shown in the admin header.
    pub fn page_title(&self) -> &'static str {
        match self {
            Route::AdminServices {} => "Services",
            Route::AdminSnippets {} | Route::SnippetDetail { .. } => "Snippets",
            Route::NotFound { .. } => "",
        }
    }
}

/// Skeleton shown while the page for `route` is loading.
fn loading_for(route: &Route) -> Element {
    match route {
        Route::AdminSnippets {} | Route::SnippetDetail { .. } => rsx! { SnippetsLoading {} },
        _ => rsx! { ServicesLoading {} },
    }
}

fn nav_link_class(active: bool) -> &'static str {
    if active {
        "admin-nav-link active"
    } else {
        "admin-nav-link"
    }
}

/// Admin shell: navigation, the page progress bar, and a suspense boundary
/// whose fallback is the current page's loading skeleton.
#[component]
fn AdminLayout() -> Element {
    let route: Route = use_route();
    let path = route.to_string();
    let title = route.page_title();
    let loading_route = route.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        PageProgress { path }

        div { class: "admin-shell",
            nav { class: "admin-nav",
                span { class: "admin-brand", "Admin" }
                Link {
                    to: Route::AdminServices {},
                    class: nav_link_class(matches!(route, Route::AdminServices {})),
                    Icon::<LdServer> { icon: LdServer, width: 18, height: 18 }
                    "Services"
                }
                Link {
                    to: Route::AdminSnippets {},
                    class: nav_link_class(matches!(route, Route::AdminSnippets {} | Route::SnippetDetail { .. })),
                    Icon::<LdCode> { icon: LdCode, width: 18, height: 18 }
                    "Snippets"
                }
            }

            main { class: "admin-main",
                header { class: "admin-header",
                    h1 { class: "admin-title", "{title}" }
                }
                SuspenseBoundary {
                    fallback: move |_| loading_for(&loading_route),
                    Outlet::<Route> {}
                }
            }
        }
    }
}
