use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdServer;
use dioxus_free_icons::Icon;

use crate::routes::Route;

/// Path the router could not match, rebuilt from its segments.
fn missing_path(route: &[String]) -> String {
    format!("/{}", route.join("/"))
}

/// Shown for any path outside the admin console.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = missing_path(&route);
    tracing::debug!(%path, "no admin page matched");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "admin-not-found",
            div { class: "admin-not-found-panel",
                div { class: "admin-not-found-code", "404" }
                h1 { class: "admin-not-found-title", "No admin page here" }
                p { class: "admin-not-found-message",
                    "Nothing in the admin console lives at "
                    code { "{path}" }
                    "."
                }
                Link { to: Route::AdminServices {},
                    class: "admin-not-found-link",
                    Icon::<LdServer> { icon: LdServer, width: 16, height: 16 }
                    "Back to Services"
                }
            }
        }
    }
}
