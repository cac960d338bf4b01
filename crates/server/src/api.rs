use dioxus::prelude::*;
use shared_types::{FeatureFlags, ServiceSummary, Snippet};

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

/// Get the current feature flags. No auth required, flags are not sensitive.
#[server]
pub async fn get_feature_flags() -> Result<FeatureFlags, ServerFnError> {
    Ok(crate::config::feature_flags().clone())
}

/// List every service shown on the admin services page.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_services() -> Result<Vec<ServiceSummary>, ServerFnError> {
    Ok(crate::catalog::services())
}

/// List every snippet shown on the admin snippets page.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_snippets() -> Result<Vec<Snippet>, ServerFnError> {
    Ok(crate::catalog::snippets())
}

/// Fetch a single snippet by id.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_snippet(id: String) -> Result<Snippet, ServerFnError> {
    crate::catalog::snippet(&id).map_err(|e| {
        tracing::debug!(%id, error = %e, "snippet lookup failed");
        e.into_server_fn_error()
    })
}
