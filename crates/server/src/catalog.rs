//! Static catalog backing the admin services and snippets pages.

use shared_types::{AppError, ServiceStatus, ServiceSummary, Snippet};

const SERVICES: &[(&str, &str, &str, ServiceStatus)] = &[
    ("auth", "Authentication", "Session issuance, password resets and sign-in throttling.", ServiceStatus::Active),
    ("search", "Search", "Full-text index over published content, rebuilt nightly.", ServiceStatus::Active),
    ("mailer", "Mailer", "Transactional email delivery with bounce tracking.", ServiceStatus::Degraded),
    ("media", "Media", "Image upload, resizing and CDN cache invalidation.", ServiceStatus::Active),
    ("billing", "Billing", "Invoices and subscription renewals.", ServiceStatus::Active),
    ("webhooks", "Webhooks", "Outbound event delivery with retries.", ServiceStatus::Active),
    ("reports", "Reports", "Scheduled CSV exports for the finance team.", ServiceStatus::Retired),
    ("audit", "Audit Log", "Append-only record of administrative actions.", ServiceStatus::Active),
];

const SNIPPETS: &[(&str, &str, &str, &str)] = &[
    (
        "health-check",
        "Health check handler",
        "rust",
        "async fn health() -> &'static str {\n    \"ok\"\n}",
    ),
    (
        "recent-signups",
        "Recent signups",
        "sql",
        "SELECT email, created_at\nFROM users\nWHERE created_at > NOW() - INTERVAL '7 days'\nORDER BY created_at DESC;",
    ),
    (
        "purge-cdn",
        "Purge CDN path",
        "bash",
        "curl -X POST \"$CDN_API/purge\" \\\n  -H \"Authorization: Bearer $CDN_TOKEN\" \\\n  -d '{\"path\": \"/assets/*\"}'",
    ),
    (
        "retry-backoff",
        "Retry with backoff",
        "rust",
        "for attempt in 0..5 {\n    if send().await.is_ok() {\n        break;\n    }\n    sleep(Duration::from_millis(100 << attempt)).await;\n}",
    ),
    (
        "feature-flags",
        "Feature flag config",
        "toml",
        "[features]\nreduced_motion = false",
    ),
];

pub fn services() -> Vec<ServiceSummary> {
    SERVICES
        .iter()
        .map(|(slug, name, description, status)| ServiceSummary {
            slug: slug.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            status: *status,
        })
        .collect()
}

pub fn snippets() -> Vec<Snippet> {
    SNIPPETS.iter().map(to_snippet).collect()
}

/// Look up one snippet by id.
pub fn snippet(id: &str) -> Result<Snippet, AppError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(AppError::bad_request("Snippet id is required"));
    }
    SNIPPETS
        .iter()
        .find(|(snippet_id, ..)| *snippet_id == id)
        .map(to_snippet)
        .ok_or_else(|| AppError::not_found(format!("Snippet '{id}' not found")))
}

fn to_snippet(&(id, title, language, body): &(&str, &str, &str, &str)) -> Snippet {
    Snippet {
        id: id.to_string(),
        title: title.to_string(),
        language: language.to_string(),
        body: body.to_string(),
    }
}
