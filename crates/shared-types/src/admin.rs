use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Services
// ---------------------------------------------------------------------------

/// Operational state of a service listed on the admin services page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ServiceStatus {
    #[default]
    Active,
    Degraded,
    Retired,
}

impl ServiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceStatus::Active => "active",
            ServiceStatus::Degraded => "degraded",
            ServiceStatus::Retired => "retired",
        }
    }

    /// Human-readable label for badges.
    pub fn label(&self) -> &'static str {
        match self {
            ServiceStatus::Active => "Active",
            ServiceStatus::Degraded => "Degraded",
            ServiceStatus::Retired => "Retired",
        }
    }
}

/// A service card on the admin services page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceSummary {
    pub slug: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub status: ServiceStatus,
}

// ---------------------------------------------------------------------------
// Snippets
// ---------------------------------------------------------------------------

/// A reusable code snippet managed from the admin snippets page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snippet {
    pub id: String,
    pub title: String,
    /// Language tag used for the code block class (e.g. "rust", "sql").
    pub language: String,
    pub body: String,
}

impl Snippet {
    /// Number of lines in the snippet body.
    pub fn line_count(&self) -> usize {
        self.body.lines().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_status_defaults_to_active_when_missing() {
        let svc: ServiceSummary = serde_json::from_str(
            r#"{"slug":"search","name":"Search","description":"Full-text index"}"#,
        )
        .unwrap();
        assert_eq!(svc.status, ServiceStatus::Active);
    }

    #[test]
    fn service_status_labels() {
        assert_eq!(ServiceStatus::Active.label(), "Active");
        assert_eq!(ServiceStatus::Degraded.as_str(), "degraded");
        assert_eq!(ServiceStatus::Retired.as_str(), "retired");
    }

    #[test]
    fn snippet_line_count() {
        let snippet = Snippet {
            id: "hello".into(),
            title: "Hello".into(),
            language: "rust".into(),
            body: "fn main() {\n    println!(\"hi\");\n}".into(),
        };
        assert_eq!(snippet.line_count(), 3);
    }
}
