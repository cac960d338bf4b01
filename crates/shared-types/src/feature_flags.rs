use serde::{Deserialize, Serialize};

/// UI feature flags shared between the server and every client.
///
/// Loaded from `config.toml` at server startup and handed to clients
/// through a server function. Each field defaults to `false` so a
/// missing or partial config file leaves the stock behavior in place.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Render lazy sections without their entrance animation.
    #[serde(default)]
    pub reduced_motion: bool,
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
}
