use shared_types::{AppConfig, FeatureFlags};
use std::sync::OnceLock;

static FLAGS: OnceLock<FeatureFlags> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Parse feature flags from `config.toml` contents.
///
/// Unparseable contents fall back to all flags off.
pub fn parse_feature_flags(contents: &str) -> FeatureFlags {
    match toml::from_str::<AppConfig>(contents) {
        Ok(config) => config.features,
        Err(e) => {
            tracing::warn!(path = CONFIG_PATH, error = %e, "failed to parse config, defaulting all flags off");
            FeatureFlags::default()
        }
    }
}

/// Read `config.toml`, parse feature flags, and store them in the global
/// `OnceLock`. Only the first call has an effect.
///
/// If the file is missing, all flags default to `false`.
pub fn load_feature_flags() {
    FLAGS.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => {
            let flags = parse_feature_flags(&contents);
            tracing::info!(?flags, "feature flags loaded");
            flags
        }
        Err(e) => {
            tracing::warn!(path = CONFIG_PATH, error = %e, "config not found, defaulting all flags off");
            FeatureFlags::default()
        }
    });
}

/// Get the loaded feature flags. Returns all-false defaults if
/// `load_feature_flags()` hasn't been called yet.
pub fn feature_flags() -> &'static FeatureFlags {
    static DEFAULT: FeatureFlags = FeatureFlags {
        reduced_motion: false,
    };
    FLAGS.get().unwrap_or(&DEFAULT)
}
