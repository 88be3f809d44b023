use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Which backend contract the form speaks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackendMode {
    /// Multipart upload to `/generate`, HTML fragment back.
    #[default]
    Generate,
    /// JSON text to `/graph/json`, graph documents back.
    GraphJson,
}

impl BackendMode {
    /// Endpoint path relative to the API base.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Generate => "/generate",
            Self::GraphJson => "/graph/json",
        }
    }

    /// Value of the `Accept` header.
    pub const fn accept(self) -> &'static str {
        match self {
            Self::Generate => "text/html",
            Self::GraphJson => "application/json",
        }
    }
}

/// Runtime configuration for the front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the analysis service, without a trailing slash
    pub api_base: String,
    /// Backend contract
    pub mode: BackendMode,
    /// `tracing` filter directive
    pub log_filter: String,
}

/// Partial overrides read from local storage.
#[derive(Debug, Default, Deserialize)]
struct ConfigOverrides {
    api_base: Option<String>,
    mode: Option<BackendMode>,
    log_filter: Option<String>,
}

impl AppConfig {
    /// Default analysis service location (local development)
    pub const DEFAULT_API_BASE: &'static str = "http://localhost:8000";

    /// Local storage key holding a JSON object of overrides
    pub const STORAGE_KEY: &'static str = "xfiles.config";

    /// Build the configuration: defaults, then the `XFILES_API_BASE` value baked
    /// in at compile time, then overrides from local storage.
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Some(base) = option_env!("XFILES_API_BASE") {
            config.api_base = normalize_base(base);
        }

        if let Some(raw) = stored_overrides() {
            match config.clone().with_overrides(&raw) {
                Ok(merged) => config = merged,
                Err(e) => {
                    // Logging is not initialized yet at this point
                    #[cfg(target_arch = "wasm32")]
                    web_sys::console::warn_1(&format!("Ignoring stored config: {e}").into());
                    #[cfg(not(target_arch = "wasm32"))]
                    eprintln!("Ignoring stored config: {e}");
                }
            }
        }

        config
    }

    /// Apply a JSON object of overrides. Absent fields keep their current value.
    pub fn with_overrides(mut self, raw: &str) -> Result<Self, ConfigError> {
        let overrides: ConfigOverrides = serde_json::from_str(raw)?;

        if let Some(base) = overrides.api_base {
            self.api_base = normalize_base(&base);
        }
        if let Some(mode) = overrides.mode {
            self.mode = mode;
        }
        if let Some(filter) = overrides.log_filter {
            self.log_filter = filter;
        }

        Ok(self)
    }

    /// Full URL of the endpoint for the configured mode.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.api_base, self.mode.path())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: Self::DEFAULT_API_BASE.to_string(),
            mode: BackendMode::default(),
            log_filter: "xfiles_ui=debug".to_string(),
        }
    }
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

#[cfg(target_arch = "wasm32")]
fn stored_overrides() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(AppConfig::STORAGE_KEY).ok()?
}

#[cfg(not(target_arch = "wasm32"))]
const fn stored_overrides() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_targets_local_generate_endpoint() {
        let config = AppConfig::default();
        assert_eq!(config.mode, BackendMode::Generate);
        assert_eq!(config.endpoint(), "http://localhost:8000/generate");
    }

    #[test]
    fn test_graph_json_endpoint() {
        let config = AppConfig {
            mode: BackendMode::GraphJson,
            ..AppConfig::default()
        };
        assert_eq!(config.endpoint(), "http://localhost:8000/graph/json");
        assert_eq!(config.mode.accept(), "application/json");
    }

    #[test]
    fn test_overrides_merge_partially() {
        let config = AppConfig::default()
            .with_overrides(r#"{"api_base": "https://analysis.example.com/", "mode": "graph-json"}"#)
            .unwrap();

        assert_eq!(config.api_base, "https://analysis.example.com");
        assert_eq!(config.mode, BackendMode::GraphJson);
        assert_eq!(config.log_filter, AppConfig::default().log_filter);
    }

    #[test]
    fn test_empty_overrides_keep_defaults() {
        let config = AppConfig::default().with_overrides("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_invalid_overrides_are_rejected() {
        assert!(AppConfig::default().with_overrides("not json").is_err());
        assert!(AppConfig::default()
            .with_overrides(r#"{"mode": "streaming"}"#)
            .is_err());
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"log_filter": "warn"}"#).unwrap();
        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.api_base, AppConfig::DEFAULT_API_BASE);
    }

    #[test]
    fn test_dev_server_serves_the_origin_the_backend_allows() {
        // The service's CORS policy only admits http://localhost:3000
        let trunk = include_str!("../Trunk.toml");
        let serve = trunk.split("[serve]").nth(1).unwrap();
        assert!(serve.lines().any(|line| line.trim() == "port = 3000"));
    }
}
