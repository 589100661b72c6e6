//! # Client configuration — `deepsearch.toml`
//!
//! Where the client finds its backend. The file is optional: a missing or
//! empty config is equivalent to [`AppConfig::default`], and a web build
//! can bake the base URL in at compile time via the `DEEPSEARCH_API_URL`
//! environment variable.
//!
//! ```toml
//! [api]
//! base_url = "https://deepsearch.example.com/api"
//! ```

use serde::{Deserialize, Serialize};

/// Top-level client configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST backend, including any path prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    // Same-origin deployment behind a reverse proxy.
    "/api".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl AppConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "deepsearch.toml"
    }

    /// Config with the compile-time `DEEPSEARCH_API_URL` override applied.
    pub fn from_env() -> Self {
        match option_env!("DEEPSEARCH_API_URL") {
            Some(url) if !url.is_empty() => Self {
                api: ApiConfig {
                    base_url: url.to_string(),
                },
            },
            _ => Self::default(),
        }
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_the_default_config() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api.base_url, "/api");
    }

    #[test]
    fn base_url_roundtrips_through_toml() {
        let mut config = AppConfig::default();
        config.api.base_url = "https://api.deepsearch.test".to_string();

        let toml = config.to_toml().unwrap();
        let loaded = AppConfig::from_toml(&toml).unwrap();
        assert_eq!(loaded.api.base_url, "https://api.deepsearch.test");
    }
}
