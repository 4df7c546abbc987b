//! Host configuration.
//!
//! A context name resolves to `/etc/eduva/<name>.toml`; anything with a
//! `/` or `.` in it is treated as a literal path. Every field has a
//! default, so `portald --offline` runs with no file at all.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Address the JSON API binds to when none is configured.
pub const DEFAULT_LISTEN: &str = "127.0.0.1:4300";

#[derive(Debug, Clone, Deserialize)]
pub struct PortalConfig {
    /// Listen address for the JSON API.
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Base URL of the EDUVA backend, e.g. "https://api.eduva.vn".
    #[serde(default)]
    pub api_base_url: String,

    /// Bearer token to start with, for hosts that persist a session.
    #[serde(default)]
    pub token: Option<String>,

    /// Boot locale, "vi" or "en".
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Serve the seeded in-memory backend instead of a real API.
    #[serde(default)]
    pub offline: bool,
}

fn default_listen() -> String {
    DEFAULT_LISTEN.to_string()
}

fn default_locale() -> String {
    "vi".to_string()
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            api_base_url: String::new(),
            token: None,
            locale: default_locale(),
            offline: false,
        }
    }
}

impl PortalConfig {
    /// Resolve a context name or path to a config file path.
    pub fn resolve_path(name_or_path: &str) -> PathBuf {
        if name_or_path.contains('/') || name_or_path.contains('.') {
            PathBuf::from(name_or_path)
        } else {
            PathBuf::from("/etc/eduva").join(format!("{name_or_path}.toml"))
        }
    }

    /// Load configuration from disk.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: PortalConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Verify the configuration is ready to serve.
    pub fn verify(&self) -> anyhow::Result<()> {
        if self.listen.is_empty() {
            anyhow::bail!("Listen address is empty in configuration.");
        }
        if !self.offline && self.api_base_url.is_empty() {
            anyhow::bail!(
                "No API base URL configured.\n\
                 Set `api_base_url` in the config file or pass --offline."
            );
        }
        match self.locale.as_str() {
            "vi" | "en" => Ok(()),
            other => anyhow::bail!("Unsupported locale {other:?} (expected \"vi\" or \"en\")."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_serve_offline_only() {
        let config = PortalConfig::default();
        assert_eq!(config.listen, DEFAULT_LISTEN);
        assert_eq!(config.locale, "vi");
        assert!(config.verify().is_err());
        let offline = PortalConfig {
            offline: true,
            ..PortalConfig::default()
        };
        assert!(offline.verify().is_ok());
    }

    #[test]
    fn name_resolves_under_etc_eduva() {
        assert_eq!(
            PortalConfig::resolve_path("prod"),
            PathBuf::from("/etc/eduva/prod.toml")
        );
        assert_eq!(
            PortalConfig::resolve_path("./local.toml"),
            PathBuf::from("./local.toml")
        );
        assert_eq!(
            PortalConfig::resolve_path("/tmp/x.toml"),
            PathBuf::from("/tmp/x.toml")
        );
    }

    #[test]
    fn toml_fills_missing_fields_with_defaults() {
        let config: PortalConfig =
            toml::from_str("api_base_url = \"https://api.eduva.vn\"").unwrap();
        assert_eq!(config.listen, DEFAULT_LISTEN);
        assert_eq!(config.api_base_url, "https://api.eduva.vn");
        assert_eq!(config.token, None);
        assert!(!config.offline);
        assert!(config.verify().is_ok());
    }

    #[test]
    fn unsupported_locale_is_refused() {
        let config: PortalConfig = toml::from_str(
            "offline = true\nlocale = \"fr\"",
        )
        .unwrap();
        let err = config.verify().unwrap_err();
        assert!(err.to_string().contains("locale"));
    }
}
