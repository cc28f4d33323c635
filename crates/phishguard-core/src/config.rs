use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::endpoint;

/// Global configuration loaded from `~/.config/phishguard/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhishguardConfig {
    /// Location the client considers itself served from. A localhost page
    /// talks to the development API on 127.0.0.1:8000; any other page talks
    /// to its own origin.
    pub page_url: String,
    /// Explicit API origin; when set it wins over the `page_url` derivation.
    #[serde(default)]
    pub api_origin: Option<String>,
    /// Optional connect timeout in seconds (None = transport default).
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// Preset URLs reachable through the quick-test shortcut.
    #[serde(default)]
    pub quick_tests: Vec<String>,
}

impl Default for PhishguardConfig {
    fn default() -> Self {
        Self {
            page_url: "http://localhost/".to_string(),
            api_origin: None,
            connect_timeout_secs: None,
            quick_tests: vec![
                "https://www.google.com".to_string(),
                "https://github.com".to_string(),
                "http://paypal-account-verify.secure-login.xyz/update".to_string(),
                "bankofamerica-alert.com.verify-identity.info".to_string(),
            ],
        }
    }
}

impl PhishguardConfig {
    /// Effective API origin: the explicit override, else derived from `page_url`.
    pub fn api_origin(&self) -> Result<String> {
        match &self.api_origin {
            Some(origin) => Ok(origin.trim_end_matches('/').to_string()),
            None => endpoint::api_origin_for(&self.page_url)
                .with_context(|| format!("deriving API origin from page_url {}", self.page_url)),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("phishguard")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PhishguardConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`] but with an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<PhishguardConfig> {
    if !path.exists() {
        let default_cfg = PhishguardConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)
            .with_context(|| format!("writing default config to {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: PhishguardConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}
