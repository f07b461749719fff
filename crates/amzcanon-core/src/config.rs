use crate::activation::{ActivationRules, DEFAULT_DOMAINS};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration loaded from `~/.config/amzcanon/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmzcanonConfig {
    /// Marketplace domains the activation allow-list is built for.
    /// Subdomains (e.g. `www.`) are covered automatically.
    pub domains: Vec<String>,
}

impl Default for AmzcanonConfig {
    fn default() -> Self {
        Self {
            domains: DEFAULT_DOMAINS.iter().map(|d| d.to_string()).collect(),
        }
    }
}

impl AmzcanonConfig {
    pub fn activation_rules(&self) -> Result<ActivationRules> {
        ActivationRules::for_domains(&self.domains).context("building activation rules from config")
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("amzcanon")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<AmzcanonConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = AmzcanonConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file. The file must exist.
pub fn load_from(path: &Path) -> Result<AmzcanonConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: AmzcanonConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
