use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{NormalizeError, Result};
use crate::models::LicenseSource;

/// Root configuration structure, deserialized from `.license-normalizr/config.toml`.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// How declared licenses are matched against the SPDX catalog.
    #[serde(default)]
    pub resolution: ResolutionConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ResolutionConfig {
    /// Fields of a license clause to try, in priority order.
    /// Defaults to `["name", "url"]`.
    #[serde(default = "default_sources")]
    pub sources: Vec<LicenseSource>,
}

fn default_sources() -> Vec<LicenseSource> {
    vec![LicenseSource::Name, LicenseSource::Url]
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            sources: default_sources(),
        }
    }
}

impl Config {
    /// The source priority to resolve with: `overrides` when non-empty,
    /// otherwise the configured list.
    pub fn effective_sources(&self, overrides: &[LicenseSource]) -> Vec<LicenseSource> {
        let sources = if overrides.is_empty() {
            self.resolution.sources.clone()
        } else {
            overrides.to_vec()
        };
        if sources.is_empty() {
            warn!("no license sources configured, every license will be reported as unknown");
        }
        sources
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<base_dir>/.license-normalizr/config.toml`
/// 3. `~/.config/license-normalizr/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(base_dir: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = base_dir.join(".license-normalizr").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("license-normalizr")
            .join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    debug!("no config file found, using defaults");
    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|source| NormalizeError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config = toml::from_str(&content).map_err(|source| NormalizeError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}
