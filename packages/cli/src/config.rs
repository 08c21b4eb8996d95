//! CLI configuration file: scoring constants plus extractor pattern
//! overrides.
//!
//! ```toml
//! [scoring]
//! crime_scale = 12.5
//!
//! [patterns]
//! population = 'folkmängd[:\s]*(\d+)'
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use gbg_map_district_models::ScoringConfig;
use gbg_map_extract::{RuleSet, StatField};
use serde::Deserialize;

/// Environment variable consulted when `--config` is not given.
pub const CONFIG_ENV_VAR: &str = "GBG_MAP_CONFIG";

/// Parsed configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Scoring constants.
    pub scoring: ScoringConfig,
    /// Per-field extractor pattern overrides.
    pub patterns: BTreeMap<StatField, String>,
}

impl CliConfig {
    /// Parses and validates a configuration from TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or a scoring value is out
    /// of range.
    pub fn from_toml(toml_str: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Self = toml::de::from_str(toml_str)?;
        gbg_map_district::config::validate(&config.scoring)?;
        Ok(config)
    }

    /// Compiles the extractor rules with this config's overrides applied.
    ///
    /// # Errors
    ///
    /// Returns an error if an override pattern is invalid.
    pub fn rules(&self) -> Result<RuleSet, Box<dyn std::error::Error>> {
        Ok(RuleSet::with_overrides(&self.patterns)?)
    }
}

/// Picks the config file to read: an explicit path wins over the
/// [`CONFIG_ENV_VAR`] value. `None` means defaults.
#[must_use]
pub fn resolve_path(explicit: Option<&Path>, env: Option<String>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| env.filter(|value| !value.is_empty()).map(PathBuf::from))
}

/// Loads the configuration from `path`, falling back to the
/// [`CONFIG_ENV_VAR`] environment variable, then to defaults.
///
/// # Errors
///
/// Returns an error if the chosen file cannot be read or parsed. A missing
/// file is an error, not a reason to fall back to defaults.
pub fn load(path: Option<&Path>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let Some(path) = resolve_path(path, std::env::var(CONFIG_ENV_VAR).ok()) else {
        log::debug!("No config file given; using defaults");
        return Ok(CliConfig::default());
    };

    log::info!("Loading config from {}", path.display());
    let contents = std::fs::read_to_string(&path)?;
    CliConfig::from_toml(&contents)
}
