use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::protocol::{dispatch::Roster, status::RuleTable};

/// Environment variable consulted when `--config` is not given.
pub const CONFIG_ENV: &str = "FIREDASH_CONFIG";

/// Status classifier settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Rule table replacing the builtin one. Relative paths are resolved
    /// against the directory of the config file.
    pub rules_file: Option<PathBuf>,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Viewing agency and its own units
    pub roster: Roster,
    pub classifier: ClassifierConfig,
}

impl DashboardConfig {
    /// Parse configuration from a TOML string
    pub fn from_toml(source: &str) -> Result<Self> {
        toml::from_str(source).context("failed to parse TOML configuration")
    }

    /// Parse configuration from a JSON string
    pub fn from_json(source: &str) -> Result<Self> {
        serde_json::from_str(source).context("failed to parse JSON configuration")
    }

    /// Read configuration from a file, choosing the format by extension
    /// (TOML unless the file ends in `.json`).
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let mut config = if is_json {
            Self::from_json(&content)
        } else {
            Self::from_toml(&content)
        }
        .with_context(|| format!("invalid config file {}", path.display()))?;

        if let (Some(rules), Some(base)) = (&config.classifier.rules_file, path.parent()) {
            if rules.is_relative() {
                config.classifier.rules_file = Some(base.join(rules));
            }
        }

        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Resolve the configuration from an explicit path, then
    /// [`CONFIG_ENV`], falling back to defaults.
    pub fn discover(explicit: Option<&str>) -> Result<Self> {
        let from_env = std::env::var(CONFIG_ENV).ok().filter(|s| !s.is_empty());
        match explicit.map(str::to_string).or(from_env) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => {
                log::debug!("no configuration given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load the rule table this configuration asks for.
    pub fn load_rules(&self) -> Result<RuleTable> {
        let Some(path) = &self.classifier.rules_file else {
            return Ok(RuleTable::builtin().clone());
        };

        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read rules file {}", path.display()))?;
        let table = RuleTable::from_toml(&source)
            .with_context(|| format!("invalid rules file {}", path.display()))?;
        log::info!(
            "using rule table v{} ({} rules) from {}",
            table.version(),
            table.rules().len(),
            path.display()
        );
        Ok(table)
    }

    /// Convert to a pretty TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| anyhow!("failed to serialize config: {e}"))
    }
}
