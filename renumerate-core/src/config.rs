use crate::policy::{NamingPolicy, NamingScheme, SortMode};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default file order: "name" or "number"
    #[serde(default)]
    pub sort: SortMode,

    /// Default naming scheme: "sequential", "numbers-only" or "text-only"
    #[serde(default)]
    pub scheme: NamingScheme,

    #[serde(default)]
    pub prefix: String,

    #[serde(default)]
    pub suffix: String,

    /// Default preview format: "list", "table" or "none"
    #[serde(default = "default_format")]
    pub format: String,

    /// Whether to use color output by default (None = auto-detect)
    #[serde(default)]
    pub use_color: Option<bool>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            sort: SortMode::default(),
            scheme: NamingScheme::default(),
            prefix: String::new(),
            suffix: String::new(),
            format: default_format(),
            use_color: None,
        }
    }
}

fn default_format() -> String {
    "list".to_string()
}

impl Config {
    /// Load config from .renumerate/config.toml if it exists
    pub fn load() -> Result<Self> {
        if let Ok(cwd) = std::env::current_dir() {
            let config_path = cwd.join(".renumerate").join("config.toml");
            if config_path.exists() {
                return Self::load_from_path(&config_path);
            }
        }

        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// The naming policy described by `[defaults]`, in preview mode.
    pub fn naming_policy(&self) -> NamingPolicy {
        NamingPolicy::new(self.defaults.scheme)
            .with_prefix(self.defaults.prefix.clone())
            .with_suffix(self.defaults.suffix.clone())
            .with_sort(self.defaults.sort)
    }
}
