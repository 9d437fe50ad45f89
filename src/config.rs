use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::extract::ignore::is_glob_pattern;

pub const CONFIG_FILE_NAME: &str = ".catgenrc.json";

/// Paths that never contain message definitions worth extracting.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &["**/node_modules/**", "**/static/**"];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// JSON manifest listing the bundles to generate catalogs for.
    #[serde(default = "default_bundles")]
    pub bundles: String,
    /// JSON list of supported languages (`crowdin_code` / `intl_code` pairs).
    #[serde(default = "default_languages")]
    pub languages: String,
    /// Root of the per-locale folders holding translation tables and catalogs.
    #[serde(default = "default_locale_data_folder", alias = "localeDir")]
    pub locale_data_folder: String,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    /// Intl code of the source-text locale.
    #[serde(default = "default_default_locale")]
    pub default_locale: String,
}

fn default_bundles() -> String {
    "./bundles.json".to_string()
}

fn default_languages() -> String {
    "./language_info.json".to_string()
}

fn default_locale_data_folder() -> String {
    "./locale".to_string()
}

fn default_ignores() -> Vec<String> {
    DEFAULT_IGNORE_PATTERNS.iter().map(|p| p.to_string()).collect()
}

fn default_default_locale() -> String {
    "en".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bundles: default_bundles(),
            languages: default_languages(),
            locale_data_folder: default_locale_data_folder(),
            ignores: default_ignores(),
            default_locale: default_default_locale(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid or the
    /// default locale is blank. Entries without wildcards are literal paths.
    pub fn validate(&self) -> Result<()> {
        for pattern in self.ignores.iter().filter(|p| is_glob_pattern(p)) {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.default_locale.trim().is_empty() {
            anyhow::bail!("'defaultLocale' must not be empty");
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
