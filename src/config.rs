use crate::error::{DocsError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the working and config directories
pub const CONFIG_FILE_NAME: &str = "update-function-docs.toml";

/// Environment variable naming an explicit configuration file
pub const CONFIG_ENV_VAR: &str = "UPDATE_FUNCTION_DOCS_CONFIG";

/// Represents the complete configuration for update-function-docs.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Remote that release tags are fetched from
    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_catalog_url() -> String {
    "https://catalog.kpt.dev".to_string()
}

fn default_package_repository() -> String {
    "https://github.com/GoogleContainerTools/kpt-functions-catalog.git".to_string()
}

/// Returns the language identifiers release tags are published under.
fn default_languages() -> Vec<String> {
    vec!["go".to_string(), "ts".to_string()]
}

fn default_true() -> bool {
    true
}

/// Where the catalog publishes functions and their example packages.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Catalog site whose URLs are pinned to the minor version
    #[serde(default = "default_catalog_url")]
    pub url: String,

    /// Repository URL prefixing example package references
    #[serde(default = "default_package_repository")]
    pub package_repository: String,

    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            url: default_catalog_url(),
            package_repository: default_package_repository(),
            languages: default_languages(),
        }
    }
}

/// Controls runtime behavior without affecting version resolution.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BehaviorConfig {
    #[serde(default = "default_true")]
    pub fetch_tags: bool,

    #[serde(default = "default_true")]
    pub show_commit: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            fetch_tags: true,
            show_commit: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            remote: default_remote(),
            catalog: CatalogConfig::default(),
            behavior: BehaviorConfig::default(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text).map_err(|e| DocsError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.catalog.languages.is_empty() {
            return Err(DocsError::config("catalog.languages must not be empty"));
        }
        if self.catalog.languages.iter().any(|lang| lang.contains('/')) {
            return Err(DocsError::config(
                "catalog.languages entries must be single path segments",
            ));
        }
        Ok(())
    }
}

/// Resolves which configuration file applies, if any.
///
/// Lookup order:
/// 1. The path in `UPDATE_FUNCTION_DOCS_CONFIG`
/// 2. `update-function-docs.toml` in the current directory
/// 3. `update-function-docs.toml` in the user config directory
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
        return Some(PathBuf::from(path));
    }

    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}

/// Loads configuration from file or returns defaults.
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file applies but cannot be read or parsed
pub fn load_config() -> Result<Config> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(Config::default()),
    }
}

/// Loads configuration from an explicit file.
pub fn load_config_from(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path).map_err(|e| DocsError::io(path, e))?;
    Config::from_toml(&text)
        .map_err(|e| DocsError::config(format!("{}: {}", path.display(), e)))
}
