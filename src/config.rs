//! Tool configuration.
//!
//! Handles loading and validating an optional `docnav.toml` placed in the
//! content root. Every option has a stock default; user files are sparse and
//! override only the keys they name. Unknown keys are rejected to catch typos
//! early.
//!
//! ```toml
//! [sidebar]
//! dir_name = "articles"            # directory scanned for sidebar data
//! ignore_file_names = ["index.md"] # exact file names to skip
//! ignore_dir_names = ["demo", "asserts"]
//! max_level = 3                    # recursion depth limit
//! debug_print = false              # dump the generated tree to stderr
//!
//! [nav]
//! dir_name = "articles"
//! max_level = 1                    # 1 = top-level entries only
//! ignore_dir_names = ["demo", "asserts", ".git", ".github"]
//! ignore_file_names = ["index.md"]
//! include_root_files = false       # also list top-level markdown files
//! debug_print = false
//!
//! # Nav entries used when the scan directory is missing or empty. With no
//! # fallback configured, a single entry pointing at the scan directory is
//! # derived instead.
//! [[nav.fallback]]
//! text = "Home"
//! link = "/"
//!
//! [catalog]
//! exclude_dirs = [".vitepress", "public", "test"]
//! ```

use crate::types::NavItem;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the config file looked up in the content root.
pub const CONFIG_FILE_NAME: &str = "docnav.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Full tool configuration: one section per generated structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Sidebar generation settings.
    pub sidebar: SidebarConfig,
    /// Top-navigation generation settings.
    pub nav: NavConfig,
    /// Catalog generation settings.
    pub catalog: CatalogConfig,
}

impl Config {
    /// Validate option values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sidebar.dir_name.is_empty() {
            return Err(ConfigError::Validation(
                "sidebar.dir_name must not be empty".into(),
            ));
        }
        if self.nav.dir_name.is_empty() {
            return Err(ConfigError::Validation(
                "nav.dir_name must not be empty".into(),
            ));
        }
        if self.sidebar.max_level == 0 {
            return Err(ConfigError::Validation(
                "sidebar.max_level must be at least 1".into(),
            ));
        }
        if self.nav.max_level == 0 {
            return Err(ConfigError::Validation(
                "nav.max_level must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Sidebar builder settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SidebarConfig {
    /// Directory under the content root to scan.
    pub dir_name: String,
    /// Exact file names that never become sidebar entries.
    pub ignore_file_names: Vec<String>,
    /// Directory names excluded entirely, descendants included.
    pub ignore_dir_names: Vec<String>,
    /// Maximum directory depth; level 1 is the scan root's children.
    pub max_level: usize,
    /// Dump the generated tree to stderr after building.
    pub debug_print: bool,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            dir_name: default_dir_name(),
            ignore_file_names: default_ignore_file_names(),
            ignore_dir_names: vec!["demo".to_string(), "asserts".to_string()],
            max_level: 3,
            debug_print: false,
        }
    }
}

/// Nav builder settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavConfig {
    /// Directory under the content root to scan.
    pub dir_name: String,
    /// Maximum directory depth; the default of 1 lists top-level entries only.
    pub max_level: usize,
    /// Directory names excluded entirely, descendants included.
    pub ignore_dir_names: Vec<String>,
    /// Exact file names that never become nav entries.
    pub ignore_file_names: Vec<String>,
    /// Also list markdown files found directly in the scan root.
    pub include_root_files: bool,
    /// Entries returned when the scan yields nothing. Site content belongs to
    /// the caller, not the builder, so any "home page" style default lives
    /// here. Empty means a single entry for the scan directory is derived.
    pub fallback: Vec<NavItem>,
    /// Dump the generated list to stderr after building.
    pub debug_print: bool,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            dir_name: default_dir_name(),
            max_level: 1,
            ignore_dir_names: vec![
                "demo".to_string(),
                "asserts".to_string(),
                ".git".to_string(),
                ".github".to_string(),
            ],
            ignore_file_names: default_ignore_file_names(),
            include_root_files: false,
            fallback: vec![],
            debug_print: false,
        }
    }
}

/// Catalog builder settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Directory names never descended into.
    pub exclude_dirs: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            exclude_dirs: vec![
                ".vitepress".to_string(),
                "public".to_string(),
                "test".to_string(),
            ],
        }
    }
}

fn default_dir_name() -> String {
    "articles".to_string()
}

fn default_ignore_file_names() -> Vec<String> {
    vec!["index.md".to_string()]
}

// =============================================================================
// Config loading and validation
// =============================================================================

/// Load `docnav.toml` from the content root.
///
/// A missing file yields the stock defaults. A present file is parsed with
/// sparse-override semantics, unknown keys rejected, and validated.
pub fn load_config(root: &Path) -> Result<Config, ConfigError> {
    let config_path = root.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return Ok(Config::default());
    }
    let content = fs::read_to_string(&config_path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `docnav.toml` with all keys and
/// explanations. Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# docnav configuration
# ====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# ---------------------------------------------------------------------------
# Sidebar generation
# ---------------------------------------------------------------------------
[sidebar]
# Directory under the content root scanned for sidebar data.
dir_name = "articles"

# Exact file names that never become sidebar entries.
ignore_file_names = ["index.md"]

# Directory names excluded entirely, descendants included.
ignore_dir_names = ["demo", "asserts"]

# Maximum directory depth. Level 1 is the scan directory's children.
max_level = 3

# Dump the generated tree to stderr after building.
debug_print = false

# ---------------------------------------------------------------------------
# Top navigation generation
# ---------------------------------------------------------------------------
[nav]
# Directory under the content root scanned for nav data.
dir_name = "articles"

# Maximum directory depth. The default of 1 lists top-level entries only.
max_level = 1

# Directory names excluded entirely, descendants included.
ignore_dir_names = ["demo", "asserts", ".git", ".github"]

# Exact file names that never become nav entries.
ignore_file_names = ["index.md"]

# Also list markdown files found directly in the scan root.
include_root_files = false

# Dump the generated list to stderr after building.
debug_print = false

# Nav entries used when the scan directory is missing or yields nothing.
# With no fallback configured, a single entry pointing at the scan
# directory is derived instead. Repeat the block for more entries.
#
# [[nav.fallback]]
# text = "Home"
# link = "/"

# ---------------------------------------------------------------------------
# Catalog generation
# ---------------------------------------------------------------------------
[catalog]
# Directory names never descended into.
exclude_dirs = [".vitepress", "public", "test"]
"##
}
