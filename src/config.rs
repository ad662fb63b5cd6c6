//! Site configuration module.
//!
//! Handles loading and validating `config.toml` from the content root.
//! Configuration is sparse: stock defaults apply, user files override only
//! the values they name. Unknown keys are rejected to catch typos early.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = "Blog"                  # Site title, shown in the header and the
//!                                 # global index pages
//! default_author = "admin"        # Author for entries without an author marker
//! page_size = 5                   # Entries per index page
//! date_format = "%a, %d %b %Y %H:%M:%S"  # chrono format for publish dates
//! assets = ["style.css", "logo.png"]     # Files copied from the content root
//!                                        # into the output root
//!
//! [serve]
//! port = 8888                     # Preview server port
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site title, used for the global index pages and the page header.
    pub title: String,
    /// Author assigned to entries without an `author` marker.
    pub default_author: String,
    /// Number of entries per index page.
    pub page_size: usize,
    /// chrono format string for the human-readable publish date.
    pub date_format: String,
    /// Static assets copied from the content root into the output root.
    pub assets: Vec<String>,
    /// Preview server settings.
    pub serve: ServeConfig,
}

/// Preview server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServeConfig {
    /// TCP port the preview server listens on.
    pub port: u16,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),
            default_author: "admin".to_string(),
            page_size: 5,
            date_format: "%a, %d %b %Y %H:%M:%S".to_string(),
            assets: vec!["style.css".to_string(), "logo.png".to_string()],
            serve: ServeConfig::default(),
        }
    }
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self { port: 8888 }
    }
}

/// Load `config.toml` from the content root, falling back to stock defaults
/// when the file doesn't exist. Parse and validation errors are fatal.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let path = root.join("config.toml");
    let config = if path.is_file() {
        let content = fs::read_to_string(&path)?;
        toml::from_str(&content)?
    } else {
        SiteConfig::default()
    };
    validate(&config)?;
    Ok(config)
}

fn validate(config: &SiteConfig) -> Result<(), ConfigError> {
    if config.page_size == 0 {
        return Err(ConfigError::Validation(
            "page_size must be at least 1".to_string(),
        ));
    }
    if config.title.trim().is_empty() {
        return Err(ConfigError::Validation(
            "title must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// A fully documented stock `config.toml`, printed by `gen-config`.
pub fn stock_config_toml() -> String {
    r#"# paperpress site configuration
# All options are optional - the values below are the defaults.

# Site title, shown in the header and used for the global index pages.
title = "Blog"

# Author assigned to entries that carry no <!--author: ...--> marker.
default_author = "admin"

# Entries per index page.
page_size = 5

# chrono format string for publish dates.
date_format = "%a, %d %b %Y %H:%M:%S"

# Files copied verbatim from the content root into the output root.
# A missing asset is skipped with a notice; a missing style.css is
# replaced by the built-in stylesheet.
assets = ["style.css", "logo.png"]

[serve]
# Preview server port.
port = 8888
"#
    .to_string()
}
