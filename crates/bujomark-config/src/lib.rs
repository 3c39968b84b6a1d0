//! Bujomark Config
//!
//! This crate handles configuration loading and management for bujomark,
//! supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/bujomark/config.toml`
//! - macOS: `~/Library/Application Support/bujomark/config.toml`
//! - Windows: `%APPDATA%\bujomark\config.toml`
//!
//! The bullet table itself is kept in the same plain-text block form the
//! original wiki plugin used (one `marker glyph` pair per line), embedded
//! in the TOML as a multiline string.
//!
//! # Example
//!
//! ```no_run
//! use bujomark_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//! let table = config.bullet_table();
//! assert!(table.contains("*"));
//! ```

mod bullets;
mod render;

pub use bullets::BulletTable;
pub use render::RenderConfig;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use bujomark_core::{BujomarkError, Result};

/// Default TOML configuration string.
///
/// The bullet set mirrors the original plugin's shipped defaults.
const DEFAULT_TOML: &str = r#"[bujo]
Bullets = """
* •
x ✘
> ›
< ‹
- –
o ○
"""
Indent = "\t"

[render]
IndentUnits = 4
ForwardParagraphs = true
"#;

/// Bujo block configuration: the bullet table and the indent marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BujoConfig {
    /// Bullet table in text-block form, one `marker glyph` pair per line.
    #[serde(default = "default_bullets")]
    pub bullets: String,

    /// The literal string representing one indent level. Matched verbatim
    /// against input and never trimmed; whitespace is a valid value.
    #[serde(default = "default_indent")]
    pub indent: String,
}

impl Default for BujoConfig {
    fn default() -> Self {
        Self {
            bullets: default_bullets(),
            indent: default_indent(),
        }
    }
}

impl BujoConfig {
    /// Merge another BujoConfig into this one.
    pub fn merge(&mut self, other: &BujoConfig) {
        self.bullets = other.bullets.clone();
        self.indent = other.indent.clone();
    }
}

fn default_bullets() -> String {
    "* •\nx ✘\n> ›\n< ‹\n- –\no ○\n".to_string()
}

fn default_indent() -> String {
    "\t".to_string()
}

/// Main configuration structure.
///
/// Contains all configuration sections for bujomark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Bullet table and indent marker
    #[serde(default)]
    pub bujo: BujoConfig,

    /// Render options
    #[serde(default)]
    pub render: RenderConfig,
}

impl Default for Config {
    fn default() -> Self {
        // Parse the default TOML to ensure consistency
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// This can be used to show users the default config or
    /// to write a default config file.
    ///
    /// # Example
    ///
    /// ```
    /// use bujomark_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[bujo]"));
    /// assert!(toml.contains("[render]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "bujomark")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "bujomark")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Ensures the config file exists, creating it with defaults if not.
    ///
    /// # Returns
    ///
    /// The path to the config file.
    pub fn ensure_config_file() -> Result<PathBuf> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| BujomarkError::Config("Could not determine config directory".into()))?;

        // Create directory if it doesn't exist
        std::fs::create_dir_all(&config_dir)?;

        let config_path = config_dir.join("config.toml");

        // Create default config if file doesn't exist
        if !config_path.exists() {
            std::fs::write(&config_path, DEFAULT_TOML)?;
        }

        Ok(config_path)
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                let content = std::fs::read_to_string(&config_path)?;
                return toml::from_str(&content)
                    .map_err(|e| BujomarkError::Config(format!("Parse error: {}", e)));
            }
        }

        // Return defaults if no config found
        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML configuration file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            BujomarkError::Config(format!("Parse error in {}: {}", path.display(), e))
        })
    }

    /// Load configuration with an optional override file or string.
    ///
    /// 1. Load the base config from the default location
    /// 2. If an override is provided:
    ///    - If it's a path to an existing file, load and merge it
    ///    - Otherwise, treat it as an inline TOML string and parse it
    ///
    /// # Arguments
    ///
    /// * `override_config` - Optional path to override file or inline TOML string
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        // Start with base config
        let mut config = Self::load()?;

        // Apply override if provided
        if let Some(override_str) = override_config {
            let override_path = Path::new(override_str);

            let override_toml = if override_path.exists() {
                // It's a file path
                std::fs::read_to_string(override_path)?
            } else {
                // Treat as inline TOML
                override_str.to_string()
            };

            // Parse and merge
            let override_config: Config = toml::from_str(&override_toml)
                .map_err(|e| BujomarkError::Config(format!("Override parse error: {}", e)))?;

            config.merge(&override_config);
        }

        Ok(config)
    }

    /// Merge another config into this one.
    ///
    /// Values from `other` take precedence over values in `self`.
    pub fn merge(&mut self, other: &Config) {
        self.bujo.merge(&other.bujo);
        self.render.merge(&other.render);
    }

    /// Save configuration to a file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to save the configuration to
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| BujomarkError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }

    /// Parse the configured bullet table.
    ///
    /// # Example
    ///
    /// ```
    /// use bujomark_config::Config;
    /// let config = Config::default();
    /// let table = config.bullet_table();
    /// assert_eq!(table.glyph_for("*"), "•");
    /// ```
    pub fn bullet_table(&self) -> BulletTable {
        BulletTable::parse(&self.bujo.bullets)
    }
}
