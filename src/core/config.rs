//! # Configuration Module
//!
//! Provides flexible configuration management for the Potato Util library. This module implements a layered configuration system supporting multiple sources including TOML, YAML and JSON files, environment variables, and programmatic configuration.
//!
//! ## Features
//!
//! - Multiple configuration sources (files, environment variables, code)
//! - Multiple file formats, chosen by extension
//! - Layering with recursive merging; later sources win
//! - Strong validation and error handling
//! - Type-safe configuration values
//!
//! ## Example
//!
//! ```rust,no_run
//! use potato_util::core::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_file(Path::new("config.toml"))
//!     .with_env_prefix("POTATO_")
//!     .build()
//!     .unwrap();
//!
//! // Acquire a read lock to access the configuration.
//! let config_read = config.read();
//! assert!(!config_read.debug);
//! ```

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::core::error::{Result, UtilError};
use crate::merge::deep_merge_into;
use crate::runtime;
use crate::slug::Slugifier;

/// Default prefix for environment variable overrides.
pub const DEFAULT_ENV_PREFIX: &str = "POTATO_";

/// Supported configuration file formats.
///
/// The format is chosen by file extension; there is no content sniffing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML documents (`.toml`).
    Toml,
    /// YAML documents (`.yaml`, `.yml`).
    Yaml,
    /// JSON documents (`.json`).
    Json,
}

impl ConfigFormat {
    /// Determines the configuration format from a file path.
    ///
    /// # Arguments
    /// - `path`: The configuration file path.
    ///
    /// # Returns
    /// - `Ok(ConfigFormat)` for a recognised extension.
    /// - `Err` for a missing or unsupported extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("toml") => Ok(ConfigFormat::Toml),
            Some("yaml") | Some("yml") => Ok(ConfigFormat::Yaml),
            Some("json") => Ok(ConfigFormat::Json),
            _ => Err(UtilError::configuration(
                format!(
                    "Unsupported config file format for '{}'",
                    path.display()
                ),
                Some(path.to_path_buf()),
            )),
        }
    }

    /// Returns the display name of the format.
    fn name(self) -> &'static str {
        match self {
            ConfigFormat::Toml => "TOML",
            ConfigFormat::Yaml => "YAML",
            ConfigFormat::Json => "JSON",
        }
    }
}

/// Settings for the slug transformer.
///
/// Mirrors the options of [`Slugifier`]; [`Config::slugifier`] converts the
/// settings into a validated transformer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SlugSettings {
    #[serde(default = "default_separator")]
    /// Separator character placed between slug segments.
    pub separator: char,

    #[serde(default)]
    /// Optional upper bound on the slug length, in characters.
    pub max_length: Option<usize>,

    #[serde(default = "default_true")]
    /// Whether non-ASCII characters are transliterated to ASCII.
    pub transliterate: bool,
}

impl Default for SlugSettings {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            max_length: None,
            transliterate: true,
        }
    }
}

/// Represents the main configuration structure encompassing all library settings.
///
/// This structure consolidates the debug flag, slug transformer settings and
/// user-defined custom values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    /// Indicates whether the application runs in debug mode.
    pub debug: bool,

    #[serde(default)]
    /// Settings for the slug transformer.
    pub slug: SlugSettings,

    #[serde(default)]
    /// Holds custom configuration values specified by the user.
    pub custom: HashMap<String, JsonValue>,
}

impl Config {
    /// Validates the configuration, ensuring the slug settings are usable.
    pub fn validate(&self) -> Result<()> {
        self.slugifier().map(|_| ())
    }

    /// Builds a [`Slugifier`] from the slug settings.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the separator or length bound is out
    /// of range.
    pub fn slugifier(&self) -> Result<Slugifier> {
        let mut slugifier = Slugifier::new()
            .with_separator(self.slug.separator)?
            .with_transliteration(self.slug.transliterate);
        if let Some(limit) = self.slug.max_length {
            slugifier = slugifier.with_max_length(limit)?;
        }
        Ok(slugifier)
    }

    /// Retrieves a custom configuration value by key, if it exists.
    ///
    /// # Parameters
    /// - `key`: The key to look up.
    ///
    /// # Returns
    /// - `Ok(Some(T))` if the key exists and can be converted to the specified type.
    /// - `Ok(None)` if the key does not exist.
    /// - `Err` if the key exists but cannot be converted to the specified type.
    pub fn get_custom<T: serde::de::DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Option<T>> {
        self.custom
            .get(key)
            .map(|value| {
                serde_json::from_value(value.clone()).map_err(|e| {
                    UtilError::validation(format!(
                        "Invalid custom config value for '{}': {}",
                        key, e
                    ))
                })
            })
            .transpose()
    }

    /// Sets a custom configuration value for the given key.
    ///
    /// # Parameters
    /// - `key`: The key to set.
    /// - `value`: The value to store, which must implement `Serialize`.
    pub fn set_custom<T: Serialize>(
        &mut self,
        key: &str,
        value: T,
    ) -> Result<()> {
        let value = serde_json::to_value(value).map_err(|e| {
            UtilError::validation(format!(
                "Invalid custom config value for '{}': {}",
                key, e
            ))
        })?;
        _ = self.custom.insert(key.to_string(), value);
        Ok(())
    }
}

/// Builds a `Config` instance by allowing multiple configuration sources to be layered.
///
/// The `ConfigBuilder` provides methods for specifying configuration files,
/// environment variables and overrides. Files are merged in the order given,
/// environment variables override files, and programmatic overrides take the
/// highest precedence.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config_files: Vec<PathBuf>,
    env_prefix: Option<String>,
    overrides: Vec<(String, String)>,
}

impl ConfigBuilder {
    /// Initialises a new `ConfigBuilder` instance with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a configuration file to the builder.
    ///
    /// May be called multiple times; later files are merged on top of
    /// earlier ones.
    ///
    /// # Parameters
    /// - `path`: The path to a TOML, YAML or JSON configuration file.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Adds a prefix for environment variables to override configuration values.
    ///
    /// # Parameters
    /// - `prefix`: The prefix for environment variables (e.g., "POTATO_").
    pub fn with_env_prefix<S: Into<String>>(
        mut self,
        prefix: S,
    ) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    /// Adds a key-value pair to override configuration values.
    ///
    /// # Parameters
    /// - `key`: The configuration key to override (e.g., "slug.separator").
    /// - `value`: The new value for the key, in its textual form.
    pub fn with_override<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.overrides.push((key.into(), value.into()));
        self
    }

    /// Builds the final configuration by applying all specified sources in
    /// precedence order.
    ///
    /// Loads and merges configuration files, applies environment and manual
    /// overrides, and validates the final configuration.
    pub fn build(self) -> Result<Arc<RwLock<Config>>> {
        let mut document = JsonValue::Object(serde_json::Map::new());
        for path in &self.config_files {
            let layer = load_from_file(path)?;
            deep_merge_into(&mut document, layer);
        }

        let mut config: Config = serde_json::from_value(document)
            .map_err(|e| {
                UtilError::configuration(
                    format!("Invalid configuration document: {}", e),
                    None,
                )
            })?;

        if let Some(prefix) = self.env_prefix {
            apply_env_overrides(&mut config, &prefix)?;
        }

        for (key, value) in &self.overrides {
            apply_config_value(&mut config, key, value)?;
        }

        config.validate()?;

        Ok(Arc::new(RwLock::new(config)))
    }
}

// Internal helper functions

fn load_from_file(path: &Path) -> Result<JsonValue> {
    let format = ConfigFormat::from_path(path)?;
    let content = fs::read_to_string(path)
        .map_err(|e| UtilError::io(path.to_path_buf(), e))?;
    parse_document(&content, format, path)
}

fn parse_document(
    content: &str,
    format: ConfigFormat,
    path: &Path,
) -> Result<JsonValue> {
    match format {
        ConfigFormat::Toml => {
            let value: toml::Value =
                toml::from_str(content).map_err(|e| {
                    UtilError::parse(
                        path.to_path_buf(),
                        format.name(),
                        Box::new(e),
                    )
                })?;
            serde_json::to_value(value).map_err(|e| {
                UtilError::parse(
                    path.to_path_buf(),
                    format.name(),
                    Box::new(e),
                )
            })
        }
        ConfigFormat::Yaml => {
            serde_yml::from_str(content).map_err(|e| {
                UtilError::parse(
                    path.to_path_buf(),
                    format.name(),
                    Box::new(e),
                )
            })
        }
        ConfigFormat::Json => {
            serde_json::from_str(content).map_err(|e| {
                UtilError::parse(
                    path.to_path_buf(),
                    format.name(),
                    Box::new(e),
                )
            })
        }
    }
}

fn apply_env_overrides(
    config: &mut Config,
    prefix: &str,
) -> Result<()> {
    for (key, value) in env::vars() {
        // Strip the prefix and ensure no leading underscores remain
        if let Some(stripped) = key.strip_prefix(prefix) {
            let config_key =
                stripped.trim_start_matches('_').to_lowercase();
            apply_config_value(config, &config_key, &value)?;
        }
    }
    Ok(())
}

fn apply_config_value(
    config: &mut Config,
    key: &str,
    value: &str,
) -> Result<()> {
    match key {
        "debug" => config.debug = runtime::is_truthy(value),
        "slug_separator" | "slug.separator" => {
            config.slug.separator = parse_separator(value)?;
        }
        "slug_max_length" | "slug.max_length" => {
            config.slug.max_length = parse_max_length(value)?;
        }
        "slug_transliterate" | "slug.transliterate" => {
            config.slug.transliterate = runtime::is_truthy(value);
        }
        _ => {
            if let Some((section, rest)) = key.split_once('.') {
                if section == "custom" {
                    _ = config.custom.insert(
                        rest.to_string(),
                        JsonValue::String(value.to_string()),
                    );
                } else {
                    return Err(UtilError::configuration(
                        format!(
                            "Unknown configuration section: {}",
                            section
                        ),
                        None,
                    ));
                }
            } else if let Some(rest) = key.strip_prefix("custom_") {
                _ = config.custom.insert(
                    rest.to_string(),
                    JsonValue::String(value.to_string()),
                );
            } else {
                return Err(UtilError::configuration(
                    format!("Unknown configuration key: {}", key),
                    None,
                ));
            }
        }
    }
    Ok(())
}

fn parse_separator(value: &str) -> Result<char> {
    let trimmed = value.trim();
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(separator), None) => Ok(separator),
        _ => Err(UtilError::validation(format!(
            "Invalid slug separator '{}': expected a single character",
            value
        ))),
    }
}

fn parse_max_length(value: &str) -> Result<Option<usize>> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    let limit = trimmed.parse::<usize>().map_err(|e| {
        UtilError::validation(format!(
            "Invalid slug length bound '{}': {}",
            value, e
        ))
    })?;
    Ok(Some(limit))
}

// Default value functions
fn default_true() -> bool {
    true
}

fn default_separator() -> char {
    '-'
}
