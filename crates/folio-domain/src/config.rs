//! Configuration for folio-domain
//!
//! Defaults for the locale a reader works in, how titles and author lists
//! are joined, and the prefix handed to identifier minters.

use serde::{Deserialize, Serialize};

use crate::locale::{Locale, LocaleProvider};
use crate::title::SeparatorJoiner;

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FolioConfig {
    pub locale: LocaleConfig,
    pub titles: TitleConfig,
    pub authors: AuthorConfig,
    pub identifiers: IdentifierConfig,
}

/// Locale settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LocaleConfig {
    /// Locale used when a caller does not ask for one
    pub default_locale: Locale,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            default_locale: "en_US".to_string(),
        }
    }
}

/// Title assembly settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TitleConfig {
    /// Placed between title and subtitle
    pub separator: String,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            separator: ": ".to_string(),
        }
    }
}

/// Author list settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AuthorConfig {
    /// Placed between names in an author string
    pub separator: String,
}

impl Default for AuthorConfig {
    fn default() -> Self {
        Self {
            separator: ", ".to_string(),
        }
    }
}

/// Identifier settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct IdentifierConfig {
    /// DOI prefix such as `10.1234`; DOI minting is off when unset
    pub doi_prefix: Option<String>,
}

impl FolioConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse TOML and validate the result
    pub fn load(toml_str: &str) -> crate::error::Result<Self> {
        let config = Self::from_toml(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        tracing::debug!(default_locale = %config.locale.default_locale, "loaded configuration");
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.locale.default_locale.is_empty() {
            return Err(ConfigError::MissingField("locale.default_locale".to_string()));
        }
        if self.titles.separator.is_empty() {
            return Err(ConfigError::MissingField("titles.separator".to_string()));
        }
        if self.authors.separator.is_empty() {
            return Err(ConfigError::MissingField("authors.separator".to_string()));
        }
        if let Some(prefix) = &self.identifiers.doi_prefix {
            if prefix.is_empty() {
                return Err(ConfigError::MissingField("identifiers.doi_prefix".to_string()));
            }
        }
        Ok(())
    }

    /// Title joiner using the configured separator
    pub fn title_joiner(&self) -> SeparatorJoiner {
        SeparatorJoiner::new(self.titles.separator.clone())
    }
}

impl LocaleProvider for FolioConfig {
    fn active_locale(&self) -> Locale {
        self.locale.default_locale.clone()
    }
}

/// Configuration validation error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Required field is missing or empty
    #[error("Missing field: {0}")]
    MissingField(String),

    /// The configuration text could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),
}
