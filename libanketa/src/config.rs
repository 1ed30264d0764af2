//! Configuration management for Anketa

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::date_picker::{AgeBounds, DEFAULT_MAX_AGE_YEARS, DEFAULT_MIN_AGE_YEARS};
use crate::error::{ConfigError, Result};
use crate::locale::Locale;

/// Mailbox that receives questionnaires unless the config says otherwise
pub const DEFAULT_RECIPIENT: &str = "anketa@morskaya-zvezda.example";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub mail: MailConfig,
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub picker: PickerConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MailConfig {
    pub recipients: Vec<String>,
    /// Program that opens `mailto:` links; platform default when unset
    #[serde(default)]
    pub opener: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default)]
    pub locale: Locale,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickerConfig {
    #[serde(default = "default_min_age")]
    pub min_age_years: u32,
    #[serde(default = "default_max_age")]
    pub max_age_years: u32,
}

fn default_min_age() -> u32 {
    DEFAULT_MIN_AGE_YEARS
}

fn default_max_age() -> u32 {
    DEFAULT_MAX_AGE_YEARS
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            recipients: vec![DEFAULT_RECIPIENT.to_string()],
            opener: None,
        }
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            min_age_years: DEFAULT_MIN_AGE_YEARS,
            max_age_years: DEFAULT_MAX_AGE_YEARS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl PickerConfig {
    pub fn bounds(&self) -> Result<AgeBounds> {
        Ok(AgeBounds::new(self.min_age_years, self.max_age_years)?)
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// A missing file is not an error: the built-in defaults are used.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        if !config_path.exists() {
            tracing::debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::default_config());
        }
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Create a default configuration
    pub fn default_config() -> Self {
        Self {
            mail: MailConfig::default(),
            form: FormConfig::default(),
            picker: PickerConfig::default(),
        }
    }

    /// Check values that TOML parsing alone cannot
    pub fn validate(&self) -> Result<()> {
        if self.mail.recipients.iter().all(|r| r.trim().is_empty()) {
            return Err(ConfigError::MissingField("mail.recipients".to_string()).into());
        }
        self.picker.bounds()?;
        Ok(())
    }
}

/// Resolve the configuration file path (XDG config directory by default)
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("ANKETA_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("anketa").join("config.toml"))
}
