//! User configuration
//!
//! Defaults for the poll organizer and provider, read from a TOML file and
//! overridden by `DATEPOLL_*` environment variables. Command line flags take
//! precedence over both.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::expr::WeekdayTable;
use crate::transport::DEFAULT_TIMEOUT;

pub const ENV_PROVIDER_URL: &str = "DATEPOLL_PROVIDER_URL";
pub const ENV_NAME: &str = "DATEPOLL_NAME";
pub const ENV_EMAIL: &str = "DATEPOLL_EMAIL";
pub const ENV_LOCALE: &str = "DATEPOLL_LOCALE";
pub const ENV_TIMEOUT_SECS: &str = "DATEPOLL_TIMEOUT_SECS";

/// Location of the default config file, `<config dir>/datepoll/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("datepoll").join("config.toml"))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatepollConfig {
    /// Base URL of the Framadate installation
    pub provider_url: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    /// Language of weekday abbreviations ("en" or "de")
    pub locale: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl DatepollConfig {
    /// Load configuration from `path`, or from the default location.
    ///
    /// A missing default file yields an empty configuration; a missing
    /// explicit file is an error. Environment variables are merged last.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load_from(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => Self::load_from(&path)?,
                _ => Self::default(),
            },
        };
        config.merge_env_vars();
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::Config(format!(
                "config file {} does not exist",
                path.display()
            )));
        }
        debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn merge_env_vars(&mut self) {
        self.merge_env_with(|key| std::env::var(key).ok());
    }

    /// Merge overrides from `lookup`, which maps variable names to values.
    pub fn merge_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_PROVIDER_URL) {
            self.provider_url = Some(url);
        }

        if let Some(name) = lookup(ENV_NAME) {
            self.name = Some(name);
        }

        if let Some(email) = lookup(ENV_EMAIL) {
            self.email = Some(email);
        }

        if let Some(locale) = lookup(ENV_LOCALE) {
            self.locale = Some(locale);
        }

        if let Some(timeout) = lookup(ENV_TIMEOUT_SECS) {
            match timeout.parse::<u64>() {
                Ok(value) => self.timeout_secs = Some(value),
                Err(_) => warn!("Ignoring {}={}: not a number of seconds", ENV_TIMEOUT_SECS, timeout),
            }
        }
    }

    /// Weekday abbreviations for the configured locale, English by default
    pub fn weekday_table(&self) -> Result<WeekdayTable> {
        match self.locale.as_deref() {
            None => Ok(WeekdayTable::default()),
            Some(locale) => WeekdayTable::for_locale(locale).ok_or_else(|| {
                Error::Config(format!("unsupported locale '{}' (expected en or de)", locale))
            }),
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT)
    }
}
