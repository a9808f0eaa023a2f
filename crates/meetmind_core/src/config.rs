//! Runtime configuration for the meeting history core.
//!
//! All values come from `MEETMIND_*` environment variables with defaults.

use crate::logging::default_log_level;
use crate::notify::toast_center::DEFAULT_TOAST_TTL;
use crate::repo::meeting_repo::DEFAULT_STORAGE_KEY;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::time::Duration;

pub const ENV_STORAGE_KEY: &str = "MEETMIND_STORAGE_KEY";
pub const ENV_DB_PATH: &str = "MEETMIND_DB_PATH";
pub const ENV_TOAST_TTL_MS: &str = "MEETMIND_TOAST_TTL_MS";
pub const ENV_LOG_LEVEL: &str = "MEETMIND_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "MEETMIND_LOG_DIR";

const DEFAULT_DB_PATH: &str = "./data/meetmind.sqlite3";

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub variable: &'static str,
    pub value: String,
    pub reason: &'static str,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid value `{}` for {}: {}",
            self.value, self.variable, self.reason
        )
    }
}

impl Error for ConfigError {}

/// Core configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// Name of the persisted history entry.
    pub storage_key: String,
    /// SQLite file backing the entry storage.
    pub db_path: PathBuf,
    pub toast_ttl: Duration,
    pub log_level: String,
    /// Logging stays off when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            toast_ttl: DEFAULT_TOAST_TTL,
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let non_blank = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let toast_ttl = match non_blank(ENV_TOAST_TTL_MS) {
            Some(raw) => parse_ttl(&raw)?,
            None => defaults.toast_ttl,
        };

        Ok(Self {
            storage_key: non_blank(ENV_STORAGE_KEY).unwrap_or(defaults.storage_key),
            db_path: non_blank(ENV_DB_PATH)
                .map(PathBuf::from)
                .unwrap_or(defaults.db_path),
            toast_ttl,
            log_level: non_blank(ENV_LOG_LEVEL).unwrap_or(defaults.log_level),
            log_dir: non_blank(ENV_LOG_DIR).map(PathBuf::from),
        })
    }
}

fn parse_ttl(raw: &str) -> Result<Duration, ConfigError> {
    let invalid = |reason| ConfigError {
        variable: ENV_TOAST_TTL_MS,
        value: raw.to_string(),
        reason,
    };
    let millis = raw
        .trim()
        .parse::<u64>()
        .map_err(|_| invalid("expected an integer number of milliseconds"))?;
    if millis == 0 {
        return Err(invalid("must be greater than zero"));
    }
    Ok(Duration::from_millis(millis))
}
