//! Configuration for the process-wide logging state
//!
//! A [`Config`] describes the switches, the custom levels to register and
//! the default threshold for new loggers. Loading it from a file is left to
//! the application: it is a plain serde type.

mod presets;

use std::collections::{BTreeMap, HashMap};

use lantern_level::{Level, LevelError, check_level, register_level};
use serde::{Deserialize, Serialize};

use crate::core::{LogError, LogResult};
use crate::logger::Logger;
use crate::methods::add_level_methods;
use crate::switches;

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Let the per-level operations emit (default `true`)
    pub writes_enabled: bool,

    /// Capture call-site locations (default `false`)
    pub tracing_enabled: bool,

    /// Threshold applied by [`Config::new_logger`]; `None` leaves loggers
    /// without an explicit threshold
    pub default_level: Option<String>,

    /// Custom levels to register, name → value
    pub custom_levels: BTreeMap<String, u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            writes_enabled: true,
            tracing_enabled: false,
            default_level: None,
            custom_levels: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Install this configuration process-wide
    ///
    /// Registers the custom levels and their level methods, then sets both
    /// switches. Everything is checked with [`validate`](Self::validate)
    /// first, so nothing is changed if a custom level or the default level
    /// is invalid.
    pub fn apply(&self) -> LogResult<()> {
        self.validate()?;

        for (name, value) in &self.custom_levels {
            let level = register_level(name, *value)?;
            add_level_methods(&level)?;
            tracing::debug!(level = level.name(), value, "custom level registered");
        }

        if self.writes_enabled {
            switches::enable_all_log_writes();
        } else {
            switches::disable_all_log_writes();
        }
        if self.tracing_enabled {
            switches::enable_log_tracing();
        } else {
            switches::disable_log_tracing();
        }
        Ok(())
    }

    /// Check the custom levels and the default level without touching any
    /// global state
    ///
    /// Custom levels must be accepted by the level table and must not clash
    /// with each other. A default level may name one of them.
    pub fn validate(&self) -> LogResult<()> {
        let mut values: HashMap<String, u64> = HashMap::new();
        let mut owners: HashMap<u64, String> = HashMap::new();
        for (name, &value) in &self.custom_levels {
            check_level(name, value)?;
            let key = name.to_ascii_uppercase();
            if let Some(&existing) = values.get(&key).filter(|&&existing| existing != value) {
                return Err(LevelError::Conflict {
                    name: key,
                    existing,
                    requested: value,
                }
                .into());
            }
            if let Some(owner) = owners.get(&value).filter(|owner| **owner != key) {
                return Err(LevelError::ValueTaken {
                    value,
                    owner: owner.clone(),
                }
                .into());
            }
            values.insert(key.clone(), value);
            owners.insert(value, key);
        }

        if let Some(name) = &self.default_level {
            let known = Level::try_resolve(name.as_str()).is_some()
                || self
                    .custom_levels
                    .keys()
                    .any(|custom| custom.eq_ignore_ascii_case(name));
            if !known {
                return Err(LogError::Config(format!("unknown default level '{name}'")));
            }
        }
        Ok(())
    }

    /// Create a logger carrying the configured default threshold
    pub fn new_logger(&self, category: impl Into<String>) -> Logger {
        let logger = Logger::new(category);
        if let Some(level) = &self.default_level {
            logger.set_level(level.as_str());
        }
        logger
    }
}
