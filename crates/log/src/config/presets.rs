//! Configuration presets for common scenarios

use super::Config;

impl Config {
    /// Create configuration from environment variables
    ///
    /// - `LANTERN_LOG_WRITES`: `0`/`false` disables log writes
    /// - `LANTERN_LOG_TRACING`: anything but `0`/`false` enables call-site capture
    /// - `LANTERN_LOG_LEVEL`: default threshold for new loggers
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(v) = lookup("LANTERN_LOG_WRITES") {
            config.writes_enabled = flag(&v);
        }
        if let Some(v) = lookup("LANTERN_LOG_TRACING") {
            config.tracing_enabled = flag(&v);
        }
        if let Some(level) = lookup("LANTERN_LOG_LEVEL") {
            config.default_level = Some(level);
        }

        config
    }

    /// Development configuration (call-site capture, debug threshold)
    #[must_use]
    pub fn development() -> Self {
        Self {
            tracing_enabled: true,
            default_level: Some("DEBUG".to_string()),
            ..Self::default()
        }
    }

    /// Production configuration (no call-site capture, info threshold)
    #[must_use]
    pub fn production() -> Self {
        Self {
            tracing_enabled: false,
            default_level: Some("INFO".to_string()),
            ..Self::default()
        }
    }
}

fn flag(value: &str) -> bool {
    value != "0" && !value.eq_ignore_ascii_case("false")
}
