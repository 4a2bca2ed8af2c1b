//! Error handling for lantern-log

use lantern_level::LevelError;

/// Result type for fallible lantern-log operations
pub type LogResult<T> = Result<T, LogError>;

/// Errors returned by the strict APIs
///
/// Logging itself is infallible: the lenient paths fall back to default
/// levels instead of producing one of these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LogError {
    /// The input does not name any registered level
    #[error("unknown level '{0}'")]
    UnknownLevel(String),

    /// No level method is registered under this name
    #[error("no level method named '{0}'")]
    UnknownMethod(String),

    /// Level table rejected a registration
    #[error(transparent)]
    Level(#[from] LevelError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            LogError::UnknownMethod("shout".to_string()).to_string(),
            "no level method named 'shout'"
        );
        let wrapped: LogError = LevelError::Reserved("INFO".to_string()).into();
        assert_eq!(wrapped.to_string(), "level 'INFO' is reserved");
    }
}
