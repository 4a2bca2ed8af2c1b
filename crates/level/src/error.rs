//! Errors raised by strict level parsing and custom level registration

/// Result alias for level operations
pub type LevelResult<T> = Result<T, LevelError>;

/// Level parsing and registration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LevelError {
    /// The name or value does not match any known level
    #[error("unknown level '{0}'")]
    Unknown(String),

    /// A level name must be non-empty ASCII letters, digits or underscores
    #[error("invalid level name '{0}'")]
    InvalidName(String),

    /// Well-known levels cannot be redefined
    #[error("level '{0}' is reserved")]
    Reserved(String),

    /// The name is already registered with another value
    #[error("level '{name}' already registered with value {existing}, requested {requested}")]
    Conflict {
        /// Level name
        name: String,
        /// Value in the table
        existing: u64,
        /// Value passed to the registration
        requested: u64,
    },

    /// Another level already owns this value
    #[error("value {value} is already used by level '{owner}'")]
    ValueTaken {
        /// Requested value
        value: u64,
        /// Name currently holding the value
        owner: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            LevelError::Unknown("loud".to_string()).to_string(),
            "unknown level 'loud'"
        );
        let conflict = LevelError::Conflict {
            name: "AUDIT".to_string(),
            existing: 1,
            requested: 2,
        };
        assert!(conflict.to_string().contains("value 1, requested 2"));
    }
}
