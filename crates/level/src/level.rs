//! The [`Level`] value type

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::{LevelError, LevelResult};
use crate::resolve::IntoLevel;

/// A named severity with a total order given by its numeric value
///
/// Values are unique across the level table, so equality, hashing and
/// ordering all look at the value only. New levels come from the associated
/// constants or from [`register_level`](crate::register_level); there is no
/// public constructor, which keeps every `Level` in circulation resolvable.
///
/// # Example
///
/// ```rust
/// use lantern_level::Level;
///
/// assert!(Level::INFO < Level::WARN);
/// assert_eq!(Level::WARN.to_string(), "WARN");
/// assert_eq!(Level::WARN.value(), 30_000);
/// ```
#[derive(Debug, Clone)]
pub struct Level {
    value: u64,
    name: Cow<'static, str>,
}

impl Level {
    /// Threshold sentinel that accepts every level
    pub const ALL: Level = Level::builtin("ALL", 0);
    /// Finest-grained diagnostics
    pub const TRACE: Level = Level::builtin("TRACE", 5_000);
    /// Debugging information
    pub const DEBUG: Level = Level::builtin("DEBUG", 10_000);
    /// Normal operational messages
    pub const INFO: Level = Level::builtin("INFO", 20_000);
    /// Something unexpected that the program recovered from
    pub const WARN: Level = Level::builtin("WARN", 30_000);
    /// An operation failed
    pub const ERROR: Level = Level::builtin("ERROR", 40_000);
    /// The program cannot continue
    pub const FATAL: Level = Level::builtin("FATAL", 50_000);
    /// Markers that should always get through unless logging is off
    pub const MARK: Level = Level::builtin("MARK", 9_007_199_254_740_992);
    /// Threshold sentinel that rejects every level
    pub const OFF: Level = Level::builtin("OFF", u64::MAX);

    /// The seven levels that get convenience operations on a logger
    pub const WELL_KNOWN: [Level; 7] = [
        Level::TRACE,
        Level::DEBUG,
        Level::INFO,
        Level::WARN,
        Level::ERROR,
        Level::FATAL,
        Level::MARK,
    ];

    /// Every level defined by this crate, in ascending order
    pub(crate) const BUILTIN: [Level; 9] = [
        Level::ALL,
        Level::TRACE,
        Level::DEBUG,
        Level::INFO,
        Level::WARN,
        Level::ERROR,
        Level::FATAL,
        Level::MARK,
        Level::OFF,
    ];

    const fn builtin(name: &'static str, value: u64) -> Self {
        Self {
            value,
            name: Cow::Borrowed(name),
        }
    }

    pub(crate) fn custom(name: String, value: u64) -> Self {
        Self {
            value,
            name: Cow::Owned(name),
        }
    }

    /// Canonical upper-case name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Numeric position in the order
    pub const fn value(&self) -> u64 {
        self.value
    }

    /// Whether this is one of the levels defined by the crate itself
    pub fn is_builtin(&self) -> bool {
        Self::BUILTIN.iter().any(|level| level.value == self.value)
    }

    /// `self <= other`
    pub fn is_less_than_or_equal_to(&self, other: &Level) -> bool {
        self.value <= other.value
    }

    /// `self >= other`
    pub fn is_greater_than_or_equal_to(&self, other: &Level) -> bool {
        self.value >= other.value
    }

    /// `self == other`
    pub fn is_equal_to(&self, other: &Level) -> bool {
        self.value == other.value
    }

    /// Resolve `input`, returning `fallback` when it is absent or unknown
    ///
    /// This is the lenient path used by loggers: it never fails.
    pub fn resolve(input: impl IntoLevel, fallback: Level) -> Level {
        input.into_level().unwrap_or(fallback)
    }

    /// Resolve `input` without a fallback
    pub fn try_resolve(input: impl IntoLevel) -> Option<Level> {
        input.into_level()
    }

    /// Strictly parse a level name (case-insensitive)
    pub fn parse(name: &str) -> LevelResult<Level> {
        crate::table::lookup(name).ok_or_else(|| LevelError::Unknown(name.to_string()))
    }
}

impl PartialEq for Level {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Level {}

impl Hash for Level {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl PartialOrd for Level {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Level {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.name)
    }
}

impl FromStr for Level {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::parse(s)
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::TRACE
    }
}
