//! Conversion of loosely typed input into a [`Level`]

use crate::level::Level;
use crate::table;

/// Input that may name a level
///
/// Implemented for levels, level names (case-insensitive), numeric level
/// values and `Option`s of those. `None`, unknown names and unknown values
/// all fail to resolve, leaving the fallback decision to the caller.
pub trait IntoLevel: Sized {
    /// Look the input up in the level table, handing back a description of
    /// the input when it names no level
    fn try_into_level(self) -> Result<Level, String>;

    /// Look the input up in the level table
    fn into_level(self) -> Option<Level> {
        self.try_into_level().ok()
    }
}

impl IntoLevel for Level {
    fn try_into_level(self) -> Result<Level, String> {
        Ok(self)
    }
}

impl IntoLevel for &Level {
    fn try_into_level(self) -> Result<Level, String> {
        Ok(self.clone())
    }
}

impl IntoLevel for &str {
    fn try_into_level(self) -> Result<Level, String> {
        table::lookup(self).ok_or_else(|| self.to_string())
    }
}

impl IntoLevel for String {
    fn try_into_level(self) -> Result<Level, String> {
        table::lookup(&self).ok_or(self)
    }
}

impl IntoLevel for &String {
    fn try_into_level(self) -> Result<Level, String> {
        self.as_str().try_into_level()
    }
}

impl IntoLevel for u64 {
    fn try_into_level(self) -> Result<Level, String> {
        table::lookup_value(self).ok_or_else(|| self.to_string())
    }
}

impl<T: IntoLevel> IntoLevel for Option<T> {
    fn try_into_level(self) -> Result<Level, String> {
        self.map_or_else(|| Err("none".to_string()), IntoLevel::try_into_level)
    }
}
