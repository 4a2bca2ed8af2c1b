//! Process-wide level table
//!
//! The table starts with the built-in levels and grows through
//! [`register_level`]. Lookups take a read lock; registration a write lock.

use std::collections::HashMap;
use std::sync::LazyLock;

use parking_lot::RwLock;

use crate::error::{LevelError, LevelResult};
use crate::level::Level;

/// Name-keyed table of every resolvable level
struct LevelTable {
    by_name: HashMap<String, Level>,
}

impl LevelTable {
    fn new() -> Self {
        let by_name = Level::BUILTIN
            .iter()
            .map(|level| (level.name().to_string(), level.clone()))
            .collect();
        Self { by_name }
    }

    fn by_value(&self, value: u64) -> Option<&Level> {
        self.by_name.values().find(|level| level.value() == value)
    }

    fn check(&self, name: &str, value: u64) -> LevelResult<Slot> {
        let key = normalize(name)?;

        if let Some(existing) = self.by_name.get(&key) {
            return if existing.value() == value {
                Ok(Slot::Existing(existing.clone()))
            } else if existing.is_builtin() {
                Err(LevelError::Reserved(key))
            } else {
                Err(LevelError::Conflict {
                    name: key,
                    existing: existing.value(),
                    requested: value,
                })
            };
        }

        if let Some(owner) = self.by_value(value) {
            return Err(LevelError::ValueTaken {
                value,
                owner: owner.name().to_string(),
            });
        }

        Ok(Slot::Free(key))
    }

    fn register(&mut self, name: &str, value: u64) -> LevelResult<Level> {
        match self.check(name, value)? {
            Slot::Existing(level) => Ok(level),
            Slot::Free(key) => {
                let level = Level::custom(key.clone(), value);
                self.by_name.insert(key, level.clone());
                Ok(level)
            }
        }
    }
}

/// Outcome of checking a registration
enum Slot {
    Existing(Level),
    Free(String),
}

static TABLE: LazyLock<RwLock<LevelTable>> = LazyLock::new(|| RwLock::new(LevelTable::new()));

fn normalize(name: &str) -> LevelResult<String> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(name.to_ascii_uppercase())
    } else {
        Err(LevelError::InvalidName(name.to_string()))
    }
}

/// Find a level by name, ignoring case
pub fn lookup(name: &str) -> Option<Level> {
    TABLE.read().by_name.get(&name.to_ascii_uppercase()).cloned()
}

/// Find a level by its numeric value
pub fn lookup_value(value: u64) -> Option<Level> {
    TABLE.read().by_value(value).cloned()
}

/// Add a custom level to the process-wide table
///
/// The name is stored upper-cased. Registering a name again with the same
/// value returns the existing level.
///
/// # Errors
///
/// - [`LevelError::InvalidName`] for empty names or names with characters
///   other than ASCII letters, digits and `_`
/// - [`LevelError::Reserved`] when redefining a built-in name
/// - [`LevelError::Conflict`] when the name exists with another value
/// - [`LevelError::ValueTaken`] when another name owns the value
///
/// # Example
///
/// ```rust
/// use lantern_level::{Level, register_level};
///
/// let audit = register_level("audit", 35_000).unwrap();
/// assert_eq!(audit.name(), "AUDIT");
/// assert_eq!(Level::resolve("Audit", Level::INFO), audit);
/// assert!(Level::WARN < audit && audit < Level::ERROR);
/// ```
pub fn register_level(name: &str, value: u64) -> LevelResult<Level> {
    TABLE.write().register(name, value)
}

/// Whether [`register_level`] would accept `name` and `value`, without
/// changing the table
///
/// Returns the same errors as [`register_level`].
pub fn check_level(name: &str, value: u64) -> LevelResult<()> {
    TABLE.read().check(name, value).map(|_| ())
}

/// Snapshot of the table, sorted by value
pub fn levels() -> Vec<Level> {
    let mut all: Vec<Level> = TABLE.read().by_name.values().cloned().collect();
    all.sort();
    all
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtins_present() {
        let all = levels();
        for builtin in Level::BUILTIN {
            assert!(all.contains(&builtin), "missing {builtin}");
        }
        assert_eq!(all.first(), Some(&Level::ALL));
        assert_eq!(all.last(), Some(&Level::OFF));
    }

    #[test]
    fn test_register_and_lookup() {
        let notice = register_level("table_notice", 25_001).unwrap();
        assert_eq!(notice.name(), "TABLE_NOTICE");
        assert_eq!(lookup("table_Notice"), Some(notice.clone()));
        assert_eq!(lookup_value(25_001), Some(notice));
    }

    #[test]
    fn test_register_is_idempotent() {
        let first = register_level("TABLE_AGAIN", 25_002).unwrap();
        let second = register_level("table_again", 25_002).unwrap();
        assert_eq!(first, second);
        let count = levels()
            .iter()
            .filter(|level| level.name() == "TABLE_AGAIN")
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_register_rejections() {
        assert_eq!(
            register_level("info", 1),
            Err(LevelError::Reserved("INFO".to_string()))
        );
        assert!(register_level("info", 20_000).is_ok());
        assert_eq!(
            register_level("bad name", 1),
            Err(LevelError::InvalidName("bad name".to_string()))
        );
        assert_eq!(
            register_level("", 1),
            Err(LevelError::InvalidName(String::new()))
        );
        assert_eq!(
            register_level("TABLE_CLASH", 30_000),
            Err(LevelError::ValueTaken {
                value: 30_000,
                owner: "WARN".to_string(),
            })
        );

        register_level("TABLE_FIXED", 25_003).unwrap();
        assert!(check_level("table_fixed", 25_003).is_ok());
        assert_eq!(
            register_level("TABLE_FIXED", 25_004),
            Err(LevelError::Conflict {
                name: "TABLE_FIXED".to_string(),
                existing: 25_003,
                requested: 25_004,
            })
        );
    }

    #[test]
    fn test_check_level_leaves_table_alone() {
        assert_eq!(check_level("TABLE_CHECKED", 25_005), Ok(()));
        assert_eq!(lookup("TABLE_CHECKED"), None);
        assert_eq!(lookup_value(25_005), None);

        assert_eq!(
            check_level("warn", 1),
            Err(LevelError::Reserved("WARN".to_string()))
        );
        assert_eq!(
            check_level("TABLE_CHECKED", 20_000),
            Err(LevelError::ValueTaken {
                value: 20_000,
                owner: "INFO".to_string(),
            })
        );
        assert_eq!(
            check_level("no-dash", 1),
            Err(LevelError::InvalidName("no-dash".to_string()))
        );
    }
}
