//! Name-keyed table of per-level operations
//!
//! The seven well-known levels have literal methods on [`Logger`]
//! (`info`, `is_info_enabled`, ...). Levels registered at runtime get their
//! operations here instead, looked up by name through [`Logger::call`] and
//! [`Logger::query`]. The well-known levels are in the table too, so both
//! styles work for them.
//!
//! Method names follow the level's canonical name: lower-cased, with
//! `_x` turned into `X`. The query is `is` + capitalized method + `Enabled`.
//!
//! | level | method | query |
//! |-------|--------|-------|
//! | `INFO` | `info` | `isInfoEnabled` |
//! | `AUDIT` | `audit` | `isAuditEnabled` |
//! | `CUSTOM_LEVEL` | `customLevel` | `isCustomLevelEnabled` |
//!
//! [`Logger`]: crate::Logger
//! [`Logger::call`]: crate::Logger::call
//! [`Logger::query`]: crate::Logger::query

use std::collections::HashMap;
use std::sync::LazyLock;

use lantern_level::{IntoLevel, Level};
use parking_lot::RwLock;

use crate::core::{LogError, LogResult};

/// The pair of operations generated for one level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelMethod {
    level: Level,
    method: String,
    query: String,
}

impl LevelMethod {
    /// Derive the operation names for `level`
    pub fn for_level(level: Level) -> Self {
        let method = method_name(level.name());
        let query = query_name(&method);
        Self {
            level,
            method,
            query,
        }
    }

    /// Level the operations are bound to
    pub fn level(&self) -> &Level {
        &self.level
    }

    /// Name of the logging operation (`audit`)
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Name of the enabled query (`isAuditEnabled`)
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Lower-case the level name and camel-case `_`-separated words
pub fn method_name(level_name: &str) -> String {
    let lower = level_name.to_lowercase();
    let mut name = String::with_capacity(lower.len());
    let mut chars = lower.chars().peekable();
    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(&next) if c == '_' && next.is_ascii_lowercase() => {
                name.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => name.push(c),
        }
    }
    name
}

fn query_name(method: &str) -> String {
    let mut chars = method.chars();
    let mut query = String::with_capacity(method.len() + 9);
    query.push_str("is");
    if let Some(first) = chars.next() {
        query.extend(first.to_uppercase());
    }
    query.push_str(chars.as_str());
    query.push_str("Enabled");
    query
}

struct MethodTable {
    by_method: HashMap<String, LevelMethod>,
}

impl MethodTable {
    fn with_well_known() -> Self {
        let mut table = Self {
            by_method: HashMap::new(),
        };
        for level in Level::WELL_KNOWN {
            table.insert(LevelMethod::for_level(level));
        }
        table
    }

    fn insert(&mut self, entry: LevelMethod) -> Option<LevelMethod> {
        self.by_method.insert(entry.method.clone(), entry)
    }
}

static METHODS: LazyLock<RwLock<MethodTable>> =
    LazyLock::new(|| RwLock::new(MethodTable::with_well_known()));

/// Generate the operations for a level, replacing any previous entry
///
/// The level must already be resolvable (built in, or added with
/// [`lantern_level::register_level`]).
///
/// # Example
///
/// ```rust
/// use lantern_log::{Logger, add_level_methods};
/// use lantern_level::register_level;
///
/// register_level("NOTICE", 25_000).unwrap();
/// let generated = add_level_methods("NOTICE").unwrap();
/// assert_eq!(generated.method(), "notice");
/// assert_eq!(generated.query(), "isNoticeEnabled");
///
/// let logger = Logger::with_level("app", "WARN");
/// assert_eq!(logger.query("isNoticeEnabled"), Ok(false));
/// logger.call("notice", ["dropped"]).unwrap();
/// ```
pub fn add_level_methods<L>(level: L) -> LogResult<LevelMethod>
where
    L: IntoLevel,
{
    let level = level.try_into_level().map_err(LogError::UnknownLevel)?;
    let entry = LevelMethod::for_level(level);

    if let Some(previous) = METHODS.write().insert(entry.clone()) {
        tracing::debug!(
            method = entry.method(),
            previous = previous.level().name(),
            level = entry.level().name(),
            "level methods regenerated"
        );
    }
    Ok(entry)
}

/// Look up a logging operation by name (`"audit"`)
pub fn find_method(method: &str) -> Option<LevelMethod> {
    METHODS.read().by_method.get(method).cloned()
}

/// Look up an enabled query by name (`"isAuditEnabled"`)
pub fn find_query(query: &str) -> Option<LevelMethod> {
    METHODS
        .read()
        .by_method
        .values()
        .find(|entry| entry.query == query)
        .cloned()
}

/// Every registered pair, ordered by level
pub fn registered_methods() -> Vec<LevelMethod> {
    let mut entries: Vec<LevelMethod> = METHODS.read().by_method.values().cloned().collect();
    entries.sort_by(|a, b| a.level.cmp(&b.level).then_with(|| a.method.cmp(&b.method)));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use lantern_level::register_level;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("INFO", "info", "isInfoEnabled")]
    #[case("MARK", "mark", "isMarkEnabled")]
    #[case("CUSTOM_LEVEL", "customLevel", "isCustomLevelEnabled")]
    #[case("A_B_C", "aBC", "isABCEnabled")]
    #[case("LEVEL_2", "level_2", "isLevel_2Enabled")]
    #[case("TRAILING_", "trailing_", "isTrailing_Enabled")]
    fn test_naming(#[case] level: &str, #[case] method: &str, #[case] query: &str) {
        assert_eq!(method_name(level), method);
        assert_eq!(query_name(method), query);
    }

    #[test]
    fn test_well_known_registered() {
        let methods: Vec<String> = registered_methods()
            .iter()
            .filter(|entry| entry.level().is_builtin())
            .map(|entry| entry.method().to_string())
            .collect();
        assert_eq!(
            methods,
            vec!["trace", "debug", "info", "warn", "error", "fatal", "mark"]
        );
        assert_eq!(find_query("isWarnEnabled").unwrap().level(), &Level::WARN);
    }

    #[test]
    fn test_unknown_level_rejected() {
        assert_eq!(
            add_level_methods("METHODS_NEVER_REGISTERED"),
            Err(LogError::UnknownLevel("METHODS_NEVER_REGISTERED".to_string()))
        );
        assert!(find_method("methodsNeverRegistered").is_none());
        assert_eq!(
            add_level_methods(None::<Level>),
            Err(LogError::UnknownLevel("none".to_string()))
        );
        assert_eq!(
            add_level_methods(Some(Level::INFO)).map(|entry| entry.method().to_string()),
            Ok("info".to_string())
        );
    }

    #[test]
    fn test_regeneration_is_idempotent() {
        register_level("METHODS_TWICE", 31_001).unwrap();
        let first = add_level_methods("METHODS_TWICE").unwrap();
        let second = add_level_methods("methods_twice").unwrap();
        assert_eq!(first, second);

        let matching = registered_methods()
            .into_iter()
            .filter(|entry| entry.method() == "methodsTwice")
            .count();
        assert_eq!(matching, 1);
        assert_eq!(find_query("isMethodsTwiceEnabled"), Some(first));
    }
}
