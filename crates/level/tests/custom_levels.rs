//! Integration tests for the custom level table

use lantern_level::{IntoLevel, Level, LevelError, levels, register_level};
use pretty_assertions::assert_eq;

#[test]
fn test_custom_level_slots_into_order() {
    let audit = register_level("AUDIT", 35_000).unwrap();

    assert!(Level::WARN.is_less_than_or_equal_to(&audit));
    assert!(audit.is_less_than_or_equal_to(&Level::ERROR));
    assert_eq!("audit".into_level(), Some(audit.clone()));
    assert_eq!(35_000_u64.into_level(), Some(audit.clone()));
    assert_eq!(audit.to_string(), "AUDIT");

    let names: Vec<String> = levels()
        .into_iter()
        .filter(|level| *level >= Level::WARN && *level <= Level::ERROR)
        .map(|level| level.name().to_string())
        .collect();
    assert_eq!(names, vec!["WARN", "AUDIT", "ERROR"]);
}

#[test]
fn test_unknown_before_registration() {
    assert_eq!(Level::try_resolve("security"), None);
    assert_eq!(
        "security".parse::<Level>(),
        Err(LevelError::Unknown("security".to_string()))
    );

    let security = register_level("Security", 45_000).unwrap();
    assert_eq!("SECURITY".parse::<Level>(), Ok(security));
}

#[test]
fn test_lenient_resolution_never_fails() {
    for input in ["", "   ", "warnings", "42"] {
        assert_eq!(Level::resolve(input, Level::INFO), Level::INFO);
    }
    assert_eq!(Level::resolve(None::<Level>, Level::TRACE), Level::TRACE);
}
