//! # Lantern Level
//!
//! Named, totally ordered severity levels.
//!
//! A [`Level`] is a `(name, value)` pair ordered by value. The well-known
//! levels live as associated constants ([`Level::TRACE`] .. [`Level::MARK`])
//! together with the `ALL`/`OFF` threshold sentinels. Additional names can be
//! added at runtime with [`register_level`] and are resolvable from then on.
//!
//! ## Resolution
//!
//! Anything implementing [`IntoLevel`] (a `Level`, a name, a numeric value,
//! or an `Option` of those) can be resolved:
//!
//! ```rust
//! use lantern_level::Level;
//!
//! assert_eq!(Level::resolve("warn", Level::INFO), Level::WARN);
//! assert_eq!(Level::resolve("nonsense", Level::INFO), Level::INFO);
//! assert!(Level::DEBUG.is_less_than_or_equal_to(&Level::ERROR));
//! ```
//!
//! Strict parsing goes through [`Level::parse`] / [`str::parse`] and reports a
//! [`LevelError`] instead of falling back.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod error;
mod level;
mod resolve;
mod table;

#[cfg(feature = "serde")]
mod serde_impl;

pub use error::{LevelError, LevelResult};
pub use level::Level;
pub use resolve::IntoLevel;
pub use table::{check_level, levels, lookup, lookup_value, register_level};
