//! Core types shared by the logger, the method table and configuration.
//!
//! ### [`error`] - Error handling
//! [`LogError`] covers the strict entry points (unknown levels, unknown
//! method names, configuration). The logging calls themselves never fail.

pub mod error;

pub use error::{LogError, LogResult};
