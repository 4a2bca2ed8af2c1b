//! # Lantern Log - Leveled Logging Core
//!
//! Threshold filtering and structured event emission. A [`Logger`] decides
//! whether a call passes its threshold, builds an immutable
//! [`LoggingEvent`] and hands it to the listeners subscribed to it. Output
//! formatting and destinations belong to those listeners; the built-in
//! [`TracingListener`] forwards everything into `tracing`.
//!
//! ## Quick Start
//!
//! ```rust
//! use lantern_log::{Level, Logger, TracingListener};
//!
//! let logger = Logger::with_level("server", Level::INFO);
//! logger.subscribe(TracingListener::new());
//!
//! logger.debug(["not shown"]);
//! logger.info(["listening on", "0.0.0.0:8080"]);
//! lantern_log::warn!(logger, "slow start", 1200);
//! ```
//!
//! ## Process-wide switches
//!
//! - [`disable_all_log_writes`] silences every per-level operation (but not
//!   [`Logger::log`]).
//! - [`enable_log_tracing`] attaches the call-site [`Location`] to events.
//!
//! ## Custom levels
//!
//! ```rust
//! use lantern_log::{Logger, add_level_methods, register_level};
//!
//! register_level("AUDIT", 35_000).unwrap();
//! add_level_methods("AUDIT").unwrap();
//!
//! let logger = Logger::new("security");
//! assert_eq!(logger.query("isAuditEnabled"), Ok(true));
//! logger.call("audit", ["password changed"]).unwrap();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod callsite;
mod config;
mod core;
mod event;
mod listener;
mod logger;
mod macros;
mod methods;
mod switches;

#[cfg(test)]
mod test_support;

// Public API
pub use callsite::{CallSite, Location};
pub use config::Config;
pub use crate::core::{LogError, LogResult};
pub use event::{LoggingEvent, to_payload};
pub use listener::{LOG_TOPIC, ListenerId, LogListener, Notifier, TracingListener};
pub use logger::{DEFAULT_CATEGORY, Logger, LoggerRef};
pub use methods::{LevelMethod, add_level_methods, find_method, find_query, method_name, registered_methods};
pub use switches::{
    disable_all_log_writes, disable_log_tracing, enable_all_log_writes, enable_log_tracing,
    log_tracing_enabled, log_writes_enabled,
};

pub use lantern_level::{IntoLevel, Level, LevelError, levels, register_level};
pub use serde_json::Value;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{IntoLevel, Level, LogListener, Logger, LoggingEvent, LogResult, TracingListener};
}
