//! Built-in listener that forwards events into `tracing`

use std::fmt;

use lantern_level::Level;
use serde_json::Value;

use super::LogListener;
use crate::event::LoggingEvent;

/// Re-emits every [`LoggingEvent`] as a `tracing` event
///
/// Lets a `tracing-subscriber` stack act as the output layer. Levels map to
/// the nearest tracing level at or below them; anything more severe than
/// `WARN` (`ERROR`, `FATAL`, `MARK`, custom levels in between) becomes
/// `tracing::Level::ERROR`.
///
/// # Example
///
/// ```rust
/// use lantern_log::{Logger, TracingListener};
///
/// let logger = Logger::new("http");
/// logger.subscribe(TracingListener::new());
/// logger.warn(["slow response", "1200ms"]);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingListener;

impl TracingListener {
    /// Create a new bridge
    pub fn new() -> Self {
        Self
    }

    /// Tracing level used for `level`
    pub fn tracing_level(level: &Level) -> tracing::Level {
        if *level <= Level::TRACE {
            tracing::Level::TRACE
        } else if *level <= Level::DEBUG {
            tracing::Level::DEBUG
        } else if *level <= Level::INFO {
            tracing::Level::INFO
        } else if *level <= Level::WARN {
            tracing::Level::WARN
        } else {
            tracing::Level::ERROR
        }
    }
}

impl LogListener for TracingListener {
    fn on_event(&self, event: &LoggingEvent) {
        let category = event.category_name();
        let level = event.level().name();
        let message = Message(event.data());
        let file = event.location().map(|location| location.file.as_str());
        let line = event.location().map(|location| location.line);

        macro_rules! log_at_level {
            ($level:expr) => {
                match $level {
                    tracing::Level::ERROR => tracing::error!(category, level, file, line, "{message}"),
                    tracing::Level::WARN => tracing::warn!(category, level, file, line, "{message}"),
                    tracing::Level::INFO => tracing::info!(category, level, file, line, "{message}"),
                    tracing::Level::DEBUG => tracing::debug!(category, level, file, line, "{message}"),
                    tracing::Level::TRACE => tracing::trace!(category, level, file, line, "{message}"),
                }
            };
        }

        log_at_level!(Self::tracing_level(event.level()));
    }
}

/// Payload rendered as one line: strings verbatim, everything else as JSON
struct Message<'a>(&'a [Value]);

impl fmt::Display for Message<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, value) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            match value {
                Value::String(text) => f.write_str(text)?,
                other => write!(f, "{other}")?,
            }
        }
        Ok(())
    }
}
