//! Listeners: the consumers of [`LoggingEvent`]s
//!
//! Each [`Logger`](crate::Logger) owns a [`Notifier`] and publishes every
//! accepted call on the [`LOG_TOPIC`] topic. Anything implementing
//! [`LogListener`] can subscribe, including plain closures:
//!
//! ```rust
//! use lantern_log::{Logger, LoggingEvent};
//!
//! let logger = Logger::new("app");
//! logger.subscribe(|event: &LoggingEvent| {
//!     println!("{} {:?}", event.level(), event.data());
//! });
//! logger.info(["listening"]);
//! ```

mod bridge;
mod notifier;

pub use bridge::TracingListener;
pub use notifier::{ListenerId, Notifier};

use crate::event::LoggingEvent;

/// Topic every logger publishes its events on
pub const LOG_TOPIC: &str = "log";

/// Receiver of logging events
///
/// Called synchronously on the logging thread, in registration order.
/// Implementations should be fast; a panic is caught and reported but the
/// event is lost for that listener.
pub trait LogListener: Send + Sync {
    /// Called once per published event
    fn on_event(&self, event: &LoggingEvent);
}

impl<F> LogListener for F
where
    F: Fn(&LoggingEvent) + Send + Sync,
{
    fn on_event(&self, event: &LoggingEvent) {
        self(event);
    }
}
