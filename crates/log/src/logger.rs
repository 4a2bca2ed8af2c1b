//! The [`Logger`]: threshold filtering and event emission

use std::fmt;
use std::sync::{Arc, Weak};

use arc_swap::ArcSwapOption;
use lantern_level::{IntoLevel, Level};
use serde_json::Value;

use crate::callsite::CallSite;
use crate::core::{LogError, LogResult};
use crate::event::LoggingEvent;
use crate::listener::{LOG_TOPIC, ListenerId, LogListener, Notifier};
use crate::methods;
use crate::switches;

/// Category used when a logger is created without a name
pub const DEFAULT_CATEGORY: &str = "[default]";

/// Leveled logger for one category
///
/// A `Logger` is a cheap handle: clones share the threshold and the
/// listeners. Calls below the threshold return before anything is allocated;
/// accepted calls build a [`LoggingEvent`] and hand it to every listener
/// subscribed on [`LOG_TOPIC`], synchronously and in registration order.
///
/// The threshold is optional. Without one the logger behaves exactly as if
/// [`Level::TRACE`] were set; the effective level is recomputed on every
/// check rather than stored.
///
/// # Example
///
/// ```rust
/// use lantern_log::{Logger, LoggingEvent};
/// use std::sync::{Arc, Mutex};
///
/// let logger = Logger::with_level("db", "INFO");
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// logger.subscribe(move |event: &LoggingEvent| {
///     sink.lock().unwrap().push(event.level().clone());
/// });
///
/// logger.debug(["ignored"]);
/// logger.warn(["pool exhausted"]);
///
/// assert_eq!(seen.lock().unwrap().len(), 1);
/// ```
#[derive(Clone)]
pub struct Logger {
    inner: Arc<LoggerInner>,
}

struct LoggerInner {
    category: String,
    level: ArcSwapOption<Level>,
    notifier: Notifier,
}

impl Logger {
    /// Create a logger without a threshold
    ///
    /// An empty name selects [`DEFAULT_CATEGORY`].
    pub fn new(category: impl Into<String>) -> Self {
        let category = category.into();
        let category = if category.is_empty() {
            DEFAULT_CATEGORY.to_string()
        } else {
            category
        };
        Self {
            inner: Arc::new(LoggerInner {
                category,
                level: ArcSwapOption::empty(),
                notifier: Notifier::new(),
            }),
        }
    }

    /// Create a logger and set its threshold (see [`set_level`](Self::set_level))
    pub fn with_level(category: impl Into<String>, level: impl IntoLevel) -> Self {
        let logger = Self::new(category);
        logger.set_level(level);
        logger
    }

    /// Category name
    pub fn category(&self) -> &str {
        &self.inner.category
    }

    /// Effective threshold: the explicit level, or [`Level::TRACE`]
    pub fn level(&self) -> Level {
        self.explicit_level().unwrap_or(Level::TRACE)
    }

    /// Threshold set through [`set_level`](Self::set_level), if any
    pub fn explicit_level(&self) -> Option<Level> {
        self.inner.level.load().as_deref().cloned()
    }

    /// Replace the threshold
    ///
    /// Input that does not resolve keeps the current effective threshold;
    /// no error is reported. Use [`try_set_level`](Self::try_set_level) to
    /// detect bad input.
    pub fn set_level(&self, level: impl IntoLevel) {
        let level = Level::resolve(level, self.level());
        self.inner.level.store(Some(Arc::new(level)));
    }

    /// Replace the threshold, rejecting input that does not resolve
    ///
    /// On error the threshold is left untouched.
    pub fn try_set_level<L>(&self, level: L) -> LogResult<()>
    where
        L: IntoLevel,
    {
        let level = level.try_into_level().map_err(LogError::UnknownLevel)?;
        self.inner.level.store(Some(Arc::new(level)));
        Ok(())
    }

    /// Drop the explicit threshold; the logger accepts everything from
    /// [`Level::TRACE`] up again
    pub fn remove_level(&self) {
        self.inner.level.store(None);
    }

    /// Whether `level` passes the threshold
    pub fn is_level_enabled(&self, level: &Level) -> bool {
        match self.inner.level.load().as_deref() {
            Some(threshold) => threshold.is_less_than_or_equal_to(level),
            None => Level::TRACE.is_less_than_or_equal_to(level),
        }
    }

    /// Log `data` at `level`
    ///
    /// The level resolves leniently with [`Level::INFO`] as the fallback.
    /// Only the threshold gates this call; the process-wide write switch
    /// does not.
    #[track_caller]
    pub fn log<L, I>(&self, level: L, data: I)
    where
        L: IntoLevel,
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.log_at(CallSite::caller(), level, data);
    }

    /// [`log`](Self::log) with an explicit call site
    pub fn log_at<L, I>(&self, site: CallSite, level: L, data: I)
    where
        L: IntoLevel,
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let level = Level::resolve(level, Level::INFO);
        if !self.is_level_enabled(&level) {
            return;
        }
        self.emit(site, level, data.into_iter().map(Into::into).collect());
    }

    /// Per-level operation with an explicit call site
    ///
    /// Emits only when log writes are enabled and `level` passes the
    /// threshold. The generated level methods and [`call`](Self::call) go
    /// through here.
    pub fn write_at<I>(&self, site: CallSite, level: &Level, data: I)
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        if switches::log_writes_enabled() && self.is_level_enabled(level) {
            self.emit(site, level.clone(), data.into_iter().map(Into::into).collect());
        }
    }

    /// Invoke a level method by name (`"audit"`, `"info"`)
    ///
    /// Behaves like the literal level methods: gated by the write switch
    /// and the threshold.
    #[track_caller]
    pub fn call<I>(&self, method: &str, data: I) -> LogResult<()>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let site = CallSite::caller();
        let entry =
            methods::find_method(method).ok_or_else(|| LogError::UnknownMethod(method.to_string()))?;
        self.write_at(site, entry.level(), data);
        Ok(())
    }

    /// Evaluate an enabled query by name (`"isAuditEnabled"`)
    pub fn query(&self, query: &str) -> LogResult<bool> {
        let entry =
            methods::find_query(query).ok_or_else(|| LogError::UnknownMethod(query.to_string()))?;
        Ok(self.is_level_enabled(entry.level()))
    }

    /// Subscribe to `topic`
    pub fn on(&self, topic: &str, listener: impl LogListener + 'static) -> ListenerId {
        self.inner.notifier.register(topic, Arc::new(listener))
    }

    /// Subscribe to this logger's events
    pub fn subscribe(&self, listener: impl LogListener + 'static) -> ListenerId {
        self.on(LOG_TOPIC, listener)
    }

    /// Unsubscribe; returns whether the listener was registered
    pub fn off(&self, id: ListenerId) -> bool {
        self.inner.notifier.unregister(id)
    }

    /// Number of listeners on `topic`
    pub fn listener_count(&self, topic: &str) -> usize {
        self.inner.notifier.count(topic)
    }

    /// Drop every listener
    pub fn remove_all_listeners(&self) {
        self.inner.notifier.clear();
    }

    /// Weak reference for identity checks
    pub fn downgrade(&self) -> LoggerRef {
        LoggerRef(Arc::downgrade(&self.inner))
    }

    /// Build and publish the event. Callers have already gated the call.
    fn emit(&self, site: CallSite, level: Level, data: Vec<Value>) {
        let location = if switches::log_tracing_enabled() {
            Some(site.capture())
        } else {
            None
        };
        let event = LoggingEvent::new(
            self.inner.category.clone(),
            level,
            data,
            self.downgrade(),
            location,
        );
        self.inner.notifier.publish(LOG_TOPIC, &event);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORY)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("category", &self.inner.category)
            .field("level", &self.explicit_level())
            .field("listeners", &self.inner.notifier)
            .finish()
    }
}

macro_rules! level_methods {
    ($($level:ident => $method:ident, $query:ident;)*) => {
        impl Logger {
            $(
                #[doc = concat!("Whether `", stringify!($level), "` passes the threshold")]
                pub fn $query(&self) -> bool {
                    self.is_level_enabled(&Level::$level)
                }

                #[doc = concat!("Log `data` at `", stringify!($level), "`, unless log writes are disabled")]
                #[track_caller]
                pub fn $method<I>(&self, data: I)
                where
                    I: IntoIterator,
                    I::Item: Into<Value>,
                {
                    self.write_at(CallSite::caller(), &Level::$level, data);
                }
            )*
        }
    };
}

level_methods! {
    TRACE => trace, is_trace_enabled;
    DEBUG => debug, is_debug_enabled;
    INFO => info, is_info_enabled;
    WARN => warn, is_warn_enabled;
    ERROR => error, is_error_enabled;
    FATAL => fatal, is_fatal_enabled;
    MARK => mark, is_mark_enabled;
}

/// Non-owning reference from an event back to its logger
///
/// Lets listeners tell loggers apart without keeping them alive.
#[derive(Clone, Default)]
pub struct LoggerRef(Weak<LoggerInner>);

impl LoggerRef {
    /// Reference that points at no logger
    pub fn detached() -> Self {
        Self(Weak::new())
    }

    /// Whether this refers to `logger` (or one of its clones)
    pub fn is(&self, logger: &Logger) -> bool {
        std::ptr::eq(self.0.as_ptr(), Arc::as_ptr(&logger.inner))
    }

    /// The logger, if it is still alive
    pub fn upgrade(&self) -> Option<Logger> {
        self.0.upgrade().map(|inner| Logger { inner })
    }
}

impl fmt::Debug for LoggerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.upgrade() {
            Some(inner) => f.debug_tuple("LoggerRef").field(&inner.category).finish(),
            None => f.write_str("LoggerRef(<detached>)"),
        }
    }
}
