//! Convenience macros for logging through a [`Logger`](crate::Logger)
//!
//! Each argument after the logger is converted with
//! [`to_payload`](crate::to_payload), so anything `Serialize` can be passed
//! directly. The per-level macros skip the conversion when the call would be
//! filtered out. The macros also record the enclosing function for call-site
//! capture, which the plain methods cannot do.
//!
//! ```rust
//! use lantern_log::Logger;
//!
//! let logger = Logger::new("app");
//! lantern_log::info!(logger, "user logged in", 42, vec!["admin"]);
//! lantern_log::log!(logger, "WARN", "quota", 0.93);
//! ```

/// Log at a level given by name, value or [`Level`](crate::Level)
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr $(, $arg:expr)* $(,)?) => {
        $logger.log_at(
            $crate::__callsite!(),
            $level,
            {
                let data: ::std::vec::Vec<$crate::Value> = ::std::vec![$($crate::to_payload(&$arg)),*];
                data
            },
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __write {
    ($logger:expr, $level:expr $(, $arg:expr)*) => {{
        let logger = &$logger;
        let level = $level;
        if $crate::log_writes_enabled() && logger.is_level_enabled(&level) {
            let data: ::std::vec::Vec<$crate::Value> = ::std::vec![$($crate::to_payload(&$arg)),*];
            logger.write_at($crate::__callsite!(), &level, data);
        }
    }};
}

/// Log at `TRACE`
#[macro_export]
macro_rules! trace {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__write!($logger, $crate::Level::TRACE $(, $arg)*)
    };
}

/// Log at `DEBUG`
#[macro_export]
macro_rules! debug {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__write!($logger, $crate::Level::DEBUG $(, $arg)*)
    };
}

/// Log at `INFO`
#[macro_export]
macro_rules! info {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__write!($logger, $crate::Level::INFO $(, $arg)*)
    };
}

/// Log at `WARN`
#[macro_export]
macro_rules! warn {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__write!($logger, $crate::Level::WARN $(, $arg)*)
    };
}

/// Log at `ERROR`
#[macro_export]
macro_rules! error {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__write!($logger, $crate::Level::ERROR $(, $arg)*)
    };
}

/// Log at `FATAL`
#[macro_export]
macro_rules! fatal {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__write!($logger, $crate::Level::FATAL $(, $arg)*)
    };
}

/// Log at `MARK`
#[macro_export]
macro_rules! mark {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__write!($logger, $crate::Level::MARK $(, $arg)*)
    };
}
