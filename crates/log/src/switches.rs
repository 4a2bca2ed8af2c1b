//! Process-wide logging switches
//!
//! - **writes**: on by default. Gates the per-level operations
//!   ([`Logger::info`](crate::Logger::info) and friends, plus
//!   [`Logger::call`](crate::Logger::call)). The generic
//!   [`Logger::log`](crate::Logger::log) is gated by threshold only.
//! - **tracing**: off by default. When on, every emitted event carries the
//!   call-site [`Location`](crate::Location).
//!
//! The flags only gate work on the calling thread; they do not order other
//! memory, so relaxed atomics are enough.

use std::sync::atomic::{AtomicBool, Ordering};

static LOG_WRITES: AtomicBool = AtomicBool::new(true);
static LOG_TRACING: AtomicBool = AtomicBool::new(false);

/// Allow the per-level operations to emit events again
pub fn enable_all_log_writes() {
    LOG_WRITES.store(true, Ordering::Relaxed);
    tracing::debug!("log writes enabled");
}

/// Turn every per-level operation into a no-op
pub fn disable_all_log_writes() {
    LOG_WRITES.store(false, Ordering::Relaxed);
    tracing::debug!("log writes disabled");
}

/// Whether the per-level operations currently emit
pub fn log_writes_enabled() -> bool {
    LOG_WRITES.load(Ordering::Relaxed)
}

/// Capture call-site locations for emitted events
pub fn enable_log_tracing() {
    LOG_TRACING.store(true, Ordering::Relaxed);
    tracing::debug!("log call-site tracing enabled");
}

/// Stop capturing call-site locations
pub fn disable_log_tracing() {
    LOG_TRACING.store(false, Ordering::Relaxed);
    tracing::debug!("log call-site tracing disabled");
}

/// Whether call-site locations are captured
pub fn log_tracing_enabled() -> bool {
    LOG_TRACING.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::lock_switches;

    #[test]
    fn test_switch_pairs() {
        let _switches = lock_switches();
        assert!(log_writes_enabled());
        assert!(!log_tracing_enabled());

        disable_all_log_writes();
        assert!(!log_writes_enabled());
        enable_all_log_writes();
        assert!(log_writes_enabled());

        enable_log_tracing();
        assert!(log_tracing_enabled());
        disable_log_tracing();
        assert!(!log_tracing_enabled());
    }
}
