//! Example demonstrating custom levels and listeners
//!
//! This example shows how to:
//! 1. Forward events into a `tracing` subscriber
//! 2. Register a custom level and its operations
//! 3. Write a custom listener
//! 4. Toggle the process-wide switches

use lantern_log::{
    Config, Level, LogListener, Logger, LoggingEvent, TracingListener, add_level_methods,
    disable_all_log_writes, enable_all_log_writes, enable_log_tracing, register_level,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

// =============================================================================
// Custom Listener
// =============================================================================

/// Counts events at or above a level
struct SevereCounter {
    floor: Level,
    count: Arc<AtomicUsize>,
}

impl LogListener for SevereCounter {
    fn on_event(&self, event: &LoggingEvent) {
        if event.level() >= &self.floor {
            self.count.fetch_add(1, Ordering::Relaxed);
        }
    }
}

fn main() -> lantern_log::LogResult<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    // Custom level between WARN and ERROR
    let audit = register_level("AUDIT", 35_000)?;
    add_level_methods(&audit)?;

    let config = Config::development();
    config.apply()?;

    let logger = config.new_logger("payments");
    logger.subscribe(TracingListener::new());

    let severe = Arc::new(AtomicUsize::new(0));
    logger.subscribe(SevereCounter {
        floor: Level::WARN,
        count: Arc::clone(&severe),
    });

    lantern_log::debug!(logger, "charging card", serde_json::json!({ "amount": 1999 }));
    logger.call("audit", ["refund issued", "order-42"])?;
    println!("isAuditEnabled = {}", logger.query("isAuditEnabled")?);

    enable_log_tracing();
    lantern_log::warn!(logger, "retrying gateway", 3);

    disable_all_log_writes();
    logger.error(["suppressed"]);
    logger.log("ERROR", ["generic log still emits"]);
    enable_all_log_writes();

    println!("severe events seen: {}", severe.load(Ordering::Relaxed));
    Ok(())
}
