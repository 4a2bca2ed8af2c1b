//! Shared helpers for unit tests

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::event::LoggingEvent;
use crate::switches;

static SWITCH_LOCK: Mutex<()> = Mutex::new(());

/// Holds the switch lock with both switches at their defaults
pub(crate) struct Switches {
    _guard: MutexGuard<'static, ()>,
}

impl Drop for Switches {
    fn drop(&mut self) {
        reset();
    }
}

fn reset() {
    switches::enable_all_log_writes();
    switches::disable_log_tracing();
}

/// Serialize tests that depend on the process-wide switches
pub(crate) fn lock_switches() -> Switches {
    let guard = SWITCH_LOCK.lock();
    reset();
    Switches { _guard: guard }
}

/// Collects every event it receives
#[derive(Clone, Default)]
pub(crate) struct Recorder {
    events: Arc<Mutex<Vec<LoggingEvent>>>,
}

impl Recorder {
    pub(crate) fn events(&self) -> Vec<LoggingEvent> {
        self.events.lock().clone()
    }

    pub(crate) fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub(crate) fn listener(&self) -> impl Fn(&LoggingEvent) + Send + Sync + 'static {
        let events = Arc::clone(&self.events);
        move |event: &LoggingEvent| events.lock().push(event.clone())
    }
}
