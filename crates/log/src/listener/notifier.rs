//! Topic-based listener set owned by each logger
//!
//! Listeners are kept in a copy-on-write list: publishing loads a snapshot
//! and runs the listeners without holding any lock, so a listener may
//! subscribe or unsubscribe (itself included) while being notified. Changes
//! made during a publish take effect from the next publish.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use arc_swap::ArcSwap;

use super::LogListener;
use crate::event::LoggingEvent;

/// Handle returned by a subscription, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

struct Registration {
    id: ListenerId,
    topic: String,
    listener: Arc<dyn LogListener>,
}

/// Minimal publish/subscribe capability keyed by topic name
pub struct Notifier {
    registrations: ArcSwap<Vec<Arc<Registration>>>,
    next_id: AtomicU64,
}

impl Notifier {
    /// Create an empty notifier
    pub fn new() -> Self {
        Self {
            registrations: ArcSwap::from_pointee(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// Register `listener` for `topic`; listeners run in registration order
    pub fn register(&self, topic: &str, listener: Arc<dyn LogListener>) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let registration = Arc::new(Registration {
            id,
            topic: topic.to_string(),
            listener,
        });
        self.registrations.rcu(|current| {
            let mut next = Vec::clone(current);
            next.push(Arc::clone(&registration));
            next
        });
        id
    }

    /// Remove a registration; returns whether it existed
    pub fn unregister(&self, id: ListenerId) -> bool {
        let mut removed = false;
        self.registrations.rcu(|current| {
            let next: Vec<_> = current
                .iter()
                .filter(|registration| registration.id != id)
                .cloned()
                .collect();
            removed = next.len() != current.len();
            next
        });
        removed
    }

    /// Remove every registration
    pub fn clear(&self) {
        self.registrations.store(Arc::new(Vec::new()));
    }

    /// Number of listeners on `topic`
    pub fn count(&self, topic: &str) -> usize {
        self.registrations
            .load()
            .iter()
            .filter(|registration| registration.topic == topic)
            .count()
    }

    /// Deliver `event` to every listener on `topic`
    ///
    /// A panicking listener is reported through `tracing` and does not stop
    /// the remaining listeners from being notified.
    pub fn publish(&self, topic: &str, event: &LoggingEvent) {
        let snapshot = self.registrations.load_full();
        for registration in snapshot.iter().filter(|r| r.topic == topic) {
            let delivered = panic::catch_unwind(AssertUnwindSafe(|| {
                registration.listener.on_event(event);
            }));
            if let Err(payload) = delivered {
                tracing::error!(
                    topic,
                    listener = registration.id.0,
                    category = event.category_name(),
                    panic = panic_message(payload.as_ref()),
                    "log listener panicked"
                );
            }
        }
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("registrations", &self.registrations.load().len())
            .finish()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "<non-string panic payload>"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::LoggerRef;
    use lantern_level::Level;
    use parking_lot::Mutex;
    use pretty_assertions::assert_eq;

    fn event() -> LoggingEvent {
        LoggingEvent::new("test", Level::INFO, Vec::new(), LoggerRef::detached(), None)
    }

    fn tagging(order: &Arc<Mutex<Vec<&'static str>>>, tag: &'static str) -> Arc<dyn LogListener> {
        let order = Arc::clone(order);
        Arc::new(move |_: &LoggingEvent| order.lock().push(tag))
    }

    fn exploding(_: &LoggingEvent) {
        panic!("listener exploded");
    }

    #[test]
    fn test_registration_order() {
        let notifier = Notifier::new();
        let order = Arc::new(Mutex::new(Vec::new()));
        notifier.register("log", tagging(&order, "first"));
        notifier.register("log", tagging(&order, "second"));
        notifier.register("other", tagging(&order, "elsewhere"));

        notifier.publish("log", &event());

        assert_eq!(*order.lock(), vec!["first", "second"]);
        assert_eq!(notifier.count("log"), 2);
        assert_eq!(notifier.count("other"), 1);
    }

    #[test]
    fn test_unregister() {
        let notifier = Notifier::new();
        let order = Arc::new(Mutex::new(Vec::new()));
        let id = notifier.register("log", tagging(&order, "gone"));

        assert!(notifier.unregister(id));
        assert!(!notifier.unregister(id));
        notifier.publish("log", &event());
        assert!(order.lock().is_empty());
    }

    #[test]
    fn test_panicking_listener_is_isolated() {
        let notifier = Notifier::new();
        let order = Arc::new(Mutex::new(Vec::new()));
        notifier.register("log", Arc::new(exploding));
        notifier.register("log", tagging(&order, "survivor"));

        notifier.publish("log", &event());
        notifier.publish("log", &event());

        assert_eq!(*order.lock(), vec!["survivor", "survivor"]);
    }

    #[test]
    fn test_subscribe_during_publish() {
        let notifier = Arc::new(Notifier::new());
        let order = Arc::new(Mutex::new(Vec::new()));
        let late = tagging(&order, "late");
        let inner = Arc::clone(&notifier);
        notifier.register(
            "log",
            Arc::new(move |_: &LoggingEvent| {
                inner.register("log", Arc::clone(&late));
            }),
        );

        notifier.publish("log", &event());
        assert!(order.lock().is_empty());
        assert_eq!(notifier.count("log"), 2);

        notifier.publish("log", &event());
        assert_eq!(*order.lock(), vec!["late"]);
    }

    #[test]
    fn test_clear() {
        let notifier = Notifier::new();
        let order = Arc::new(Mutex::new(Vec::new()));
        notifier.register("log", tagging(&order, "x"));
        notifier.clear();
        assert_eq!(notifier.count("log"), 0);
    }

    #[test]
    fn test_panic_message() {
        let boxed: Box<dyn Any + Send> = Box::new(String::from("boom"));
        assert_eq!(panic_message(boxed.as_ref()), "boom");
        let boxed: Box<dyn Any + Send> = Box::new(7_u8);
        assert_eq!(panic_message(boxed.as_ref()), "<non-string panic payload>");
    }
}
