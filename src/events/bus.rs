use parking_lot::RwLock;
use tracing::warn;

use super::Reading;
use crate::error::Result;

type Subscriber = Box<dyn Fn(&Reading) -> Result<()> + Send + Sync>;

/// Handle returned by [`EventBus::subscribe`], usable to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

/// Synchronous in-process publish/subscribe hub.
///
/// `publish` invokes every registered subscriber in registration order and
/// does not return until all of them have. There is no buffering: readings
/// published before a subscriber registers are never redelivered.
///
/// The registry is only meant to be mutated during mission setup; a
/// subscriber must not subscribe or unsubscribe from inside a publish
/// fan-out.
pub struct EventBus {
    inner: RwLock<BusInner>,
}

struct BusInner {
    next_id: u64,
    subscribers: Vec<(SubscriberId, Subscriber)>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(BusInner {
                next_id: 0,
                subscribers: Vec::new(),
            }),
        }
    }

    pub fn subscribe<F>(&self, subscriber: F) -> SubscriberId
    where
        F: Fn(&Reading) -> Result<()> + Send + Sync + 'static,
    {
        let mut inner = self.inner.write();
        let id = SubscriberId(inner.next_id);
        inner.next_id += 1;
        inner.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a subscriber; returns false if the id was already gone.
    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        let mut inner = self.inner.write();
        let before = inner.subscribers.len();
        inner.subscribers.retain(|(sid, _)| *sid != id);
        inner.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.read().subscribers.len()
    }

    /// Deliver a reading to every subscriber, in registration order.
    ///
    /// A failing subscriber is logged and skipped; it never prevents later
    /// subscribers from seeing the reading.
    pub fn publish(&self, reading: &Reading) {
        let inner = self.inner.read();
        for (id, subscriber) in &inner.subscribers {
            if let Err(error) = subscriber(reading) {
                warn!(
                    subscriber = id.0,
                    kind = %reading.kind,
                    %error,
                    "Subscriber failed; continuing fan-out"
                );
            }
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::error::DroneError;
    use crate::events::ReadingKind;

    fn reading() -> Reading {
        Reading::new(ReadingKind::Wind).with_measurement("speed", 5.0)
    }

    #[test]
    fn test_publish_reaches_all_subscribers_in_order() {
        let bus = EventBus::new();
        let order = Arc::new(parking_lot::Mutex::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let order = Arc::clone(&order);
            bus.subscribe(move |_| {
                order.lock().push(tag);
                Ok(())
            });
        }

        bus.publish(&reading());
        assert_eq!(*order.lock(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_failing_subscriber_does_not_block_later_ones() {
        let bus = EventBus::new();
        let delivered = Arc::new(AtomicUsize::new(0));

        bus.subscribe(|_| Err(DroneError::Subscriber("boom".into())));
        let counter = Arc::clone(&delivered);
        bus.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        bus.publish(&reading());
        assert_eq!(delivered.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unsubscribe() {
        let bus = EventBus::new();
        let delivered = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&delivered);
        let id = bus.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        assert_eq!(bus.subscriber_count(), 1);
        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        assert_eq!(bus.subscriber_count(), 0);

        bus.publish(&reading());
        assert_eq!(delivered.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_publish_without_subscribers_is_ok() {
        EventBus::new().publish(&reading());
    }
}
