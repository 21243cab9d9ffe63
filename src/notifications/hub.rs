//! Event Hub
//!
//! Explicit observer registration for model change notifications. Every
//! subscription returns a `SubscriptionId` which is the only way to detach
//! the handler again. Delivery is synchronous and happens on the thread that
//! publishes the event.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use parking_lot::RwLock;
use log::trace;

/// Handler invoked for every event published on a hub
pub type EventHandler<E> = Arc<dyn Fn(&E) + Send + Sync>;

static NEXT_SUBSCRIPTION_ID: AtomicU64 = AtomicU64::new(1);

/// Token identifying a single registered handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    fn next() -> Self {
        Self(NEXT_SUBSCRIPTION_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value of this token
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub#{}", self.0)
    }
}

/// Registry of handlers for one event type
pub struct EventHub<E> {
    handlers: RwLock<Vec<(SubscriptionId, EventHandler<E>)>>,
}

impl<E> EventHub<E> {
    /// Create an empty hub
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(Vec::new()),
        }
    }

    /// Register a handler and return the token used to detach it
    pub fn subscribe(&self, handler: EventHandler<E>) -> SubscriptionId {
        let id = SubscriptionId::next();
        self.handlers.write().push((id, handler));
        trace!("Registered handler {}", id);
        id
    }

    /// Detach a handler. Returns false when the token is unknown to this hub.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut handlers = self.handlers.write();
        let before = handlers.len();
        handlers.retain(|(existing, _)| *existing != id);
        let removed = handlers.len() != before;
        if removed {
            trace!("Detached handler {}", id);
        }
        removed
    }

    /// Deliver an event to every handler in registration order.
    ///
    /// Handlers run outside the lock so a handler may subscribe or
    /// unsubscribe without deadlocking. Returns the number of handlers invoked.
    pub fn publish(&self, event: &E) -> usize {
        let snapshot: Vec<EventHandler<E>> = self
            .handlers
            .read()
            .iter()
            .map(|(_, handler)| Arc::clone(handler))
            .collect();

        for handler in &snapshot {
            handler(event);
        }
        snapshot.len()
    }

    /// Number of registered handlers
    pub fn subscriber_count(&self) -> usize {
        self.handlers.read().len()
    }

    /// Remove every handler, returning how many were registered
    pub fn clear(&self) -> usize {
        let mut handlers = self.handlers.write();
        let count = handlers.len();
        handlers.clear();
        count
    }
}

impl<E> Default for EventHub<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for EventHub<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHub")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
