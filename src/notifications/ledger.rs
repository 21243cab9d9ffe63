//! Subscription Ledger
//!
//! Records the detach action of every subscription a wrapper forwards from
//! the instance it decorates, so disposal can release all of them and tests
//! can assert that nothing leaks.

use std::fmt;
use parking_lot::Mutex;
use log::debug;

type Detach = Box<dyn FnOnce() + Send>;

/// Explicit list of forwarded subscriptions owned by one wrapper
pub struct SubscriptionLedger {
    entries: Mutex<Vec<Detach>>,
}

impl SubscriptionLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Record how to detach one subscription
    pub fn track<F>(&self, detach: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.entries.lock().push(Box::new(detach));
    }

    /// Number of subscriptions still attached
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether every recorded subscription has been released
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Detach every recorded subscription exactly once.
    ///
    /// Returns the number of subscriptions released. Calling this again is a
    /// no-op returning zero.
    pub fn release_all(&self) -> usize {
        let entries: Vec<Detach> = std::mem::take(&mut *self.entries.lock());
        let count = entries.len();
        for detach in entries {
            detach();
        }
        if count > 0 {
            debug!("Released {} forwarded subscriptions", count);
        }
        count
    }
}

impl Default for SubscriptionLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SubscriptionLedger {
    fn drop(&mut self) {
        self.release_all();
    }
}

impl fmt::Debug for SubscriptionLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriptionLedger")
            .field("attached", &self.len())
            .finish()
    }
}
