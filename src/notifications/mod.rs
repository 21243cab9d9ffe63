//! Change Notification Plumbing
//!
//! Explicit subscribe/unsubscribe registration used by every model contract.
//!
//! # Architecture
//!
//! - **EventHub**: holds the handlers for one event type and delivers events
//!   synchronously in registration order
//! - **SubscriptionId**: token returned by every subscription, used to detach
//! - **SubscriptionLedger**: the detach actions a wrapper owns for the
//!   subscriptions it forwards, released on disposal
//!
//! # Example Usage
//!
//! ```
//! use std::sync::Arc;
//! use polyphony::notifications::EventHub;
//!
//! let hub: EventHub<String> = EventHub::new();
//! let id = hub.subscribe(Arc::new(|name: &String| println!("renamed to {}", name)));
//! hub.publish(&"Blue Train".to_string());
//! assert!(hub.unsubscribe(id));
//! ```

pub mod hub;
pub mod ledger;

pub use hub::{EventHandler, EventHub, SubscriptionId};
pub use ledger::SubscriptionLedger;
