//! Property-change notification contract.
//!
//! Every property-hosting object the generic property grid displays must
//! support subscribing and unsubscribing a change listener, whether or not
//! any of its properties can actually change. [`ChangeHub`] is the shared
//! implementation of that contract: a concurrent listener map keyed by
//! monotonically allocated subscription ids.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

/// Handle identifying one subscription on a [`ChangeHub`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A property-change event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyChange {
    /// Name of the object whose property changed.
    pub object: String,
    /// Name of the changed property.
    pub property: String,
}

type Listener = Box<dyn Fn(&PropertyChange) + Send + Sync>;

/// Subscribe/unsubscribe/raise hub for property-change listeners.
pub struct ChangeHub {
    listeners: DashMap<SubscriptionId, Listener>,
    next: AtomicU64,
}

impl ChangeHub {
    pub fn new() -> Self {
        Self {
            listeners: DashMap::new(),
            next: AtomicU64::new(1),
        }
    }

    /// Register a listener. The returned id unsubscribes it later.
    pub fn subscribe(
        &self,
        listener: impl Fn(&PropertyChange) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next.fetch_add(1, Ordering::Relaxed));
        self.listeners.insert(id, Box::new(listener));
        id
    }

    /// Remove a listener. Returns false if the id was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.listeners.remove(&id).is_some()
    }

    /// Deliver a change event to every current listener.
    pub fn raise(&self, change: &PropertyChange) {
        for entry in self.listeners.iter() {
            (entry.value())(change);
        }
    }

    /// Number of live subscriptions.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl Default for ChangeHub {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ChangeHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeHub")
            .field("listeners", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn subscribe_and_raise() {
        let hub = ChangeHub::new();
        let seen = Arc::new(AtomicUsize::new(0));

        let seen2 = Arc::clone(&seen);
        hub.subscribe(move |change| {
            assert_eq!(change.property, "name");
            seen2.fetch_add(1, Ordering::SeqCst);
        });

        hub.raise(&PropertyChange {
            object: "Tables".to_string(),
            property: "name".to_string(),
        });
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let hub = ChangeHub::new();
        let seen = Arc::new(AtomicUsize::new(0));

        let seen2 = Arc::clone(&seen);
        let id = hub.subscribe(move |_| {
            seen2.fetch_add(1, Ordering::SeqCst);
        });

        assert!(hub.unsubscribe(id));
        // Double unsubscribe reports failure.
        assert!(!hub.unsubscribe(id));

        hub.raise(&PropertyChange {
            object: "Roles".to_string(),
            property: "roles".to_string(),
        });
        assert_eq!(seen.load(Ordering::SeqCst), 0);
        assert!(hub.is_empty());
    }

    #[test]
    fn subscription_ids_are_unique() {
        let hub = ChangeHub::new();
        let a = hub.subscribe(|_| {});
        let b = hub.subscribe(|_| {});
        assert_ne!(a, b);
        assert_eq!(hub.len(), 2);
    }
}
