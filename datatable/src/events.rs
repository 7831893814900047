//! Change notifications.
//!
//! Each notification the table publishes is its own [`EventEmitter`]. Sibling
//! controls subscribe a listener and keep the returned [`SubscriptionId`] to
//! unsubscribe later.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

/// Identifies one listener on one emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

impl SubscriptionId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__subscription_{}", self.0)
    }
}

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// A single-event channel with any number of listeners.
///
/// Cloning an emitter shares its listener list.
pub struct EventEmitter<T> {
    listeners: Arc<RwLock<Vec<(SubscriptionId, Listener<T>)>>>,
}

impl<T> EventEmitter<T> {
    /// Create an emitter with no listeners.
    pub fn new() -> Self {
        Self {
            listeners: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Register a listener.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = SubscriptionId::new();
        let mut guard = self
            .listeners
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered here.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut guard = self
            .listeners
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let before = guard.len();
        guard.retain(|(sub, _)| *sub != id);
        guard.len() != before
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    /// Deliver `event` to every listener.
    ///
    /// Listeners run against a snapshot of the list with no lock held, so they
    /// may subscribe, unsubscribe or read table state.
    pub fn emit(&self, event: &T) {
        let snapshot: Vec<Listener<T>> = self
            .listeners
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();
        for listener in snapshot {
            listener(event);
        }
    }
}

impl<T> Clone for EventEmitter<T> {
    fn clone(&self) -> Self {
        Self {
            listeners: Arc::clone(&self.listeners),
        }
    }
}

impl<T> Default for EventEmitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for EventEmitter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventEmitter")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[test]
    fn test_emit_reaches_all_listeners() {
        let emitter = EventEmitter::<u32>::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let a = Arc::clone(&seen);
        emitter.subscribe(move |n| a.lock().unwrap().push(("a", *n)));
        let b = Arc::clone(&seen);
        emitter.subscribe(move |n| b.lock().unwrap().push(("b", *n)));

        emitter.emit(&7);
        assert_eq!(*seen.lock().unwrap(), vec![("a", 7), ("b", 7)]);
    }

    #[test]
    fn test_unsubscribe() {
        let emitter = EventEmitter::<u32>::new();
        let count = Arc::new(AtomicUsize::new(0));

        let c = Arc::clone(&count);
        let id = emitter.subscribe(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });
        emitter.emit(&1);
        assert!(emitter.unsubscribe(id));
        assert!(!emitter.unsubscribe(id));
        emitter.emit(&2);

        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(emitter.listener_count(), 0);
    }

    #[test]
    fn test_listener_may_subscribe_during_emit() {
        let emitter = EventEmitter::<u32>::new();
        let inner = emitter.clone();
        emitter.subscribe(move |_| {
            inner.subscribe(|_| {});
        });

        emitter.emit(&1);
        assert_eq!(emitter.listener_count(), 2);
    }

    #[test]
    fn test_poisoned_listener_list_still_delivers() {
        let emitter = EventEmitter::<u32>::new();
        let count = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&count);
        emitter.subscribe(move |n| {
            c.fetch_add(*n as usize, Ordering::SeqCst);
        });

        let listeners = Arc::clone(&emitter.listeners);
        let _ = std::thread::spawn(move || {
            let _guard = listeners.write().unwrap();
            panic!("poison the listener list");
        })
        .join();
        assert!(emitter.listeners.is_poisoned());

        assert_eq!(emitter.listener_count(), 1);
        emitter.emit(&5);
        assert_eq!(count.load(Ordering::SeqCst), 5);
    }
}
