//! Shared focus state.
//!
//! The focus names the resource currently selected for detailed query
//! building. It is owned by a [`FocusStore`]; views hold a
//! [`FocusSubscription`] and are told only when the value actually changes.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

/// Owner of the focus value.
#[derive(Debug, Default)]
pub struct FocusStore {
    focus: Option<String>,
    subscribers: Vec<Sender<Option<String>>>,
}

/// Receiving end of focus change notifications.
#[derive(Debug)]
pub struct FocusSubscription {
    current: Option<String>,
    rx: Receiver<Option<String>>,
}

impl FocusStore {
    pub fn new(initial: Option<&str>) -> Self {
        Self {
            focus: normalize(initial),
            subscribers: Vec::new(),
        }
    }

    /// The focused resource name, if any.
    pub fn current(&self) -> Option<&str> {
        self.focus.as_deref()
    }

    /// Focus `name`. An empty name clears the focus.
    ///
    /// Returns `true` if the value changed.
    pub fn set(&mut self, name: &str) -> bool {
        self.replace(normalize(Some(name)))
    }

    /// Clear the focus. Returns `true` if a focus was set.
    pub fn clear(&mut self) -> bool {
        self.replace(None)
    }

    /// Subscribe to changes. The subscription starts at the current value.
    pub fn subscribe(&mut self) -> FocusSubscription {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        FocusSubscription {
            current: self.focus.clone(),
            rx,
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn replace(&mut self, focus: Option<String>) -> bool {
        if self.focus == focus {
            return false;
        }
        tracing::debug!(from = ?self.focus, to = ?focus, "Focus changed");
        self.focus = focus;

        let value = &self.focus;
        self.subscribers.retain(|tx| tx.send(value.clone()).is_ok());
        true
    }
}

impl FocusSubscription {
    /// The last value received.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Apply pending notifications. Returns `true` if the value seen by
    /// this subscription changed.
    pub fn sync(&mut self) -> bool {
        let before = self.current.clone();
        loop {
            match self.rx.try_recv() {
                Ok(value) => self.current = value,
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        before != self.current
    }
}

fn normalize(focus: Option<&str>) -> Option<String> {
    focus.filter(|name| !name.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_without_focus() {
        let store = FocusStore::new(None);
        assert_eq!(store.current(), None);
    }

    #[test]
    fn test_empty_initial_focus_is_absent() {
        let store = FocusStore::new(Some(""));
        assert_eq!(store.current(), None);
    }

    #[test]
    fn test_set_and_clear() {
        let mut store = FocusStore::new(None);
        assert!(store.set("Patient"));
        assert_eq!(store.current(), Some("Patient"));
        assert!(store.clear());
        assert_eq!(store.current(), None);
        assert!(!store.clear());
    }

    #[test]
    fn test_set_empty_clears() {
        let mut store = FocusStore::new(Some("Patient"));
        assert!(store.set(""));
        assert_eq!(store.current(), None);
    }

    #[test]
    fn test_subscription_sees_changes() {
        let mut store = FocusStore::new(None);
        let mut sub = store.subscribe();
        assert!(!sub.sync());

        store.set("Observation");
        assert!(sub.sync());
        assert_eq!(sub.current(), Some("Observation"));
        assert!(!sub.sync());
    }

    #[test]
    fn test_same_value_does_not_notify() {
        let mut store = FocusStore::new(None);
        let mut sub = store.subscribe();

        assert!(store.set("Patient"));
        assert!(!store.set("Patient"));
        assert!(sub.sync());
        assert!(!sub.sync());
    }

    #[test]
    fn test_change_and_revert_before_sync() {
        let mut store = FocusStore::new(None);
        let mut sub = store.subscribe();

        store.set("Patient");
        store.clear();
        assert!(!sub.sync());
        assert_eq!(sub.current(), None);
    }

    #[test]
    fn test_subscription_starts_at_current() {
        let mut store = FocusStore::new(Some("Condition"));
        let sub = store.subscribe();
        assert_eq!(sub.current(), Some("Condition"));
    }

    #[test]
    fn test_dropped_subscriptions_are_pruned() {
        let mut store = FocusStore::new(None);
        let sub = store.subscribe();
        let _kept = store.subscribe();
        assert_eq!(store.subscriber_count(), 2);

        drop(sub);
        store.set("Patient");
        assert_eq!(store.subscriber_count(), 1);
    }
}
