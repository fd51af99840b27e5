// SPDX-License-Identifier: MPL-2.0
//! Change notification for bound views.
//!
//! Subscribers are told *that* localized values may be stale, never *which*
//! ones; they are expected to re-pull everything they display.

use std::fmt;

/// Handle returned by [`ChangeNotifier::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut()>;

/// Registry of callbacks invoked synchronously on every change.
#[derive(Default)]
pub struct ChangeNotifier {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Callback)>,
}

impl ChangeNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, callback: impl FnMut() + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a subscriber. Returns `false` if the id was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    /// Invokes every subscriber once.
    pub fn notify(&mut self) {
        for (_, callback) in &mut self.subscribers {
            callback();
        }
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counter(notifier: &mut ChangeNotifier) -> (SubscriptionId, Rc<Cell<usize>>) {
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        let id = notifier.subscribe(move || seen.set(seen.get() + 1));
        (id, count)
    }

    #[test]
    fn notify_reaches_every_subscriber_once() {
        let mut notifier = ChangeNotifier::new();
        let (_, first) = counter(&mut notifier);
        let (_, second) = counter(&mut notifier);

        notifier.notify();

        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn unsubscribed_callback_is_not_invoked() {
        let mut notifier = ChangeNotifier::new();
        let (id, count) = counter(&mut notifier);

        assert!(notifier.unsubscribe(id));
        notifier.notify();

        assert_eq!(count.get(), 0);
        assert!(notifier.is_empty());
    }

    #[test]
    fn unsubscribe_unknown_id_returns_false() {
        let mut notifier = ChangeNotifier::new();
        let (id, _) = counter(&mut notifier);
        notifier.unsubscribe(id);

        assert!(!notifier.unsubscribe(id));
    }

    #[test]
    fn ids_are_not_reused() {
        let mut notifier = ChangeNotifier::new();
        let (first, _) = counter(&mut notifier);
        notifier.unsubscribe(first);
        let (second, _) = counter(&mut notifier);

        assert_ne!(first, second);
        assert_eq!(notifier.len(), 1);
    }
}
