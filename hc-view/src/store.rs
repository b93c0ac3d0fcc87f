//! Observable selection state.

use hc_survey::subdistrict::SubdistrictId;

/// Callback invoked with the new selection after every write.
pub type Listener = Box<dyn FnMut(&SubdistrictId)>;

/// Handle returned by [`SelectionStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

/// The currently selected subdistrict plus its subscribers.
///
/// Writes notify every subscriber in subscription order, including writes
/// of the value already selected.
pub struct SelectionStore {
    current: SubdistrictId,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: usize,
}

impl SelectionStore {
    pub fn new(initial: SubdistrictId) -> Self {
        Self {
            current: initial,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn get(&self) -> &SubdistrictId {
        &self.current
    }

    pub fn set(&mut self, id: SubdistrictId) {
        log::debug!("selection {} -> {}", self.current, id);
        self.current = id;
        let current = &self.current;
        for (_, listener) in self.listeners.iter_mut() {
            listener(current);
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&SubdistrictId) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn set_notifies_all_subscribers_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = SelectionStore::new(SubdistrictId::from("BEKOK"));

        let first = seen.clone();
        store.subscribe(move |id| first.borrow_mut().push(format!("a:{}", id)));
        let second = seen.clone();
        store.subscribe(move |id| second.borrow_mut().push(format!("b:{}", id)));

        store.set(SubdistrictId::from("JABI"));
        assert_eq!(store.get().as_str(), "JABI");
        assert_eq!(*seen.borrow(), vec!["a:JABI", "b:JABI"]);
    }

    #[test]
    fn repeated_write_still_notifies() {
        let count = Rc::new(RefCell::new(0));
        let mut store = SelectionStore::new(SubdistrictId::from("BEKOK"));
        let counter = count.clone();
        store.subscribe(move |_| *counter.borrow_mut() += 1);

        store.set(SubdistrictId::from("BEKOK"));
        store.set(SubdistrictId::from("BEKOK"));
        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn last_write_wins() {
        let mut store = SelectionStore::new(SubdistrictId::from("BEKOK"));
        store.set(SubdistrictId::from("CHAAH"));
        store.set(SubdistrictId::from("GEMEREH"));
        assert_eq!(store.get().as_str(), "GEMEREH");
    }

    #[test]
    fn unsubscribed_listener_is_not_called() {
        let count = Rc::new(RefCell::new(0));
        let mut store = SelectionStore::new(SubdistrictId::from("BEKOK"));
        let counter = count.clone();
        let sub = store.subscribe(move |_| *counter.borrow_mut() += 1);

        assert!(store.unsubscribe(sub));
        assert!(!store.unsubscribe(sub));
        store.set(SubdistrictId::from("JABI"));
        assert_eq!(*count.borrow(), 0);
        assert_eq!(store.subscriber_count(), 0);
    }
}
