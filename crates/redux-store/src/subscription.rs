//! Observer registry and the handle returned by `subscribe`

use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub(crate) type Observer = Rc<dyn Fn()>;

/// Registered observers, in registration order
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    entries: Vec<(u64, Observer)>,
}

impl Observers {
    pub(crate) fn insert(&mut self, observer: Observer) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    pub(crate) fn remove(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Copy of the current observers for one notification pass
    pub(crate) fn snapshot(&self) -> Vec<Observer> {
        self.entries
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Handle to a registered observer
///
/// Dropping the handle keeps the observer registered; call
/// [`unsubscribe`](Subscription::unsubscribe) to remove it.
#[must_use = "dropping a Subscription keeps the observer registered forever"]
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    observers: Weak<RefCell<Observers>>,
}

impl Subscription {
    pub(crate) fn new(id: u64, observers: &Rc<RefCell<Observers>>) -> Self {
        Self {
            id,
            observers: Rc::downgrade(observers),
        }
    }

    /// Remove the observer from its store
    ///
    /// Effective from the next notification pass. Returns `false` if the
    /// observer was already gone (or the store was dropped).
    pub fn unsubscribe(self) -> bool {
        match self.observers.upgrade() {
            Some(observers) => {
                let removed = observers.borrow_mut().remove(self.id);
                log::trace!("Store: observer {} unsubscribed ({})", self.id, removed);
                removed
            }
            None => false,
        }
    }
}
