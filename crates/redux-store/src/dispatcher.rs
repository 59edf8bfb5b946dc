//! Dispatcher for middleware action dispatch
//!
//! When middleware needs to dispatch follow-up actions it uses the Dispatcher.
//! Queued actions go back through the full middleware chain once the current
//! dispatch has finished, in the order they were queued.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

/// Queue handle for actions that should re-enter the middleware chain
pub struct Dispatcher<A> {
    queue: Rc<RefCell<VecDeque<A>>>,
}

impl<A> Dispatcher<A> {
    pub fn new() -> Self {
        Self {
            queue: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    /// Queue an action to be processed after the current dispatch
    pub fn dispatch(&self, action: A) {
        self.queue.borrow_mut().push_back(action);
    }

    /// Number of actions waiting to be dispatched
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    pub(crate) fn pop(&self) -> Option<A> {
        self.queue.borrow_mut().pop_front()
    }

    /// Drop everything queued after the first `len` actions
    pub(crate) fn truncate(&self, len: usize) {
        self.queue.borrow_mut().truncate(len);
    }
}

impl<A> Clone for Dispatcher<A> {
    fn clone(&self) -> Self {
        Self {
            queue: Rc::clone(&self.queue),
        }
    }
}

impl<A> Default for Dispatcher<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> fmt::Debug for Dispatcher<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("pending", &self.pending())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_one_queue_in_fifo_order() {
        let dispatcher = Dispatcher::new();
        let other = dispatcher.clone();

        dispatcher.dispatch(1);
        other.dispatch(2);

        assert_eq!(dispatcher.pending(), 2);
        assert_eq!(other.pop(), Some(1));
        assert_eq!(dispatcher.pop(), Some(2));
        assert_eq!(dispatcher.pop(), None);
    }

    #[test]
    fn test_truncate_keeps_oldest_actions() {
        let dispatcher = Dispatcher::new();
        for action in [1, 2, 3] {
            dispatcher.dispatch(action);
        }

        dispatcher.truncate(1);

        assert_eq!(dispatcher.pending(), 1);
        assert_eq!(dispatcher.pop(), Some(1));
    }
}
