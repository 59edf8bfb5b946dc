use crate::action::{action_from_value, Action};
use crate::dispatcher::Dispatcher;
use crate::error::StoreError;
use crate::middleware::Middleware;
use crate::reducer::Reducer;
use crate::subscription::{Observers, Subscription};
use serde::de::DeserializeOwned;
use std::any::Any;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::panic::{self, AssertUnwindSafe};
use std::rc::{Rc, Weak};

struct Inner<S, A> {
    state: RefCell<Rc<S>>,
    reducer: Box<dyn Reducer<S, A>>,
    middleware: RefCell<Vec<Box<dyn Middleware<S, A>>>>,
    observers: Rc<RefCell<Observers>>,
    dispatcher: Dispatcher<A>,
    deferred_errors: RefCell<VecDeque<StoreError>>,
}

/// Store - holds application state and manages the Redux loop
///
/// `Store` is a cheap handle: clones share the same state, middleware and
/// observers. Hand a clone to every consumer instead of reaching for a global.
///
/// Dispatch is synchronous. Observers run after the new state is committed,
/// in registration order, on a snapshot of the observer list taken when the
/// notification pass starts:
/// - observers subscribed during a pass are first called on the next dispatch
/// - observers unsubscribed during a pass are still called in that pass
///
/// An observer may dispatch again; the nested dispatch runs immediately and
/// the last reducer result wins.
pub struct Store<S, A> {
    inner: Rc<Inner<S, A>>,
}

/// Non-owning store handle, for observers that must not keep the store alive
pub struct WeakStore<S, A> {
    inner: Weak<Inner<S, A>>,
}

impl<S, A> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S, A> Clone for WeakStore<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<S, A> WeakStore<S, A> {
    pub fn upgrade(&self) -> Option<Store<S, A>> {
        self.inner.upgrade().map(|inner| Store { inner })
    }
}

impl<S, A> Store<S, A>
where
    S: Clone + 'static,
    A: Action + 'static,
{
    /// Create a store seeded with the reducer's default state
    pub fn new<R>(reducer: R) -> Self
    where
        S: Default,
        R: Reducer<S, A> + 'static,
    {
        Self::with_state(reducer, S::default())
    }

    /// Create a store seeded with an explicit initial state
    pub fn with_state<R>(reducer: R, initial_state: S) -> Self
    where
        R: Reducer<S, A> + 'static,
    {
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(Rc::new(initial_state)),
                reducer: Box::new(reducer),
                middleware: RefCell::new(Vec::new()),
                observers: Rc::new(RefCell::new(Observers::default())),
                dispatcher: Dispatcher::new(),
                deferred_errors: RefCell::new(VecDeque::new()),
            }),
        }
    }

    /// Get the current state
    pub fn state(&self) -> Rc<S> {
        self.inner.state.borrow().clone()
    }

    /// Get a dispatcher that queues actions for this store
    pub fn dispatcher(&self) -> Dispatcher<A> {
        self.inner.dispatcher.clone()
    }

    pub fn downgrade(&self) -> WeakStore<S, A> {
        WeakStore {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Add middleware to the store
    ///
    /// Middleware is called in the order it was added.
    pub fn add_middleware<M>(&self, middleware: M)
    where
        M: Middleware<S, A> + 'static,
    {
        self.inner.middleware.borrow_mut().push(Box::new(middleware));
    }

    /// Register an observer, called after every committed state transition
    ///
    /// The same closure may be registered more than once; it is then called
    /// once per registration.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn() + 'static,
    {
        let id = self.inner.observers.borrow_mut().insert(Rc::new(observer));
        log::trace!("Store: observer {} subscribed", id);
        Subscription::new(id, &self.inner.observers)
    }

    /// Number of registered observers
    pub fn observer_count(&self) -> usize {
        self.inner.observers.borrow().len()
    }

    /// Process an action through middleware chain and reducer
    ///
    /// If the reducer panics, the panic reaches the caller after every
    /// middleware has seen a [`StoreError::ReducerPanicked`]. Actions queued
    /// on the [`Dispatcher`] during this dispatch are dropped with it.
    pub fn dispatch(&self, action: A) {
        // Dispatching from inside the chain: queue instead of re-entering it
        if self.middleware_busy() {
            log::debug!("Store: middleware busy, queueing {}", action.kind());
            self.inner.dispatcher.dispatch(action);
            return;
        }

        let queued_before = self.inner.dispatcher.pending();
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            self.dispatch_one(action);

            // Process any actions dispatched by middleware
            while let Some(action) = self.inner.dispatcher.pop() {
                self.dispatch_one(action);
            }
        }));

        if let Err(payload) = result {
            let dropped = self.inner.dispatcher.pending().saturating_sub(queued_before);
            if dropped > 0 {
                log::warn!("Store: dropping {} queued action(s) after a panic", dropped);
            }
            self.inner.dispatcher.truncate(queued_before);
            panic::resume_unwind(payload);
        }

        self.report_deferred_errors();
    }

    /// Decode a duck-typed action and dispatch it
    ///
    /// Errors abort before the reducer runs and are reported to every
    /// middleware's `on_error` before being returned. When the middleware
    /// chain is running, the report waits until the chain is released.
    pub fn dispatch_value(&self, value: serde_json::Value) -> Result<(), StoreError>
    where
        A: DeserializeOwned,
    {
        match action_from_value::<A>(value) {
            Ok(action) => {
                self.dispatch(action);
                Ok(())
            }
            Err(error) => {
                log::debug!("Store: rejected action: {}", error);
                self.report_error(&error);
                Err(error)
            }
        }
    }

    fn dispatch_one(&self, action: A) {
        let current = self.state();

        {
            let mut chain = self.inner.middleware.borrow_mut();
            for middleware in chain.iter_mut() {
                if !middleware.handle(&action, &current, &self.inner.dispatcher) {
                    log::debug!("Store: {} consumed by middleware", action.kind());
                    return;
                }
            }
        }

        log::trace!("Store: reducing {}", action.kind());
        let reduced = panic::catch_unwind(AssertUnwindSafe(|| {
            self.inner.reducer.reduce(S::clone(&current), &action)
        }));
        let next = match reduced {
            Ok(next) => Rc::new(next),
            Err(payload) => {
                let error = StoreError::ReducerPanicked {
                    kind: action.kind().to_string(),
                    message: panic_message(&*payload),
                };
                log::error!("Store: {}", error);
                self.report_error(&error);
                panic::resume_unwind(payload);
            }
        };
        *self.inner.state.borrow_mut() = Rc::clone(&next);

        for middleware in self.inner.middleware.borrow_mut().iter_mut() {
            middleware.after(&action, &next);
        }

        self.notify();
    }

    fn middleware_busy(&self) -> bool {
        self.inner.middleware.try_borrow_mut().is_err()
    }

    fn notify(&self) {
        let observers = self.inner.observers.borrow().snapshot();
        for observer in observers {
            observer();
        }
    }

    fn report_error(&self, error: &StoreError) {
        match self.inner.middleware.try_borrow_mut() {
            Ok(mut chain) => {
                for middleware in chain.iter_mut() {
                    middleware.on_error(error);
                }
            }
            Err(_) => {
                log::debug!("Store: middleware busy, deferring error report: {}", error);
                self.inner.deferred_errors.borrow_mut().push_back(error.clone());
                return;
            }
        }
        self.report_deferred_errors();
    }

    fn report_deferred_errors(&self) {
        if self.middleware_busy() {
            return;
        }
        loop {
            let Some(error) = self.inner.deferred_errors.borrow_mut().pop_front() else {
                break;
            };
            self.report_error(&error);
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
