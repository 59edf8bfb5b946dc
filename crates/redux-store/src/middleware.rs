//! Middleware system
//!
//! Middleware sits between action dispatch and reducer execution, allowing
//! logging, crash reporting and other cross-cutting concerns to be handled
//! in a composable way.
//!
//! ```text
//! Action → handle (in order) → Reducer → State → after (in order) → Observers
//! ```

use crate::dispatcher::Dispatcher;
use crate::error::StoreError;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware must not dispatch on the store directly; follow-up actions go
/// through the [`Dispatcher`] and are processed once the current dispatch
/// has finished.
pub trait Middleware<S, A> {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current state (read-only snapshot, before the reducer runs)
    /// - `dispatcher`: Use to dispatch actions that should re-enter the middleware chain
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &A, state: &S, dispatcher: &Dispatcher<A>) -> bool;

    /// Called after the reducer's result has been committed, before observers run
    fn after(&mut self, _action: &A, _state: &S) {}

    /// Called for every error surfaced by the store's dispatch
    ///
    /// Rejected duck-typed actions are still returned to the caller, and a
    /// panicking reducer keeps unwinding once every middleware has seen it.
    /// Errors raised while the middleware chain is running are delivered
    /// once the chain is released.
    fn on_error(&mut self, _error: &StoreError) {}
}
