//! Redux-style state container
//!
//! This crate provides:
//! - [`Store`] - owns the current state, runs middleware and the reducer, notifies observers
//! - [`Reducer`] - pure `(State, &Action) -> State` transition
//! - [`CombinedReducer`] - routes actions to per-field sub-reducers of a composite state
//! - [`Middleware`] and [`Dispatcher`] - hooks around the reducer and a queue for follow-up actions
//! - [`Subscription`] - handle returned by [`Store::subscribe`]
//!
//! ```text
//! Action → Middleware Chain → Reducer → State → Observers
//! ```

pub mod action;
pub mod combine;
pub mod dispatcher;
pub mod error;
pub mod middleware;
pub mod reducer;
pub mod store;
pub mod subscription;

pub use action::{action_from_value, Action, TYPE_FIELD};
pub use combine::CombinedReducer;
pub use dispatcher::Dispatcher;
pub use error::StoreError;
pub use middleware::Middleware;
pub use reducer::Reducer;
pub use store::{Store, WeakStore};
pub use subscription::Subscription;
