//! Tutorial apps built on `redux-store`
//!
//! - `counter`: a bare store holding an integer
//! - `with-react`: a todo list with combined reducers and container view models
//! - `with-middleware`: the todo list with logging and crash reporting middleware

pub mod actions;
pub mod apps;
pub mod middleware;
pub mod reducers;
pub mod script;
pub mod state;
pub mod view_models;
pub mod views;

use redux_store::Store;

pub type CounterStore = Store<i64, actions::CounterAction>;
pub type TodoStore = Store<state::TodoAppState, actions::TodoAction>;
