//! Container view models
//!
//! Each container projects store state into the props of a presentational
//! view (`map_state_to_props`) and turns user events into dispatched
//! actions. The store handle is passed in explicitly.

pub mod add_todo;
pub mod counter_view_model;
pub mod filter_link;
pub mod visible_todo_list;

pub use add_todo::AddTodo;
pub use counter_view_model::{CounterProps, CounterViewModel};
pub use filter_link::{FilterLink, FilterLinkProps};
pub use visible_todo_list::{VisibleTodoList, VisibleTodoListProps};
