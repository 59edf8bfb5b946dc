//! Application State Module
//!
//! The counter app's state is a plain `i64`; the todo apps share
//! [`TodoAppState`].

mod todo;

pub use todo::{Todo, TodoAppState, VisibilityFilter};
