//! Reducers of the demo apps
//!
//! Each reducer is a pure function returning its input unchanged for actions
//! it does not handle.

pub mod counter_reducer;
pub mod todo_app_reducer;
pub mod todos_reducer;
pub mod visibility_filter_reducer;
