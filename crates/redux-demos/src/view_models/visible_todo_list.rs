//! Visible Todo List View Model

use crate::actions::TodoAction;
use crate::state::{Todo, TodoAppState, VisibilityFilter};
use crate::TodoStore;

/// Props of the todo list view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleTodoListProps {
    pub todos: Vec<Todo>,
}

/// Todos passing `filter`, in list order
pub fn visible_todos(todos: &[Todo], filter: VisibilityFilter) -> Vec<Todo> {
    todos
        .iter()
        .filter(|todo| filter.matches(todo))
        .cloned()
        .collect()
}

pub fn map_state_to_props(state: &TodoAppState) -> VisibleTodoListProps {
    VisibleTodoListProps {
        todos: visible_todos(&state.todos, state.visibility_filter),
    }
}

/// Container for the filtered todo list
pub struct VisibleTodoList {
    store: TodoStore,
}

impl VisibleTodoList {
    pub fn new(store: &TodoStore) -> Self {
        Self {
            store: store.clone(),
        }
    }

    pub fn props(&self) -> VisibleTodoListProps {
        map_state_to_props(&self.store.state())
    }

    /// Clicking a todo toggles it
    pub fn on_todo_click(&self, id: u64) {
        self.store.dispatch(TodoAction::ToggleTodo { id });
    }
}
