use crate::actions::TodoAction;
use crate::state::Todo;

/// Reducer for the todo list slice
pub fn reduce(mut todos: Vec<Todo>, action: &TodoAction) -> Vec<Todo> {
    match action {
        TodoAction::AddTodo { id, text } => {
            let id = id.unwrap_or_else(|| next_id(&todos));
            todos.push(Todo::new(id, text.clone()));
        }
        TodoAction::ToggleTodo { id } => {
            for todo in todos.iter_mut().filter(|todo| todo.id == *id) {
                todo.completed = !todo.completed;
            }
        }
        TodoAction::SetVisibilityFilter { .. } | TodoAction::Unknown => {
            // Not ours - no state change
        }
    }
    todos
}

/// One past the largest id in use, 0 for an empty list
fn next_id(todos: &[Todo]) -> u64 {
    todos
        .iter()
        .map(|todo| todo.id)
        .max()
        .map_or(0, |id| id.saturating_add(1))
}
