//! Root reducer of the todo apps

use crate::actions::TodoAction;
use crate::reducers::{todos_reducer, visibility_filter_reducer};
use crate::state::TodoAppState;
use redux_store::CombinedReducer;

/// Combine the `todos` and `visibility_filter` slices into one reducer
pub fn todo_app() -> CombinedReducer<TodoAppState, TodoAction> {
    CombinedReducer::<TodoAppState, TodoAction>::new()
        .slice(|state| &mut state.todos, todos_reducer::reduce)
        .slice(
            |state| &mut state.visibility_filter,
            visibility_filter_reducer::reduce,
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Todo, VisibilityFilter};
    use pretty_assertions::assert_eq;
    use redux_store::{Reducer, Store};
    use serde_json::json;

    #[test]
    fn test_set_filter_leaves_todos_untouched() {
        let store = Store::new(todo_app());
        assert_eq!(*store.state(), TodoAppState::default());

        store
            .dispatch_value(json!({ "type": "SET_VISIBILITY_FILTER", "filter": "SHOW_COMPLETED" }))
            .unwrap();

        let state = store.state();
        assert_eq!(state.visibility_filter, VisibilityFilter::ShowCompleted);
        assert!(state.todos.is_empty());
    }

    #[test]
    fn test_filter_change_keeps_existing_todos() {
        let start = TodoAppState {
            todos: vec![Todo::new(0, "a"), Todo::new(1, "b")],
            visibility_filter: VisibilityFilter::ShowAll,
        };
        let next = todo_app().reduce(
            start.clone(),
            &TodoAction::SetVisibilityFilter {
                filter: VisibilityFilter::ShowActive,
            },
        );
        assert_eq!(next.todos, start.todos);
        assert_eq!(next.visibility_filter, VisibilityFilter::ShowActive);
    }

    #[test]
    fn test_unknown_action_is_identity() {
        let start = TodoAppState {
            todos: vec![Todo::new(5, "keep")],
            visibility_filter: VisibilityFilter::ShowCompleted,
        };
        assert_eq!(todo_app().reduce(start.clone(), &TodoAction::Unknown), start);
    }

    #[test]
    fn test_add_then_toggle() {
        let reducer = todo_app();
        let state = reducer.reduce(TodoAppState::default(), &TodoAction::add_todo("a"));
        let state = reducer.reduce(state, &TodoAction::ToggleTodo { id: 0 });
        assert_eq!(state.todos.len(), 1);
        assert!(state.todos[0].completed);
        assert_eq!(state.visibility_filter, VisibilityFilter::ShowAll);
    }
}
