//! Add Todo View Model

use crate::actions::TodoAction;
use crate::TodoStore;

/// Container for the "add todo" input
pub struct AddTodo {
    store: TodoStore,
}

impl AddTodo {
    pub fn new(store: &TodoStore) -> Self {
        Self {
            store: store.clone(),
        }
    }

    /// Submit the input; blank text is ignored
    ///
    /// Returns whether a todo was added.
    pub fn on_submit(&self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.store.dispatch(TodoAction::add_todo(text));
        true
    }
}
