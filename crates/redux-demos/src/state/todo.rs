//! Todo App State

use serde::Deserialize;

/// A single todo item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

impl Todo {
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}

/// Which todos the list shows
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisibilityFilter {
    #[default]
    ShowAll,
    ShowActive,
    ShowCompleted,
}

impl VisibilityFilter {
    /// All filters, in the order the footer shows them
    pub const ALL: [VisibilityFilter; 3] = [
        VisibilityFilter::ShowAll,
        VisibilityFilter::ShowActive,
        VisibilityFilter::ShowCompleted,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            VisibilityFilter::ShowAll => "All",
            VisibilityFilter::ShowActive => "Active",
            VisibilityFilter::ShowCompleted => "Completed",
        }
    }

    /// Whether a todo passes this filter
    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            VisibilityFilter::ShowAll => true,
            VisibilityFilter::ShowActive => !todo.completed,
            VisibilityFilter::ShowCompleted => todo.completed,
        }
    }
}

/// State of the todo apps
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TodoAppState {
    pub todos: Vec<Todo>,
    pub visibility_filter: VisibilityFilter,
}
