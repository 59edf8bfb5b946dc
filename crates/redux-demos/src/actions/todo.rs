use crate::state::VisibilityFilter;
use redux_store::Action;
use serde::Deserialize;
use strum::IntoStaticStr;

/// Actions of the todo apps
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, IntoStaticStr)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoAction {
    /// Append a todo; without an id the next free id is used
    AddTodo { id: Option<u64>, text: String },
    ToggleTodo { id: u64 },
    SetVisibilityFilter { filter: VisibilityFilter },
    #[serde(other)]
    Unknown,
}

impl TodoAction {
    pub fn add_todo(text: impl Into<String>) -> Self {
        Self::AddTodo {
            id: None,
            text: text.into(),
        }
    }
}

impl Action for TodoAction {
    fn kind(&self) -> &'static str {
        self.into()
    }
}
