use crate::actions::TodoAction;
use crate::state::VisibilityFilter;

/// Reducer for the visibility filter slice
pub fn reduce(state: VisibilityFilter, action: &TodoAction) -> VisibilityFilter {
    match action {
        TodoAction::SetVisibilityFilter { filter } => *filter,
        _ => state,
    }
}
