//! Filter Link View Model

use crate::actions::TodoAction;
use crate::state::{TodoAppState, VisibilityFilter};
use crate::TodoStore;

/// Props of a single footer link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterLinkProps {
    pub filter: VisibilityFilter,
    /// The link's filter is the one currently applied
    pub active: bool,
}

pub fn map_state_to_props(state: &TodoAppState, filter: VisibilityFilter) -> FilterLinkProps {
    FilterLinkProps {
        filter,
        active: filter == state.visibility_filter,
    }
}

/// Container for a footer link selecting one visibility filter
pub struct FilterLink {
    store: TodoStore,
    filter: VisibilityFilter,
}

impl FilterLink {
    pub fn new(store: &TodoStore, filter: VisibilityFilter) -> Self {
        Self {
            store: store.clone(),
            filter,
        }
    }

    pub fn props(&self) -> FilterLinkProps {
        map_state_to_props(&self.store.state(), self.filter)
    }

    pub fn on_click(&self) {
        self.store.dispatch(TodoAction::SetVisibilityFilter {
            filter: self.filter,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducers::todo_app_reducer::todo_app;
    use redux_store::Store;

    #[test]
    fn test_active_follows_state() {
        let state = TodoAppState::default();
        assert!(map_state_to_props(&state, VisibilityFilter::ShowAll).active);
        assert!(!map_state_to_props(&state, VisibilityFilter::ShowActive).active);
    }

    #[test]
    fn test_click_selects_filter() {
        let store = Store::new(todo_app());
        let completed = FilterLink::new(&store, VisibilityFilter::ShowCompleted);
        let all = FilterLink::new(&store, VisibilityFilter::ShowAll);

        completed.on_click();

        assert!(completed.props().active);
        assert!(!all.props().active);
        assert_eq!(
            store.state().visibility_filter,
            VisibilityFilter::ShowCompleted
        );
    }
}
