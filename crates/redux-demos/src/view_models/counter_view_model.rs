//! Counter View Model

use crate::actions::CounterAction;
use crate::CounterStore;

/// Props of the counter view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterProps {
    pub value: i64,
}

pub fn map_state_to_props(state: &i64) -> CounterProps {
    CounterProps { value: *state }
}

/// View model for the counter - wires the view's buttons to the store
pub struct CounterViewModel {
    store: CounterStore,
}

impl CounterViewModel {
    pub fn new(store: &CounterStore) -> Self {
        Self {
            store: store.clone(),
        }
    }

    pub fn props(&self) -> CounterProps {
        map_state_to_props(&self.store.state())
    }

    pub fn on_increment(&self) {
        self.store.dispatch(CounterAction::Increment);
    }

    pub fn on_decrement(&self) {
        self.store.dispatch(CounterAction::Decrement);
    }
}
