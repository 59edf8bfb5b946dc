//! Reducer composition for composite state
//!
//! A [`CombinedReducer`] owns one sub-reducer per field of the composite
//! state. Every action is routed to every sub-reducer, each of which only
//! sees (and replaces) its own field:
//!
//! ```rust
//! use redux_store::{CombinedReducer, Reducer};
//!
//! #[derive(Debug, Default, Clone, PartialEq)]
//! struct AppState {
//!     clicks: u32,
//!     label: String,
//! }
//!
//! enum AppAction {
//!     Click,
//!     Rename(String),
//! }
//!
//! fn clicks(state: u32, action: &AppAction) -> u32 {
//!     match action {
//!         AppAction::Click => state + 1,
//!         _ => state,
//!     }
//! }
//!
//! fn label(state: String, action: &AppAction) -> String {
//!     match action {
//!         AppAction::Rename(name) => name.clone(),
//!         _ => state,
//!     }
//! }
//!
//! let reducer = CombinedReducer::<AppState, AppAction>::new()
//!     .slice(|s| &mut s.clicks, clicks)
//!     .slice(|s| &mut s.label, label);
//!
//! let state = reducer.reduce(AppState::default(), &AppAction::Click);
//! assert_eq!(state.clicks, 1);
//! assert_eq!(state.label, "");
//! ```

use crate::reducer::Reducer;

type SliceReducer<S, A> = Box<dyn Fn(&mut S, &A)>;

/// Higher-order reducer combining independent sub-states into one state
pub struct CombinedReducer<S, A> {
    slices: Vec<SliceReducer<S, A>>,
}

impl<S: 'static, A: 'static> CombinedReducer<S, A> {
    pub fn new() -> Self {
        Self { slices: Vec::new() }
    }

    /// Route actions to `reducer` for the field selected by `field`
    ///
    /// Slices run in the order they were added.
    pub fn slice<T, R>(mut self, field: fn(&mut S) -> &mut T, reducer: R) -> Self
    where
        T: Default + 'static,
        R: Reducer<T, A> + 'static,
    {
        self.slices.push(Box::new(move |state, action| {
            let slot = field(state);
            let current = std::mem::take(slot);
            *slot = reducer.reduce(current, action);
        }));
        self
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

impl<S: 'static, A: 'static> Default for CombinedReducer<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> Reducer<S, A> for CombinedReducer<S, A> {
    fn reduce(&self, mut state: S, action: &A) -> S {
        for slice in &self.slices {
            slice(&mut state, action);
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Composite {
        items: Vec<String>,
        mode: Mode,
    }

    #[derive(Debug, Default, Clone, Copy, PartialEq)]
    enum Mode {
        #[default]
        Idle,
        Busy,
    }

    enum Event {
        Push(String),
        SetMode(Mode),
        Unknown,
    }

    fn items(mut state: Vec<String>, action: &Event) -> Vec<String> {
        if let Event::Push(item) = action {
            state.push(item.clone());
        }
        state
    }

    fn mode(state: Mode, action: &Event) -> Mode {
        match action {
            Event::SetMode(mode) => *mode,
            _ => state,
        }
    }

    fn reducer() -> CombinedReducer<Composite, Event> {
        CombinedReducer::<Composite, Event>::new()
            .slice(|s| &mut s.items, items)
            .slice(|s| &mut s.mode, mode)
    }

    #[test]
    fn test_routes_action_to_owning_slice_only() {
        let start = Composite {
            items: vec!["a".to_string()],
            mode: Mode::Idle,
        };

        let next = reducer().reduce(start.clone(), &Event::SetMode(Mode::Busy));

        assert_eq!(next.mode, Mode::Busy);
        assert_eq!(next.items, start.items);
    }

    #[test]
    fn test_every_slice_sees_every_action() {
        let next = reducer().reduce(Composite::default(), &Event::Push("x".to_string()));
        assert_eq!(next.items, vec!["x".to_string()]);
        assert_eq!(next.mode, Mode::Idle);
    }

    #[test]
    fn test_identity_default_is_preserved() {
        let start = Composite {
            items: vec!["a".to_string(), "b".to_string()],
            mode: Mode::Busy,
        };
        assert_eq!(reducer().reduce(start.clone(), &Event::Unknown), start);
    }

    #[test]
    fn test_empty_combination_is_identity() {
        let empty = CombinedReducer::<Composite, Event>::default();
        assert!(empty.is_empty());
        assert_eq!(
            empty.reduce(Composite::default(), &Event::Push("x".to_string())),
            Composite::default()
        );
        assert_eq!(reducer().len(), 2);
    }
}
