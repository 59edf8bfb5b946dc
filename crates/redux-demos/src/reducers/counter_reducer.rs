use crate::actions::CounterAction;

/// Reducer for the counter app
pub fn reduce(state: i64, action: &CounterAction) -> i64 {
    match action {
        CounterAction::Increment => state.saturating_add(1),
        CounterAction::Decrement => state.saturating_sub(1),
        CounterAction::Unknown => state,
    }
}
