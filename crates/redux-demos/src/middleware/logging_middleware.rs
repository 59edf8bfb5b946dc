//! LoggingMiddleware - logs all actions for debugging

use redux_store::{Action, Dispatcher, Middleware};
use std::fmt::Debug;

/// LoggingMiddleware - logs every action and the state it produced
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Debug, A: Action> Middleware<S, A> for LoggingMiddleware {
    fn handle(&mut self, action: &A, _state: &S, _dispatcher: &Dispatcher<A>) -> bool {
        log::info!("dispatching {}", action.kind());
        log::debug!("Action: {:?}", action);
        // Always pass action through
        true
    }

    fn after(&mut self, action: &A, state: &S) {
        log::info!("{} -> next state: {:?}", action.kind(), state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::CounterAction;

    #[test]
    fn test_logging_middleware() {
        let mut middleware = LoggingMiddleware::new();
        let dispatcher = Dispatcher::new();

        let should_continue = middleware.handle(&CounterAction::Increment, &0_i64, &dispatcher);

        assert!(should_continue);
        assert_eq!(dispatcher.pending(), 0);
    }
}
