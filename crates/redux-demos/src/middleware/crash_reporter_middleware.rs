//! CrashReporterMiddleware - records dispatch failures

use chrono::{DateTime, Local};
use redux_store::{Dispatcher, Middleware, StoreError};
use std::cell::RefCell;
use std::rc::Rc;

/// A single reported dispatch failure
#[derive(Debug, Clone)]
pub struct CrashReport {
    pub message: String,
    pub reported_at: DateTime<Local>,
}

/// Shared, append-only list of crash reports
#[derive(Debug, Clone, Default)]
pub struct CrashReports {
    reports: Rc<RefCell<Vec<CrashReport>>>,
}

impl CrashReports {
    pub fn len(&self) -> usize {
        self.reports.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.borrow().is_empty()
    }

    /// Copy of every report, oldest first
    pub fn entries(&self) -> Vec<CrashReport> {
        self.reports.borrow().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.reports
            .borrow()
            .iter()
            .map(|report| report.message.clone())
            .collect()
    }

    fn push(&self, report: CrashReport) {
        self.reports.borrow_mut().push(report);
    }
}

/// CrashReporterMiddleware - logs every dispatch error and keeps a report of it
///
/// The error still reaches the caller of the dispatch.
#[derive(Default)]
pub struct CrashReporterMiddleware {
    reports: CrashReports,
}

impl CrashReporterMiddleware {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the reports collected by this middleware
    pub fn reports(&self) -> CrashReports {
        self.reports.clone()
    }
}

impl<S, A> Middleware<S, A> for CrashReporterMiddleware {
    fn handle(&mut self, _action: &A, _state: &S, _dispatcher: &Dispatcher<A>) -> bool {
        true
    }

    fn on_error(&mut self, error: &StoreError) {
        log::error!("Caught an exception! {}", error);
        self.reports.push(CrashReport {
            message: error.to_string(),
            reported_at: Local::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducers::counter_reducer;
    use crate::actions::CounterAction;
    use redux_store::Store;
    use serde_json::json;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[test]
    fn test_reports_rejected_actions() {
        let store = Store::with_state(counter_reducer::reduce, 0);
        let reporter = CrashReporterMiddleware::new();
        let reports = reporter.reports();
        store.add_middleware(reporter);

        assert!(store.dispatch_value(json!({ "value": 1 })).is_err());
        store.dispatch_value(json!({ "type": "INCREMENT" })).unwrap();

        assert_eq!(reports.len(), 1);
        assert!(reports.messages()[0].contains("missing `type`"));
        assert_eq!(*store.state(), 1);
    }

    #[test]
    fn test_reports_panicking_reducer() {
        let store = Store::with_state(
            |state: i64, action: &CounterAction| match action {
                CounterAction::Decrement if state == 0 => panic!("counter went negative"),
                _ => counter_reducer::reduce(state, action),
            },
            0,
        );
        let reporter = CrashReporterMiddleware::new();
        let reports = reporter.reports();
        store.add_middleware(reporter);

        let result = catch_unwind(AssertUnwindSafe(|| {
            store.dispatch(CounterAction::Decrement);
        }));

        assert!(result.is_err());
        assert_eq!(*store.state(), 0);
        assert_eq!(
            reports.messages(),
            vec!["Reducer panicked on `DECREMENT`: counter went negative"]
        );
        assert!(reports.entries()[0].reported_at <= Local::now());
    }

    #[test]
    fn test_no_reports_without_errors() {
        let reports = CrashReports::default();
        assert!(reports.is_empty());
    }
}
