//! Todo apps: `with-react` (combined reducers and containers) and
//! `with-middleware` (the same store with logging and crash reporting)

use super::{DemoApp, SharedWriter};
use crate::middleware::{CrashReporterMiddleware, CrashReports, LoggingMiddleware};
use crate::reducers::todo_app_reducer::todo_app;
use crate::script::UiEvent;
use crate::state::VisibilityFilter;
use crate::view_models::{AddTodo, FilterLink, VisibleTodoList};
use crate::{views, TodoStore};
use anyhow::{bail, Context, Result};
use redux_demos_config::AppConfig;
use redux_store::{Store, StoreError, Subscription};
use std::io::Write;

pub struct TodoApp {
    store: TodoStore,
    add_todo: AddTodo,
    todo_list: VisibleTodoList,
    filter_links: Vec<FilterLink>,
    crash_reports: Option<CrashReports>,
}

impl TodoApp {
    pub fn with_react(config: &AppConfig) -> Self {
        Self::build(Store::new(todo_app()), None, config)
    }

    pub fn with_middleware(config: &AppConfig) -> Self {
        let store = Store::new(todo_app());
        let crash_reporter = CrashReporterMiddleware::new();
        let crash_reports = crash_reporter.reports();

        // Add middleware in order (they execute in this order)
        store.add_middleware(LoggingMiddleware::new());
        store.add_middleware(crash_reporter);

        Self::build(store, Some(crash_reports), config)
    }

    fn build(store: TodoStore, crash_reports: Option<CrashReports>, config: &AppConfig) -> Self {
        let app = Self {
            add_todo: AddTodo::new(&store),
            todo_list: VisibleTodoList::new(&store),
            filter_links: VisibilityFilter::ALL
                .iter()
                .map(|filter| FilterLink::new(&store, *filter))
                .collect(),
            store,
            crash_reports,
        };

        for text in &config.initial_todos {
            if !app.add_todo.on_submit(text) {
                log::warn!("Skipping blank initial todo");
            }
        }

        app
    }

    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    fn filter_link(&self, name: &str) -> Result<&FilterLink> {
        let filter = match name.to_lowercase().as_str() {
            "all" | "show_all" => VisibilityFilter::ShowAll,
            "active" | "show_active" => VisibilityFilter::ShowActive,
            "completed" | "show_completed" => VisibilityFilter::ShowCompleted,
            other => bail!("unknown filter `{}`", other),
        };
        self.filter_links
            .iter()
            .find(|link| link.props().filter == filter)
            .with_context(|| format!("no link for filter `{}`", name))
    }
}

fn render(store: &TodoStore) -> String {
    let links: Vec<_> = VisibilityFilter::ALL
        .iter()
        .map(|filter| FilterLink::new(store, *filter).props())
        .collect();
    views::todo_app(&VisibleTodoList::new(store).props(), &links)
}

impl DemoApp for TodoApp {
    fn render(&self) -> String {
        let links: Vec<_> = self.filter_links.iter().map(FilterLink::props).collect();
        views::todo_app(&self.todo_list.props(), &links)
    }

    fn subscribe_renderer(&self, out: SharedWriter) -> Subscription {
        super::subscribe_renderer(&self.store, out, render)
    }

    fn dispatch_value(&self, value: serde_json::Value) -> Result<(), StoreError> {
        self.store.dispatch_value(value)
    }

    fn handle_event(&self, event: &UiEvent) -> Result<()> {
        match event.name.as_str() {
            "add" => {
                if !self.add_todo.on_submit(event.required_arg()?) {
                    bail!("@add needs non-blank text");
                }
            }
            "toggle" => {
                let arg = event.required_arg()?;
                let id = arg
                    .parse::<u64>()
                    .with_context(|| format!("invalid todo id `{}`", arg))?;
                self.todo_list.on_todo_click(id);
            }
            "filter" => self.filter_link(event.required_arg()?)?.on_click(),
            other => bail!("unknown event @{} for the todo app", other),
        }
        Ok(())
    }

    fn finish(&self, out: &SharedWriter) -> Result<()> {
        let Some(reports) = &self.crash_reports else {
            return Ok(());
        };

        let mut out = out.borrow_mut();
        writeln!(out, "Crash reports: {}", reports.len())?;
        for report in reports.entries() {
            writeln!(
                out,
                "  [{}] {}",
                report.reported_at.format("%H:%M:%S"),
                report.message
            )?;
        }
        Ok(())
    }
}
