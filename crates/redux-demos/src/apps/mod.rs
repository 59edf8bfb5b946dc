//! The three tutorial apps and the script runner that drives them

mod counter;
mod todo;

pub use counter::CounterApp;
pub use todo::TodoApp;

use crate::script::{self, ScriptLine, UiEvent};
use anyhow::{Context, Result};
use redux_demos_config::AppConfig;
use redux_store::{Action, Store, StoreError, Subscription};
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

/// Output shared between the runner and the render observer
pub type SharedWriter = Rc<RefCell<dyn Write>>;

/// Which tutorial app to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum AppKind {
    /// Bare store holding an integer
    Counter,
    /// Todo list with combined reducers and container view models
    WithReact,
    /// Todo list with logging and crash reporting middleware
    WithMiddleware,
}

/// A tutorial app as seen by the script runner
pub trait DemoApp {
    /// Render the current state
    fn render(&self) -> String;

    /// Re-render into `out` after every state transition
    fn subscribe_renderer(&self, out: SharedWriter) -> Subscription;

    /// Dispatch a duck-typed action
    fn dispatch_value(&self, value: serde_json::Value) -> Result<(), StoreError>;

    /// Deliver a UI event to the app's view models
    fn handle_event(&self, event: &UiEvent) -> Result<()>;

    /// Write anything the app reports once the script is done
    fn finish(&self, _out: &SharedWriter) -> Result<()> {
        Ok(())
    }
}

pub fn build(kind: AppKind, config: &AppConfig) -> Box<dyn DemoApp> {
    match kind {
        AppKind::Counter => Box::new(CounterApp::new(config)),
        AppKind::WithReact => Box::new(TodoApp::with_react(config)),
        AppKind::WithMiddleware => Box::new(TodoApp::with_middleware(config)),
    }
}

/// Outcome of running a script
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub dispatched: usize,
    pub rejected: usize,
}

/// Render once, then feed every script line to the app
///
/// Rejected lines are reported into `out` and the run continues.
pub fn run<R: BufRead>(
    app: &dyn DemoApp,
    config: &AppConfig,
    script: R,
    out: SharedWriter,
) -> Result<RunSummary> {
    write_frame(&out, &app.render())?;
    let subscription = app.subscribe_renderer(Rc::clone(&out));

    let mut summary = RunSummary::default();
    for (index, line) in script.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("Failed to read script line {}", line_no))?;

        let outcome = match script::parse_line(&line) {
            Ok(None) => continue,
            Ok(Some(line)) => {
                if config.echo_actions {
                    write_frame(&out, &format!("> {}", line.label()))?;
                }
                match line {
                    ScriptLine::Action(value) => app.dispatch_value(value).map_err(anyhow::Error::from),
                    ScriptLine::Event(event) => app.handle_event(&event),
                }
            }
            Err(e) => Err(e),
        };

        match outcome {
            Ok(()) => summary.dispatched += 1,
            Err(e) => {
                log::warn!("Script line {} rejected: {:#}", line_no, e);
                summary.rejected += 1;
                write_frame(&out, &format!("! line {}: {:#}", line_no, e))?;
            }
        }
    }

    subscription.unsubscribe();
    app.finish(&out)?;
    Ok(summary)
}

fn write_frame(out: &SharedWriter, frame: &str) -> Result<()> {
    writeln!(out.borrow_mut(), "{}", frame).context("Failed to write output")
}

/// Subscribe an observer writing `render(store)` into `out`
fn subscribe_renderer<S, A>(
    store: &Store<S, A>,
    out: SharedWriter,
    render: fn(&Store<S, A>) -> String,
) -> Subscription
where
    S: Clone + 'static,
    A: Action + 'static,
{
    let weak = store.downgrade();
    store.subscribe(move || {
        let Some(store) = weak.upgrade() else {
            return;
        };
        if let Err(e) = write_frame(&out, &render(&store)) {
            log::warn!("Render failed: {:#}", e);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run_script(kind: AppKind, config: &AppConfig, script: &str) -> (RunSummary, String) {
        let buffer = Rc::new(RefCell::new(Vec::<u8>::new()));
        let app = build(kind, config);
        let summary = run(app.as_ref(), config, script.as_bytes(), buffer.clone()).unwrap();
        let output = String::from_utf8(buffer.borrow().clone()).unwrap();
        (summary, output)
    }

    #[test]
    fn test_counter_script() {
        let script = r#"
            # two clicks up, one down
            {"type":"INCREMENT"}
            @increment
            {"type":"DECREMENT"}
        "#;

        let (summary, output) = run_script(AppKind::Counter, &AppConfig::default(), script);

        assert_eq!(
            summary,
            RunSummary {
                dispatched: 3,
                rejected: 0
            }
        );
        assert_eq!(
            output,
            "Clicked: 0 times\nClicked: 1 times\nClicked: 2 times\nClicked: 1 times\n"
        );
    }

    #[test]
    fn test_counter_uses_config_seed_and_echo() {
        let config = AppConfig {
            initial_counter: 41,
            echo_actions: true,
            ..AppConfig::default()
        };

        let (_, output) = run_script(AppKind::Counter, &config, "{\"type\":\"INCREMENT\"}\n");

        assert_eq!(output, "Clicked: 41 times\n> INCREMENT\nClicked: 42 times\n");
    }

    #[test]
    fn test_rejected_lines_do_not_render() {
        let script = "{\"amount\":1}\nnot json\n@jump\n{\"type\":\"INCREMENT\"}\n";

        let (summary, output) = run_script(AppKind::Counter, &AppConfig::default(), script);

        assert_eq!(
            summary,
            RunSummary {
                dispatched: 1,
                rejected: 3
            }
        );
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[1].starts_with("! line 1: Invalid action"));
        assert!(lines[2].starts_with("! line 2: invalid JSON action"));
        assert!(lines[3].starts_with("! line 3: unknown event @jump"));
        assert_eq!(lines[4], "Clicked: 1 times");
    }

    #[test]
    fn test_with_react_script() {
        let config = AppConfig {
            initial_todos: vec!["Learn Redux".to_string()],
            ..AppConfig::default()
        };
        let script = r#"
            @add Write a reducer
            {"type":"TOGGLE_TODO","id":0}
            @filter completed
        "#;

        let (summary, output) = run_script(AppKind::WithReact, &config, script);

        assert_eq!(summary.dispatched, 3);
        let last_frame = output.rsplit("Todos:\n").next().unwrap();
        assert_eq!(
            last_frame,
            "  0. [x] Learn Redux\nShow: [All], [Active], Completed\n"
        );
    }

    #[test]
    fn test_with_middleware_reports_crashes() {
        let script = "{\"type\":\"ADD_TODO\",\"text\":\"a\"}\n{\"text\":\"b\"}\n";

        let (summary, output) = run_script(AppKind::WithMiddleware, &AppConfig::default(), script);

        assert_eq!(
            summary,
            RunSummary {
                dispatched: 1,
                rejected: 1
            }
        );
        assert!(output.contains("  0. [ ] a\n"));
        assert!(output.contains("Crash reports: 1\n  ["));
        let summary_line = output.rsplit("Crash reports: 1\n  [").next().unwrap();
        assert!(summary_line.ends_with("] Invalid action: missing `type` field\n"));
    }
}
