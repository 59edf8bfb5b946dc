//! Action scripts
//!
//! A script is read line by line. Each non-blank line that does not start
//! with `#` is either
//! - a duck-typed action as JSON, e.g. `{"type":"INCREMENT"}`, or
//! - a UI event starting with `@`, e.g. `@toggle 2`, delivered to the app's
//!   view models as if the user had clicked.

use anyhow::{Context, Result};
use serde_json::Value;

const EVENT_PREFIX: char = '@';
const COMMENT_PREFIX: char = '#';

/// A UI event with an optional argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiEvent {
    pub name: String,
    pub arg: Option<String>,
}

impl UiEvent {
    /// The argument, or an error naming the event
    pub fn required_arg(&self) -> Result<&str> {
        self.arg
            .as_deref()
            .with_context(|| format!("@{} needs an argument", self.name))
    }
}

/// One meaningful script line
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptLine {
    Action(Value),
    Event(UiEvent),
}

impl ScriptLine {
    /// Short label used when echoing the line
    pub fn label(&self) -> String {
        match self {
            ScriptLine::Action(value) => value
                .get(redux_store::TYPE_FIELD)
                .and_then(Value::as_str)
                .unwrap_or("?")
                .to_string(),
            ScriptLine::Event(event) => format!("{}{}", EVENT_PREFIX, event.name),
        }
    }
}

/// Parse one script line; blank lines and comments yield `None`
pub fn parse_line(line: &str) -> Result<Option<ScriptLine>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
        return Ok(None);
    }

    if let Some(event) = line.strip_prefix(EVENT_PREFIX) {
        let (name, arg) = match event.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, Some(arg.trim().to_string())),
            None => (event, None),
        };
        anyhow::ensure!(!name.is_empty(), "empty event name");
        return Ok(Some(ScriptLine::Event(UiEvent {
            name: name.to_lowercase(),
            arg: arg.filter(|arg| !arg.is_empty()),
        })));
    }

    let value = serde_json::from_str(line).context("invalid JSON action")?;
    Ok(Some(ScriptLine::Action(value)))
}
