//! Plain-text presentational views
//!
//! Views only turn props into text; they never touch the store.

use crate::view_models::{CounterProps, FilterLinkProps, VisibleTodoListProps};

pub fn counter(props: &CounterProps) -> String {
    format!("Clicked: {} times", props.value)
}

/// Active links render as plain labels, the others as `[Label]`
pub fn link(props: &FilterLinkProps) -> String {
    let label = props.filter.label();
    if props.active {
        label.to_string()
    } else {
        format!("[{}]", label)
    }
}

pub fn footer(links: &[FilterLinkProps]) -> String {
    let links: Vec<String> = links.iter().map(link).collect();
    format!("Show: {}", links.join(", "))
}

pub fn todo_list(props: &VisibleTodoListProps) -> Vec<String> {
    if props.todos.is_empty() {
        return vec!["  (no todos)".to_string()];
    }

    props
        .todos
        .iter()
        .map(|todo| {
            let mark = if todo.completed { "x" } else { " " };
            format!("  {}. [{}] {}", todo.id, mark, todo.text)
        })
        .collect()
}

/// The whole todo app: list followed by the filter footer
pub fn todo_app(list: &VisibleTodoListProps, links: &[FilterLinkProps]) -> String {
    let mut lines = vec!["Todos:".to_string()];
    lines.extend(todo_list(list));
    lines.push(footer(links));
    lines.join("\n")
}
