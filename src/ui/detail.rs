//! Detail pane rendering.
//!
//! Pure functions from (tree, selection) to text lines. Three views:
//! welcome for an empty selection, not-found for a selection the tree
//! cannot resolve, and the documentation view for a resolved node.
//! Docstrings are split on newlines so line breaks in the source text
//! stay visible.

use crate::model::{ClassDoc, DocNode, FunctionDoc, ValueDoc};
use crate::resolve::{resolve, Resolution};

/// Heading of the not-found view.
pub const NOT_FOUND_HEADING: &str = "Documentation Not Found";

/// Render the detail pane for the current selection.
pub fn render_detail(root: &DocNode, selection: &str, title: &str) -> Vec<String> {
    match resolve(root, selection) {
        Resolution::Welcome => welcome_view(title),
        Resolution::NotFound => not_found_view(),
        Resolution::Found(node) => node_view(node),
    }
}

fn welcome_view(title: &str) -> Vec<String> {
    vec![
        title.to_string(),
        String::new(),
        "Select an entry from the menu to view its documentation.".to_string(),
    ]
}

fn not_found_view() -> Vec<String> {
    vec![
        NOT_FOUND_HEADING.to_string(),
        String::new(),
        "The selected path is not in the loaded document.".to_string(),
    ]
}

fn node_view(node: &DocNode) -> Vec<String> {
    let mut lines = vec![node.canonical.clone()];
    if !node.filename.is_empty() {
        lines.push(node.filename.clone());
    }

    for class in node.classes.values() {
        lines.push(String::new());
        class_lines(class, &mut lines);
    }
    for function in node.functions.values() {
        lines.push(String::new());
        function_lines(function, 0, &mut lines);
    }
    for value in node.values.values() {
        lines.push(String::new());
        value_lines(value, &mut lines);
    }

    lines
}

fn class_lines(class: &ClassDoc, out: &mut Vec<String>) {
    out.push(format!("class {}", class.name));
    docstring_lines(&class.docstring, 2, out);
    for method in class.methods.values() {
        out.push(String::new());
        function_lines(method, 2, out);
    }
}

fn function_lines(function: &FunctionDoc, indent: usize, out: &mut Vec<String>) {
    out.push(format!(
        "{}{}{}",
        " ".repeat(indent),
        function.name,
        function.args
    ));
    docstring_lines(&function.docstring, indent + 2, out);
}

fn value_lines(value: &ValueDoc, out: &mut Vec<String>) {
    out.push(value.name.clone());
    docstring_lines(&value.docstring, 2, out);
}

/// One output line per source line; an empty docstring contributes
/// nothing.
fn docstring_lines(docstring: &str, indent: usize, out: &mut Vec<String>) {
    if docstring.is_empty() {
        return;
    }
    let pad = " ".repeat(indent);
    out.extend(docstring.lines().map(|line| format!("{pad}{line}")));
}
