//! Selection-path resolution over the documentation tree.
//!
//! The selection is a dotted canonical path. Resolution walks the tree
//! one segment at a time and either lands on a node or fails cleanly;
//! there is no partial result. Resolving the same path over an unchanged
//! tree always yields the same outcome.

use crate::model::DocNode;

/// Outcome of resolving the current selection against the tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution<'a> {
    /// Empty selection: nothing chosen yet; callers show the welcome view.
    Welcome,
    /// The selection addresses this node.
    Found(&'a DocNode),
    /// The selection does not address any node in the tree.
    NotFound,
}

/// Resolve a dotted selection path to a node.
pub fn resolve<'a>(root: &'a DocNode, path: &str) -> Resolution<'a> {
    if path.is_empty() {
        return Resolution::Welcome;
    }

    let mut current = root;
    for segment in path.split('.') {
        match current.children.get(segment) {
            Some(child) => current = child,
            None => return Resolution::NotFound,
        }
    }
    Resolution::Found(current)
}

/// True when the menu entry at `node_canonical` should render in the
/// active/highlighted state for the given selection.
///
/// This is a plain character-prefix test, not a segment-aware ancestry
/// check: selecting `"foo.bar"` also marks a sibling `"foo.b"` active.
/// Known imprecision, kept deliberately; see DESIGN.md before changing.
pub fn is_active_ancestor(node_canonical: &str, selected: &str) -> bool {
    selected.starts_with(node_canonical)
}
