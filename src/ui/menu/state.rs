//! Menu state management and action handling.
//!
//! The documentation tree stays immutable after load, so open/closed
//! state lives here instead: a set keyed by canonical path. The row list
//! is the flattened view of everything currently visible, rebuilt
//! whenever the open set changes.

use std::collections::HashSet;

use crate::model::DocNode;

/// Depth cap for flattening. A well-formed document never gets close; a
/// malformed one stops descending here and renders the rest as an opaque
/// leaf instead of recursing unboundedly.
pub const MAX_DEPTH: usize = 32;

/// A flattened representation of a visible menu entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRow {
    /// Canonical path of the node this row represents
    pub canonical: String,
    /// Display label (the node's key segment)
    pub label: String,
    /// Depth level (0 = top-level entry)
    pub depth: usize,
    /// Whether this row gets an expand affordance
    pub has_children: bool,
    /// Whether this row is currently expanded
    pub expanded: bool,
}

/// Menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Move cursor up
    Up,
    /// Move cursor down
    Down,
    /// Choose the cursor row as the selection
    Select,
    /// Expand the cursor row
    Expand,
    /// Collapse the cursor row
    Collapse,
    /// Flip the cursor row's open state
    ToggleExpand,
    /// Quit the browser
    Quit,
}

/// Event surfaced to the owner of the selection state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEvent {
    /// The cursor row was chosen; carries its canonical path. This is
    /// the only channel by which the selection changes.
    Selected(String),
    /// The user asked to quit
    Quit,
}

/// Navigation menu over an immutable documentation tree
#[derive(Debug, Clone, Default)]
pub struct MenuState {
    /// Canonical paths of currently open groups
    open: HashSet<String>,
    /// Current cursor position in the flattened view
    cursor: usize,
    /// Cached flattened rows for rendering
    rows: Vec<MenuRow>,
}

impl MenuState {
    /// Create a menu over a tree. Everything starts collapsed.
    pub fn new(root: &DocNode) -> Self {
        let mut state = Self::default();
        state.rebuild(root);
        state
    }

    /// Rebuild the flattened row list after the open set or tree changed.
    pub fn rebuild(&mut self, root: &DocNode) {
        let mut rows = Vec::new();
        Self::flatten(root, 0, &self.open, &mut rows);
        self.rows = rows;
        // Ensure cursor is within bounds
        if !self.rows.is_empty() && self.cursor >= self.rows.len() {
            self.cursor = self.rows.len() - 1;
        }
    }

    fn flatten(node: &DocNode, depth: usize, open: &HashSet<String>, rows: &mut Vec<MenuRow>) {
        for (name, child) in &node.children {
            // Past the cap the row renders as an opaque leaf: no expand
            // affordance, no descent.
            let has_children = !child.children.is_empty() && depth + 1 < MAX_DEPTH;
            let expanded = has_children && open.contains(&child.canonical);

            rows.push(MenuRow {
                canonical: child.canonical.clone(),
                label: name.clone(),
                depth,
                has_children,
                expanded,
            });

            if expanded {
                Self::flatten(child, depth + 1, open, rows);
            }
        }
    }

    /// Get flattened rows for rendering
    pub fn rows(&self) -> &[MenuRow] {
        &self.rows
    }

    /// Get current cursor position
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The row under the cursor, if any
    pub fn cursor_row(&self) -> Option<&MenuRow> {
        self.rows.get(self.cursor)
    }

    /// Whether a group is currently open
    pub fn is_open(&self, canonical: &str) -> bool {
        self.open.contains(canonical)
    }

    /// Open every group in the tree (used by the non-interactive tree
    /// printout).
    pub fn expand_all(&mut self, root: &DocNode) {
        Self::collect_group_paths(root, 0, &mut self.open);
        self.rebuild(root);
    }

    fn collect_group_paths(node: &DocNode, depth: usize, open: &mut HashSet<String>) {
        if depth + 1 >= MAX_DEPTH {
            return;
        }
        for child in node.children.values() {
            if !child.children.is_empty() {
                open.insert(child.canonical.clone());
                Self::collect_group_paths(child, depth + 1, open);
            }
        }
    }

    /// Handle a menu action. Selection and quit surface as events for
    /// the owner; everything else mutates local state only.
    pub fn handle_action(&mut self, action: MenuAction, root: &DocNode) -> Option<MenuEvent> {
        match action {
            MenuAction::Up => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
                None
            }
            MenuAction::Down => {
                if self.cursor + 1 < self.rows.len() {
                    self.cursor += 1;
                }
                None
            }
            MenuAction::Select => self
                .cursor_row()
                .map(|row| MenuEvent::Selected(row.canonical.clone())),
            MenuAction::Expand => {
                if let Some(row) = self.cursor_row().cloned() {
                    if row.has_children && self.open.insert(row.canonical) {
                        self.rebuild(root);
                    }
                }
                None
            }
            MenuAction::Collapse => {
                if let Some(row) = self.cursor_row().cloned() {
                    if self.open.remove(&row.canonical) {
                        self.rebuild(root);
                    }
                }
                None
            }
            MenuAction::ToggleExpand => {
                if let Some(row) = self.cursor_row().cloned() {
                    if row.has_children {
                        if !self.open.remove(&row.canonical) {
                            self.open.insert(row.canonical);
                        }
                        self.rebuild(root);
                    }
                }
                None
            }
            MenuAction::Quit => Some(MenuEvent::Quit),
        }
    }
}
