//! Terminal rendering for the navigation menu.
//!
//! Rows render to plain strings; the interactive loop and the
//! non-interactive printouts both consume them unchanged.

use crate::resolve::is_active_ancestor;
use crate::ui::theme::{icons, icons_ascii};

use super::state::{MenuRow, MenuState};

/// Render a single menu row to a string
pub fn render_row(row: &MenuRow, is_cursor: bool, is_active: bool, supports_unicode: bool) -> String {
    let cursor = if is_cursor { "> " } else { "  " };
    let indent = "  ".repeat(row.depth);

    // Expansion icon (only for rows with children)
    let expand_icon = if row.has_children {
        if row.expanded {
            if supports_unicode {
                format!("{} ", icons::EXPANDED)
            } else {
                format!("{} ", icons_ascii::EXPANDED)
            }
        } else if supports_unicode {
            format!("{} ", icons::COLLAPSED)
        } else {
            format!("{} ", icons_ascii::COLLAPSED)
        }
    } else {
        String::from("  ")
    };

    // Active-path icon
    let state_icon = match (is_active, supports_unicode) {
        (true, true) => icons::ACTIVE,
        (true, false) => icons_ascii::ACTIVE,
        (false, true) => icons::INACTIVE,
        (false, false) => icons_ascii::INACTIVE,
    };

    format!("{cursor}{indent}{expand_icon}{state_icon} {}", row.label)
}

/// Render the visible menu. A row is active when its canonical path is a
/// prefix of the current selection.
pub fn render_menu(menu: &MenuState, selection: &str, supports_unicode: bool) -> Vec<String> {
    menu.rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            render_row(
                row,
                i == menu.cursor(),
                is_active_ancestor(&row.canonical, selection),
                supports_unicode,
            )
        })
        .collect()
}
