/// Design tokens for docnav's terminal UI.
///
/// Design constraints:
/// - All icons and separators must be sourced from this module
/// - Every token has an ASCII fallback for terminals without unicode
pub mod icons {
    /// Menu entry on the active selection path.
    pub const ACTIVE: &str = "●";
    /// Menu entry off the selection path.
    pub const INACTIVE: &str = "○";

    // Tree expansion.
    pub const EXPANDED: &str = "▼";
    pub const COLLAPSED: &str = "▶";
}

pub mod icons_ascii {
    pub const ACTIVE: &str = "[x]";
    pub const INACTIVE: &str = "[ ]";

    // Tree expansion.
    pub const EXPANDED: &str = "[v]";
    pub const COLLAPSED: &str = "[>]";
}

pub mod separators {
    pub const VERTICAL: &str = "│";
    pub const HORIZONTAL: &str = "─";
}

pub mod separators_ascii {
    pub const VERTICAL: &str = "|";
    pub const HORIZONTAL: &str = "-";
}
