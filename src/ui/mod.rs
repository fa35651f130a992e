//! Terminal UI for docnav.
//!
//! - `theme` - design tokens (icons, separators, ASCII fallbacks)
//! - `terminal` - terminal capability detection
//! - `menu` - collapsible navigation menu (left pane)
//! - `detail` - documentation view (right pane)
//! - `browser` - two-pane composition and the interactive loop

pub mod browser;
pub mod detail;
pub mod menu;
pub mod terminal;
pub mod theme;
