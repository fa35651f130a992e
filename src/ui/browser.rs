//! Top-level browser state and the interactive loop.
//!
//! The browser owns the immutable documentation tree, the single
//! selection string, and the menu's open/cursor state. Selection changes
//! flow through exactly one channel: a menu `Selected` event handled
//! here. Rendering is pure; the interactive loop just redraws after each
//! handled key.

use std::io::{self, Write};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::model::DocNode;
use crate::ui::detail::render_detail;
use crate::ui::menu::{key_to_action, render_menu, MenuAction, MenuEvent, MenuState};
use crate::ui::terminal::TerminalCapabilities;
use crate::ui::theme::{separators, separators_ascii};

/// Menu pane width bounds for the two-pane composition.
const MENU_MIN_WIDTH: usize = 20;
const MENU_MAX_WIDTH: usize = 40;

/// The whole browsing session: tree, selection, menu.
pub struct Browser {
    title: String,
    tree: DocNode,
    selection: String,
    menu: MenuState,
}

impl Browser {
    /// Create a browser over a loaded tree. Nothing is selected and
    /// every group starts collapsed.
    pub fn new(title: impl Into<String>, tree: DocNode) -> Self {
        let menu = MenuState::new(&tree);
        Self {
            title: title.into(),
            tree,
            selection: String::new(),
            menu,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tree(&self) -> &DocNode {
        &self.tree
    }

    pub fn selection(&self) -> &str {
        &self.selection
    }

    pub fn menu(&self) -> &MenuState {
        &self.menu
    }

    /// Set the selection. Expansion state is untouched: selecting a deep
    /// path does not open its ancestors.
    pub fn select(&mut self, canonical: impl Into<String>) {
        self.selection = canonical.into();
    }

    /// Open every menu group (non-interactive tree printout).
    pub fn expand_all(&mut self) {
        self.menu.expand_all(&self.tree);
    }

    /// Forward an action to the menu and apply any resulting event.
    /// Returns true when the browser should exit.
    pub fn handle_action(&mut self, action: MenuAction) -> bool {
        match self.menu.handle_action(action, &self.tree) {
            Some(MenuEvent::Selected(canonical)) => {
                self.select(canonical);
                false
            }
            Some(MenuEvent::Quit) => true,
            None => false,
        }
    }

    /// Render the menu pane lines for the current state.
    pub fn menu_lines(&self, supports_unicode: bool) -> Vec<String> {
        render_menu(&self.menu, &self.selection, supports_unicode)
    }

    /// Render the detail pane lines for the current selection.
    pub fn detail_lines(&self) -> Vec<String> {
        render_detail(&self.tree, &self.selection, &self.title)
    }

    /// Compose both panes side by side into a screen-sized block.
    pub fn compose(&self, width: usize, height: usize, supports_unicode: bool) -> String {
        let sep = if supports_unicode {
            separators::VERTICAL
        } else {
            separators_ascii::VERTICAL
        };

        let menu_lines = self.menu_lines(supports_unicode);
        let detail_lines = self.detail_lines();

        let widest = menu_lines
            .iter()
            .map(|l| UnicodeWidthStr::width(l.as_str()))
            .max()
            .unwrap_or(0);
        let menu_width = widest.clamp(MENU_MIN_WIDTH, MENU_MAX_WIDTH).min(width / 2);
        let detail_width = width.saturating_sub(menu_width + 3);

        let mut out = String::new();
        for i in 0..height {
            let left = menu_lines.get(i).map(String::as_str).unwrap_or("");
            let right = detail_lines.get(i).map(String::as_str).unwrap_or("");
            out.push_str(&pad_to(left, menu_width));
            out.push(' ');
            out.push_str(sep);
            out.push(' ');
            out.push_str(truncate_to(right, detail_width).trim_end());
            out.push('\n');
        }
        out
    }
}

fn truncate_to(line: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in line.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}

fn pad_to(line: &str, width: usize) -> String {
    let mut out = truncate_to(line, width);
    let used = UnicodeWidthStr::width(out.as_str());
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

/// Run the browser interactively. Blocks until the user quits.
pub fn run_interactive(
    browser: &mut Browser,
    caps: TerminalCapabilities,
    supports_unicode: bool,
) -> io::Result<()> {
    use crossterm::{
        cursor,
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{self, ClearType},
    };
    use std::io::stdout;

    terminal::enable_raw_mode()?;
    let mut stdout = stdout();

    // Helper to render the full UI
    let render_ui = |stdout: &mut io::Stdout, browser: &Browser| -> io::Result<()> {
        execute!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;

        let (width, height) = terminal::size().unwrap_or((caps.width, caps.height));

        // Header
        print!("{}\r\n\r\n", browser.title());

        // Two panes; leave room for header and help bar.
        let body_height = (height as usize).saturating_sub(4);
        let composed = browser.compose(width as usize, body_height, supports_unicode);
        for line in composed.lines() {
            print!("{}\r\n", line);
        }

        // Help bar
        print!("[Enter] Select    [\u{2192}\u{2190}] Expand/Collapse    [q] Quit\r");

        stdout.flush()?;
        Ok(())
    };

    execute!(stdout, cursor::Hide)?;

    // Initial render
    render_ui(&mut stdout, browser)?;

    loop {
        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(action) = key_to_action(key) {
                    if browser.handle_action(action) {
                        break;
                    }
                    render_ui(&mut stdout, browser)?;
                }
            }
            Event::Resize(_, _) => render_ui(&mut stdout, browser)?,
            _ => {}
        }
    }

    // Restore terminal
    execute!(
        stdout,
        cursor::Show,
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0)
    )?;
    terminal::disable_raw_mode()?;

    Ok(())
}
