//! docnav CLI - terminal browser for JSON API-documentation trees
//!
//! Usage: docnav [DOCS] [OPTIONS]
//!
//! With no options and a terminal attached, opens the interactive
//! browser. `--select` and `--tree` print one rendered view and exit.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use docnav::ui::browser::{run_interactive, Browser};
use docnav::ui::terminal::{detect_capabilities, TerminalCapabilities};
use docnav::{config, load_tree_or_default, Config};

/// docnav - terminal browser for JSON API-documentation trees
#[derive(Parser, Debug)]
#[command(name = "docnav")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the documentation JSON document
    docs: Option<PathBuf>,

    /// Print the documentation view for a dotted path and exit
    #[arg(long, value_name = "PATH")]
    select: Option<String>,

    /// Print the fully expanded menu tree and exit
    #[arg(long)]
    tree: bool,

    /// Force ASCII icons
    #[arg(long)]
    ascii: bool,

    /// Heading for the welcome view
    #[arg(long)]
    title: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let (file_config, warnings) =
        config::load_merged(&cwd, |key| std::env::var(key).ok()).context("loading config")?;
    for warning in &warnings {
        eprintln!(
            "⚠ Unknown config key '{}' in {}",
            warning.key,
            warning.file.display()
        );
    }

    let cli_layer = Config {
        docs: cli.docs.clone(),
        title: cli.title.clone(),
        unicode: cli.ascii.then_some(false),
    };
    let config = cli_layer.or(file_config);

    let caps = detect_capabilities();
    let unicode = config.unicode.unwrap_or(caps.supports_unicode);

    let tree = load_tree_or_default(&config.docs_path());
    let mut browser = Browser::new(config.title_text(), tree);

    if let Some(path) = cli.select.as_deref() {
        return cmd_show(&mut browser, path);
    }
    if cli.tree {
        return cmd_tree(&mut browser, unicode);
    }
    if caps.is_tty {
        cmd_browse(&mut browser, caps, unicode)
    } else {
        cmd_static(&mut browser, unicode)
    }
}

/// Print the detail view for one path. Not-found is a rendered view, not
/// an error exit.
fn cmd_show(browser: &mut Browser, path: &str) -> Result<()> {
    browser.select(path);
    for line in browser.detail_lines() {
        println!("{line}");
    }
    Ok(())
}

/// Print the fully expanded menu tree.
fn cmd_tree(browser: &mut Browser, unicode: bool) -> Result<()> {
    browser.expand_all();
    for line in browser.menu_lines(unicode) {
        println!("{line}");
    }
    Ok(())
}

/// Run the interactive two-pane browser until the user quits.
fn cmd_browse(browser: &mut Browser, caps: TerminalCapabilities, unicode: bool) -> Result<()> {
    run_interactive(browser, caps, unicode).context("interactive session failed")?;
    Ok(())
}

/// No terminal attached: print the welcome view and the collapsed menu
/// once instead of entering raw mode.
fn cmd_static(browser: &mut Browser, unicode: bool) -> Result<()> {
    for line in browser.detail_lines() {
        println!("{line}");
    }
    println!();
    for line in browser.menu_lines(unicode) {
        println!("{line}");
    }
    Ok(())
}
