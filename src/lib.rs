//! docnav - terminal browser for JSON API-documentation trees
//!
//! docnav loads a documentation document (conventionally `docs.json`)
//! describing packages, modules, and classes as one nested JSON object,
//! and browses it as a collapsible navigation menu plus a detail pane.
//! Reserved `__`-prefixed keys carry node metadata; every other key is a
//! child node.

pub mod config;
pub mod error;
pub mod model;
pub mod resolve;
pub mod source;
pub mod ui;

// Re-exports for convenience
pub use config::{Config, ConfigWarning};
pub use error::{DocError, DocResult};
pub use model::{build_tree, ClassDoc, DocNode, FunctionDoc, ValueDoc};
pub use resolve::{is_active_ancestor, resolve, Resolution};
pub use source::{load_document, load_tree_or_default};
pub use ui::browser::Browser;
