//! Document loading.
//!
//! Reads the documentation JSON (conventionally `docs.json`) from disk in
//! one attempt, no retry. Callers degrade to an empty tree when loading
//! fails so the browser still starts with the welcome view.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{DocError, DocResult};
use crate::model::{build_tree, DocNode};

/// Read and parse the documentation document.
pub fn load_document(path: &Path) -> DocResult<Value> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| DocError::InvalidDocument {
        file: path.to_path_buf(),
        source,
    })
}

/// Load and build the tree, or fall back to an empty tree with a warning
/// on stderr. One bad document must not keep the browser from starting.
pub fn load_tree_or_default(path: &Path) -> DocNode {
    match load_document(path) {
        Ok(raw) => build_tree(&raw),
        Err(err) => {
            eprintln!("⚠ Failed to load {}: {}", path.display(), err);
            eprintln!("  Starting with an empty documentation tree.");
            DocNode::default()
        }
    }
}
