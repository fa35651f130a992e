//! Common test utilities for docnav integration tests.

use std::path::{Path, PathBuf};
use std::process::Command;

/// A small but representative documentation document.
pub const SAMPLE_DOCS: &str = r#"{
  "acme": {
    "__filename": "acme/__init__.py",
    "store": {
      "__filename": "acme/store.py",
      "__classes": {
        "KeyValue": {
          "name": "KeyValue",
          "docstring": "A key-value store.\nBacked by memory.",
          "methods": {
            "get": {"name": "get", "args": "(self, key)", "docstring": "Fetch a key."},
            "set": {"name": "set", "args": "(self, key, value)", "docstring": null}
          }
        }
      }
    },
    "util": {}
  }
}"#;

/// Write a document into a scratch directory and return its path.
pub fn write_docs(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("docs.json");
    std::fs::write(&path, content).unwrap();
    path
}

/// The docnav binary under test.
pub fn docnav() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_docnav"));
    cmd.env("LANG", "en_US.UTF-8");
    cmd.env_remove("DOCNAV_DOCS");
    cmd.env_remove("DOCNAV_TITLE");
    cmd.env_remove("DOCNAV_ASCII");
    cmd
}
