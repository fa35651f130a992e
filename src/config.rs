//! Configuration module for docnav
//!
//! Merge order, highest priority first:
//! 1. CLI flags
//! 2. Environment variables (DOCNAV_*)
//! 3. Project config (./.docnav.toml)
//! 4. User config (~/.config/docnav/config.toml)
//! 5. Built-in defaults

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DocError, DocResult};

/// Project config file name, looked up in the working directory.
pub const PROJECT_CONFIG: &str = ".docnav.toml";

/// Default document path when nothing configures one.
pub const DEFAULT_DOCS: &str = "docs.json";

/// Default welcome-view heading.
pub const DEFAULT_TITLE: &str = "API Documentation";

/// docnav configuration. Every field is optional; unset fields fall
/// through to the next layer in the hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Path to the documentation JSON document.
    #[serde(default)]
    pub docs: Option<PathBuf>,

    /// Heading shown in the welcome view and above the menu.
    #[serde(default)]
    pub title: Option<String>,

    /// Force unicode icons on or off; unset means autodetect.
    #[serde(default)]
    pub unicode: Option<bool>,
}

/// Unknown key found while parsing a config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub file: PathBuf,
    pub key: String,
}

impl Config {
    /// Parse a config file's content, collecting unknown keys as warnings
    /// instead of failing on them.
    pub fn parse(content: &str, file: &Path) -> DocResult<(Self, Vec<ConfigWarning>)> {
        let mut warnings = Vec::new();
        let de = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(de, |path| {
            warnings.push(ConfigWarning {
                file: file.to_path_buf(),
                key: path.to_string(),
            });
        })
        .map_err(|err| DocError::InvalidConfig {
            file: file.to_path_buf(),
            message: err.to_string(),
        })?;
        Ok((config, warnings))
    }

    /// Read a config layer from the environment.
    pub fn from_env(get_env: &impl Fn(&str) -> Option<String>) -> Self {
        Self {
            docs: get_env("DOCNAV_DOCS").map(PathBuf::from),
            title: get_env("DOCNAV_TITLE"),
            unicode: get_env("DOCNAV_ASCII").and_then(|v| truthy(&v).then_some(false)),
        }
    }

    /// Fill unset fields from a lower-priority layer.
    pub fn or(self, fallback: Self) -> Self {
        Self {
            docs: self.docs.or(fallback.docs),
            title: self.title.or(fallback.title),
            unicode: self.unicode.or(fallback.unicode),
        }
    }

    /// The document path, defaulted.
    pub fn docs_path(&self) -> PathBuf {
        self.docs
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DOCS))
    }

    /// The welcome-view heading, defaulted.
    pub fn title_text(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| DEFAULT_TITLE.to_string())
    }
}

/// Load and merge the file and environment layers for a project
/// directory. Missing files are fine; unreadable or invalid ones error.
pub fn load_merged(
    project_dir: &Path,
    get_env: impl Fn(&str) -> Option<String>,
) -> DocResult<(Config, Vec<ConfigWarning>)> {
    let mut warnings = Vec::new();
    let mut merged = Config::default();

    // Lowest priority first; each later layer overrides the merge so far.
    let mut layers = Vec::new();
    if let Some(user) = user_config_path() {
        layers.push(user);
    }
    layers.push(project_dir.join(PROJECT_CONFIG));

    for path in layers {
        if !path.exists() {
            continue;
        }
        let content = std::fs::read_to_string(&path)?;
        let (config, file_warnings) = Config::parse(&content, &path)?;
        warnings.extend(file_warnings);
        merged = config.or(merged);
    }

    Ok((Config::from_env(&get_env).or(merged), warnings))
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("docnav").join("config.toml"))
}

fn truthy(value: &str) -> bool {
    !matches!(value.trim(), "" | "0" | "false" | "no")
}
