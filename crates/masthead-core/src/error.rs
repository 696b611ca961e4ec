//! Error types for masthead-core
//!
//! Navigation operations are total and never fail; these errors cover the
//! ambient surfaces around them (config files, interaction scripts).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for masthead operations
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================
    // IO Errors
    // ===================
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ===================
    // Parse Errors
    // ===================
    #[error("Failed to parse TOML in {path}")]
    TomlParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Invalid interaction on line {line}: {message}")]
    ScriptParse { line: usize, message: String },

    // ===================
    // Config Errors
    // ===================
    #[error("Navigation entry #{index} in {section} has an empty label")]
    EmptyLabel { section: &'static str, index: usize },

    #[error("Duplicate navigation label: {label}")]
    DuplicateLabel { label: String },

    #[error("Brand name must not be empty")]
    EmptyBrand,
}

impl CoreError {
    /// Actionable hint for the user, when one exists
    pub fn suggestion(&self) -> Option<String> {
        match self {
            CoreError::FileRead { path, .. } => {
                Some(format!("Check permissions: chmod +r {}", path.display()))
            }
            CoreError::TomlParse { path, .. } => Some(format!(
                "Validate syntax with: masthead config check --config {}",
                path.display()
            )),
            CoreError::DuplicateLabel { .. } => {
                Some("Labels must be unique across primary and utility entries".to_string())
            }
            CoreError::ScriptParse { .. } => Some(
                "Expected one of: scroll <offset>, toggle <label>, close, outside, menu, panel <label>, back"
                    .to_string(),
            ),
            _ => None,
        }
    }
}
