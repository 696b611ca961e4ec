//! Header configuration
//!
//! Stored as TOML in `<config_dir>/masthead/masthead.toml`. Every field has a
//! default, so a partial file (or no file at all) yields a usable header.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const CONFIG_FILE_NAME: &str = "masthead.toml";

/// One navigation entry (primary or utility)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    pub label: String,

    /// Whether activating the entry opens a dropdown / mobile sub-panel
    #[serde(default)]
    pub has_submenu: bool,

    /// Dropdown content; a placeholder line is rendered when empty
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<String>,
}

impl NavEntry {
    pub fn link(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            has_submenu: false,
            links: Vec::new(),
        }
    }

    pub fn submenu(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            has_submenu: true,
            links: Vec::new(),
        }
    }
}

/// Interaction policy knobs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Behavior {
    /// Mobile "back" also closes the dropdown synced to the panel.
    /// `false` keeps the dropdown label after leaving the sub-panel.
    pub back_clears_dropdown: bool,
}

impl Default for Behavior {
    fn default() -> Self {
        Self {
            back_clears_dropdown: true,
        }
    }
}

/// Static header configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Text shown next to the logo
    pub brand: String,

    /// Cart badge value (placeholder, no backend)
    pub cart_count: u32,

    /// Target of the mobile phone shortcut
    pub contact_phone: String,

    pub behavior: Behavior,

    /// Primary navigation, in display order
    pub primary: Vec<NavEntry>,

    /// Utility navigation, in display order
    pub utility: Vec<NavEntry>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            brand: "GoDaddy".to_string(),
            cart_count: 0,
            contact_phone: "+1234567890".to_string(),
            behavior: Behavior::default(),
            primary: vec![
                NavEntry::submenu("Domains"),
                NavEntry::submenu("Websites and Hosting"),
                NavEntry::link("Email"),
                NavEntry::submenu("Security"),
                NavEntry::submenu("Marketing"),
                NavEntry::link("Pricing"),
            ],
            utility: vec![NavEntry::link("Help Center"), NavEntry::submenu("Sign In")],
        }
    }
}

impl NavConfig {
    /// Default location: `<config_dir>/masthead/masthead.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("masthead").join(CONFIG_FILE_NAME))
    }

    /// Load and validate a config file. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        if !path.exists() {
            info!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| CoreError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&content).map_err(|source| CoreError::TomlParse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        debug!(
            path = %path.display(),
            primary = config.primary.len(),
            utility = config.utility.len(),
            "Loaded header config"
        );
        Ok(config)
    }

    /// Parse without validation
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml(&self) -> Result<String, CoreError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Persist to `path`, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<(), CoreError> {
        let content = self.to_toml()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| CoreError::FileWrite {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(path, content).map_err(|source| CoreError::FileWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Check the label set is well formed: non-empty and unique across sections
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.brand.trim().is_empty() {
            return Err(CoreError::EmptyBrand);
        }

        let mut seen = HashSet::new();
        let sections = [("primary", &self.primary), ("utility", &self.utility)];
        for (section, entries) in sections {
            for (index, entry) in entries.iter().enumerate() {
                let label = entry.label.trim();
                if label.is_empty() {
                    return Err(CoreError::EmptyLabel { section, index });
                }
                if !seen.insert(label) {
                    return Err(CoreError::DuplicateLabel {
                        label: label.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}
