//! Immutable navigation label set
//!
//! Built once from [`NavConfig`]; defines which labels the controller accepts.

use crate::config::{NavConfig, NavEntry};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Identifier of a navigation entry (its display label)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavLabel(String);

impl NavLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NavLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for NavLabel {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NavLabel {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl PartialEq<str> for NavLabel {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NavLabel {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Which navigation bar an item lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavSection {
    Primary,
    Utility,
}

/// A resolved navigation entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: NavLabel,
    pub section: NavSection,
    pub has_submenu: bool,
    pub links: Vec<String>,
}

impl NavItem {
    fn from_entry(entry: &NavEntry, section: NavSection) -> Self {
        Self {
            label: NavLabel::new(entry.label.trim()),
            section,
            has_submenu: entry.has_submenu,
            links: entry.links.clone(),
        }
    }

    /// Lines shown inside the dropdown / mobile sub-panel
    pub fn dropdown_lines(&self) -> Vec<String> {
        if self.links.is_empty() {
            vec![format!("Dropdown content for {}", self.label)]
        } else {
            self.links.clone()
        }
    }
}

/// Ordered primary + utility entries
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavCatalog {
    primary: Vec<NavItem>,
    utility: Vec<NavItem>,
}

impl NavCatalog {
    pub fn primary(&self) -> &[NavItem] {
        &self.primary
    }

    pub fn utility(&self) -> &[NavItem] {
        &self.utility
    }

    /// All items, primary first
    pub fn items(&self) -> impl Iterator<Item = &NavItem> {
        self.primary.iter().chain(self.utility.iter())
    }

    pub fn len(&self) -> usize {
        self.primary.len() + self.utility.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, label: &str) -> Option<&NavItem> {
        self.items().find(|item| item.label == label)
    }

    /// Canonical label for `label` if it names an entry with a submenu
    pub fn submenu_label(&self, label: &str) -> Option<&NavLabel> {
        self.get(label)
            .filter(|item| item.has_submenu)
            .map(|item| &item.label)
    }

    /// Dropdown content for `label`, `None` for unknown or plain-link entries
    pub fn dropdown_content(&self, label: &str) -> Option<Vec<String>> {
        self.get(label)
            .filter(|item| item.has_submenu)
            .map(NavItem::dropdown_lines)
    }
}

impl From<&NavConfig> for NavCatalog {
    fn from(config: &NavConfig) -> Self {
        Self {
            primary: config
                .primary
                .iter()
                .map(|e| NavItem::from_entry(e, NavSection::Primary))
                .collect(),
            utility: config
                .utility
                .iter()
                .map(|e| NavItem::from_entry(e, NavSection::Utility))
                .collect(),
        }
    }
}
