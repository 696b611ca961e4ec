//! Discrete input events and the line-oriented script format used by `replay`
//!
//! ```text
//! # comment
//! scroll 120
//! menu
//! panel Websites and Hosting
//! back
//! ```

use crate::error::CoreError;
use std::fmt;
use std::str::FromStr;

/// Something the user (or the host environment) did
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
    /// Vertical scroll offset reported by the host
    Scroll(f64),
    /// Nav button with a submenu was activated
    ToggleDropdown(String),
    /// Explicit close (×) control
    CloseDropdown,
    /// Click landed outside any open dropdown
    ClickOutside,
    /// Hamburger button
    ToggleMobileMenu,
    /// Entry in the mobile drawer was activated
    OpenMobilePanel(String),
    /// Back control inside a mobile sub-panel
    MobileBack,
}

impl fmt::Display for Interaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interaction::Scroll(offset) => write!(f, "scroll {offset}"),
            Interaction::ToggleDropdown(label) => write!(f, "toggle {label}"),
            Interaction::CloseDropdown => f.write_str("close"),
            Interaction::ClickOutside => f.write_str("outside"),
            Interaction::ToggleMobileMenu => f.write_str("menu"),
            Interaction::OpenMobilePanel(label) => write!(f, "panel {label}"),
            Interaction::MobileBack => f.write_str("back"),
        }
    }
}

impl FromStr for Interaction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (verb, rest) = match s.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (s, ""),
        };

        let require_label = |verb: &str| {
            if rest.is_empty() {
                Err(format!("'{verb}' needs a label"))
            } else {
                Ok(rest.to_string())
            }
        };
        let no_argument = |value: Interaction| {
            if rest.is_empty() {
                Ok(value)
            } else {
                Err(format!("'{verb}' takes no argument"))
            }
        };

        match verb.to_ascii_lowercase().as_str() {
            "scroll" => rest
                .parse::<f64>()
                .map(Interaction::Scroll)
                .map_err(|_| format!("invalid scroll offset '{rest}'")),
            "toggle" => require_label("toggle").map(Interaction::ToggleDropdown),
            "panel" => require_label("panel").map(Interaction::OpenMobilePanel),
            "close" => no_argument(Interaction::CloseDropdown),
            "outside" => no_argument(Interaction::ClickOutside),
            "menu" => no_argument(Interaction::ToggleMobileMenu),
            "back" => no_argument(Interaction::MobileBack),
            "" => Err("empty interaction".to_string()),
            other => Err(format!("unknown interaction '{other}'")),
        }
    }
}

/// Parse a script, skipping blank lines and `#` comments
pub fn parse_script(script: &str) -> Result<Vec<Interaction>, CoreError> {
    script
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(index, line)| {
            line.parse().map_err(|message| CoreError::ScriptParse {
                line: index + 1,
                message,
            })
        })
        .collect()
}
