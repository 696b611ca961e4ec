//! Navigation state and its derived projections

use crate::catalog::NavLabel;
use crate::event::NavEvent;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual mode of the header, selected purely by scroll position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// At the top of the page
    #[default]
    Light,
    /// Page scrolled past the top
    Dark,
}

impl ThemeMode {
    pub fn from_scrolled(scrolled: bool) -> Self {
        if scrolled {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four mutable fields owned by the controller
///
/// `active_mobile_panel` is only ever `Some` while `mobile_menu_open` is true.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavState {
    pub scrolled: bool,
    pub open_dropdown: Option<NavLabel>,
    pub mobile_menu_open: bool,
    pub active_mobile_panel: Option<NavLabel>,
}

impl NavState {
    pub fn theme_mode(&self) -> ThemeMode {
        ThemeMode::from_scrolled(self.scrolled)
    }

    pub fn snapshot(&self) -> NavSnapshot {
        NavSnapshot {
            scrolled: self.scrolled,
            open_dropdown: self.open_dropdown.clone(),
            mobile_menu_open: self.mobile_menu_open,
            active_mobile_panel: self.active_mobile_panel.clone(),
            theme: self.theme_mode(),
        }
    }

    /// Events describing every field that differs between `self` and `next`
    pub(crate) fn diff(&self, next: &NavState) -> Vec<NavEvent> {
        let mut events = Vec::new();
        if self.scrolled != next.scrolled {
            events.push(NavEvent::ScrollChanged {
                scrolled: next.scrolled,
                theme: next.theme_mode(),
            });
        }
        if self.open_dropdown != next.open_dropdown {
            events.push(NavEvent::DropdownChanged(next.open_dropdown.clone()));
        }
        if self.mobile_menu_open != next.mobile_menu_open {
            events.push(NavEvent::MobileMenuChanged(next.mobile_menu_open));
        }
        if self.active_mobile_panel != next.active_mobile_panel {
            events.push(NavEvent::MobilePanelChanged(
                next.active_mobile_panel.clone(),
            ));
        }
        events
    }
}

/// Read-only view handed to renderers
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavSnapshot {
    pub scrolled: bool,
    pub open_dropdown: Option<NavLabel>,
    pub mobile_menu_open: bool,
    pub active_mobile_panel: Option<NavLabel>,
    pub theme: ThemeMode,
}

impl NavSnapshot {
    pub fn is_dropdown_open(&self, label: &str) -> bool {
        self.open_dropdown.as_ref().is_some_and(|open| open == label)
    }

    pub fn is_panel_active(&self, label: &str) -> bool {
        self.active_mobile_panel
            .as_ref()
            .is_some_and(|active| active == label)
    }
}
