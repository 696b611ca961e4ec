//! Keybindings for the header preview
//!
//! Maps terminal keys to header interactions. Reverse lookup feeds the
//! footer hint line and the help overlay.

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keyboard shortcuts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    Quit,
    /// Move focus to the next nav entry
    FocusNext,
    /// Move focus to the previous nav entry
    FocusPrev,
    /// Activate the focused entry (dropdown on desktop, sub-panel in the drawer)
    Activate,
    /// Leave the innermost open layer (sub-panel, dropdown, drawer)
    Back,
    /// Simulate a click outside the open dropdown
    ClickOutside,
    /// Hamburger button
    ToggleMenu,
    ScrollDown,
    ScrollUp,
    PageDown,
    ScrollTop,
    ToggleHelp,
}

impl KeyAction {
    /// Get all possible actions
    pub fn all() -> &'static [KeyAction] {
        &[
            KeyAction::Quit,
            KeyAction::FocusNext,
            KeyAction::FocusPrev,
            KeyAction::Activate,
            KeyAction::Back,
            KeyAction::ClickOutside,
            KeyAction::ToggleMenu,
            KeyAction::ScrollDown,
            KeyAction::ScrollUp,
            KeyAction::PageDown,
            KeyAction::ScrollTop,
            KeyAction::ToggleHelp,
        ]
    }

    /// Get human-readable description for the help overlay
    pub fn description(&self) -> &'static str {
        match self {
            KeyAction::Quit => "Quit preview",
            KeyAction::FocusNext => "Focus next entry",
            KeyAction::FocusPrev => "Focus previous entry",
            KeyAction::Activate => "Open / close dropdown or sub-panel",
            KeyAction::Back => "Back one level",
            KeyAction::ClickOutside => "Click outside dropdown",
            KeyAction::ToggleMenu => "Toggle mobile menu",
            KeyAction::ScrollDown => "Scroll page down",
            KeyAction::ScrollUp => "Scroll page up",
            KeyAction::PageDown => "Scroll one page down",
            KeyAction::ScrollTop => "Scroll to top",
            KeyAction::ToggleHelp => "Toggle help",
        }
    }
}

/// Key with modifiers for lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct KeyWithMods {
    code: KeyCode,
    modifiers: KeyModifiers,
}

/// Keybindings system
pub struct KeyBindings {
    bindings: HashMap<KeyWithMods, KeyAction>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindings {
    /// Create new keybindings with defaults
    pub fn new() -> Self {
        let defaults = [
            (KeyCode::Char('q'), KeyAction::Quit),
            (KeyCode::Right, KeyAction::FocusNext),
            (KeyCode::Tab, KeyAction::FocusNext),
            (KeyCode::Left, KeyAction::FocusPrev),
            (KeyCode::BackTab, KeyAction::FocusPrev),
            (KeyCode::Enter, KeyAction::Activate),
            (KeyCode::Char(' '), KeyAction::Activate),
            (KeyCode::Esc, KeyAction::Back),
            (KeyCode::Backspace, KeyAction::Back),
            (KeyCode::Char('o'), KeyAction::ClickOutside),
            (KeyCode::Char('m'), KeyAction::ToggleMenu),
            (KeyCode::Down, KeyAction::ScrollDown),
            (KeyCode::Char('j'), KeyAction::ScrollDown),
            (KeyCode::Up, KeyAction::ScrollUp),
            (KeyCode::Char('k'), KeyAction::ScrollUp),
            (KeyCode::PageDown, KeyAction::PageDown),
            (KeyCode::Home, KeyAction::ScrollTop),
            (KeyCode::Char('g'), KeyAction::ScrollTop),
            (KeyCode::Char('?'), KeyAction::ToggleHelp),
        ];

        let bindings = defaults
            .into_iter()
            .map(|(code, action)| {
                (
                    KeyWithMods {
                        code,
                        modifiers: KeyModifiers::NONE,
                    },
                    action,
                )
            })
            .collect();

        Self { bindings }
    }

    /// Look up the action bound to a key press
    pub fn action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<KeyAction> {
        // Terminals report Shift on BackTab and on shifted symbols like '?'
        let modifiers = modifiers.difference(KeyModifiers::SHIFT);
        self.bindings
            .get(&KeyWithMods { code, modifiers })
            .copied()
    }

    /// Keys bound to `action`, formatted for display
    pub fn keys_for(&self, action: KeyAction) -> Vec<String> {
        let mut keys: Vec<String> = self
            .bindings
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|(key, _)| format_key(key.code))
            .collect();
        keys.sort();
        keys
    }
}

fn format_key(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::PageDown => "PgDn".to_string(),
        KeyCode::Home => "Home".to_string(),
        other => format!("{other:?}"),
    }
}
