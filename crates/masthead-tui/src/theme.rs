//! Header palette for the terminal preview
//!
//! Every color is a function of [`ThemeMode`]; there is no third palette.

use masthead_core::ThemeMode;
use ratatui::style::{Color, Modifier, Style};

/// Colors used to draw the header for one theme mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderPalette {
    pub fg: Color,
    pub bg: Color,
    /// Open dropdown button, cart badge
    pub accent: Color,
    /// Plain links, hints
    pub muted: Color,
}

impl HeaderPalette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self {
                fg: Color::Black,
                bg: Color::White,
                accent: Color::Rgb(9, 117, 122),
                muted: Color::DarkGray,
            },
            ThemeMode::Dark => Self {
                fg: Color::White,
                bg: Color::Black,
                accent: Color::Cyan,
                muted: Color::Gray,
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Button whose dropdown is open
    pub fn open(&self) -> Style {
        Style::default()
            .fg(self.bg)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn focused(&self) -> Style {
        self.base().add_modifier(Modifier::UNDERLINED | Modifier::BOLD)
    }

    pub fn link(&self) -> Style {
        Style::default().fg(self.muted).bg(self.bg)
    }

    pub fn badge(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }
}
