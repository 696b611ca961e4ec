//! Class lists for the header, derived from theme mode and open state
//!
//! Kept as pure functions so the only styling input is the snapshot.

use masthead_core::{NavSection, ThemeMode};

/// Sticky header wrapper
pub fn header_class(theme: ThemeMode) -> &'static str {
    match theme {
        ThemeMode::Light => {
            "bg-white text-gray-700 sticky top-0 z-50 text-sm transition-colors duration-300"
        }
        ThemeMode::Dark => {
            "bg-black text-white sticky top-0 z-50 text-sm shadow-lg transition-colors duration-300"
        }
    }
}

/// Button of an entry that owns a dropdown
pub fn nav_button_class(section: NavSection, open: bool) -> &'static str {
    match (section, open) {
        (NavSection::Primary, true) => "flex items-center px-4 py-2 rounded bg-black text-white",
        (NavSection::Primary, false) => {
            "flex items-center px-4 py-2 rounded hover:bg-gray-200 hover:text-black"
        }
        (NavSection::Utility, true) => "flex items-center px-2 py-2 rounded bg-black text-white",
        (NavSection::Utility, false) => {
            "flex items-center px-2 py-2 rounded hover:bg-gray-400 hover:text-white"
        }
    }
}

/// Plain placeholder link
pub fn link_class(section: NavSection) -> &'static str {
    match section {
        NavSection::Primary => "flex items-center px-4 py-2 rounded hover:bg-gray-400 hover:text-white",
        NavSection::Utility => "flex items-center px-2 py-2 rounded hover:bg-gray-400 hover:text-white",
    }
}

/// Dropdown chevron, flipped while open
pub fn chevron_class(open: bool) -> &'static str {
    if open {
        "ml-1 inline-block transition-transform duration-500 -scale-y-100"
    } else {
        "ml-1 inline-block transition-transform duration-500"
    }
}

/// Primary dropdowns span the header; utility ones hang from the right
pub fn dropdown_class(section: NavSection) -> &'static str {
    match section {
        NavSection::Primary => "absolute top-full left-0 w-full bg-black text-white shadow-lg p-4 z-50",
        NavSection::Utility => "absolute top-full right-0 w-48 bg-white text-gray-700 shadow-lg p-2 z-50",
    }
}

/// Off-canvas drawer, slid in while the mobile menu is open
pub fn drawer_class(open: bool) -> &'static str {
    if open {
        "fixed inset-y-0 left-0 w-80 bg-white text-gray-700 z-50 xl:hidden transition-transform duration-300 translate-x-0"
    } else {
        "fixed inset-y-0 left-0 w-80 bg-white text-gray-700 z-50 xl:hidden transition-transform duration-300 -translate-x-full"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_has_exactly_two_themes() {
        assert_ne!(header_class(ThemeMode::Light), header_class(ThemeMode::Dark));
        assert!(header_class(ThemeMode::Light).contains("bg-white"));
        assert!(header_class(ThemeMode::Dark).contains("bg-black"));
    }

    #[test]
    fn test_open_button_is_highlighted() {
        for section in [NavSection::Primary, NavSection::Utility] {
            assert!(nav_button_class(section, true).contains("bg-black"));
            assert!(!nav_button_class(section, false).contains("bg-black"));
        }
    }

    #[test]
    fn test_drawer_slides() {
        assert!(drawer_class(true).contains("translate-x-0"));
        assert!(drawer_class(false).contains("-translate-x-full"));
    }

    #[test]
    fn test_chevron_flips_when_open() {
        assert!(chevron_class(true).contains("-scale-y-100"));
        assert!(!chevron_class(false).contains("scale-y"));
    }
}
