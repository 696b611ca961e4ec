//! Navigation state controller
//!
//! The only place the header's interactive state is mutated. Every operation
//! is total: out-of-contract calls (unknown labels, panels while the drawer is
//! closed) are ignored and logged, never rejected.

use crate::catalog::{NavCatalog, NavLabel};
use crate::config::{Behavior, NavConfig};
use crate::error::CoreError;
use crate::event::{EventBus, NavEvent};
use crate::interaction::Interaction;
use crate::state::{NavSnapshot, NavState, ThemeMode};
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, trace};

/// Shared handle to the header state
///
/// Cloning is cheap; all clones observe and mutate the same state.
#[derive(Clone)]
pub struct NavigationController {
    catalog: Arc<NavCatalog>,
    behavior: Behavior,
    state: Arc<RwLock<NavState>>,
    event_bus: EventBus,
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new(NavCatalog::from(&NavConfig::default()), Behavior::default())
    }
}

impl NavigationController {
    pub fn new(catalog: NavCatalog, behavior: Behavior) -> Self {
        Self {
            catalog: Arc::new(catalog),
            behavior,
            state: Arc::new(RwLock::new(NavState::default())),
            event_bus: EventBus::default(),
        }
    }

    /// Validate `config` and build a controller over its label set
    pub fn from_config(config: &NavConfig) -> Result<Self, CoreError> {
        config.validate()?;
        Ok(Self::new(NavCatalog::from(config), config.behavior))
    }

    pub fn catalog(&self) -> &NavCatalog {
        &self.catalog
    }

    pub fn behavior(&self) -> Behavior {
        self.behavior
    }

    pub fn subscribe(&self) -> broadcast::Receiver<NavEvent> {
        self.event_bus.subscribe()
    }

    pub fn snapshot(&self) -> NavSnapshot {
        self.state.read().snapshot()
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.state.read().theme_mode()
    }

    pub fn is_scrolled(&self) -> bool {
        self.state.read().scrolled
    }

    pub fn open_dropdown(&self) -> Option<NavLabel> {
        self.state.read().open_dropdown.clone()
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.state.read().mobile_menu_open
    }

    pub fn active_mobile_panel(&self) -> Option<NavLabel> {
        self.state.read().active_mobile_panel.clone()
    }

    pub fn is_dropdown_open(&self, label: &str) -> bool {
        self.state
            .read()
            .open_dropdown
            .as_ref()
            .is_some_and(|open| open == label)
    }

    /// Content of the currently open dropdown, if any
    pub fn open_dropdown_content(&self) -> Option<(NavLabel, Vec<String>)> {
        let label = self.open_dropdown()?;
        let lines = self.catalog.dropdown_content(label.as_str())?;
        Some((label, lines))
    }

    /// Record the latest vertical scroll offset. Returns true when the
    /// scrolled flag flipped.
    pub fn set_scrolled(&self, offset: f64) -> bool {
        // NaN compares false, so it counts as "at the top"
        let scrolled = offset > 0.0;

        // Hot path: scroll events are bursty and rarely flip the flag
        if self.state.read().scrolled == scrolled {
            return false;
        }
        self.apply("set_scrolled", |state| state.scrolled = scrolled)
    }

    /// Open `label`'s dropdown, or close it if it is already open
    pub fn toggle_dropdown(&self, label: &str) -> bool {
        let Some(label) = self.known_submenu(label, "toggle_dropdown") else {
            return false;
        };
        self.apply("toggle_dropdown", |state| {
            if state.open_dropdown.as_ref() == Some(&label) {
                state.open_dropdown = None;
            } else {
                state.open_dropdown = Some(label);
            }
        })
    }

    pub fn close_dropdown(&self) -> bool {
        self.apply("close_dropdown", |state| state.open_dropdown = None)
    }

    /// Flip the drawer. Closing it also clears the dropdown and sub-panel.
    pub fn toggle_mobile_menu(&self) -> bool {
        self.apply("toggle_mobile_menu", |state| {
            state.mobile_menu_open = !state.mobile_menu_open;
            if !state.mobile_menu_open {
                state.open_dropdown = None;
                state.active_mobile_panel = None;
            }
        })
    }

    /// Slide `label`'s sub-panel into the drawer. The dropdown selection is
    /// kept in sync so desktop and mobile share one content lookup.
    pub fn open_mobile_panel(&self, label: &str) -> bool {
        let Some(label) = self.known_submenu(label, "open_mobile_panel") else {
            return false;
        };
        self.apply("open_mobile_panel", |state| {
            if !state.mobile_menu_open {
                debug!(%label, "Ignoring mobile panel while the menu is closed");
                return;
            }
            state.active_mobile_panel = Some(label.clone());
            state.open_dropdown = Some(label);
        })
    }

    /// "Back" one level inside the drawer
    pub fn close_mobile_panel(&self) -> bool {
        let clear_dropdown = self.behavior.back_clears_dropdown;
        self.apply("close_mobile_panel", |state| {
            if state.active_mobile_panel.take().is_some() && clear_dropdown {
                state.open_dropdown = None;
            }
        })
    }

    /// Route an input event to its operation. Returns true if state changed.
    pub fn dispatch(&self, interaction: Interaction) -> bool {
        match interaction {
            Interaction::Scroll(offset) => self.set_scrolled(offset),
            Interaction::ToggleDropdown(label) => self.toggle_dropdown(&label),
            Interaction::CloseDropdown | Interaction::ClickOutside => self.close_dropdown(),
            Interaction::ToggleMobileMenu => self.toggle_mobile_menu(),
            Interaction::OpenMobilePanel(label) => self.open_mobile_panel(&label),
            Interaction::MobileBack => self.close_mobile_panel(),
        }
    }

    fn known_submenu(&self, label: &str, op: &'static str) -> Option<NavLabel> {
        let found = self.catalog.submenu_label(label).cloned();
        if found.is_none() {
            debug!(op, label, "Ignoring label without a submenu");
        }
        found
    }

    /// Mutate and publish an event per changed field under one write lock.
    /// Events leave before the lock is released, so their order matches
    /// mutation order across clones.
    fn apply(&self, op: &'static str, mutate: impl FnOnce(&mut NavState)) -> bool {
        let mut state = self.state.write();
        let before = state.clone();
        mutate(&mut *state);
        debug_assert!(state.active_mobile_panel.is_none() || state.mobile_menu_open);

        let events = before.diff(&*state);
        if events.is_empty() {
            trace!(op, "No state change");
            return false;
        }

        trace!(op, changes = events.len(), "Navigation state changed");
        for event in events {
            self.event_bus.publish(event);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> NavigationController {
        NavigationController::default()
    }

    #[test]
    fn test_scroll_threshold() {
        let nav = controller();
        for offset in [0.0, -1.0, -500.0, f64::NAN] {
            nav.set_scrolled(offset);
            assert!(!nav.is_scrolled(), "offset {offset} should not count");
        }
        for offset in [0.5, 1.0, 120.0] {
            nav.set_scrolled(offset);
            assert!(nav.is_scrolled(), "offset {offset} should count");
            assert_eq!(nav.theme_mode(), ThemeMode::Dark);
        }
        nav.set_scrolled(0.0);
        assert_eq!(nav.theme_mode(), ThemeMode::Light);
    }

    #[test]
    fn test_scroll_only_reports_flips() {
        let nav = controller();
        assert!(!nav.set_scrolled(0.0));
        assert!(nav.set_scrolled(10.0));
        assert!(!nav.set_scrolled(20.0));
        assert!(!nav.set_scrolled(30.0));
        assert!(nav.set_scrolled(0.0));
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let nav = controller();
        nav.toggle_dropdown("Domains");
        assert!(nav.is_dropdown_open("Domains"));
        nav.toggle_dropdown("Domains");
        assert!(nav.open_dropdown().is_none());
    }

    #[test]
    fn test_toggle_replaces_previous_dropdown() {
        let nav = controller();
        nav.toggle_dropdown("Domains");
        nav.toggle_dropdown("Security");
        assert_eq!(nav.open_dropdown().unwrap(), "Security");
        assert!(!nav.is_dropdown_open("Domains"));
    }

    #[test]
    fn test_unknown_or_plain_labels_are_ignored() {
        let nav = controller();
        nav.toggle_dropdown("Marketing");
        assert!(!nav.toggle_dropdown("Nope"));
        assert!(!nav.toggle_dropdown("Pricing"));
        assert_eq!(nav.open_dropdown().unwrap(), "Marketing");
    }

    #[test]
    fn test_close_dropdown_idempotent() {
        let nav = controller();
        nav.toggle_dropdown("Sign In");
        assert!(nav.close_dropdown());
        let once = nav.snapshot();
        assert!(!nav.close_dropdown());
        assert_eq!(nav.snapshot(), once);
    }

    #[test]
    fn test_opening_menu_preserves_dropdown() {
        let nav = controller();
        nav.toggle_dropdown("Domains");
        nav.toggle_mobile_menu();
        let snap = nav.snapshot();
        assert!(snap.mobile_menu_open);
        assert!(snap.is_dropdown_open("Domains"));
        assert!(snap.active_mobile_panel.is_none());
    }

    #[test]
    fn test_closing_menu_cascades() {
        let nav = controller();
        nav.toggle_mobile_menu();
        nav.open_mobile_panel("Security");
        nav.toggle_mobile_menu();
        let snap = nav.snapshot();
        assert!(!snap.mobile_menu_open);
        assert!(snap.open_dropdown.is_none());
        assert!(snap.active_mobile_panel.is_none());
    }

    #[test]
    fn test_panel_requires_open_menu() {
        let nav = controller();
        assert!(!nav.open_mobile_panel("Domains"));
        assert!(nav.active_mobile_panel().is_none());
        assert!(nav.open_dropdown().is_none());
    }

    #[test]
    fn test_panel_syncs_dropdown() {
        let nav = controller();
        nav.toggle_mobile_menu();
        nav.open_mobile_panel("Websites and Hosting");
        assert_eq!(nav.active_mobile_panel().unwrap(), "Websites and Hosting");
        assert_eq!(nav.open_dropdown().unwrap(), "Websites and Hosting");
    }

    #[test]
    fn test_back_without_panel_is_noop() {
        let nav = controller();
        nav.toggle_mobile_menu();
        assert!(!nav.close_mobile_panel());
        assert!(nav.is_mobile_menu_open());
    }

    #[test]
    fn test_back_clears_synced_dropdown_by_default() {
        let nav = controller();
        nav.toggle_mobile_menu();
        nav.open_mobile_panel("Domains");
        nav.close_mobile_panel();
        assert!(nav.is_mobile_menu_open());
        assert!(nav.active_mobile_panel().is_none());
        assert!(nav.open_dropdown().is_none());
    }

    #[test]
    fn test_back_can_retain_dropdown() {
        let nav = NavigationController::new(
            NavCatalog::from(&NavConfig::default()),
            Behavior {
                back_clears_dropdown: false,
            },
        );
        nav.toggle_mobile_menu();
        nav.open_mobile_panel("Domains");
        nav.close_mobile_panel();
        assert!(nav.active_mobile_panel().is_none());
        assert_eq!(nav.open_dropdown().unwrap(), "Domains");
    }

    #[test]
    fn test_dispatch_routes_click_outside_to_close() {
        let nav = controller();
        nav.dispatch(Interaction::ToggleDropdown("Domains".to_string()));
        assert!(nav.dispatch(Interaction::ClickOutside));
        assert!(nav.open_dropdown().is_none());
    }

    #[test]
    fn test_open_dropdown_content() {
        let nav = controller();
        assert!(nav.open_dropdown_content().is_none());
        nav.toggle_dropdown("Sign In");
        let (label, lines) = nav.open_dropdown_content().unwrap();
        assert_eq!(label, "Sign In");
        assert_eq!(lines, vec!["Dropdown content for Sign In"]);
    }

    #[test]
    fn test_from_config_rejects_duplicates() {
        let mut config = NavConfig::default();
        config.primary.push(config.primary[0].clone());
        assert!(NavigationController::from_config(&config).is_err());
    }

    #[test]
    fn test_clones_share_state() {
        let nav = controller();
        let other = nav.clone();
        other.toggle_mobile_menu();
        assert!(nav.is_mobile_menu_open());
    }

    #[test]
    fn test_last_event_matches_state_under_contention() {
        use tokio::sync::broadcast::error::TryRecvError;

        for _ in 0..20 {
            let nav = controller();
            let mut rx = nav.subscribe();

            std::thread::scope(|scope| {
                for worker in 0..4 {
                    let nav = nav.clone();
                    scope.spawn(move || {
                        for step in 0..50 {
                            let offset = if (step + worker) % 2 == 0 { 10.0 } else { 0.0 };
                            nav.set_scrolled(offset);
                        }
                    });
                }
            });

            let mut last = None;
            loop {
                match rx.try_recv() {
                    Ok(NavEvent::ScrollChanged { scrolled, .. }) => last = Some(scrolled),
                    Ok(_) | Err(TryRecvError::Lagged(_)) => continue,
                    Err(_) => break,
                }
            }

            if let Some(scrolled) = last {
                assert_eq!(scrolled, nav.is_scrolled(), "last published flip is stale");
            } else {
                assert!(!nav.is_scrolled());
            }
        }
    }
}
