//! Preview application state

use crate::keybindings::{KeyAction, KeyBindings};
use crossterm::event::{KeyCode, KeyModifiers};
use masthead_core::{NavConfig, NavEvent, NavItem, NavigationController, ScrollListener};
use tokio::sync::{broadcast, watch};
use tracing::debug;

/// Rows moved by one scroll step
const SCROLL_STEP: u16 = 3;
/// Rows moved by a page step
const PAGE_STEP: u16 = 20;

/// Main application state
///
/// Owns the scroll source; the controller only ever sees offsets through the
/// attached [`ScrollListener`], which detaches when the app is dropped.
pub struct App {
    /// Shared header state
    pub controller: NavigationController,

    /// Brand, cart badge, phone shortcut
    pub config: NavConfig,

    /// Event receiver for state changes
    pub event_rx: broadcast::Receiver<NavEvent>,

    /// Index into the catalog's items (primary then utility)
    pub focus: usize,

    /// Simulated page scroll, in rows
    pub scroll_offset: u16,

    pub keybindings: KeyBindings,

    pub show_help: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Set when a state event arrived since the last draw
    pub needs_redraw: bool,

    /// Transient message shown in the footer
    pub status_message: Option<String>,

    scroll_tx: watch::Sender<f64>,
    _scroll_listener: ScrollListener,
}

impl App {
    /// Must be called from within a tokio runtime
    pub fn new(controller: NavigationController, config: NavConfig) -> Self {
        let event_rx = controller.subscribe();
        let (scroll_tx, scroll_rx) = watch::channel(0.0);
        let scroll_listener = ScrollListener::spawn(controller.clone(), scroll_rx);

        Self {
            controller,
            config,
            event_rx,
            focus: 0,
            scroll_offset: 0,
            keybindings: KeyBindings::new(),
            show_help: false,
            should_quit: false,
            needs_redraw: true,
            status_message: None,
            scroll_tx,
            _scroll_listener: scroll_listener,
        }
    }

    /// Currently focused nav entry
    pub fn focused_item(&self) -> Option<&NavItem> {
        self.controller.catalog().items().nth(self.focus)
    }

    /// Handle keyboard input. Returns true if the key was bound.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        let Some(action) = self.keybindings.action(code, modifiers) else {
            return false;
        };
        debug!(?action, "Key action");
        self.status_message = None;

        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::FocusNext => self.move_focus(1),
            KeyAction::FocusPrev => self.move_focus(-1),
            KeyAction::Activate => self.activate_focused(),
            KeyAction::Back => self.back(),
            KeyAction::ClickOutside => {
                self.controller.close_dropdown();
            }
            KeyAction::ToggleMenu => {
                self.controller.toggle_mobile_menu();
            }
            KeyAction::ScrollDown => self.scroll_to(self.scroll_offset.saturating_add(SCROLL_STEP)),
            KeyAction::ScrollUp => self.scroll_to(self.scroll_offset.saturating_sub(SCROLL_STEP)),
            KeyAction::PageDown => self.scroll_to(self.scroll_offset.saturating_add(PAGE_STEP)),
            KeyAction::ScrollTop => self.scroll_to(0),
            KeyAction::ToggleHelp => self.show_help = !self.show_help,
        }
        true
    }

    fn move_focus(&mut self, delta: isize) {
        let len = self.controller.catalog().len();
        if len == 0 {
            return;
        }
        let len = len as isize;
        self.focus = (self.focus as isize + delta).rem_euclid(len) as usize;
    }

    fn activate_focused(&mut self) {
        let Some(item) = self.focused_item().cloned() else {
            return;
        };
        if !item.has_submenu {
            self.status_message = Some(format!("'{}' is a placeholder link", item.label));
            return;
        }
        if self.controller.is_mobile_menu_open() {
            self.controller.open_mobile_panel(item.label.as_str());
        } else {
            self.controller.toggle_dropdown(item.label.as_str());
        }
    }

    /// Leave the innermost open layer
    fn back(&mut self) {
        let snapshot = self.controller.snapshot();
        if snapshot.active_mobile_panel.is_some() {
            self.controller.close_mobile_panel();
        } else if snapshot.open_dropdown.is_some() {
            self.controller.close_dropdown();
        } else if snapshot.mobile_menu_open {
            self.controller.toggle_mobile_menu();
        }
    }

    fn scroll_to(&mut self, offset: u16) {
        self.scroll_offset = offset;
        // Receiver lives as long as the listener, which lives as long as self
        let _ = self.scroll_tx.send(f64::from(offset));
    }

    /// Drain state events (non-blocking)
    pub fn poll_events(&mut self) {
        loop {
            match self.event_rx.try_recv() {
                Ok(NavEvent::ScrollChanged { theme, .. }) => {
                    debug!(%theme, "Theme switched");
                    self.needs_redraw = true;
                }
                Ok(_) => self.needs_redraw = true,
                Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                    debug!(skipped, "Event receiver lagged");
                    self.needs_redraw = true;
                }
                Err(_) => break,
            }
        }
    }
}
