//! Event bus for masthead using tokio::broadcast
//!
//! Publishes navigation state changes. Only real transitions are published,
//! so subscribers never see bursts of identical scroll updates.

use crate::catalog::NavLabel;
use crate::state::ThemeMode;
use tokio::sync::broadcast;

/// A field of the navigation state changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    /// Scroll flag flipped (and with it the theme)
    ScrollChanged { scrolled: bool, theme: ThemeMode },
    /// Open dropdown replaced or cleared
    DropdownChanged(Option<NavLabel>),
    /// Mobile drawer opened or closed
    MobileMenuChanged(bool),
    /// Mobile sub-panel replaced or cleared
    MobilePanelChanged(Option<NavLabel>),
}

/// Event bus for broadcasting navigation events
///
/// Uses tokio::broadcast for multi-consumer support.
/// Renderers subscribe for redraw triggers.
pub struct EventBus {
    sender: broadcast::Sender<NavEvent>,
}

impl EventBus {
    /// Create a new event bus with specified channel capacity
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Create with default capacity (64 events)
    pub fn default_capacity() -> Self {
        Self::new(64)
    }

    /// Publish an event to all subscribers
    pub fn publish(&self, event: NavEvent) {
        // No subscribers is fine
        let _ = self.sender.send(event);
    }

    /// Subscribe to receive events
    pub fn subscribe(&self) -> broadcast::Receiver<NavEvent> {
        self.sender.subscribe()
    }

    /// Get current number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::default_capacity()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}
