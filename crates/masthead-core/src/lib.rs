//! masthead-core - Core library for masthead
//!
//! Provides the navigation state model, configuration, and event bus for a
//! responsive site header. Renderers (web, TUI) read snapshots and feed
//! interactions back through [`NavigationController`].

pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod event;
pub mod interaction;
pub mod scroll;
pub mod state;

pub use catalog::{NavCatalog, NavItem, NavLabel, NavSection};
pub use config::{Behavior, NavConfig, NavEntry};
pub use controller::NavigationController;
pub use error::CoreError;
pub use event::{EventBus, NavEvent};
pub use interaction::{Interaction, parse_script};
pub use scroll::ScrollListener;
pub use state::{NavSnapshot, NavState, ThemeMode};
