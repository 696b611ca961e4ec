//! Reactive bridge between the controller and Leptos signals

use leptos::prelude::*;
use masthead_core::{
    Interaction, NavCatalog, NavConfig, NavLabel, NavSnapshot, NavigationController, ThemeMode,
};

/// Copyable handle shared with every header component via context
///
/// The snapshot signal is only written when the controller reports a change,
/// so a stream of scroll events that never flips the flag triggers no redraw.
#[derive(Clone, Copy)]
pub struct NavContext {
    controller: StoredValue<NavigationController>,
    config: StoredValue<NavConfig>,
    snapshot: RwSignal<NavSnapshot>,
    theme: Memo<ThemeMode>,
}

impl NavContext {
    pub fn new(controller: NavigationController, config: NavConfig) -> Self {
        let snapshot = RwSignal::new(controller.snapshot());
        let theme = Memo::new(move |_| snapshot.with(|s| s.theme));
        Self {
            controller: StoredValue::new(controller),
            config: StoredValue::new(config),
            snapshot,
            theme,
        }
    }

    /// Apply an interaction and publish the new snapshot if anything changed
    pub fn dispatch(&self, interaction: Interaction) {
        let changed = self.controller.with_value(|c| c.dispatch(interaction));
        if changed {
            self.snapshot
                .set(self.controller.with_value(NavigationController::snapshot));
        }
    }

    pub fn theme(&self) -> Memo<ThemeMode> {
        self.theme
    }

    pub fn is_dropdown_open(&self, label: &str) -> bool {
        self.snapshot.with(|s| s.is_dropdown_open(label))
    }

    pub fn has_open_dropdown(&self) -> bool {
        self.snapshot.with(|s| s.open_dropdown.is_some())
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.snapshot.with(|s| s.mobile_menu_open)
    }

    pub fn active_mobile_panel(&self) -> Option<NavLabel> {
        self.snapshot.with(|s| s.active_mobile_panel.clone())
    }

    /// Label set is immutable, so this is read untracked
    pub fn catalog(&self) -> NavCatalog {
        self.controller.with_value(|c| c.catalog().clone())
    }

    pub fn with_config<T>(&self, f: impl FnOnce(&NavConfig) -> T) -> T {
        self.config.with_value(f)
    }
}

/// Create the context and make it available to descendants
pub fn provide_nav_context(controller: NavigationController, config: NavConfig) -> NavContext {
    let context = NavContext::new(controller, config);
    provide_context(context);
    context
}

pub fn use_nav() -> NavContext {
    expect_context::<NavContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_snapshot_written_only_on_change() {
        let owner = Owner::new();
        owner.with(|| {
            let nav = NavContext::new(NavigationController::default(), NavConfig::default());

            // Recomputes once per snapshot write that is read back
            let writes = Arc::new(AtomicUsize::new(0));
            let counter = Arc::clone(&writes);
            let observer = Memo::new(move |_| {
                nav.snapshot.track();
                counter.fetch_add(1, Ordering::SeqCst);
            });
            observer.get_untracked();
            assert_eq!(writes.load(Ordering::SeqCst), 1);

            for _ in 0..5 {
                nav.dispatch(Interaction::Scroll(5.0));
                observer.get_untracked();
            }
            assert_eq!(writes.load(Ordering::SeqCst), 2);
            assert_eq!(nav.theme().get_untracked(), ThemeMode::Dark);

            nav.dispatch(Interaction::CloseDropdown);
            observer.get_untracked();
            assert_eq!(writes.load(Ordering::SeqCst), 2);

            nav.dispatch(Interaction::Scroll(0.0));
            observer.get_untracked();
            assert_eq!(writes.load(Ordering::SeqCst), 3);
            assert_eq!(nav.theme().get_untracked(), ThemeMode::Light);
        });
    }
}
