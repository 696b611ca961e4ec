//! Root component: header over a scrollable page

use leptos::prelude::*;
use masthead_core::{NavConfig, NavigationController};

use crate::components::Header;
use crate::context::provide_nav_context;

/// Main App component
#[component]
pub fn App(
    /// Header configuration; defaults to the built-in entries
    #[prop(optional)]
    config: NavConfig,
) -> impl IntoView {
    let (controller, config) = match NavigationController::from_config(&config) {
        Ok(controller) => (controller, config),
        Err(err) => {
            leptos::logging::warn!("Invalid header config, using defaults: {err}");
            (NavigationController::default(), NavConfig::default())
        }
    };
    provide_nav_context(controller, config);

    view! {
        <Header />
        <main class="px-4 lg:px-10 py-8 space-y-6">
            {(1..=40)
                .map(|n| view! { <p class="text-gray-600">"Section " {n}</p> })
                .collect_view()}
        </main>
    }
}
