//! Header component

use leptos::ev;
use leptos::prelude::*;
use masthead_core::Interaction;

use super::{MobileDrawer, PrimaryNav, UtilityNav};
use crate::classes;
use crate::context::use_nav;

/// Sticky header with logo, navigation bars and the mobile drawer
#[component]
pub fn Header() -> impl IntoView {
    let nav = use_nav();
    let brand = nav.with_config(|c| c.brand.clone());

    // Detached together with the header
    let scroll_listener = window_event_listener(ev::scroll, move |_| {
        let offset = window().scroll_y().unwrap_or_default();
        nav.dispatch(Interaction::Scroll(offset));
    });
    on_cleanup(move || scroll_listener.remove());

    view! {
        <div class=move || classes::header_class(nav.theme().get())>
            <header class="relative flex justify-between flex-wrap gap-4 px-4 lg:px-10 py-3">
                <section class="flex items-center gap-5">
                    <div class="flex items-center gap-4">
                        <button
                            class="xl:hidden"
                            on:click=move |_| nav.dispatch(Interaction::ToggleMobileMenu)
                            aria-label="Toggle menu"
                            aria-expanded=move || nav.is_mobile_menu_open().to_string()
                        >
                            <span class="text-2xl" aria-hidden="true">"☰"</span>
                        </button>

                        <div class="flex items-center">
                            <span class="w-9 h-9 rounded-full bg-current" aria-hidden="true"></span>
                            <h1 class="font-extrabold hidden md:block text-2xl pl-1">{brand}</h1>
                        </div>
                    </div>

                    <PrimaryNav />
                </section>

                <UtilityNav />
            </header>

            // Click-outside catcher, below the header in stacking order
            <Show when=move || nav.has_open_dropdown()>
                <div
                    class="fixed inset-0 z-40"
                    on:click=move |_| nav.dispatch(Interaction::ClickOutside)
                ></div>
            </Show>

            <MobileDrawer />
        </div>
    }
}
