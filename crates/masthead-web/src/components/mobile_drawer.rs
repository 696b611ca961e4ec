//! Mobile slide-in drawer with a two-level (list → sub-panel) flow

use leptos::prelude::*;
use masthead_core::{Interaction, NavItem};

use crate::classes;
use crate::context::use_nav;

#[component]
pub fn MobileDrawer() -> impl IntoView {
    let nav = use_nav();
    let items: Vec<NavItem> = nav.catalog().items().cloned().collect();

    let active_item = {
        let items = items.clone();
        Memo::new(move |_| {
            let active = nav.active_mobile_panel()?;
            items.iter().find(|item| item.label == active).cloned()
        })
    };

    view! {
        <Show when=move || nav.is_mobile_menu_open()>
            <div
                class="fixed inset-0 bg-black/40 z-40 xl:hidden"
                on:click=move |_| nav.dispatch(Interaction::ToggleMobileMenu)
            ></div>
        </Show>

        <aside
            class=move || classes::drawer_class(nav.is_mobile_menu_open())
            aria-hidden=move || (!nav.is_mobile_menu_open()).to_string()
        >
            <div class="flex justify-between items-center px-4 py-3 border-b">
                <span class="font-bold">"Menu"</span>
                <button
                    aria-label="Close menu"
                    on:click=move |_| nav.dispatch(Interaction::ToggleMobileMenu)
                >
                    "✕"
                </button>
            </div>

            <Show
                when=move || active_item.with(Option::is_none)
                fallback=move || view! { <MobilePanel item=active_item /> }
            >
                <ul class="py-2">
                    {items
                        .clone()
                        .into_iter()
                        .map(|item| view! { <MobileEntry item /> })
                        .collect_view()}
                </ul>
            </Show>
        </aside>
    }
}

/// First-level drawer row
#[component]
fn MobileEntry(item: NavItem) -> impl IntoView {
    let nav = use_nav();
    let label = item.label.to_string();

    if !item.has_submenu {
        return view! {
            <li>
                <a href="#" class="block px-4 py-3">{label}</a>
            </li>
        }
        .into_any();
    }

    let panel_label = label.clone();
    view! {
        <li>
            <button
                class="flex w-full justify-between items-center px-4 py-3"
                on:click=move |_| nav.dispatch(Interaction::OpenMobilePanel(panel_label.clone()))
            >
                {label}
                <span aria-hidden="true">"›"</span>
            </button>
        </li>
    }
    .into_any()
}

/// Second-level panel for the active entry
#[component]
fn MobilePanel(item: Memo<Option<NavItem>>) -> impl IntoView {
    let nav = use_nav();

    view! {
        <div class="py-2">
            <button
                class="flex items-center gap-2 px-4 py-3 font-bold"
                on:click=move |_| nav.dispatch(Interaction::MobileBack)
            >
                <span aria-hidden="true">"‹"</span>
                {move || item.with(|i| i.as_ref().map(|i| i.label.to_string()).unwrap_or_default())}
            </button>
            <ul>
                {move || {
                    item.with(|i| i.as_ref().map(NavItem::dropdown_lines).unwrap_or_default())
                        .into_iter()
                        .map(|line| view! {
                            <li class="px-6 py-2">
                                <a href="#">{line}</a>
                            </li>
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
