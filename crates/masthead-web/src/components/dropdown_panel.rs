use leptos::prelude::*;
use masthead_core::{Interaction, NavItem};

use crate::classes;
use crate::context::use_nav;

/// Overlay shown under an entry while its dropdown is open
#[component]
pub fn DropdownPanel(item: NavItem) -> impl IntoView {
    let nav = use_nav();
    let lines = item.dropdown_lines();

    view! {
        <div class=classes::dropdown_class(item.section) role="menu">
            <button
                class="float-right px-2 text-lg leading-none"
                aria-label="Close"
                on:click=move |_| nav.dispatch(Interaction::CloseDropdown)
            >
                "×"
            </button>
            <ul>
                {lines
                    .into_iter()
                    .map(|line| view! {
                        <li class="py-1" role="menuitem">
                            <a href="#">{line}</a>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
