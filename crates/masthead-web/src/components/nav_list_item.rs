//! One navigation entry: a plain link, or a button owning a dropdown

use leptos::prelude::*;
use masthead_core::{Interaction, NavItem};

use super::DropdownPanel;
use crate::classes;
use crate::context::use_nav;

#[component]
pub fn NavListItem(
    item: NavItem,
    /// Extra classes for the `<li>`, e.g. responsive visibility
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    let nav = use_nav();
    let section = item.section;
    let label = item.label.to_string();

    if !item.has_submenu {
        return view! {
            <li class=class>
                <a href="#" class=classes::link_class(section)>{label}</a>
            </li>
        }
        .into_any();
    }

    let is_open = {
        let label = label.clone();
        Signal::derive(move || nav.is_dropdown_open(&label))
    };
    let toggle_label = label.clone();

    view! {
        <li class=format!("relative {class}")>
            <button
                class=move || classes::nav_button_class(section, is_open.get())
                on:click=move |_| nav.dispatch(Interaction::ToggleDropdown(toggle_label.clone()))
                aria-haspopup="true"
                aria-expanded=move || is_open.get().to_string()
            >
                {label}
                <span class=move || classes::chevron_class(is_open.get()) aria-hidden="true">
                    "▾"
                </span>
            </button>
            <Show when=move || is_open.get()>
                <DropdownPanel item=item.clone() />
            </Show>
        </li>
    }
    .into_any()
}
