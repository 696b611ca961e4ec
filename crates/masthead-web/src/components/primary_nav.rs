use leptos::prelude::*;

use super::NavListItem;
use crate::context::use_nav;

/// Inline primary navigation, hidden on narrow viewports
#[component]
pub fn PrimaryNav() -> impl IntoView {
    let items = use_nav().catalog().primary().to_vec();

    view! {
        <nav class="hidden xl:block relative z-50" aria-label="Main navigation">
            <ul class="flex gap-3 items-center">
                {items.into_iter().map(|item| view! { <NavListItem item /> }).collect_view()}
            </ul>
        </nav>
    }
}
