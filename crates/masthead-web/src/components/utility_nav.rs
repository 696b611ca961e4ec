//! Utility navigation: help, sign-in, contact shortcuts and cart

use leptos::prelude::*;

use super::{CartBadge, NavListItem};
use crate::context::use_nav;

#[component]
pub fn UtilityNav() -> impl IntoView {
    let nav = use_nav();
    let items = nav.catalog().utility().to_vec();
    let (phone_href, cart_count) =
        nav.with_config(|c| (format!("tel:{}", c.contact_phone), c.cart_count));

    view! {
        <nav class="flex justify-end items-center relative z-50" aria-label="Utility navigation">
            <ul class="flex gap-2 items-center">
                {items
                    .into_iter()
                    .map(|item| view! { <NavListItem item class="hidden lg:block" /> })
                    .collect_view()}

                <li class="lg:hidden">
                    <a href=phone_href class="flex items-center p-1" aria-label="Contact us">
                        "Call"
                    </a>
                </li>
                <li class="lg:hidden">
                    <a href="#account" class="flex items-center p-1" aria-label="Account">
                        "Account"
                    </a>
                </li>

                <CartBadge count=cart_count />
            </ul>
        </nav>
    }
}
