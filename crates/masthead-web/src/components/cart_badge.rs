use leptos::prelude::*;

/// Cart link with item counter
#[component]
pub fn CartBadge(count: u32) -> impl IntoView {
    view! {
        <li class="relative">
            <a href="#cart" class="flex items-center p-1" aria-label="Shopping cart">
                <span aria-hidden="true">"Cart"</span>
                <span class="absolute bg-[#09757A] text-white rounded-full w-5 h-5 flex items-center justify-center text-xs -top-1 -right-1">
                    {count}
                    <span class="sr-only">"items in cart"</span>
                </span>
            </a>
        </li>
    }
}
