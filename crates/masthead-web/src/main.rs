//! WASM entry point for the Leptos CSR header

use leptos::mount::mount_to_body;
use leptos::prelude::*;
use masthead_web::App;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(|| view! { <App /> });
}
