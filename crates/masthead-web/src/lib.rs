//! masthead-web - Browser rendering of the masthead header using Leptos
//!
//! Components read navigation state through [`NavContext`] and never touch
//! the controller directly; every click becomes an `Interaction`.

pub mod app;
pub mod classes;
pub mod components;
pub mod context;

pub use app::App;
pub use context::{NavContext, provide_nav_context, use_nav};
