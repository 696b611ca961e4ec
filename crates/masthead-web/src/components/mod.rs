//! Leptos header components

mod cart_badge;
mod dropdown_panel;
mod header;
mod mobile_drawer;
mod nav_list_item;
mod primary_nav;
mod utility_nav;

pub use cart_badge::CartBadge;
pub use dropdown_panel::DropdownPanel;
pub use header::Header;
pub use mobile_drawer::MobileDrawer;
pub use nav_list_item::NavListItem;
pub use primary_nav::PrimaryNav;
pub use utility_nav::UtilityNav;
