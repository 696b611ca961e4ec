pub mod drawer;
pub mod dropdown;
pub mod help_overlay;

pub use drawer::MobileDrawer;
pub use dropdown::DropdownPanel;
pub use help_overlay::HelpOverlay;
