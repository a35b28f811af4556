pub mod menu_bar;
pub mod navbar;
pub mod page;
pub mod status;
