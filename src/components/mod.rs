pub mod cursor;
pub mod loader;
pub mod navbar;
pub mod projects;
pub mod reveal;
pub mod sections;
pub mod widgets;
