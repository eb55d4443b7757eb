pub mod loader;
pub mod reveal;
pub mod scroll;
pub mod timers;
pub mod widgets;
