pub mod app;
pub mod hover;
pub mod input;
pub mod layout;
pub mod popover;
pub mod render;
pub mod theme;

pub use app::run;
