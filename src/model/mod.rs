pub mod card;
pub mod config;
pub mod settings;

pub use card::*;
pub use config::*;
pub use settings::*;
