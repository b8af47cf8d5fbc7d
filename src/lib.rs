pub mod catalog;
pub mod config;
pub mod core;
pub mod ui;
pub mod utils;

pub use crate::catalog::{Preset, PresetCatalog};
pub use crate::config::Config;
pub use crate::core::{Difficulty, GameLauncher, GameMode, LaunchRequest, StartScreen};
pub use crate::ui::SetupInterface;

// Re-export commonly used types
pub type Result<T> = anyhow::Result<T>;

// Game version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
