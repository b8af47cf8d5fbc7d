pub mod launch;
pub mod screen;

pub use launch::{Difficulty, GameLauncher, GameMode, LaunchRequest};
pub use screen::StartScreen;
