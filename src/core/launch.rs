use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::SetupError;

/// Whether the session about to start is single-player or a 1v1 duel.
///
/// The wire labels `single` and `multi` are what downstream game
/// engines receive; the UI labels are purely presentational.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    #[serde(rename = "single")]
    Solo,
    #[serde(rename = "multi")]
    Duel,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Solo => "single",
            GameMode::Duel => "multi",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GameMode::Solo => "Solo Adventure",
            GameMode::Duel => "1v1 Duel",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            GameMode::Solo => "Beat the clock",
            GameMode::Duel => "Challenge a friend",
        }
    }

    pub fn all() -> [GameMode; 2] {
        [GameMode::Solo, GameMode::Duel]
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "solo" | "single" => Ok(GameMode::Solo),
            "duel" | "multi" => Ok(GameMode::Duel),
            other => Err(SetupError::configuration(format!(
                "Unknown game mode '{}' (expected solo or duel)",
                other
            ))),
        }
    }
}

/// Pacing tier for solo play. Retained while in duel mode but only
/// shown when the mode is solo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn all() -> [Difficulty; 3] {
        [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(SetupError::configuration(format!(
                "Unknown difficulty '{}' (expected easy, medium or hard)",
                other
            ))),
        }
    }
}

/// The full selection handed to the game engine when a preset is
/// activated. Built once per activation, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRequest {
    pub mode: GameMode,
    pub items: Vec<String>,
    pub theme_name: String,
    pub difficulty: Difficulty,
}

/// The one capability the setup screen requires from its caller. The
/// caller owns all downstream game-start logic; launching is assumed
/// not to fail.
pub trait GameLauncher {
    fn launch(&mut self, request: LaunchRequest);
}

impl<F> GameLauncher for F
where
    F: FnMut(LaunchRequest),
{
    fn launch(&mut self, request: LaunchRequest) {
        self(request)
    }
}
