use crate::core::{Difficulty, GameMode};
use crate::utils::{SetupError, SetupResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub game: GameConfig,
    pub ui: UiConfig,
    pub paths: PathConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub default_mode: GameMode,
    pub default_difficulty: Difficulty,
    pub confirm_exit: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    pub theme: String,
    pub text_width: usize,
    pub animation_speed: AnimationSpeed,
    pub page_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathConfig {
    pub config_dir: PathBuf,
    pub logs_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub log_to_file: bool,
    pub max_log_files: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AnimationSpeed {
    None,
    Slow,
    Medium,
    Fast,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: GameConfig {
                default_mode: GameMode::Solo,
                default_difficulty: Difficulty::Medium,
                confirm_exit: true,
            },
            ui: UiConfig {
                theme: "default".to_string(),
                text_width: 80,
                animation_speed: AnimationSpeed::Medium,
                page_size: 10,
            },
            paths: PathConfig {
                config_dir: PathBuf::from("./assets/config"),
                logs_dir: PathBuf::from("./assets/logs"),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                log_to_file: false,
                max_log_files: 10,
            },
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> SetupResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            // Create default config file
            let default_config = Self::default();
            default_config.save_to_file(path)?;
            return Ok(default_config);
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| SetupError::configuration(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| SetupError::configuration(format!("Failed to parse config file: {}", e)))?;

        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> SetupResult<()> {
        let path = path.as_ref();

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SetupError::configuration(format!("Failed to create config directory: {}", e))
            })?;
        }

        let toml_content = toml::to_string_pretty(self)
            .map_err(|e| SetupError::configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, toml_content)
            .map_err(|e| SetupError::configuration(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    pub fn get_config_dir(&self) -> &Path {
        &self.paths.config_dir
    }

    pub fn get_logs_dir(&self) -> &Path {
        &self.paths.logs_dir
    }

    pub fn ensure_directories(&self) -> SetupResult<()> {
        let dirs = [&self.paths.config_dir, &self.paths.logs_dir];

        for dir in &dirs {
            if !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    SetupError::configuration(format!("Failed to create directory {:?}: {}", dir, e))
                })?;
            }
        }

        Ok(())
    }

    pub fn validate(&self) -> SetupResult<()> {
        // Validate logging level
        match self.logging.level.as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            _ => return Err(SetupError::configuration("Invalid logging level")),
        }

        // Validate paths are not empty
        if self.paths.config_dir.as_os_str().is_empty() {
            return Err(SetupError::configuration("Config directory path cannot be empty"));
        }
        if self.paths.logs_dir.as_os_str().is_empty() {
            return Err(SetupError::configuration("Logs directory path cannot be empty"));
        }

        // Validate numeric values
        if self.ui.text_width < 40 {
            return Err(SetupError::configuration("Text width must be at least 40"));
        }
        if self.ui.page_size == 0 {
            return Err(SetupError::configuration("Page size must be greater than 0"));
        }
        if self.logging.max_log_files == 0 {
            return Err(SetupError::configuration("Max log files must be greater than 0"));
        }

        Ok(())
    }

    pub fn merge_with_cli(&mut self, cli_config: CliConfig) {
        if let Some(log_level) = cli_config.log_level {
            self.logging.level = log_level;
        }
        if cli_config.debug {
            self.logging.level = "debug".to_string();
        }
        if let Some(theme) = cli_config.theme {
            self.ui.theme = theme;
        }
        if let Some(mode) = cli_config.mode {
            self.game.default_mode = mode;
        }
        if let Some(difficulty) = cli_config.difficulty {
            self.game.default_difficulty = difficulty;
        }
    }

    pub fn get_animation_delay_ms(&self) -> u64 {
        match self.ui.animation_speed {
            AnimationSpeed::None => 0,
            AnimationSpeed::Slow => 150,
            AnimationSpeed::Medium => 75,
            AnimationSpeed::Fast => 25,
        }
    }
}

// Configuration that can be overridden by CLI arguments
#[derive(Debug, Default)]
pub struct CliConfig {
    pub log_level: Option<String>,
    pub debug: bool,
    pub theme: Option<String>,
    pub mode: Option<GameMode>,
    pub difficulty: Option<Difficulty>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.game.default_mode, GameMode::Solo);
        assert_eq!(config.game.default_difficulty, Difficulty::Medium);
        assert_eq!(config.ui.theme, "default");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        // Test invalid logging level
        config.logging.level = "invalid".to_string();
        assert!(config.validate().is_err());

        // Reset and test invalid text width
        config = Config::default();
        config.ui.text_width = 20;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let original_config = Config::default();
        original_config.save_to_file(&config_path).unwrap();

        let loaded_config = Config::from_file(&config_path).unwrap();

        assert_eq!(original_config.game.default_mode, loaded_config.game.default_mode);
        assert_eq!(original_config.ui.theme, loaded_config.ui.theme);
        assert_eq!(original_config.logging.level, loaded_config.logging.level);
    }

    #[test]
    fn test_missing_file_creates_default() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("fresh.toml");

        let config = Config::from_file(&config_path).unwrap();
        assert!(config_path.exists());
        assert_eq!(config.ui.theme, "default");
    }

    #[test]
    fn test_cli_config_merge() {
        let mut config = Config::default();
        let cli_config = CliConfig {
            log_level: Some("debug".to_string()),
            debug: false,
            theme: Some("dark".to_string()),
            mode: Some(GameMode::Duel),
            difficulty: Some(Difficulty::Hard),
        };

        config.merge_with_cli(cli_config);

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.ui.theme, "dark");
        assert_eq!(config.game.default_mode, GameMode::Duel);
        assert_eq!(config.game.default_difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_animation_delay() {
        let mut config = Config::default();

        config.ui.animation_speed = AnimationSpeed::None;
        assert_eq!(config.get_animation_delay_ms(), 0);

        config.ui.animation_speed = AnimationSpeed::Slow;
        assert_eq!(config.get_animation_delay_ms(), 150);

        config.ui.animation_speed = AnimationSpeed::Fast;
        assert_eq!(config.get_animation_delay_ms(), 25);
    }
}
