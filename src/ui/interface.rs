use dialoguer::{Confirm, Select};
use std::time::Duration;
use tokio::time::sleep;

use crate::config::Config;
use crate::core::{Difficulty, GameLauncher, GameMode, LaunchRequest, StartScreen};
use crate::ui::{Display, ThemeManager};
use crate::utils::{SetupError, SetupResult};
use tracing::{info, warn};

pub struct SetupInterface {
    screen: StartScreen,
    display: Display,
    config: Config,
}

impl SetupInterface {
    pub async fn new(config: Config) -> SetupResult<Self> {
        info!("Initializing setup interface");

        // Ensure directories exist
        config.ensure_directories()?;

        let theme_manager = ThemeManager::new();
        let mut display = Display::new(theme_manager, config.ui.text_width)
            .map_err(|e| SetupError::configuration(format!("Failed to create display: {}", e)))?;

        // Set theme if configured
        if !display.set_theme(&config.ui.theme) {
            warn!("Unknown theme '{}', using default", config.ui.theme);
        }

        let screen =
            StartScreen::with_defaults(config.game.default_mode, config.game.default_difficulty);

        // The catalog is compiled in, but a broken preset should fail
        // loudly at startup rather than at activation time.
        if let Err(errors) = screen.catalog().validate() {
            return Err(SetupError::catalog(errors.join("; ")));
        }

        Ok(Self {
            screen,
            display,
            config,
        })
    }

    /// Runs the menu flow until a preset is activated or the user
    /// exits. Returns the launch request handed to the launcher, or
    /// `None` when the user left without starting a game.
    pub async fn run(
        &mut self,
        launcher: &mut dyn GameLauncher,
    ) -> SetupResult<Option<LaunchRequest>> {
        info!("Starting setup interface");

        loop {
            self.display.clear_screen().ok();
            self.show_game_title().await?;

            let choices = vec!["🎮 Set Up New Game", "⚙️ Settings", "🚪 Exit"];

            let selection = Select::new()
                .with_prompt("What would you like to do?")
                .items(&choices)
                .default(0)
                .interact()
                .map_err(|e| SetupError::interaction(format!("Menu selection error: {}", e)))?;

            match selection {
                0 => {
                    if let Some(request) = self.setup_menu(launcher).await? {
                        return Ok(Some(request));
                    }
                }
                1 => self.settings_menu().await?,
                2 => {
                    if self.confirm_exit().await? {
                        break;
                    }
                }
                _ => unreachable!(),
            }
        }

        self.display
            .show_message("Thanks for playing. Keep those neurons warm!", "info")
            .ok();

        Ok(None)
    }

    async fn show_game_title(&mut self) -> SetupResult<()> {
        // ASCII art title
        let title = r#"
╔╦╗┬┌┐┌┌┬┐╔═╗┬  ┬┌─┐
║║║││││ ││╠╣ │  │├─┘
╩ ╩┴┘└┘─┴┘╚  ┴─┘┴┴
"#;

        self.display.show_title(title)?;
        self.display
            .show_message("The Ultimate Memory Challenge", "subtitle")?;
        self.display
            .show_message(&format!("Version {}", crate::VERSION), "info")?;

        let separator = "═".repeat(self.config.ui.text_width);
        self.display.show_message(&separator, "separator")?;
        println!();

        Ok(())
    }

    /// The setup screen proper: mode panel, difficulty panel (solo
    /// only) and the theme cards. Picking a card starts the game.
    async fn setup_menu(
        &mut self,
        launcher: &mut dyn GameLauncher,
    ) -> SetupResult<Option<LaunchRequest>> {
        loop {
            self.display.clear_screen().ok();
            self.show_game_title().await?;

            self.display.show_mode_panel(self.screen.mode()).ok();
            if self.screen.difficulty_visible() {
                self.display
                    .show_difficulty_panel(self.screen.difficulty())
                    .ok();
            }
            self.display
                .show_preset_cards(self.screen.catalog().presets())
                .ok();
            println!();

            let mut choices = vec![format!("👤 Game Mode: {}", self.screen.mode().label())];
            if self.screen.difficulty_visible() {
                choices.push(format!("📶 Difficulty: {}", self.screen.difficulty().label()));
            }

            let preset_offset = choices.len();
            let preset_ids: Vec<String> = self
                .screen
                .catalog()
                .presets()
                .iter()
                .map(|preset| preset.id.clone())
                .collect();

            for preset in self.screen.catalog().presets() {
                choices.push(format!("{} Start with {}", preset.icon(), preset.name));
            }
            choices.push("🔙 Back to Main Menu".to_string());

            let selection = Select::new()
                .with_prompt("Set up your game")
                .items(&choices)
                .default(0)
                .interact()
                .map_err(|e| SetupError::interaction(format!("Setup selection error: {}", e)))?;

            if selection == choices.len() - 1 {
                // Back to main menu
                return Ok(None);
            }

            if selection < preset_offset {
                // Mode or difficulty entry
                match selection {
                    0 => self.choose_mode().await?,
                    1 => self.choose_difficulty().await?,
                    _ => unreachable!(),
                }
                continue;
            }

            // Theme card picked: this hands control to the launcher
            let preset_id = &preset_ids[selection - preset_offset];
            let request = self.screen.activate_preset(preset_id, launcher)?;

            self.display
                .show_success(&format!("Starting \"{}\"...", request.theme_name))?;
            sleep(Duration::from_millis(self.config.get_animation_delay_ms())).await;

            self.display.show_launch_summary(&request).ok();
            return Ok(Some(request));
        }
    }

    async fn choose_mode(&mut self) -> SetupResult<()> {
        let modes = GameMode::all();
        let choices: Vec<String> = modes
            .iter()
            .map(|mode| format!("{} · {}", mode.label(), mode.tagline()))
            .collect();

        let current = modes
            .iter()
            .position(|mode| *mode == self.screen.mode())
            .unwrap_or(0);

        let selection = Select::new()
            .with_prompt("Choose game mode")
            .items(&choices)
            .default(current)
            .interact()
            .map_err(|e| SetupError::interaction(format!("Mode selection error: {}", e)))?;

        self.screen.select_mode(modes[selection]);
        Ok(())
    }

    async fn choose_difficulty(&mut self) -> SetupResult<()> {
        let difficulties = Difficulty::all();
        let choices: Vec<&str> = difficulties.iter().map(|d| d.label()).collect();

        let current = difficulties
            .iter()
            .position(|difficulty| *difficulty == self.screen.difficulty())
            .unwrap_or(0);

        let selection = Select::new()
            .with_prompt("Choose difficulty")
            .items(&choices)
            .default(current)
            .interact()
            .map_err(|e| SetupError::interaction(format!("Difficulty selection error: {}", e)))?;

        self.screen.select_difficulty(difficulties[selection]);
        Ok(())
    }

    async fn settings_menu(&mut self) -> SetupResult<()> {
        loop {
            let choices = vec!["🎨 Change Theme", "🔙 Back to Main Menu"];

            let selection = Select::new()
                .with_prompt("Settings")
                .items(&choices)
                .interact()
                .map_err(|e| SetupError::interaction(format!("Settings selection error: {}", e)))?;

            match selection {
                0 => self.change_theme().await?,
                1 => break,
                _ => unreachable!(),
            }
        }

        Ok(())
    }

    async fn change_theme(&mut self) -> SetupResult<()> {
        let themes = self.display.get_available_themes();

        let selection = Select::new()
            .with_prompt("Choose theme")
            .items(&themes)
            .interact()
            .map_err(|e| SetupError::interaction(format!("Theme selection error: {}", e)))?;

        let selected_theme = &themes[selection];

        if self.display.set_theme(selected_theme) {
            self.display
                .show_success(&format!("Theme changed to '{}'", selected_theme))?;
        } else {
            self.display
                .show_error(&format!("Failed to set theme '{}'", selected_theme))?;
        }

        self.display.wait_for_enter()?;
        Ok(())
    }

    async fn confirm_exit(&mut self) -> SetupResult<bool> {
        if !self.config.game.confirm_exit {
            return Ok(true);
        }

        let confirmed = Confirm::new()
            .with_prompt("Leave without starting a game?")
            .default(true)
            .interact()
            .map_err(|e| SetupError::interaction(format!("Exit confirmation error: {}", e)))?;

        Ok(confirmed)
    }

    pub fn screen(&self) -> &StartScreen {
        &self.screen
    }

    // Public API for CLI usage
    pub async fn launch_directly(
        &mut self,
        preset_id: &str,
        mode: Option<GameMode>,
        difficulty: Option<Difficulty>,
        launcher: &mut dyn GameLauncher,
    ) -> SetupResult<LaunchRequest> {
        if let Some(mode) = mode {
            self.screen.select_mode(mode);
        }
        if let Some(difficulty) = difficulty {
            self.screen.select_difficulty(difficulty);
        }

        let request = self.screen.activate_preset(preset_id, launcher)?;

        self.display
            .show_success(&format!("Starting \"{}\"...", request.theme_name))?;
        sleep(Duration::from_millis(self.config.get_animation_delay_ms())).await;

        self.display.show_launch_summary(&request).ok();
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn test_config(dir: &std::path::Path) -> Config {
        let mut config = Config::default();
        config.paths.config_dir = dir.join("config");
        config.paths.logs_dir = dir.join("logs");
        config
    }

    #[tokio::test]
    async fn test_interface_uses_config_defaults() {
        let temp_dir = tempdir().unwrap();
        let mut config = test_config(temp_dir.path());
        config.game.default_mode = GameMode::Duel;
        config.game.default_difficulty = Difficulty::Hard;

        let interface = SetupInterface::new(config).await.unwrap();
        assert_eq!(interface.screen().mode(), GameMode::Duel);
        assert_eq!(interface.screen().difficulty(), Difficulty::Hard);
    }

    #[tokio::test]
    async fn test_direct_launch_with_overrides() {
        let temp_dir = tempdir().unwrap();
        let mut config = test_config(temp_dir.path());
        config.ui.animation_speed = crate::config::AnimationSpeed::None;

        let mut interface = SetupInterface::new(config).await.unwrap();

        let mut launches = Vec::new();
        let mut launcher = |request: LaunchRequest| launches.push(request);

        let request = interface
            .launch_directly(
                "animals",
                Some(GameMode::Duel),
                Some(Difficulty::Easy),
                &mut launcher,
            )
            .await
            .unwrap();

        assert_eq!(request.theme_name, "Animals");
        assert_eq!(request.mode, GameMode::Duel);
        assert_eq!(launches, vec![request]);
    }

    #[tokio::test]
    async fn test_direct_launch_unknown_preset() {
        let temp_dir = tempdir().unwrap();
        let config = test_config(temp_dir.path());

        let mut interface = SetupInterface::new(config).await.unwrap();

        let mut launcher = |_request: LaunchRequest| panic!("launcher must not be called");
        let error = interface
            .launch_directly("oceans", None, None, &mut launcher)
            .await
            .unwrap_err();

        assert!(matches!(error, SetupError::PresetNotFound { .. }));
    }
}
