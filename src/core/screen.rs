use crate::catalog::PresetCatalog;
use crate::core::{Difficulty, GameLauncher, GameMode, LaunchRequest};
use crate::utils::{SetupError, SetupResult};
use tracing::{debug, info};

/// Selection state for the setup screen: the chosen game mode, the
/// chosen difficulty and the catalog of card themes.
///
/// Activating a preset is the terminal action. It hands the full
/// selection to the supplied [`GameLauncher`] and the screen keeps no
/// notion of "started" afterwards.
pub struct StartScreen {
    mode: GameMode,
    difficulty: Difficulty,
    catalog: PresetCatalog,
}

impl StartScreen {
    pub fn new() -> Self {
        Self::with_catalog(PresetCatalog::builtin())
    }

    pub fn with_catalog(catalog: PresetCatalog) -> Self {
        Self {
            mode: GameMode::default(),
            difficulty: Difficulty::default(),
            catalog,
        }
    }

    /// Initial selections normally come from the config file.
    pub fn with_defaults(mode: GameMode, difficulty: Difficulty) -> Self {
        Self {
            mode,
            difficulty,
            catalog: PresetCatalog::builtin(),
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn catalog(&self) -> &PresetCatalog {
        &self.catalog
    }

    /// The difficulty panel is shown only while the mode is solo. The
    /// stored value survives mode toggles either way.
    pub fn difficulty_visible(&self) -> bool {
        self.mode == GameMode::Solo
    }

    pub fn select_mode(&mut self, mode: GameMode) {
        debug!("Mode selected: {}", mode);
        self.mode = mode;
    }

    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        debug!("Difficulty selected: {}", difficulty);
        self.difficulty = difficulty;
    }

    /// Looks up the preset, builds the launch request from the current
    /// selections and invokes the launcher exactly once. Difficulty is
    /// passed through even in duel mode, where it carries no displayed
    /// meaning.
    pub fn activate_preset(
        &mut self,
        preset_id: &str,
        launcher: &mut dyn GameLauncher,
    ) -> SetupResult<LaunchRequest> {
        let preset = self
            .catalog
            .get(preset_id)
            .ok_or_else(|| SetupError::preset_not_found(preset_id))?;

        let request = LaunchRequest {
            mode: self.mode,
            items: preset.items.clone(),
            theme_name: preset.name.clone(),
            difficulty: self.difficulty,
        };

        info!(
            "Launching {} game: \"{}\" ({} cards, {})",
            request.mode,
            request.theme_name,
            request.items.len(),
            request.difficulty
        );

        launcher.launch(request.clone());
        Ok(request)
    }
}

impl Default for StartScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Records every launch so tests can assert on exact invocations.
    #[derive(Default)]
    struct RecordingLauncher {
        launches: Vec<LaunchRequest>,
    }

    impl GameLauncher for RecordingLauncher {
        fn launch(&mut self, request: LaunchRequest) {
            self.launches.push(request);
        }
    }

    #[test]
    fn test_default_state() {
        let screen = StartScreen::new();
        assert_eq!(screen.mode(), GameMode::Solo);
        assert_eq!(screen.difficulty(), Difficulty::Medium);
        assert!(screen.difficulty_visible());

        let names: Vec<&str> = screen
            .catalog()
            .presets()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Fruits", "Animals", "Sports", "Space"]);
    }

    #[test]
    fn test_duel_hides_difficulty_and_solo_restores_it() {
        let mut screen = StartScreen::new();
        screen.select_difficulty(Difficulty::Hard);

        screen.select_mode(GameMode::Duel);
        assert!(!screen.difficulty_visible());

        screen.select_mode(GameMode::Solo);
        assert!(screen.difficulty_visible());
        assert_eq!(screen.difficulty(), Difficulty::Hard);
    }

    #[test]
    fn test_difficulty_selection_overwrites() {
        let mut screen = StartScreen::new();
        for difficulty in Difficulty::all() {
            screen.select_difficulty(difficulty);
            assert_eq!(screen.difficulty(), difficulty);
        }
    }

    #[test]
    fn test_activating_fruits_solo_hard() {
        let mut screen = StartScreen::new();
        let mut launcher = RecordingLauncher::default();

        screen.select_difficulty(Difficulty::Hard);
        screen.activate_preset("fruits", &mut launcher).unwrap();

        assert_eq!(launcher.launches.len(), 1);
        let request = &launcher.launches[0];
        assert_eq!(request.mode.as_str(), "single");
        assert_eq!(request.theme_name, "Fruits");
        assert_eq!(request.difficulty.as_str(), "hard");
        assert_eq!(
            request.items,
            vec!["🍎", "🍌", "🍇", "🍓", "🍒", "🍑", "🍍", "🥝", "🍉", "🍋", "🍐", "🥥"]
        );
    }

    #[test]
    fn test_duel_launch_passes_hidden_difficulty_through() {
        let mut screen = StartScreen::new();
        let mut launcher = RecordingLauncher::default();

        screen.select_difficulty(Difficulty::Easy);
        screen.select_mode(GameMode::Duel);
        screen.activate_preset("space", &mut launcher).unwrap();

        let request = &launcher.launches[0];
        assert_eq!(request.mode.as_str(), "multi");
        assert_eq!(request.theme_name, "Space");
        assert_eq!(request.difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_selection_never_launches() {
        let mut screen = StartScreen::new();
        let mut launcher = RecordingLauncher::default();

        screen.select_mode(GameMode::Duel);
        screen.select_mode(GameMode::Solo);
        screen.select_difficulty(Difficulty::Hard);
        assert!(launcher.launches.is_empty());

        screen.activate_preset("sports", &mut launcher).unwrap();
        assert_eq!(launcher.launches.len(), 1);
    }

    #[test]
    fn test_unknown_preset_is_an_error() {
        let mut screen = StartScreen::new();
        let mut launcher = RecordingLauncher::default();

        let error = screen.activate_preset("oceans", &mut launcher).unwrap_err();
        assert!(matches!(error, SetupError::PresetNotFound { .. }));
        assert!(launcher.launches.is_empty());
    }

    #[test]
    fn test_returned_request_matches_launched_request() {
        let mut screen = StartScreen::new();
        let mut launcher = RecordingLauncher::default();

        let request = screen.activate_preset("animals", &mut launcher).unwrap();
        assert_eq!(launcher.launches, vec![request]);
    }

    #[test]
    fn test_config_supplied_defaults() {
        let screen = StartScreen::with_defaults(GameMode::Duel, Difficulty::Hard);
        assert_eq!(screen.mode(), GameMode::Duel);
        assert_eq!(screen.difficulty(), Difficulty::Hard);
        assert!(!screen.difficulty_visible());
    }
}
