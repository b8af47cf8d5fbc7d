use console::Term;
use std::io::{self, Write};

use crate::catalog::Preset;
use crate::core::{Difficulty, GameMode, LaunchRequest};
use crate::ui::ThemeManager;

pub struct Display {
    term: Term,
    theme_manager: ThemeManager,
    text_width: usize,
}

impl Display {
    pub fn new(theme_manager: ThemeManager, text_width: usize) -> io::Result<Self> {
        Ok(Self {
            term: Term::stdout(),
            theme_manager,
            text_width,
        })
    }

    pub fn clear_screen(&self) -> io::Result<()> {
        self.term.clear_screen()
    }

    pub fn show_title(&self, title: &str) -> io::Result<()> {
        let styled_title = self.theme_manager.apply_style(title, "title");

        // Create a border
        let border = "═".repeat(self.text_width);
        let styled_border = self.theme_manager.apply_style(&border, "separator");

        writeln!(io::stdout(), "{}", styled_title)?;
        writeln!(io::stdout(), "{}", styled_border)?;
        writeln!(io::stdout())?;

        Ok(())
    }

    pub fn show_section(&self, title: &str) -> io::Result<()> {
        let styled_title = self.theme_manager.apply_style(title, "section");
        writeln!(io::stdout(), "{}", styled_title)?;

        let separator = "─".repeat(40);
        let styled_separator = self.theme_manager.apply_style(&separator, "separator");
        writeln!(io::stdout(), "{}", styled_separator)?;

        Ok(())
    }

    pub fn show_mode_panel(&self, selected: GameMode) -> io::Result<()> {
        self.show_section("👤 Game Mode")?;

        for mode in GameMode::all() {
            let entry = format_mode_entry(mode, mode == selected);
            let style = if mode == selected { "selected" } else { "choice" };
            let styled = self.theme_manager.apply_style(&entry, style);
            writeln!(io::stdout(), "   {}", styled)?;
        }

        writeln!(io::stdout())?;
        Ok(())
    }

    pub fn show_difficulty_panel(&self, selected: Difficulty) -> io::Result<()> {
        self.show_section("📶 Difficulty")?;

        for difficulty in Difficulty::all() {
            let entry = format_difficulty_entry(difficulty, difficulty == selected);
            let style = if difficulty == selected {
                difficulty_style_key(difficulty)
            } else {
                "choice"
            };
            let styled = self.theme_manager.apply_style(&entry, style);
            writeln!(io::stdout(), "   {}", styled)?;
        }

        writeln!(io::stdout())?;
        Ok(())
    }

    pub fn show_preset_cards(&self, presets: &[Preset]) -> io::Result<()> {
        self.show_section("🧠 Select Theme")?;

        for preset in presets {
            self.show_preset_card(preset)?;
        }

        Ok(())
    }

    /// One card per theme. The first symbol appears twice, once as the
    /// card icon and once as a dimmed echo, matching the card art.
    pub fn show_preset_card(&self, preset: &Preset) -> io::Result<()> {
        // Pad before styling, ANSI escapes would throw the width off
        let padded_name = format!("{:<12}", preset.name);
        let name = self.theme_manager.apply_style(&padded_name, "card_name");
        let echo = self.theme_manager.apply_style(preset.icon(), "card_caption");
        writeln!(io::stdout(), "   {}  {} {}", preset.icon(), name, echo)?;

        let caption = format_preset_caption(preset);
        let styled_caption = self.theme_manager.apply_style(&caption, "card_caption");
        writeln!(io::stdout(), "       {}", styled_caption)?;

        Ok(())
    }

    pub fn show_launch_summary(&self, request: &LaunchRequest) -> io::Result<()> {
        self.show_section("🚀 Session")?;

        let mode_line = format!("Mode:       {}", request.mode.label());
        self.show_message(&mode_line, "info")?;

        let theme_line = format!("Theme:      {} ({} cards)", request.theme_name, request.items.len());
        self.show_message(&theme_line, "info")?;

        if request.mode == GameMode::Solo {
            let difficulty_line = format!("Difficulty: {}", request.difficulty.label());
            let style = difficulty_style_key(request.difficulty);
            let styled = self.theme_manager.apply_style(&difficulty_line, style);
            writeln!(io::stdout(), "{}", styled)?;
        }

        self.show_paragraph(&request.items.join(" "), "choice")?;
        writeln!(io::stdout())?;

        Ok(())
    }

    pub fn show_message(&self, message: &str, style: &str) -> io::Result<()> {
        let styled_message = self.theme_manager.apply_style(message, style);
        writeln!(io::stdout(), "{}", styled_message)?;
        Ok(())
    }

    pub fn show_error(&self, error: &str) -> io::Result<()> {
        self.show_message(&format!("❌ {}", error), "error")
    }

    pub fn show_success(&self, message: &str) -> io::Result<()> {
        self.show_message(&format!("✅ {}", message), "success")
    }

    pub fn show_warning(&self, message: &str) -> io::Result<()> {
        self.show_message(&format!("⚠️ {}", message), "warning")
    }

    pub fn show_separator(&self) -> io::Result<()> {
        let separator = "━".repeat(self.text_width);
        let styled = self.theme_manager.apply_style(&separator, "separator");
        writeln!(io::stdout(), "{}", styled)?;
        Ok(())
    }

    pub fn show_paragraph(&self, text: &str, style: &str) -> io::Result<()> {
        let words: Vec<&str> = text.split_whitespace().collect();
        let mut current_line = String::new();

        for word in words {
            if current_line.len() + word.len() + 1 > self.text_width {
                if !current_line.is_empty() {
                    let styled_line = self.theme_manager.apply_style(&current_line, style);
                    writeln!(io::stdout(), "{}", styled_line)?;
                    current_line.clear();
                }
            }

            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }

        if !current_line.is_empty() {
            let styled_line = self.theme_manager.apply_style(&current_line, style);
            writeln!(io::stdout(), "{}", styled_line)?;
        }

        Ok(())
    }

    pub fn wait_for_enter(&self) -> io::Result<()> {
        let styled_prompt = self
            .theme_manager
            .apply_style("Press Enter to continue...", "info");
        print!("{}", styled_prompt);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        Ok(())
    }

    pub fn set_theme(&mut self, theme_name: &str) -> bool {
        self.theme_manager.set_theme(theme_name)
    }

    pub fn get_available_themes(&self) -> Vec<String> {
        self.theme_manager.list_themes()
    }
}

fn format_mode_entry(mode: GameMode, selected: bool) -> String {
    let marker = if selected { "●" } else { "○" };
    format!("{} {} · {}", marker, mode.label(), mode.tagline())
}

fn format_difficulty_entry(difficulty: Difficulty, selected: bool) -> String {
    let marker = if selected { "●" } else { "○" };
    format!("{} {}", marker, difficulty.label())
}

fn format_preset_caption(preset: &Preset) -> String {
    format!("{} Cards • Classic", preset.card_count())
}

fn difficulty_style_key(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "difficulty_easy",
        Difficulty::Medium => "difficulty_medium",
        Difficulty::Hard => "difficulty_hard",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PresetCatalog;

    #[test]
    fn test_display_creation() {
        let theme_manager = ThemeManager::new();
        let display = Display::new(theme_manager, 80);
        assert!(display.is_ok());
    }

    #[test]
    fn test_mode_entry_marker() {
        let selected = format_mode_entry(GameMode::Solo, true);
        assert!(selected.starts_with("●"));
        assert!(selected.contains("Solo Adventure"));
        assert!(selected.contains("Beat the clock"));

        let unselected = format_mode_entry(GameMode::Duel, false);
        assert!(unselected.starts_with("○"));
        assert!(unselected.contains("1v1 Duel"));
    }

    #[test]
    fn test_difficulty_entry_marker() {
        assert_eq!(format_difficulty_entry(Difficulty::Easy, true), "● Easy");
        assert_eq!(format_difficulty_entry(Difficulty::Hard, false), "○ Hard");
    }

    #[test]
    fn test_preset_caption() {
        let catalog = PresetCatalog::builtin();
        let preset = catalog.get("fruits").unwrap();
        assert_eq!(format_preset_caption(preset), "12 Cards • Classic");
    }

    #[test]
    fn test_difficulty_style_keys() {
        assert_eq!(difficulty_style_key(Difficulty::Easy), "difficulty_easy");
        assert_eq!(difficulty_style_key(Difficulty::Medium), "difficulty_medium");
        assert_eq!(difficulty_style_key(Difficulty::Hard), "difficulty_hard");
    }
}
