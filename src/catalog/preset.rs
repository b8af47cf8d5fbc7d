use serde::{Deserialize, Serialize};

/// Every card theme ships exactly this many symbols.
pub const CARDS_PER_PRESET: usize = 12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub id: String,
    pub name: String,
    pub items: Vec<String>,
}

impl Preset {
    pub fn new<S: Into<String>>(id: S, name: S, items: &[&str]) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            items: items.iter().map(|item| item.to_string()).collect(),
        }
    }

    /// The glyph shown on the preset card, duplicated as decoration.
    /// Always the first symbol of the theme.
    pub fn icon(&self) -> &str {
        self.items.first().map(String::as_str).unwrap_or("?")
    }

    pub fn card_count(&self) -> usize {
        self.items.len()
    }

    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.id.is_empty() {
            errors.push("Preset ID cannot be empty".to_string());
        }
        if self.name.is_empty() {
            errors.push(format!("Preset '{}' has no display name", self.id));
        }
        if self.items.len() != CARDS_PER_PRESET {
            errors.push(format!(
                "Preset '{}' has {} symbols, expected {}",
                self.id,
                self.items.len(),
                CARDS_PER_PRESET
            ));
        }
        if self.items.iter().any(|item| item.is_empty()) {
            errors.push(format!("Preset '{}' contains an empty symbol", self.id));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
