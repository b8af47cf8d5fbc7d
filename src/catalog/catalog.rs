use crate::catalog::Preset;

/// The built-in card themes, shown in this order on the setup screen.
pub struct PresetCatalog {
    presets: Vec<Preset>,
}

impl PresetCatalog {
    pub fn builtin() -> Self {
        let presets = vec![
            Preset::new(
                "fruits",
                "Fruits",
                &[
                    "🍎", "🍌", "🍇", "🍓", "🍒", "🍑", "🍍", "🥝", "🍉", "🍋", "🍐", "🥥",
                ],
            ),
            Preset::new(
                "animals",
                "Animals",
                &[
                    "🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼", "🐨", "🐯", "🦁", "🐮",
                ],
            ),
            Preset::new(
                "sports",
                "Sports",
                &[
                    "⚽", "🏀", "🏈", "⚾", "🎾", "🏐", "🏉", "🎱", "🏓", "🏸", "🥊", "🥋",
                ],
            ),
            Preset::new(
                "space",
                "Space",
                &[
                    "🚀", "🪐", "👽", "☄️", "🌑", "🔭", "🛰️", "🌟", "🌍", "☀️", "🌌", "👨‍🚀",
                ],
            ),
        ];

        Self { presets }
    }

    pub fn get(&self, preset_id: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.id == preset_id)
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        for preset in &self.presets {
            if let Err(mut preset_errors) = preset.validate() {
                errors.append(&mut preset_errors);
            }
        }

        // Check for duplicate preset IDs
        let mut preset_ids = std::collections::HashSet::new();
        for preset in &self.presets {
            if !preset_ids.insert(&preset.id) {
                errors.push(format!("Duplicate preset ID: '{}'", preset.id));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Default for PresetCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CARDS_PER_PRESET;

    #[test]
    fn test_builtin_catalog_order() {
        let catalog = PresetCatalog::builtin();
        let names: Vec<&str> = catalog.presets().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Fruits", "Animals", "Sports", "Space"]);
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = PresetCatalog::builtin();
        assert_eq!(catalog.len(), 4);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_every_preset_has_twelve_symbols() {
        let catalog = PresetCatalog::builtin();
        for preset in catalog.presets() {
            assert_eq!(preset.card_count(), CARDS_PER_PRESET, "{}", preset.id);
        }
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = PresetCatalog::builtin();
        let preset = catalog.get("animals").unwrap();
        assert_eq!(preset.name, "Animals");
        assert_eq!(preset.icon(), "🐶");

        assert!(catalog.get("oceans").is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut catalog = PresetCatalog::builtin();
        let duplicate = catalog.presets[0].clone();
        catalog.presets.push(duplicate);
        let errors = catalog.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.contains("Duplicate preset ID")));
    }
}
