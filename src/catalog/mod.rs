pub mod catalog;
pub mod preset;

pub use catalog::PresetCatalog;
pub use preset::{Preset, CARDS_PER_PRESET};
