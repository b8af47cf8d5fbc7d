pub mod components;
pub mod interface;
pub mod theme;

pub use components::*;
pub use interface::SetupInterface;
pub use theme::{Theme, ThemeManager};
