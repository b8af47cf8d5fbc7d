pub mod errors;

pub use errors::{SetupError, SetupResult};
