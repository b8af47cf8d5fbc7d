use thiserror::Error;

pub type SetupResult<T> = Result<T, SetupError>;

#[derive(Error, Debug)]
pub enum SetupError {
    #[error("Interaction error: {message}")]
    Interaction { message: String },

    #[error("Preset not found: {preset_id}")]
    PresetNotFound { preset_id: String },

    #[error("Catalog error: {message}")]
    Catalog { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl SetupError {
    pub fn interaction<S: Into<String>>(message: S) -> Self {
        Self::Interaction {
            message: message.into(),
        }
    }

    pub fn preset_not_found<S: Into<String>>(preset_id: S) -> Self {
        Self::PresetNotFound {
            preset_id: preset_id.into(),
        }
    }

    pub fn catalog<S: Into<String>>(message: S) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }

    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
