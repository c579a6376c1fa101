use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Config file {path} is empty")]
    Empty { path: PathBuf },

    #[error("Failed to render config: {0}")]
    Render(#[from] toml::ser::Error),

    #[error("Failed to render config as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("Refusing to overwrite existing config file {0}")]
    AlreadyExists(PathBuf),
}
