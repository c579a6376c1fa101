use std::path::PathBuf;

/// Output format for [`ConfigAction::Show`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// One `key = value` line per field.
    #[default]
    Plain,
    /// The whole config as a JSON object.
    Json,
}

/// A config operation on the server configuration, independent of any CLI
/// framework. The CLI layer converts parsed clap args into this.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigAction {
    /// Load the config in `dir` and show every resolved value.
    Show { dir: PathBuf, format: Format },
    /// Load the config in `dir` and show a single dotted key.
    Get { dir: PathBuf, key: String },
    /// Write a default config file into `dir`.
    Gen { dir: PathBuf },
}
