//! Config operations behind the `show`, `get` and `gen` commands, and the
//! [`ConfigResult`] enum callers use to display results.

use std::fmt;
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::loader;
use crate::render;
use crate::server::ServerConfig;
use crate::types::{ConfigAction, Format};

/// Result of a config operation. Returned to the caller for display.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigResult {
    /// All resolved configuration key-value pairs.
    Listing { entries: Vec<(String, String)> },
    /// The resolved configuration as a JSON document.
    Json(String),
    /// A single key's resolved value.
    KeyValue { key: String, value: String },
    /// Confirmation that a default config file was written.
    DefaultWritten { path: PathBuf },
}

impl fmt::Display for ConfigResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigResult::Listing { entries } => {
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{key} = {value}")?;
                }
                Ok(())
            }
            ConfigResult::Json(json) => write!(f, "{json}"),
            ConfigResult::KeyValue { key, value } => write!(f, "{key} = {value}"),
            ConfigResult::DefaultWritten { path } => {
                write!(f, "Default config written to {}", path.display())
            }
        }
    }
}

/// Execute a [`ConfigAction`] against the server configuration.
pub fn handle(action: &ConfigAction) -> Result<ConfigResult, ConfigError> {
    match action {
        ConfigAction::Show { dir, format } => {
            let config: ServerConfig = loader::load(dir)?;
            match format {
                Format::Plain => Ok(ConfigResult::Listing {
                    entries: render::entries(&config)?,
                }),
                Format::Json => Ok(ConfigResult::Json(serde_json::to_string_pretty(&config)?)),
            }
        }
        ConfigAction::Get { dir, key } => {
            let config: ServerConfig = loader::load(dir)?;
            let value = render::entry(&config, key)?;
            Ok(ConfigResult::KeyValue {
                key: key.clone(),
                value,
            })
        }
        ConfigAction::Gen { dir } => {
            let path = render::write_default::<ServerConfig>(dir)?;
            Ok(ConfigResult::DefaultWritten { path })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn server_dir(contents: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("server.config"), contents).unwrap();
        dir
    }

    #[test]
    fn show_plain_lists_values() {
        let dir = server_dir("port = \"7000\"\n");
        let result = handle(&ConfigAction::Show {
            dir: dir.path().to_path_buf(),
            format: Format::Plain,
        })
        .unwrap();
        match result {
            ConfigResult::Listing { entries } => {
                assert!(entries.contains(&("port".into(), "7000".into())));
                assert!(entries.contains(&("threads.request".into(), "8".into())));
                assert_eq!(entries.len(), 8);
            }
            other => panic!("Expected Listing, got {other:?}"),
        }
    }

    #[test]
    fn show_json_is_valid_json() {
        let dir = server_dir("[threads]\nqueue = 12\n");
        let result = handle(&ConfigAction::Show {
            dir: dir.path().to_path_buf(),
            format: Format::Json,
        })
        .unwrap();
        match result {
            ConfigResult::Json(text) => {
                let value: serde_json::Value = serde_json::from_str(&text).unwrap();
                assert_eq!(value["threads"]["queue"], 12);
                assert_eq!(value["ip"], "127.0.0.1");
            }
            other => panic!("Expected Json, got {other:?}"),
        }
    }

    #[test]
    fn show_missing_file_errors() {
        let dir = TempDir::new().unwrap();
        let result = handle(&ConfigAction::Show {
            dir: dir.path().to_path_buf(),
            format: Format::Plain,
        });
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn get_nested_key() {
        let dir = server_dir("[responses]\nnot_found = \"/srv/404.json\"\n");
        let result = handle(&ConfigAction::Get {
            dir: dir.path().to_path_buf(),
            key: "responses.not_found".into(),
        })
        .unwrap();
        assert_eq!(
            result,
            ConfigResult::KeyValue {
                key: "responses.not_found".into(),
                value: "/srv/404.json".into(),
            }
        );
    }

    #[test]
    fn get_unknown_key() {
        let dir = server_dir("ip = \"::1\"\n");
        let result = handle(&ConfigAction::Get {
            dir: dir.path().to_path_buf(),
            key: "nope".into(),
        });
        assert!(matches!(result, Err(ConfigError::KeyNotFound(_))));
    }

    #[test]
    fn gen_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let result = handle(&ConfigAction::Gen {
            dir: dir.path().to_path_buf(),
        })
        .unwrap();
        assert_eq!(
            result,
            ConfigResult::DefaultWritten {
                path: dir.path().join("server.config"),
            }
        );
        assert!(dir.path().join("server.config").exists());
    }

    #[test]
    fn listing_display_format() {
        let result = ConfigResult::Listing {
            entries: vec![
                ("ip".into(), "127.0.0.1".into()),
                ("port".into(), "25565".into()),
            ],
        };
        assert_eq!(format!("{result}"), "ip = 127.0.0.1\nport = 25565");
    }
}
