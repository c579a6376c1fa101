//! Turning loaded configs back into text.
//!
//! Rendering is the inverse of loading for any config whose fields are all
//! readable: loading the rendered text yields an equal value.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use toml::{Table, Value};

use crate::configurable::Configurable;
use crate::error::ConfigError;

/// Render `config` as a TOML document.
pub fn render<C: Serialize>(config: &C) -> Result<String, ConfigError> {
    Ok(toml::to_string(config)?)
}

/// Flatten `config` into dotted `(key, value)` pairs, sorted by key.
pub fn entries<C: Serialize>(config: &C) -> Result<Vec<(String, String)>, ConfigError> {
    let table = to_table(config)?;
    let mut out = Vec::new();
    collect_entries(&table, "", &mut out);
    Ok(out)
}

/// Look up a single rendered value by dotted key.
pub fn entry<C: Serialize>(config: &C, dotted_key: &str) -> Result<String, ConfigError> {
    let table = to_table(config)?;
    let (path, leaf) = match dotted_key.rsplit_once('.') {
        Some((p, l)) => (Some(p), l),
        None => (None, dotted_key),
    };

    let mut current = &table;
    for segment in path.into_iter().flat_map(|p| p.split('.')) {
        current = current
            .get(segment)
            .and_then(Value::as_table)
            .ok_or_else(|| ConfigError::KeyNotFound(dotted_key.into()))?;
    }

    current
        .get(leaf)
        .map(format_value)
        .ok_or_else(|| ConfigError::KeyNotFound(dotted_key.into()))
}

/// Write the default config of type `C` to `{dir}/{C::NAME}`.
///
/// Creates `dir` if needed. Never overwrites an existing file.
pub fn write_default<C>(dir: &Path) -> Result<PathBuf, ConfigError>
where
    C: Configurable + Default + Serialize,
{
    let path = C::path_in(dir);
    let text = render(&C::default())?;
    std::fs::create_dir_all(dir).map_err(|e| ConfigError::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            return Err(ConfigError::AlreadyExists(path));
        }
        Err(e) => return Err(ConfigError::Io { path, source: e }),
    };
    file.write_all(text.as_bytes()).map_err(|e| ConfigError::Io {
        path: path.clone(),
        source: e,
    })?;

    tracing::info!(path = %path.display(), "wrote default config");
    Ok(path)
}

fn to_table<C: Serialize>(config: &C) -> Result<Table, ConfigError> {
    match Value::try_from(config)? {
        Value::Table(table) => Ok(table),
        _ => Ok(Table::new()),
    }
}

fn collect_entries(table: &Table, prefix: &str, out: &mut Vec<(String, String)>) {
    for (key, value) in table {
        let dotted = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::Table(nested) => collect_entries(nested, &dotted, out),
            other => out.push((dotted, format_value(other))),
        }
    }
}

/// Format a TOML value for display.
fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Integer(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Boolean(b) => b.to_string(),
        other => other.to_string(),
    }
}
