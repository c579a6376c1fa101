//! Parsed configuration documents and path-addressed nodes.
//!
//! A [`Document`] is a read-only view over a parsed TOML table. Values are
//! reached through [`Node`]s, which may be absent: looking up a key that
//! does not exist, or walking through something that is not a table, never
//! fails. It just produces an absent node. Callers decide what absence means
//! (see [`read_value`](crate::read_value)).

use std::path::Path;

use toml::{Table, Value};

use crate::error::ConfigError;

/// A parsed configuration document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    table: Table,
}

impl Document {
    /// Parse `text` into a document.
    ///
    /// `source` is only used to label errors. Text that is empty or contains
    /// nothing but whitespace is rejected with [`ConfigError::Empty`].
    pub fn parse(text: &str, source: &Path) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Err(ConfigError::Empty {
                path: source.to_path_buf(),
            });
        }
        let table: Table = text.parse().map_err(|e| ConfigError::Parse {
            path: source.to_path_buf(),
            source: e,
        })?;
        Ok(Self { table })
    }

    /// The root of the document.
    pub fn root(&self) -> Node<'_> {
        Node {
            path: String::new(),
            value: None,
            table: Some(&self.table),
        }
    }

    /// Look up a node by dotted path, e.g. `"threads.queue"`.
    pub fn node(&self, dotted_path: &str) -> Node<'_> {
        dotted_path
            .split('.')
            .fold(self.root(), |node, segment| node.get(segment))
    }
}

/// A possibly-absent point in a [`Document`].
///
/// Carries its dotted path so that readers can report where a value came
/// from.
#[derive(Debug, Clone)]
pub struct Node<'a> {
    path: String,
    value: Option<&'a Value>,
    // Set for the document root, which has no `Value` of its own.
    table: Option<&'a Table>,
}

impl<'a> Node<'a> {
    /// Step one level down into `key`.
    pub fn get(&self, key: &str) -> Node<'a> {
        let path = if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{key}", self.path)
        };
        let table = self.table.or_else(|| self.value.and_then(Value::as_table));
        Node {
            path,
            value: table.and_then(|t| t.get(key)),
            table: None,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn value(&self) -> Option<&'a Value> {
        self.value
    }

    pub fn is_present(&self) -> bool {
        self.value.is_some() || self.table.is_some()
    }

    /// Short name of the TOML type found at this node, `"absent"` if none.
    pub fn kind(&self) -> &'static str {
        match self.value {
            None if self.table.is_some() => "table",
            None => "absent",
            Some(v) => v.type_str(),
        }
    }
}
