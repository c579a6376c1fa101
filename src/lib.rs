//! Typed configuration loading for the keeper server.
//!
//! Each configuration type lives in its own TOML file inside a base
//! directory and is loaded into an immutable struct whose fields always hold
//! a value: either the one from the file, or the field's compiled default.
//!
//! ```ignore
//! use keeper_config::{ServerConfig, read};
//!
//! let config: ServerConfig = read(Path::new("/etc/keeper"));
//! println!("binding {}:{}", config.ip(), config.port());
//! ```
//!
//! # Pipeline
//!
//! ```text
//! {dir}/{C::NAME} → text → Document → C::from_document → read_value × N → C
//! ```
//!
//! - [`Configurable`] is the contract a type implements to be loadable: a
//!   file name and a build function. Registration is explicit; there is no
//!   derive.
//! - [`read_value`] reads one field from a document [`Node`], substituting
//!   the caller's default when the node is absent or holds the wrong type.
//!   Each readable type has its own [`ReadValue`] impl.
//! - [`load`], [`try_read`] and [`read`] find, read and parse the file and
//!   hand the document to the type's build function.
//!
//! # Failure model
//!
//! Fields never fail. A missing key and a key holding the wrong type both
//! resolve to the default; the latter is logged at `warn` through
//! [`tracing`]. Only whole-file problems fail a load:
//!
//! | Entry point   | On missing, unreadable, empty or malformed file |
//! |---------------|-------------------------------------------------|
//! | [`load`]      | `Err(ConfigError)` describing the cause          |
//! | [`try_read`]  | `None`                                           |
//! | [`read`]      | panics                                           |
//!
//! # Rendering
//!
//! Config types that derive `Serialize` can be rendered back to TOML with
//! [`render`]; loading the output yields an equal value. [`write_default`]
//! seeds a directory with a default file.
//!
//! # Command line
//!
//! With the `clap` feature (on by default) the `keeper-config` binary and
//! the [`ConfigArgs`] adapter expose `show`, `get` and `gen` over
//! [`ServerConfig`].

pub mod error;
pub mod ops;
pub mod types;

#[cfg(feature = "clap")]
mod cli;
mod configurable;
mod document;
mod loader;
mod render;
mod server;
mod value;

#[cfg(test)]
mod fixtures;

#[cfg(feature = "clap")]
pub use cli::{ConfigArgs, ConfigSubcommand};
pub use configurable::Configurable;
pub use document::{Document, Node};
pub use error::ConfigError;
pub use loader::{load, load_str, read, try_read};
pub use ops::ConfigResult;
pub use render::{entries, entry, render, write_default};
pub use server::{ResponsesConfig, ServerConfig, ThreadsConfig};
pub use types::{ConfigAction, Format};
pub use value::{ReadValue, read_value};
