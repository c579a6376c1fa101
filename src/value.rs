//! Typed extraction of single values with default substitution.
//!
//! Every readable type gets its own [`ReadValue`] impl; there is no generic
//! fallback. Coercion rules:
//!
//! - `String` accepts TOML strings only. Numbers are not stringified.
//! - Unsigned integers accept TOML integers that fit the target width.
//!   Negative or oversized values count as a mismatch.
//! - `bool` accepts TOML booleans only.
//!
//! An absent node and a mismatched node both resolve to the caller's
//! default. The two cases are only told apart in the logs.

use toml::Value;

use crate::document::Node;

/// A type that can be read out of a single document [`Node`].
pub trait ReadValue: Sized {
    /// Human-readable name used in mismatch warnings.
    const EXPECTED: &'static str;

    /// Coerce the node's value, or `None` if absent or of the wrong kind.
    fn from_node(node: &Node<'_>) -> Option<Self>;
}

impl ReadValue for String {
    const EXPECTED: &'static str = "string";

    fn from_node(node: &Node<'_>) -> Option<Self> {
        node.value().and_then(Value::as_str).map(str::to_string)
    }
}

impl ReadValue for u64 {
    const EXPECTED: &'static str = "unsigned 64-bit integer";

    fn from_node(node: &Node<'_>) -> Option<Self> {
        node.value()
            .and_then(Value::as_integer)
            .and_then(|i| u64::try_from(i).ok())
    }
}

impl ReadValue for u32 {
    const EXPECTED: &'static str = "unsigned 32-bit integer";

    fn from_node(node: &Node<'_>) -> Option<Self> {
        node.value()
            .and_then(Value::as_integer)
            .and_then(|i| u32::try_from(i).ok())
    }
}

impl ReadValue for u16 {
    const EXPECTED: &'static str = "unsigned 16-bit integer";

    fn from_node(node: &Node<'_>) -> Option<Self> {
        node.value()
            .and_then(Value::as_integer)
            .and_then(|i| u16::try_from(i).ok())
    }
}

impl ReadValue for bool {
    const EXPECTED: &'static str = "boolean";

    fn from_node(node: &Node<'_>) -> Option<Self> {
        node.value().and_then(Value::as_bool)
    }
}

/// Read `node` as `T`, falling back to `default` when the node is absent or
/// cannot be coerced. Never fails.
pub fn read_value<T: ReadValue>(node: Node<'_>, default: T) -> T {
    if let Some(value) = T::from_node(&node) {
        return value;
    }
    if node.is_present() {
        tracing::warn!(
            key = node.path(),
            found = node.kind(),
            expected = T::EXPECTED,
            "ignoring config value of the wrong type, using default"
        );
    } else {
        tracing::trace!(key = node.path(), "config key absent, using default");
    }
    default
}
