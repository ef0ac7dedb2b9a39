//! Typed field extraction with document-path diagnostics.

use crate::document::DocumentNode;
use crate::error::{ConfigError, Result};
use std::ops::RangeInclusive;

pub(crate) fn path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

pub(crate) fn indexed(prefix: &str, index: usize) -> String {
    format!("{}[{}]", prefix, index)
}

pub(crate) fn expect_object<N: DocumentNode>(node: &N, at: &str) -> Result<()> {
    match node.type_name() {
        "object" => Ok(()),
        other => Err(ConfigError::type_mismatch(at, "object", other)),
    }
}

pub(crate) fn required<'a, N: DocumentNode>(node: &'a N, prefix: &str, key: &str) -> Result<&'a N> {
    node.field(key)
        .ok_or_else(|| ConfigError::missing_field(path(prefix, key)))
}

pub(crate) fn string<N: DocumentNode>(node: &N, at: &str) -> Result<String> {
    node.scalar_str()
        .map(str::to_string)
        .ok_or_else(|| ConfigError::type_mismatch(at, "string", node.type_name()))
}

pub(crate) fn boolean<N: DocumentNode>(node: &N, at: &str) -> Result<bool> {
    node.scalar_bool()
        .ok_or_else(|| ConfigError::type_mismatch(at, "boolean", node.type_name()))
}

/// Integer that must fall inside `bounds`
pub(crate) fn bounded<N: DocumentNode>(
    node: &N,
    at: &str,
    bounds: RangeInclusive<i64>,
) -> Result<i64> {
    let value = node
        .scalar_int()
        .ok_or_else(|| ConfigError::type_mismatch(at, "integer", node.type_name()))?;
    if bounds.contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::range(at, value, *bounds.start(), *bounds.end()))
    }
}

/// Checks that `node` is an array of exactly `expected` elements
pub(crate) fn fixed_array<N: DocumentNode>(node: &N, at: &str, expected: usize) -> Result<()> {
    let got = node
        .array_len()
        .ok_or_else(|| ConfigError::type_mismatch(at, "array", node.type_name()))?;
    if got != expected {
        return Err(ConfigError::CardinalityError {
            field: at.to_string(),
            expected,
            got,
        });
    }
    Ok(())
}
