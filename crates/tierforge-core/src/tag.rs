//! Parsing for the `#namespace:path` tag-reference convention.
//!
//! Configuration documents name either a single item (`minecraft:stick`) or a
//! whole tag of items (`#c:ingots`). This module recognizes the marker,
//! strips it, and guards against double-processing.

use crate::id::{ItemId, TagId};

/// Errors from tag-reference parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagParseError {
    /// The input was expected to be a `#`-prefixed tag reference but is not.
    #[error("not a tag reference: '{0}'")]
    NotATagReference(String),

    /// A bare tag name still carried the `#` marker. The marker must be
    /// stripped exactly once, by [`extract_tag_id`].
    #[error("tag name should not carry the '#' marker, got: '{0}'")]
    UnexpectedMarker(String),
}

/// Returns whether a raw config entry is a tag reference (starts with `#`).
pub fn is_tag_reference(entry: &str) -> bool {
    entry.starts_with('#')
}

/// Strips the leading `#` from a tag reference, yielding the bare tag name.
pub fn extract_tag_id(reference: &str) -> Result<TagId, TagParseError> {
    match reference.strip_prefix('#') {
        Some(name) => Ok(TagId(name.to_string())),
        None => Err(TagParseError::NotATagReference(reference.to_string())),
    }
}

/// Wraps a bare tag name (no marker). Rejects input that still carries the
/// marker, which would mean the caller skipped [`extract_tag_id`].
pub fn tag_id(name: &str) -> Result<TagId, TagParseError> {
    if name.starts_with('#') {
        return Err(TagParseError::UnexpectedMarker(name.to_string()));
    }
    Ok(TagId(name.to_string()))
}

/// A raw config entry classified as either a single item or a tag of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryRef {
    Item(ItemId),
    Tag(TagId),
}

/// Classifies a raw config entry by the `#` marker.
pub fn parse_entry(entry: &str) -> EntryRef {
    match entry.strip_prefix('#') {
        Some(name) => EntryRef::Tag(TagId(name.to_string())),
        None => EntryRef::Item(ItemId::from(entry)),
    }
}
