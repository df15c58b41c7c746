//! Serde document structs for reforge and verifier-mapping data files.
//!
//! Fields are deliberately lenient (`Option` + default): presence of the
//! required fields is validated by the loaders so that a missing field skips
//! only the offending document, and a malformed array entry skips only that
//! entry, never the whole reload.

use serde::Deserialize;

/// A reforge data file: which items may be reforged, using which materials.
///
/// Both arrays hold either plain item ids (`minecraft:iron_ingot`) or tag
/// references (`#c:ingots`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReforgeDocument {
    /// Base materials accepted as reforge input.
    #[serde(default)]
    pub base: Option<Vec<String>>,
    /// Target items that may be reforged.
    #[serde(default)]
    pub items: Option<Vec<String>>,
}

/// A verifier-mapping data file: extends a base verifier with equivalents.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MappingDocument {
    #[serde(default)]
    pub base_verifier: Option<String>,
    /// `"tag"` or `"id"`.
    #[serde(default)]
    pub base_verifier_type: Option<String>,
    #[serde(default)]
    pub mapped_verifiers: Option<Vec<MappedVerifierEntry>>,
}

/// One entry of a mapping document's `mapped_verifiers` array.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MappedVerifierEntry {
    #[serde(default)]
    pub verifier: Option<String>,
    /// `"tag"` or `"id"`.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}
