//! Verifier mapping table: extends a base verifier with equivalents.
//!
//! A mapping lets externally supplied documents extend an existing verifier
//! (say, the tag `c:swords`) to also accept additional tags or item ids,
//! without editing the document that declared the verifier. The table is
//! rebuilt wholesale on every reload and published as one immutable unit.

use serde::Deserialize;
use std::collections::HashMap;

/// Whether a verifier string names a single item id or a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerifierKind {
    Id,
    Tag,
}

/// One equivalence target for a base verifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedVerifier {
    /// The target item id or bare tag name (no `#` marker).
    pub target: String,
    pub kind: VerifierKind,
}

/// A base verifier together with its ordered equivalence targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifierMapping {
    pub base: String,
    pub base_kind: VerifierKind,
    /// Declaration order is priority order: earlier entries win first-match.
    pub mapped: Vec<MappedVerifier>,
}

/// Published lookup from base verifier string to its mapped verifiers.
///
/// Built through [`MappingTableBuilder`]; immutable once built. Readers hold
/// a snapshot and are never exposed to in-place mutation.
#[derive(Debug, Default, Clone)]
pub struct MappingTable {
    entries: HashMap<String, VerifierMapping>,
}

impl MappingTable {
    pub fn builder() -> MappingTableBuilder {
        MappingTableBuilder::default()
    }

    /// The mapped verifiers for `base`, empty when no mapping is declared.
    pub fn get(&self, base: &str) -> &[MappedVerifier] {
        self.entries
            .get(base)
            .map(|m| m.mapped.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn mappings(&self) -> impl Iterator<Item = &VerifierMapping> {
        self.entries.values()
    }
}

/// Accumulates mappings during a reload pass, then builds the table.
#[derive(Debug, Default)]
pub struct MappingTableBuilder {
    entries: HashMap<String, VerifierMapping>,
}

impl MappingTableBuilder {
    /// Adds a mapping. A second mapping for the same base appends its mapped
    /// sequence after the existing one, preserving earlier-wins priority.
    /// Returns the total mapped-verifier count now held for that base.
    pub fn insert(&mut self, mapping: VerifierMapping) -> usize {
        match self.entries.get_mut(&mapping.base) {
            Some(existing) => {
                existing.mapped.extend(mapping.mapped);
                existing.mapped.len()
            }
            None => {
                let count = mapping.mapped.len();
                self.entries.insert(mapping.base.clone(), mapping);
                count
            }
        }
    }

    pub fn build(self) -> MappingTable {
        MappingTable {
            entries: self.entries,
        }
    }
}
