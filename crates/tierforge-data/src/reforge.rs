//! Reforge definitions: which items may be reforged, using which materials.
//!
//! Each document contributes one independent definition (no cross-document
//! merge). The primary matching path asks the catalog for tag membership at
//! query time; a legacy index additionally expands target tags to concrete
//! item ids at load time. The two paths deliberately diverge when the
//! catalog's tag contents change between reload and query.

use crate::schema::ReforgeDocument;
use crate::store::{DocumentId, LoadSummary};
use std::collections::HashMap;
use tierforge_core::catalog::{ItemCatalog, expand_tag};
use tierforge_core::id::{ItemId, TagId};
use tierforge_core::tag::{EntryRef, parse_entry};

// ===========================================================================
// Data model
// ===========================================================================

/// Materials usable as reforge input: direct item ids plus tags of items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReforgeBaseData {
    pub direct_items: Vec<ItemId>,
    pub tags: Vec<TagId>,
}

impl ReforgeBaseData {
    /// Whether `candidate` is a valid reforge material, checking tag
    /// membership against the catalog at call time.
    pub fn accepts<C: ItemCatalog>(&self, candidate: &ItemId, catalog: &C) -> bool {
        self.direct_items.contains(candidate)
            || self.tags.iter().any(|tag| catalog.item_in_tag(candidate, tag))
    }
}

/// One document's worth of "these items may be reforged using these
/// materials".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReforgeDefinition {
    pub direct_items: Vec<ItemId>,
    pub item_tags: Vec<TagId>,
    pub base: ReforgeBaseData,
}

impl ReforgeDefinition {
    /// Whether `candidate` is a target of this definition, either listed
    /// directly or a member of one of its tags. Tag membership is resolved
    /// lazily against the catalog.
    pub fn matches_item<C: ItemCatalog>(&self, candidate: &ItemId, catalog: &C) -> bool {
        self.direct_items.contains(candidate)
            || self
                .item_tags
                .iter()
                .any(|tag| catalog.item_in_tag(candidate, tag))
    }
}

// ===========================================================================
// Published table
// ===========================================================================

/// Published table of reforge definitions, keyed by document identity.
///
/// Entries keep document load order so first-match queries are
/// reproducible. The legacy index is frozen at load time and does not see
/// later catalog changes.
#[derive(Debug, Default, Clone)]
pub struct ReforgeTable {
    entries: Vec<(DocumentId, ReforgeDefinition)>,
    // Legacy eager index: target tags expanded against the catalog at load.
    reforgeable_ids: Vec<ItemId>,
    base_by_item: HashMap<ItemId, ReforgeBaseData>,
}

impl ReforgeTable {
    /// Whether any definition targets `candidate`.
    pub fn can_reforge<C: ItemCatalog>(&self, candidate: &ItemId, catalog: &C) -> bool {
        self.entries
            .iter()
            .any(|(_, def)| def.matches_item(candidate, catalog))
    }

    /// The first definition targeting `candidate`, in document load order.
    pub fn definition_for<C: ItemCatalog>(
        &self,
        candidate: &ItemId,
        catalog: &C,
    ) -> Option<&ReforgeDefinition> {
        self.entries
            .iter()
            .find(|(_, def)| def.matches_item(candidate, catalog))
            .map(|(_, def)| def)
    }

    pub fn get(&self, document: &DocumentId) -> Option<&ReforgeDefinition> {
        self.entries
            .iter()
            .find(|(id, _)| id == document)
            .map(|(_, def)| def)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Legacy: every reforgeable item id known at load time, target tags
    /// pre-expanded.
    pub fn reforgeable_ids(&self) -> &[ItemId] {
        &self.reforgeable_ids
    }

    /// Legacy: base materials for an item, from the load-time expansion.
    pub fn base_data_for(&self, item: &ItemId) -> Option<&ReforgeBaseData> {
        self.base_by_item.get(item)
    }
}

// ===========================================================================
// Loading
// ===========================================================================

/// Builds a reforge table from parsed documents, in the given order.
///
/// Literal ids are validated against the catalog; unknown ids skip the entry,
/// and a document left without targets or without materials is skipped whole.
pub fn build_reforge_table<I, C>(documents: I, catalog: &C, summary: &mut LoadSummary) -> ReforgeTable
where
    I: IntoIterator<Item = (DocumentId, ReforgeDocument)>,
    C: ItemCatalog,
{
    let mut table = ReforgeTable::default();
    let mut tags_loaded = 0usize;

    for (id, document) in documents {
        let Some(base_entries) = document.base else {
            log::error!("reforge document {id} is missing required 'base' array field");
            summary.skipped += 1;
            continue;
        };
        let Some(item_entries) = document.items else {
            log::error!("reforge document {id} is missing required 'items' array field");
            summary.skipped += 1;
            continue;
        };

        let mut base = ReforgeBaseData::default();
        for entry in &base_entries {
            match classify(&id, "base", entry, catalog) {
                Some(EntryRef::Tag(tag)) => {
                    base.tags.push(tag);
                    tags_loaded += 1;
                }
                Some(EntryRef::Item(item)) => base.direct_items.push(item),
                None => {}
            }
        }

        let mut direct_items = Vec::new();
        let mut item_tags = Vec::new();
        for entry in &item_entries {
            match classify(&id, "items", entry, catalog) {
                Some(EntryRef::Tag(tag)) => {
                    item_tags.push(tag);
                    tags_loaded += 1;
                }
                Some(EntryRef::Item(item)) => direct_items.push(item),
                None => {}
            }
        }

        if direct_items.is_empty() && item_tags.is_empty() {
            log::warn!("reforge document {id} has no valid items after processing, skipping");
            summary.skipped += 1;
            continue;
        }
        if base.direct_items.is_empty() && base.tags.is_empty() {
            log::warn!("reforge document {id} has no valid base materials after processing, skipping");
            summary.skipped += 1;
            continue;
        }

        let definition = ReforgeDefinition {
            direct_items,
            item_tags,
            base,
        };

        // Legacy index: expand target tags now, against the current catalog.
        let mut all_target_ids = definition.direct_items.clone();
        for tag in &definition.item_tags {
            let expanded = expand_tag(catalog, tag);
            if expanded.is_empty() {
                log::debug!(
                    "tag {tag} expanded to 0 items for the legacy index in {id}; lazy matching still applies"
                );
            }
            all_target_ids.extend(expanded);
        }
        for item in all_target_ids {
            table
                .base_by_item
                .insert(item.clone(), definition.base.clone());
            table.reforgeable_ids.push(item);
        }

        log::debug!(
            "loaded reforge definition from {id}: {} direct items, {} item tags, {} base items, {} base tags",
            definition.direct_items.len(),
            definition.item_tags.len(),
            definition.base.direct_items.len(),
            definition.base.tags.len()
        );
        table.entries.push((id, definition));
        summary.processed += 1;
    }

    log::info!(
        "loaded {} reforge definitions ({} skipped) with {tags_loaded} tags using lazy evaluation",
        summary.processed,
        summary.skipped
    );
    table
}

/// Classifies one raw entry; literal ids must resolve in the catalog.
/// Returns `None` for entries that should be skipped.
fn classify<C: ItemCatalog>(
    id: &DocumentId,
    field: &str,
    entry: &str,
    catalog: &C,
) -> Option<EntryRef> {
    match parse_entry(entry) {
        EntryRef::Tag(tag) => Some(EntryRef::Tag(tag)),
        EntryRef::Item(item) => {
            if catalog.has_item(&item) {
                Some(EntryRef::Item(item))
            } else {
                log::debug!(
                    "reforge document {id} skipped unknown item identifier in {field} list: {entry}"
                );
                None
            }
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
