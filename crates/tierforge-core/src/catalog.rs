//! Capability interface onto the external item catalog.
//!
//! The core never owns item or tag data; it asks the host's catalog whether
//! an identifier resolves and whether an item belongs to a tag. Membership is
//! answered at call time, so queries reflect the catalog's current state.

use crate::id::{ItemId, TagId};

/// The external item catalog the host supplies.
///
/// All operations are keyed by identifier: the host's opaque item handles are
/// collapsed to their identifiers, which are in bijection with them.
pub trait ItemCatalog {
    /// Whether `id` resolves to an item in the catalog.
    fn has_item(&self, id: &ItemId) -> bool;

    /// Whether the item named by `id` is a member of `tag`.
    fn item_in_tag(&self, id: &ItemId, tag: &TagId) -> bool;

    /// Whether the catalog knows `tag` at all.
    fn tag_exists(&self, tag: &TagId) -> bool;

    /// All item identifiers in the catalog. Used only for eager tag
    /// expansion by the legacy reforge index.
    fn item_ids(&self) -> Vec<ItemId>;
}

impl<C: ItemCatalog + ?Sized> ItemCatalog for &C {
    fn has_item(&self, id: &ItemId) -> bool {
        (**self).has_item(id)
    }

    fn item_in_tag(&self, id: &ItemId, tag: &TagId) -> bool {
        (**self).item_in_tag(id, tag)
    }

    fn tag_exists(&self, tag: &TagId) -> bool {
        (**self).tag_exists(tag)
    }

    fn item_ids(&self) -> Vec<ItemId> {
        (**self).item_ids()
    }
}

/// Expands a tag to every catalog item that is currently a member.
pub fn expand_tag<C: ItemCatalog>(catalog: &C, tag: &TagId) -> Vec<ItemId> {
    catalog
        .item_ids()
        .into_iter()
        .filter(|id| catalog.item_in_tag(id, tag))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestCatalog;

    #[test]
    fn expand_tag_collects_members() {
        let catalog = TestCatalog::new()
            .with_item("minecraft:iron_ingot")
            .with_item("minecraft:gold_ingot")
            .with_item("minecraft:stick")
            .with_tag("c:ingots", &["minecraft:iron_ingot", "minecraft:gold_ingot"]);

        let tag = crate::tag::tag_id("c:ingots").unwrap();
        let mut members = expand_tag(&catalog, &tag);
        members.sort();
        assert_eq!(
            members,
            vec![
                ItemId::from("minecraft:gold_ingot"),
                ItemId::from("minecraft:iron_ingot"),
            ]
        );
    }

    #[test]
    fn expand_unknown_tag_is_empty() {
        let catalog = TestCatalog::new().with_item("minecraft:stick");
        let tag = crate::tag::tag_id("c:swords").unwrap();
        assert!(expand_tag(&catalog, &tag).is_empty());
    }
}
