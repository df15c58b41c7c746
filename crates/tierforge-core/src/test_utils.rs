//! Shared test helpers for unit and integration tests.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]` so the in-memory
//! catalog is available to this crate's unit tests and, via the `test-utils`
//! feature, to downstream integration tests.

use crate::catalog::ItemCatalog;
use crate::id::{ItemId, TagId};
use std::collections::{HashMap, HashSet};

/// In-memory [`ItemCatalog`] with explicit items and tag memberships.
#[derive(Debug, Default, Clone)]
pub struct TestCatalog {
    items: HashSet<ItemId>,
    tags: HashMap<TagId, HashSet<ItemId>>,
}

impl TestCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, id: &str) -> Self {
        self.items.insert(ItemId::from(id));
        self
    }

    /// Declares a tag and its members. Members are added as items too.
    pub fn with_tag(mut self, tag: &str, members: &[&str]) -> Self {
        let tag = crate::tag::tag_id(tag).expect("bare tag name");
        let entry = self.tags.entry(tag).or_default();
        for member in members {
            let id = ItemId::from(*member);
            entry.insert(id.clone());
            self.items.insert(id);
        }
        self
    }

    /// Adds a member to an existing (or new) tag after construction,
    /// simulating a catalog that changes between reload and query.
    pub fn add_tag_member(&mut self, tag: &str, member: &str) {
        let tag = crate::tag::tag_id(tag).expect("bare tag name");
        let id = ItemId::from(member);
        self.tags.entry(tag).or_default().insert(id.clone());
        self.items.insert(id);
    }
}

impl ItemCatalog for TestCatalog {
    fn has_item(&self, id: &ItemId) -> bool {
        self.items.contains(id)
    }

    fn item_in_tag(&self, id: &ItemId, tag: &TagId) -> bool {
        self.tags.get(tag).is_some_and(|members| members.contains(id))
    }

    fn tag_exists(&self, tag: &TagId) -> bool {
        self.tags.contains_key(tag)
    }

    fn item_ids(&self) -> Vec<ItemId> {
        let mut ids: Vec<ItemId> = self.items.iter().cloned().collect();
        ids.sort();
        ids
    }
}
