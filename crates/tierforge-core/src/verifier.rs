//! Item verifiers: the single predicate unit of the tier system.
//!
//! A verifier accepts an item either by exact id or by tag membership, and
//! may transparently accept equivalents declared in a [`MappingTable`].

use crate::catalog::ItemCatalog;
use crate::id::{ItemId, TagId};
use crate::mapping::{MappingTable, VerifierKind};

// ===========================================================================
// Verifier
// ===========================================================================

/// A predicate over item identifiers.
///
/// The two variants make the id/tag choice mutually exclusive by
/// construction; there is no "neither" or "both" state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Verifier {
    /// Matches exactly one item id (plus any mapped equivalents of that id).
    Id(ItemId),
    /// Matches members of a tag (plus any mapped equivalents of that tag).
    Tag(TagId),
}

impl Verifier {
    /// Whether `candidate` passes this verifier.
    ///
    /// An `Id` verifier compares identifiers directly; a `Tag` verifier asks
    /// the catalog for membership at call time. On a direct miss, the
    /// verifier's own id or bare tag name is used as the key into `mappings`
    /// and any declared equivalents are tried in order.
    ///
    /// A tag unknown to the catalog is a configuration error: it is logged
    /// and the verifier reports false rather than failing.
    pub fn is_valid<C: ItemCatalog>(
        &self,
        candidate: &ItemId,
        catalog: &C,
        mappings: Option<&MappingTable>,
    ) -> bool {
        match self {
            Verifier::Id(id) => {
                if candidate == id {
                    return true;
                }
                check_mapped_verifiers(id.as_str(), candidate, catalog, mappings)
            }
            Verifier::Tag(tag) => {
                if !catalog.tag_exists(tag) {
                    log::error!(
                        "{} was specified as an item verifier tag, but it does not exist",
                        tag
                    );
                    return false;
                }
                if catalog.item_in_tag(candidate, tag) {
                    return true;
                }
                check_mapped_verifiers(tag.as_str(), candidate, catalog, mappings)
            }
        }
    }
}

// ===========================================================================
// Mapped-verifier resolution
// ===========================================================================

/// Whether `candidate` matches any mapped verifier declared for `base_key`.
///
/// Entries are tried in declaration order and the first hit wins, so mapped
/// verifiers have deterministic priority equal to document order. With no
/// mapping table the feature is inert and this returns false.
pub fn check_mapped_verifiers<C: ItemCatalog>(
    base_key: &str,
    candidate: &ItemId,
    catalog: &C,
    mappings: Option<&MappingTable>,
) -> bool {
    let Some(table) = mappings else {
        return false;
    };

    for mapped in table.get(base_key) {
        match mapped.kind {
            VerifierKind::Id => {
                if candidate.as_str() == mapped.target {
                    return true;
                }
            }
            VerifierKind::Tag => {
                // Mapping targets store bare tag names; the loader has
                // already stripped any marker.
                if let Ok(tag) = crate::tag::tag_id(&mapped.target)
                    && catalog.item_in_tag(candidate, &tag)
                {
                    return true;
                }
            }
        }
    }

    false
}

// ===========================================================================
// Tests
// ===========================================================================
