//! Tierforge Core -- verifier resolution over an external item catalog.
//!
//! This crate holds the host-independent heart of the tier system: item and
//! tag identifiers, the `#namespace:path` tag-reference convention, the
//! [`verifier::Verifier`] predicate, and the [`mapping::MappingTable`] that
//! lets documents extend a verifier with equivalents.
//!
//! The external catalog (item registry and tag membership) is reached only
//! through the [`catalog::ItemCatalog`] capability trait; tag membership is
//! always answered by the catalog at query time.
//!
//! # Key Types
//!
//! - [`id::ItemId`] / [`id::TagId`] -- `namespace:path` identifiers.
//! - [`verifier::Verifier`] -- matches an item by exact id or tag membership.
//! - [`mapping::MappingTable`] -- published base-verifier -> equivalents map.
//! - [`catalog::ItemCatalog`] -- the capability interface the host supplies.

pub mod catalog;
pub mod id;
pub mod mapping;
pub mod tag;
pub mod verifier;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
