//! Tierforge Data -- document loading and published tables.
//!
//! Turns a directory of configuration documents into the two published
//! tables the tier system queries: the verifier [`MappingTable`] (from
//! `verifier_mappings/`) and the [`reforge::ReforgeTable`] (from
//! `reforge_items/`). Each reload rebuilds both wholesale and publishes them
//! through a single swap in [`reload::TableStore`].
//!
//! Data-quality problems are recovered at the smallest possible grain:
//! a malformed array entry skips that entry, a malformed document skips that
//! document, and the reload itself only fails on environment errors.
//!
//! [`MappingTable`]: tierforge_core::mapping::MappingTable

pub mod mapping_loader;
pub mod reforge;
pub mod reload;
pub mod schema;
pub mod store;
