//! Reload coordination: rebuild both tables, then publish atomically.
//!
//! A reload is two phases to cooperate with hosts running a multi-phase
//! reload protocol: [`prepare`] is pure computation over the document store
//! and touches no shared state; [`TableStore::publish`] is the single swap
//! point. Readers hold `Arc` snapshots, so they see either the old tables or
//! the new ones in full, never a partial rebuild. Bad input never fails a
//! reload; it only shrinks the result, with counts in the summary.

use crate::mapping_loader::build_mapping_table;
use crate::reforge::{ReforgeTable, build_reforge_table};
use crate::store::{
    DataLoadError, Document, DocumentId, LoadSummary, read_document, scan_documents,
};
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::Arc;
use tierforge_core::catalog::ItemCatalog;
use tierforge_core::mapping::MappingTable;

/// Directory under the data root holding verifier-mapping documents.
pub const VERIFIER_MAPPINGS_DIR: &str = "verifier_mappings";

/// Directory under the data root holding reforge documents.
pub const REFORGE_ITEMS_DIR: &str = "reforge_items";

/// Counters for one full reload pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReloadSummary {
    pub mappings: LoadSummary,
    pub reforge: LoadSummary,
}

/// Tables computed by [`prepare`], not yet visible to readers.
#[derive(Debug)]
pub struct PreparedTables {
    mappings: MappingTable,
    reforge: ReforgeTable,
    summary: ReloadSummary,
}

impl PreparedTables {
    pub fn summary(&self) -> ReloadSummary {
        self.summary
    }
}

/// Rebuilds both tables from the document store. Pure with respect to any
/// published state; `Err` only for directory-scan I/O failures.
pub fn prepare<C: ItemCatalog>(
    data_dir: &Path,
    catalog: &C,
) -> Result<PreparedTables, DataLoadError> {
    let mut summary = ReloadSummary::default();

    let mapping_docs = parse_documents(
        scan_documents(&data_dir.join(VERIFIER_MAPPINGS_DIR))?,
        &mut summary.mappings,
    );
    let mappings = build_mapping_table(mapping_docs, &mut summary.mappings);

    let reforge_docs = parse_documents(
        scan_documents(&data_dir.join(REFORGE_ITEMS_DIR))?,
        &mut summary.reforge,
    );
    let reforge = build_reforge_table(reforge_docs, catalog, &mut summary.reforge);

    Ok(PreparedTables {
        mappings,
        reforge,
        summary,
    })
}

/// Reads and parses discovered documents. An unreadable or unparseable
/// document is skipped with a diagnostic; the rest of the batch proceeds.
fn parse_documents<T: DeserializeOwned>(
    documents: Vec<Document>,
    summary: &mut LoadSummary,
) -> Vec<(DocumentId, T)> {
    let mut parsed = Vec::with_capacity(documents.len());
    for document in documents {
        match read_document::<T>(&document.path) {
            Ok(value) => parsed.push((document.id, value)),
            Err(err) => {
                log::error!("error occurred while loading document {}: {err}", document.id);
                summary.skipped += 1;
            }
        }
    }
    parsed
}

/// Holds the published tables. Writers replace whole snapshots; nothing
/// mutates a published table in place.
#[derive(Debug, Default, Clone)]
pub struct TableStore {
    mappings: Arc<MappingTable>,
    reforge: Arc<ReforgeTable>,
}

impl TableStore {
    /// Starts with empty tables; queries are well-defined before the first
    /// reload.
    pub fn new() -> Self {
        Self::default()
    }

    /// The single swap point: replaces both published tables with the
    /// prepared ones. Prior state is fully discarded.
    pub fn publish(&mut self, prepared: PreparedTables) -> ReloadSummary {
        self.mappings = Arc::new(prepared.mappings);
        self.reforge = Arc::new(prepared.reforge);
        prepared.summary
    }

    /// Snapshot of the published mapping table.
    pub fn mappings(&self) -> Arc<MappingTable> {
        Arc::clone(&self.mappings)
    }

    /// Snapshot of the published reforge table.
    pub fn reforge(&self) -> Arc<ReforgeTable> {
        Arc::clone(&self.reforge)
    }
}

/// Convenience for hosts without a staged reload protocol: prepare, then
/// publish.
pub fn reload<C: ItemCatalog>(
    data_dir: &Path,
    catalog: &C,
    store: &mut TableStore,
) -> Result<ReloadSummary, DataLoadError> {
    let prepared = prepare(data_dir, catalog)?;
    Ok(store.publish(prepared))
}
