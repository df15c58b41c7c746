//! Builds the published [`MappingTable`] from verifier-mapping documents.
//!
//! Validation is skip-and-continue at two grains: a document missing a
//! required field is dropped whole, a malformed array entry is dropped alone.
//! Documents declaring the same base verifier merge by concatenating their
//! mapped sequences in document order.

use crate::schema::{MappedVerifierEntry, MappingDocument};
use crate::store::{DocumentId, LoadSummary};
use tierforge_core::mapping::{MappedVerifier, MappingTable, VerifierKind, VerifierMapping};
use tierforge_core::tag;

/// Builds a mapping table from parsed documents, in the given order.
///
/// `summary` is incremented per document; parse failures counted upstream by
/// the reload coordinator land in the same summary.
pub fn build_mapping_table<I>(documents: I, summary: &mut LoadSummary) -> MappingTable
where
    I: IntoIterator<Item = (DocumentId, MappingDocument)>,
{
    let mut builder = MappingTable::builder();
    let mut total_mapped = 0usize;

    for (id, document) in documents {
        let Some(base) = document.base_verifier else {
            log::error!("verifier mapping {id} is missing required 'base_verifier' field");
            summary.skipped += 1;
            continue;
        };
        let Some(base_kind) = document.base_verifier_type.as_deref().and_then(parse_kind)
        else {
            log::error!(
                "verifier mapping {id} is missing or has an invalid 'base_verifier_type' field"
            );
            summary.skipped += 1;
            continue;
        };
        let Some(entries) = document.mapped_verifiers else {
            log::error!("verifier mapping {id} is missing required 'mapped_verifiers' array field");
            summary.skipped += 1;
            continue;
        };

        let mapped: Vec<MappedVerifier> = entries
            .into_iter()
            .filter_map(|entry| parse_mapped(&id, entry))
            .collect();

        if mapped.is_empty() {
            log::warn!("verifier mapping {id} has no valid mapped verifiers after processing, skipping");
            summary.skipped += 1;
            continue;
        }

        total_mapped += mapped.len();
        let count = builder.insert(VerifierMapping {
            base: normalize_verifier(base, base_kind),
            base_kind,
            mapped,
        });
        log::debug!("loaded verifier mapping from {id}: {count} mapped verifiers for its base");
        summary.processed += 1;
    }

    let table = builder.build();
    log::info!(
        "loaded {} verifier mappings ({} skipped) with {total_mapped} total mapped verifiers",
        summary.processed,
        summary.skipped
    );
    table
}

fn parse_kind(kind: &str) -> Option<VerifierKind> {
    match kind {
        "id" => Some(VerifierKind::Id),
        "tag" => Some(VerifierKind::Tag),
        _ => None,
    }
}

fn parse_mapped(id: &DocumentId, entry: MappedVerifierEntry) -> Option<MappedVerifier> {
    let Some(verifier) = entry.verifier else {
        log::debug!("verifier mapping {id} has mapped_verifier entry missing 'verifier' field, skipping");
        return None;
    };
    let Some(kind) = entry.kind.as_deref().and_then(parse_kind) else {
        log::debug!("verifier mapping {id} has mapped_verifier entry missing or invalid 'type' field, skipping");
        return None;
    };
    Some(MappedVerifier {
        target: normalize_verifier(verifier, kind),
        kind,
    })
}

/// Tag verifiers are keyed and matched by bare tag name; tolerate authors
/// writing the `#` reference form and strip it.
fn normalize_verifier(verifier: String, kind: VerifierKind) -> String {
    if kind == VerifierKind::Tag
        && let Ok(tag) = tag::extract_tag_id(&verifier)
    {
        return tag.as_str().to_string();
    }
    verifier
}
