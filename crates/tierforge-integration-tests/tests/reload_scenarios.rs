//! End-to-end reload scenarios across the core and data crates: a document
//! directory is written to disk, reloaded into a `TableStore`, and queried
//! through verifiers and the reforge table against an in-memory catalog.

use std::fs;
use std::path::{Path, PathBuf};
use tierforge_core::id::ItemId;
use tierforge_core::test_utils::TestCatalog;
use tierforge_core::verifier::Verifier;
use tierforge_data::reload::{REFORGE_ITEMS_DIR, TableStore, VERIFIER_MAPPINGS_DIR, reload};
use tierforge_data::store::LoadSummary;

fn make_data_dir(suffix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "tierforge_scenario_{suffix}_{}",
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(dir.join(VERIFIER_MAPPINGS_DIR)).unwrap();
    fs::create_dir_all(dir.join(REFORGE_ITEMS_DIR)).unwrap();
    dir
}

fn cleanup(dir: &Path) {
    let _ = fs::remove_dir_all(dir);
}

fn item(id: &str) -> ItemId {
    ItemId::from(id)
}

fn workshop_catalog() -> TestCatalog {
    TestCatalog::new()
        .with_item("minecraft:diamond_sword")
        .with_item("minecraft:iron_sword")
        .with_item("minecraft:iron_ingot")
        .with_item("minecraft:stick")
        .with_tag("c:ingots", &["minecraft:iron_ingot", "minecraft:gold_ingot"])
        .with_tag(
            "c:swords",
            &["minecraft:diamond_sword", "minecraft:iron_sword"],
        )
        .with_tag("c:halberds", &["spartanweaponry:iron_halberd"])
}

#[test]
fn reforge_scenario_with_tag_materials() {
    let dir = make_data_dir("reforge");
    fs::write(
        dir.join(REFORGE_ITEMS_DIR).join("diamond_sword.json"),
        r##"{ "base": ["minecraft:iron_ingot", "#c:ingots"],
             "items": ["minecraft:diamond_sword"] }"##,
    )
    .unwrap();

    let catalog = workshop_catalog();
    let mut store = TableStore::new();
    reload(&dir, &catalog, &mut store).unwrap();

    let reforge = store.reforge();
    assert!(reforge.can_reforge(&item("minecraft:diamond_sword"), &catalog));
    assert!(!reforge.can_reforge(&item("minecraft:stick"), &catalog));

    let definition = reforge
        .definition_for(&item("minecraft:diamond_sword"), &catalog)
        .unwrap();
    assert_eq!(
        definition.base.direct_items,
        vec![item("minecraft:iron_ingot")]
    );
    // Any item the catalog tags c:ingots is accepted as a material even
    // though only iron_ingot is listed directly.
    assert!(definition.base.accepts(&item("minecraft:gold_ingot"), &catalog));
    assert!(!definition.base.accepts(&item("minecraft:stick"), &catalog));
    cleanup(&dir);
}

#[test]
fn verifier_indirection_through_loaded_mappings() {
    let dir = make_data_dir("indirection");
    fs::write(
        dir.join(VERIFIER_MAPPINGS_DIR).join("swords.json"),
        r#"{ "base_verifier": "c:swords", "base_verifier_type": "tag",
             "mapped_verifiers": [
                 { "verifier": "c:halberds", "type": "tag" },
                 { "verifier": "mod:club", "type": "id" }
             ] }"#,
    )
    .unwrap();

    let catalog = workshop_catalog();
    let mut store = TableStore::new();
    reload(&dir, &catalog, &mut store).unwrap();
    let mappings = store.mappings();

    let verifier = Verifier::Tag(tierforge_core::tag::tag_id("c:swords").unwrap());
    // Direct tag membership still works.
    assert!(verifier.is_valid(&item("minecraft:iron_sword"), &catalog, Some(&mappings)));
    // A halberd is not a sword, but the mapping declares it equivalent.
    assert!(verifier.is_valid(&item("spartanweaponry:iron_halberd"), &catalog, Some(&mappings)));
    // The id-typed mapped verifier matches by exact id.
    assert!(verifier.is_valid(&item("mod:club"), &catalog, Some(&mappings)));
    // Unmapped strangers still fail.
    assert!(!verifier.is_valid(&item("minecraft:stick"), &catalog, Some(&mappings)));
    cleanup(&dir);
}

#[test]
fn mapping_documents_merge_across_files() {
    let dir = make_data_dir("merge");
    // File names force processing order: a_ before b_.
    fs::write(
        dir.join(VERIFIER_MAPPINGS_DIR).join("a_halberds.json"),
        r#"{ "base_verifier": "c:swords", "base_verifier_type": "tag",
             "mapped_verifiers": [ { "verifier": "c:halberds", "type": "tag" } ] }"#,
    )
    .unwrap();
    fs::write(
        dir.join(VERIFIER_MAPPINGS_DIR).join("b_clubs.json"),
        r#"{ "base_verifier": "c:swords", "base_verifier_type": "tag",
             "mapped_verifiers": [ { "verifier": "mod:club", "type": "id" } ] }"#,
    )
    .unwrap();

    let catalog = workshop_catalog();
    let mut store = TableStore::new();
    let summary = reload(&dir, &catalog, &mut store).unwrap();
    assert_eq!(summary.mappings, LoadSummary { processed: 2, skipped: 0 });

    let mappings = store.mappings();
    let targets: Vec<&str> = mappings
        .get("c:swords")
        .iter()
        .map(|m| m.target.as_str())
        .collect();
    assert_eq!(targets, vec!["c:halberds", "mod:club"]);
    cleanup(&dir);
}

#[test]
fn one_malformed_document_among_many() {
    let dir = make_data_dir("isolation");
    for i in 0..4 {
        fs::write(
            dir.join(REFORGE_ITEMS_DIR).join(format!("doc_{i}.json")),
            r#"{ "base": ["minecraft:iron_ingot"], "items": ["minecraft:diamond_sword"] }"#,
        )
        .unwrap();
    }
    fs::write(
        dir.join(REFORGE_ITEMS_DIR).join("doc_4.json"),
        r#"{ "items": ["minecraft:diamond_sword"] }"#,
    )
    .unwrap();

    let catalog = workshop_catalog();
    let mut store = TableStore::new();
    let summary = reload(&dir, &catalog, &mut store).unwrap();
    assert_eq!(summary.reforge, LoadSummary { processed: 4, skipped: 1 });
    assert_eq!(store.reforge().len(), 4);

    // Fix the malformed document; the next reload publishes all five.
    fs::write(
        dir.join(REFORGE_ITEMS_DIR).join("doc_4.json"),
        r#"{ "base": ["minecraft:iron_ingot"], "items": ["minecraft:diamond_sword"] }"#,
    )
    .unwrap();
    let summary = reload(&dir, &catalog, &mut store).unwrap();
    assert_eq!(summary.reforge, LoadSummary { processed: 5, skipped: 0 });
    assert_eq!(store.reforge().len(), 5);
    cleanup(&dir);
}

#[test]
fn unknown_target_item_drops_document_not_materials() {
    let dir = make_data_dir("unknown_target");
    fs::write(
        dir.join(REFORGE_ITEMS_DIR).join("uninstalled.json"),
        r#"{ "base": ["minecraft:iron_ingot"], "items": ["mod:not_installed"] }"#,
    )
    .unwrap();

    let catalog = workshop_catalog();
    let mut store = TableStore::new();
    let summary = reload(&dir, &catalog, &mut store).unwrap();
    assert_eq!(summary.reforge, LoadSummary { processed: 0, skipped: 1 });

    // The material listed in "base" alone gives the document no effect.
    assert!(!store
        .reforge()
        .can_reforge(&item("minecraft:iron_ingot"), &catalog));
    cleanup(&dir);
}

#[test]
fn mixed_formats_load_together() {
    let dir = make_data_dir("formats");
    fs::write(
        dir.join(REFORGE_ITEMS_DIR).join("from_json.json"),
        r#"{ "base": ["minecraft:iron_ingot"], "items": ["minecraft:diamond_sword"] }"#,
    )
    .unwrap();
    fs::write(
        dir.join(REFORGE_ITEMS_DIR).join("from_toml.toml"),
        "base = [\"minecraft:iron_ingot\"]\nitems = [\"minecraft:iron_sword\"]\n",
    )
    .unwrap();
    fs::write(
        dir.join(REFORGE_ITEMS_DIR).join("from_ron.ron"),
        r##"(base: Some(["#c:ingots"]), items: Some(["minecraft:stick"]))"##,
    )
    .unwrap();

    let catalog = workshop_catalog();
    let mut store = TableStore::new();
    let summary = reload(&dir, &catalog, &mut store).unwrap();
    assert_eq!(summary.reforge, LoadSummary { processed: 3, skipped: 0 });
    assert!(store.reforge().can_reforge(&item("minecraft:stick"), &catalog));
    cleanup(&dir);
}
