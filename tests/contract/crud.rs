//! CRUD contract tests
//!
//! Exercises the existence-checked create/read/update/delete lifecycle
//! through the public facade.

use std::sync::Arc;
use worldstate::{Asset, AssetStore, Error, MemoryStore};

fn store() -> AssetStore {
    AssetStore::new(Arc::new(MemoryStore::new()))
}

fn sample(id: &str) -> Asset {
    Asset::new(id, "chocolate", "small", "Paola", "waffle", 300)
}

// ============================================================================
// Create
// ============================================================================

#[test]
fn create_then_read_roundtrips() {
    let store = store();
    let asset = sample("icecream1");
    store.create(asset.clone()).unwrap();

    let read_back = store.read_decoded("icecream1").unwrap();
    assert_eq!(read_back, asset);
    assert_eq!(read_back.doc_type, "asset");
}

#[test]
fn create_on_live_key_fails_with_already_exists() {
    let store = store();
    store.create(sample("icecream1")).unwrap();

    let err = store
        .create(Asset::new("icecream1", "mint", "large", "Nico", "cake", 50))
        .unwrap_err();
    assert!(matches!(err, Error::AlreadyExists { .. }));

    // First write remains
    assert_eq!(store.read_decoded("icecream1").unwrap().flavor, "chocolate");
}

#[test]
fn create_is_one_write_with_canonical_bytes() {
    let store = store();
    let bytes = store.create(sample("icecream1")).unwrap();
    assert_eq!(store.read("icecream1").unwrap(), bytes);
}

// ============================================================================
// Update
// ============================================================================

#[test]
fn update_overwrites_flavor_preserving_other_fields() {
    let store = store();
    store.create(sample("icecream1")).unwrap();
    store.update("icecream1", "vanilla").unwrap();

    let asset = store.read_decoded("icecream1").unwrap();
    assert_eq!(asset.flavor, "vanilla");
    assert_eq!(
        (asset.size, asset.client, asset.cone, asset.value),
        ("small".into(), "Paola".into(), "waffle".into(), 300)
    );
}

#[test]
fn update_absent_key_fails_with_not_found() {
    let store = store();
    assert!(matches!(
        store.update("nope", "vanilla").unwrap_err(),
        Error::NotFound { .. }
    ));
}

#[test]
fn update_rewrites_canonically() {
    let store = store();
    store.create(sample("icecream1")).unwrap();
    store.update("icecream1", "vanilla").unwrap();

    let text = String::from_utf8(store.read("icecream1").unwrap()).unwrap();
    assert_eq!(
        text,
        r#"{"ID":"icecream1","client":"Paola","cone":"waffle","docType":"asset","flavor":"vanilla","size":"small","value":300}"#
    );
}

// ============================================================================
// Delete / Exists
// ============================================================================

#[test]
fn delete_removes_key_entirely() {
    let store = store();
    store.create(sample("icecream1")).unwrap();
    store.delete("icecream1").unwrap();

    assert!(!store.exists("icecream1").unwrap());
    assert!(matches!(
        store.read("icecream1").unwrap_err(),
        Error::NotFound { .. }
    ));
}

#[test]
fn delete_absent_key_fails_with_not_found() {
    let store = store();
    assert!(matches!(
        store.delete("nope").unwrap_err(),
        Error::NotFound { .. }
    ));
}

#[test]
fn exists_tracks_lifecycle() {
    let store = store();
    assert!(!store.exists("icecream1").unwrap());

    store.create(sample("icecream1")).unwrap();
    assert!(store.exists("icecream1").unwrap());

    store.update("icecream1", "vanilla").unwrap();
    assert!(store.exists("icecream1").unwrap());

    store.delete("icecream1").unwrap();
    assert!(!store.exists("icecream1").unwrap());
}

#[test]
fn deleted_key_can_be_recreated() {
    let store = store();
    store.create(sample("icecream1")).unwrap();
    store.delete("icecream1").unwrap();
    store
        .create(Asset::new("icecream1", "mint", "large", "Nico", "cake", 50))
        .unwrap();
    assert_eq!(store.read_decoded("icecream1").unwrap().flavor, "mint");
}

// ============================================================================
// Transfer
// ============================================================================

#[test]
fn transfer_returns_previous_owner_and_persists_new_one() {
    let store = store();
    store.create(sample("icecream1")).unwrap();

    assert_eq!(store.transfer("icecream1", "Maria").unwrap(), "Paola");
    assert_eq!(store.read_decoded("icecream1").unwrap().client, "Maria");

    // Second transfer sees the first one's result
    assert_eq!(store.transfer("icecream1", "Nico").unwrap(), "Maria");
}

#[test]
fn transfer_absent_key_fails_with_not_found() {
    let store = store();
    assert!(matches!(
        store.transfer("nope", "Maria").unwrap_err(),
        Error::NotFound { .. }
    ));
}

#[test]
fn transfer_changes_exactly_one_field() {
    let store = store();
    store.create(sample("icecream1")).unwrap();
    store.transfer("icecream1", "Maria").unwrap();

    let asset = store.read_decoded("icecream1").unwrap();
    assert_eq!(asset.flavor, "chocolate");
    assert_eq!(asset.size, "small");
    assert_eq!(asset.cone, "waffle");
    assert_eq!(asset.value, 300);
}
