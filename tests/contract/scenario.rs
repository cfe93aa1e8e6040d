//! End-to-end scenario: the seeded ledger driven through the executor,
//! the way a client application invokes the operations in sequence.

use std::sync::Arc;
use worldstate::{Executor, MemoryStore, Output};

fn executor() -> Executor {
    Executor::new(Arc::new(MemoryStore::new()))
}

#[test]
fn full_client_sequence() {
    let exec = executor();

    // Seed: nine fixed records icecream1..icecream9
    exec.invoke("InitLedger", &[]).unwrap();
    let out = exec.invoke("GetAllAssets", &[]).unwrap();
    let seeded: serde_json::Value =
        serde_json::from_str(&out.render().unwrap().unwrap()).unwrap();
    assert_eq!(seeded.as_array().unwrap().len(), 9);

    // Create a tenth asset
    let out = exec
        .invoke(
            "CreateAsset",
            &["icecream10", "vanilla", "small", "Carmen", "sugar", "6000"],
        )
        .unwrap();
    let created: serde_json::Value =
        serde_json::from_str(&out.render().unwrap().unwrap()).unwrap();
    assert_eq!(created["ID"], "icecream10");
    assert_eq!(created["client"], "Carmen");
    assert_eq!(created["value"], 6000);

    let out = exec.invoke("GetAllAssets", &[]).unwrap();
    let all: serde_json::Value = serde_json::from_str(&out.render().unwrap().unwrap()).unwrap();
    assert_eq!(all.as_array().unwrap().len(), 10);

    // Read, update flavor, read again: only flavor changed
    let before: serde_json::Value = serde_json::from_str(
        &exec
            .invoke("ReadAsset", &["icecream1"])
            .unwrap()
            .render()
            .unwrap()
            .unwrap(),
    )
    .unwrap();

    exec.invoke("UpdateAsset", &["icecream1", "vanilla"]).unwrap();

    let after: serde_json::Value = serde_json::from_str(
        &exec
            .invoke("ReadAsset", &["icecream1"])
            .unwrap()
            .render()
            .unwrap()
            .unwrap(),
    )
    .unwrap();
    assert_eq!(after["flavor"], "vanilla");
    for field in ["ID", "docType", "size", "client", "cone", "value"] {
        assert_eq!(after[field], before[field], "field {field} must not change");
    }

    // Transfer: returns the seeded owner, then the read shows the new one
    let out = exec.invoke("TransferAsset", &["icecream1", "Maria"]).unwrap();
    assert_eq!(out, Output::Owner("Paola".to_string()));

    let transferred: serde_json::Value = serde_json::from_str(
        &exec
            .invoke("ReadAsset", &["icecream1"])
            .unwrap()
            .render()
            .unwrap()
            .unwrap(),
    )
    .unwrap();
    assert_eq!(transferred["client"], "Maria");
}

#[test]
fn seeded_records_scan_in_key_order_with_new_asset_interleaved() {
    let exec = executor();
    exec.invoke("InitLedger", &[]).unwrap();
    exec.invoke(
        "CreateAsset",
        &["icecream10", "vanilla", "small", "Carmen", "sugar", "6000"],
    )
    .unwrap();

    let out = exec.invoke("GetAllAssets", &[]).unwrap();
    let all: serde_json::Value = serde_json::from_str(&out.render().unwrap().unwrap()).unwrap();
    let ids: Vec<&str> = all
        .as_array()
        .unwrap()
        .iter()
        .map(|rec| rec["ID"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        [
            "icecream1",
            "icecream10",
            "icecream2",
            "icecream3",
            "icecream4",
            "icecream5",
            "icecream6",
            "icecream7",
            "icecream8",
            "icecream9",
        ]
    );
}

#[test]
fn exists_reflects_seed_and_delete() {
    let exec = executor();
    exec.invoke("InitLedger", &[]).unwrap();

    assert_eq!(
        exec.invoke("AssetExists", &["icecream5"]).unwrap(),
        Output::Bool(true)
    );

    exec.invoke("DeleteAsset", &["icecream5"]).unwrap();
    assert_eq!(
        exec.invoke("AssetExists", &["icecream5"]).unwrap(),
        Output::Bool(false)
    );

    let out = exec.invoke("GetAllAssets", &[]).unwrap();
    let all: serde_json::Value = serde_json::from_str(&out.render().unwrap().unwrap()).unwrap();
    assert_eq!(all.as_array().unwrap().len(), 8);
}
