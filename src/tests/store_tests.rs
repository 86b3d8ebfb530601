//! tests/store_tests.rs
//! Document store (archivo y memoria), merge superficial, singletons y la
//! retención del log de eventos.

use std::sync::Arc;

use serde_json::{json, Value};

use super::support;
use crate::services::document_store::{shallow_merge, DocumentStore, FileStorage};
use crate::services::log_service::LogService;

#[test]
fn missing_collection_reads_as_empty() {
    let store = support::memory_store();
    assert!(store.read("emails").is_empty());
}

#[test]
fn file_storage_round_trips_a_collection() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = DocumentStore::new(Arc::new(FileStorage::new(dir.path())));

    let records = vec![json!({ "id": "a" }), json!({ "id": "b" })];
    store.write("emails", &records).expect("write");

    assert!(dir.path().join("emails.json").exists());
    assert_eq!(store.read("emails"), records);
}

#[test]
fn corrupt_or_non_array_documents_read_as_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = DocumentStore::new(Arc::new(FileStorage::new(dir.path())));

    std::fs::write(dir.path().join("emails.json"), "{{{ no es json").expect("seed");
    assert!(store.read("emails").is_empty());

    // JSON válido pero no-arreglo también cuenta como vacío
    std::fs::write(dir.path().join("emails.json"), "{\"id\": 1}").expect("seed");
    assert!(store.read("emails").is_empty());
}

#[test]
fn shallow_merge_overrides_and_retains() {
    let mut target = json!({ "a": 1, "b": "viejo", "nested": { "x": 1 } });
    let patch = json!({ "b": "nuevo", "c": true, "nested": { "y": 2 } });

    shallow_merge(&mut target, &patch);

    assert_eq!(target["a"], 1);
    assert_eq!(target["b"], "nuevo");
    assert_eq!(target["c"], true);
    // Superficial: el objeto anidado se reemplaza entero, no se fusiona
    assert_eq!(target["nested"], json!({ "y": 2 }));
}

#[test]
fn shallow_merge_ignores_non_object_patches() {
    let mut target = json!({ "a": 1 });
    shallow_merge(&mut target, &json!([1, 2, 3]));
    assert_eq!(target, json!({ "a": 1 }));
}

#[test]
fn singleton_upsert_creates_then_accumulates() {
    let store = support::memory_store();

    let first = store
        .upsert_singleton("settings", &json!({ "sender_name": "Loja" }))
        .expect("upsert");
    let id = first["id"].as_str().expect("id ausente").to_string();

    let second = store
        .upsert_singleton("settings", &json!({ "domain": "loja.com" }))
        .expect("upsert");

    assert_eq!(second["id"], id.as_str());
    assert_eq!(second["sender_name"], "Loja");
    assert_eq!(second["domain"], "loja.com");
    assert_eq!(store.read("settings").len(), 1);
    assert_eq!(store.read_singleton("settings"), second);
}

#[test]
fn read_singleton_of_empty_collection_is_empty_object() {
    let store = support::memory_store();
    assert_eq!(store.read_singleton("whatsapp_config"), json!({}));
}

#[test]
fn event_log_keeps_only_the_most_recent_1000() {
    let store = support::memory_store();
    let log_service = LogService::new(store.clone());

    for i in 0..1005 {
        log_service.log_event(&format!("evt_{}", i), &json!({ "n": i }), &json!({}));
    }

    let logs = store.read("logs");
    assert_eq!(logs.len(), 1000);
    // Se descartan los más viejos; el orden relativo se conserva
    assert_eq!(logs[0]["event_type"], "evt_5");
    assert_eq!(logs[999]["event_type"], "evt_1004");

    let evt_types: Vec<&str> = logs
        .iter()
        .filter_map(|entry| entry.get("event_type").and_then(Value::as_str))
        .collect();
    assert!(evt_types.windows(2).all(|pair| {
        let a: usize = pair[0].trim_start_matches("evt_").parse().unwrap_or(0);
        let b: usize = pair[1].trim_start_matches("evt_").parse().unwrap_or(0);
        a + 1 == b
    }));
}
