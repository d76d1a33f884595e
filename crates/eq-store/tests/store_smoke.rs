use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use eq_phases::{PhaseCategory, PhaseProcessor};
use eq_report::{CondensedReport, SurrogateVector};
use eq_store::{CategoryCounts, PhaseStore, RunManifest, compute_report_digest};
use serde_json::json;

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("{}_{}", prefix, nanos));
    dir
}

fn sample_report() -> CondensedReport {
    serde_json::from_value(json!({
        "0": {
            "data": {
                "solution phases": {
                    "MSFL_A": {
                        "moles": 2.0,
                        "cations": { "Na": { "mole fraction": 1.0 } },
                        "anions": { "Cl": { "mole fraction": 1.0 } }
                    },
                    "gas_ideal": {
                        "moles": 1.0,
                        "species": { "H2O": { "mole fraction": 1.0 } }
                    }
                },
                "pure condensed phases": { "UO2": { "moles": 1.0 } }
            }
        }
    }))
    .expect("sample report should parse")
}

#[test]
fn save_load_roundtrip() {
    let out_dir = unique_temp_dir("eq_store_roundtrip");
    let store = PhaseStore::new(out_dir.clone()).expect("failed to create store");

    let documents = PhaseProcessor::new(sample_report(), SurrogateVector::new()).process_all();
    let saved = store.save_documents(&documents).expect("failed to save");

    assert_eq!(saved.salt, out_dir.join("Salt.json"));
    assert_eq!(saved.gas, out_dir.join("Gas.json"));
    assert_eq!(saved.solid, out_dir.join("Solids.json"));
    for (_, path) in saved.iter() {
        assert!(path.exists());
    }

    for category in PhaseCategory::ALL {
        let loaded = store.load_document(category).expect("failed to load back");
        assert_eq!(&loaded, documents.for_category(category));
    }
}

#[test]
fn resaving_is_byte_identical() {
    let out_dir = unique_temp_dir("eq_store_identical");
    let store = PhaseStore::new(out_dir).expect("failed to create store");

    let documents = PhaseProcessor::new(sample_report(), SurrogateVector::new()).process_all();

    let saved = store.save_documents(&documents).expect("first save failed");
    let first: Vec<String> = saved
        .iter()
        .map(|(_, path)| fs::read_to_string(path).expect("failed to read"))
        .collect();

    let saved = store.save_documents(&documents).expect("second save failed");
    let second: Vec<String> = saved
        .iter()
        .map(|(_, path)| fs::read_to_string(path).expect("failed to read"))
        .collect();

    assert_eq!(first, second);
    // two-space indentation, objects opened on the key line
    assert!(first[0].starts_with("{\n  \"0\": {"));
}

#[test]
fn empty_documents_serialize_as_empty_objects() {
    let out_dir = unique_temp_dir("eq_store_empty");
    let store = PhaseStore::new(out_dir).expect("failed to create store");

    let documents =
        PhaseProcessor::new(CondensedReport::default(), SurrogateVector::new()).process_all();
    let saved = store.save_documents(&documents).expect("failed to save");

    for (_, path) in saved.iter() {
        assert_eq!(fs::read_to_string(path).expect("failed to read"), "{}");
    }
}

#[test]
fn manifest_roundtrip() {
    let out_dir = unique_temp_dir("eq_store_manifest");
    let store = PhaseStore::new(out_dir).expect("failed to create store");

    let report = sample_report();
    let manifest = RunManifest::now(
        compute_report_digest(&report),
        report.len(),
        CategoryCounts {
            salt: 1,
            gas: 1,
            solid: 1,
        },
        0,
    );

    let path = store.save_manifest(&manifest).expect("failed to save");
    assert!(path.ends_with("manifest.json"));

    let loaded = store.load_manifest().expect("failed to load manifest");
    assert_eq!(loaded, manifest);
}

#[test]
fn store_creates_missing_directories() {
    let out_dir = unique_temp_dir("eq_store_nested").join("a").join("b");
    assert!(!out_dir.exists());
    let store = PhaseStore::new(out_dir.clone()).expect("failed to create store");
    assert!(out_dir.exists());
    assert_eq!(store.out_dir(), out_dir.as_path());
}
