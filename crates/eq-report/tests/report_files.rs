use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use eq_core::Timestep;
use eq_report::{ReportError, load_report, load_surrogate};
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

#[test]
fn loads_report_from_disk() {
    let dir = unique_temp_dir("eq_report_load");
    fs::create_dir_all(&dir).expect("failed to create temp dir");

    let path = dir.join("report.json");
    let content = json!({
        "0": {
            "data": {
                "solution phases": {
                    "gas_ideal": {
                        "moles": 1.0,
                        "species": { "H2O": { "mole fraction": 1.0 } }
                    }
                }
            }
        }
    });
    fs::write(&path, content.to_string()).expect("failed to write report");

    let report = load_report(&path).expect("failed to load report");
    assert_eq!(report.len(), 1);
    let groups = report.timesteps[&Timestep::new(0)].primary().unwrap();
    assert!(groups.solution_phases.contains_key("gas_ideal"));
}

#[test]
fn loads_surrogate_vector_from_disk() {
    let dir = unique_temp_dir("eq_report_surrogate");
    fs::create_dir_all(&dir).expect("failed to create temp dir");

    let path = dir.join("surrogate_vector.json");
    fs::write(&path, r#"{"U": 0.95, "Pu": "0.05"}"#).expect("failed to write surrogate");

    let vector = load_surrogate(&path).expect("failed to load surrogate");
    assert_eq!(vector.len(), 2);
    assert!(vector.contains_key("U"));
}

#[test]
fn missing_file_reports_io_error() {
    let dir = unique_temp_dir("eq_report_missing");
    let err = load_report(&dir.join("nope.json")).unwrap_err();
    assert!(matches!(err, ReportError::Io(_)));
}

#[test]
fn malformed_json_reports_json_error() {
    let dir = unique_temp_dir("eq_report_malformed");
    fs::create_dir_all(&dir).expect("failed to create temp dir");

    let path = dir.join("report.json");
    fs::write(&path, "{ not json").expect("failed to write file");

    let err = load_report(&path).unwrap_err();
    assert!(matches!(err, ReportError::Json(_)));
}
