use serde_json::{json, Value};
use skip_trace::app;
use skip_trace::config::settings::Settings;
use skip_trace::PipelineError;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

fn settings_in(dir: &Path, input: &str) -> Settings {
    let input_path = dir.join("input.json");
    fs::write(&input_path, input).unwrap();
    let mut settings = Settings::new(input_path, dir.join("output").join("results.json"));
    settings.max_workers = 2;
    settings
}

fn read_output(settings: &Settings) -> Value {
    serde_json::from_str(&fs::read_to_string(&settings.output_file).unwrap()).unwrap()
}

#[tokio::test]
async fn full_run_writes_all_resolved_records() {
    let dir = tempfile::tempdir().unwrap();
    let settings = settings_in(
        dir.path(),
        r#"[
            {"search_option": "Name Search", "input_value": "James E Whitsitt"},
            {"Search Option": "Phone Search", "Input Given": "305-555-0199"},
            {"search_option": "Name Search"}
        ]"#,
    );

    let summary = app::run(&settings).await.unwrap();

    assert_eq!(summary.succeeded, 2);
    assert_eq!(summary.failed, 0);

    let output = read_output(&settings);
    let results = output.as_array().unwrap();
    assert_eq!(results.len(), 2);

    let names: HashSet<&str> = results
        .iter()
        .filter_map(|r| r["First Name"].as_str())
        .collect();
    assert_eq!(names, HashSet::from(["James", "Sarah"]));

    let james = results
        .iter()
        .find(|r| r["First Name"] == json!("James"))
        .unwrap();
    assert_eq!(james["Search Option"], json!("Name Search"));
    assert_eq!(
        james["Relatives"],
        json!([
            {"Name": "Janice Whitsitt", "Age": "79"},
            {"Name": "Goldie Whitsitt", "Age": "75"}
        ])
    );
    assert_eq!(james["Phone-1 Provider"], json!("New Cingular Wireless PCS LLC - IL"));

    let sarah = results
        .iter()
        .find(|r| r["First Name"] == json!("Sarah"))
        .unwrap();
    assert_eq!(sarah["Input Given"], json!("305-555-0199"));
    assert_eq!(sarah["Email-2"], json!("s.carter.work@example.org"));
    assert_eq!(sarah["Phone-2"], json!("(305) 555-0177"));
}

#[tokio::test]
async fn partial_failure_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let settings = settings_in(
        dir.path(),
        r#"[
            {"search_option": "Name Search", "input_value": "Sarah L Carter"},
            {"search_option": "Name Search", "input_value": "Unknown Person"}
        ]"#,
    );

    let summary = app::run(&settings).await.unwrap();

    assert_eq!(summary.succeeded, 1);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.total(), 2);
    assert_eq!(summary.failures[0].input_value, "Unknown Person");
    assert_eq!(read_output(&settings).as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn empty_query_list_writes_empty_array() {
    let dir = tempfile::tempdir().unwrap();
    let settings = settings_in(dir.path(), "[]");

    let summary = app::run(&settings).await.unwrap();

    assert_eq!(summary.total(), 0);
    assert_eq!(read_output(&settings), json!([]));
}

#[tokio::test]
async fn empty_query_list_skips_record_store() {
    let dir = tempfile::tempdir().unwrap();
    let mut settings = settings_in(dir.path(), "[]");
    settings.records_file = Some(dir.path().join("missing.json"));

    let summary = app::run(&settings).await.unwrap();

    assert_eq!(summary.total(), 0);
    assert_eq!(read_output(&settings), json!([]));
}

#[tokio::test]
async fn malformed_input_aborts_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let settings = settings_in(dir.path(), r#"{"search_option": "Name Search"}"#);

    let err = app::run(&settings).await.unwrap_err();

    assert!(matches!(err, PipelineError::InputParse(_)));
    assert!(!settings.output_file.exists());
}

#[tokio::test]
async fn custom_records_file_replaces_reference_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let records_path = dir.path().join("records.json");
    fs::write(
        &records_path,
        r#"[{
            "name_key": "Ada Lovelace",
            "phone_keys": ["555 0100"],
            "first_name": "Ada",
            "last_name": "Lovelace",
            "relatives": [
                {"Name": "byron  lovelace", "Age": "x"},
                {"Name": "Anne Lovelace", "Age": "60"},
                {"Name": "Byron Lovelace", "Age": "x"},
                {"Name": "", "Age": "1"}
            ]
        }]"#,
    )
    .unwrap();

    let mut settings = settings_in(
        dir.path(),
        r#"[
            {"search_option": "Phone Search", "input_value": "5550100"},
            {"search_option": "Name Search", "input_value": "James E Whitsitt"}
        ]"#,
    );
    settings.records_file = Some(records_path);

    let summary = app::run(&settings).await.unwrap();

    assert_eq!(summary.succeeded, 1);
    assert_eq!(summary.failed, 1);
    let output = read_output(&settings);
    assert_eq!(output[0]["First Name"], json!("Ada"));
    assert_eq!(
        output[0]["Relatives"],
        json!([
            {"Name": "Anne Lovelace", "Age": "60"},
            {"Name": "byron lovelace", "Age": "x"}
        ])
    );
    assert!(output[0].get("Age").is_none());
}

#[tokio::test]
async fn unreadable_records_file_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut settings = settings_in(
        dir.path(),
        r#"[{"search_option": "Name Search", "input_value": "James E Whitsitt"}]"#,
    );
    settings.records_file = Some(dir.path().join("missing.json"));

    let err = app::run(&settings).await.unwrap_err();

    assert!(matches!(err, PipelineError::Config(_)));
    assert!(!settings.output_file.exists());
}
