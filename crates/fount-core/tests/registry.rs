use std::path::PathBuf;

use fount_core::registry::{SourceConfig, SourceRegistry, render_permanent_add, render_table};
use fount_core::source::PathSpec;

const SOURCES_YAML: &str = r#"
airports:
    key_fields: iata_code
    local: true
    paths:
        - airports.csv
        - file: airports.zip
          extract: airports.csv
        - https://example.com/airports.csv
ports:
    key_fields: [name, country]
    local: false
    delimiter: ";"
    paths: ports.csv
stations:
"#;

fn write_registry(yaml: &str) -> (tempfile::TempDir, SourceRegistry) {
    let temp = tempfile::TempDir::new().expect("Failed to create temp dir");
    let conf_path = temp.path().join("sources.yaml");
    std::fs::write(&conf_path, yaml).expect("Should write configuration");

    let registry =
        SourceRegistry::load(&conf_path, temp.path()).expect("Configuration should parse");
    (temp, registry)
}

#[test]
fn loads_sources_in_name_order() {
    let (_temp, registry) = write_registry(SOURCES_YAML);

    assert_eq!(registry.len(), 3);
    assert!(!registry.is_empty());
    let names: Vec<&str> = registry.names().collect();
    assert_eq!(names, vec!["airports", "ports", "stations"]);
}

#[test]
fn null_source_is_listed_but_unconfigured() {
    let (_temp, registry) = write_registry(SOURCES_YAML);

    assert!(registry.contains("stations"));
    assert!(registry.get("stations").is_none());
    assert!(registry.paths("stations").is_none());
}

#[test]
fn unknown_options_are_kept_verbatim() {
    let (_temp, registry) = write_registry(SOURCES_YAML);

    let ports = registry.get("ports").expect("ports should be configured");
    assert_eq!(
        ports.extra.get("delimiter"),
        Some(&serde_yaml::Value::String(";".to_string()))
    );
}

#[test]
fn local_source_paths_are_anchored_to_sources_dir() {
    let (temp, registry) = write_registry(SOURCES_YAML);
    let anchor = temp.path().canonicalize().expect("Should canonicalize sources dir");

    let specs = registry.paths("airports").expect("airports should have paths");

    assert_eq!(
        specs,
        vec![
            PathSpec::new(anchor.join("airports.csv").to_string_lossy()),
            PathSpec::archive(anchor.join("airports.zip").to_string_lossy(), "airports.csv"),
            PathSpec::new("https://example.com/airports.csv"),
        ]
    );
}

#[test]
fn non_local_source_paths_stay_relative() {
    let (_temp, registry) = write_registry(SOURCES_YAML);

    let specs = registry.paths("ports").expect("ports should have paths");

    assert_eq!(specs, vec![PathSpec::new("ports.csv")]);
}

#[test]
fn add_refuses_to_overwrite() {
    let (_temp, mut registry) = write_registry(SOURCES_YAML);

    registry
        .add("countries", SourceConfig::default())
        .expect("New source should be added");
    assert!(registry.contains("countries"));

    let result = registry.add("airports", SourceConfig::default());
    assert!(result.is_err());
}

#[test]
fn drop_removes_a_source() {
    let (_temp, mut registry) = write_registry(SOURCES_YAML);

    registry.drop("ports").expect("Existing source should drop");
    assert!(!registry.contains("ports"));

    let result = registry.drop("ports");
    assert!(result.is_err());
}

#[test]
fn update_sets_typed_and_free_form_options() {
    let (_temp, mut registry) = write_registry(SOURCES_YAML);

    registry
        .update("ports", "local", serde_yaml::Value::Bool(true))
        .expect("local should update");
    registry
        .update(
            "ports",
            "headers",
            serde_yaml::Value::Bool(false),
        )
        .expect("free-form option should update");

    let ports = registry.get("ports").expect("ports should be configured");
    assert_eq!(ports.local, Some(true));
    assert_eq!(ports.extra.get("headers"), Some(&serde_yaml::Value::Bool(false)));

    let result = registry.update("absent", "local", serde_yaml::Value::Bool(true));
    assert!(result.is_err());
}

#[test]
fn update_gives_null_sources_a_default_config() {
    let (_temp, mut registry) = write_registry(SOURCES_YAML);

    registry
        .update(
            "stations",
            "paths",
            serde_yaml::Value::String("stations.csv".to_string()),
        )
        .expect("null source should gain a configuration");

    let specs = registry.paths("stations").expect("stations should now have paths");
    assert_eq!(specs, vec![PathSpec::new("stations.csv")]);
}

#[test]
fn table_lists_defaults_and_numbered_failovers() {
    let (_temp, registry) = write_registry(SOURCES_YAML);

    let table = render_table(&registry);

    assert!(table.contains("NAME"));
    assert!(table.contains("PATHS (DEFAULT + FAILOVERS)"));
    assert!(table.contains("[sources.yaml]"));
    assert!(table.contains("airports"));
    assert!(table.contains("iata_code"));
    assert!(table.contains("name+country"));
    assert!(table.contains(".) airports.csv"));
    assert!(table.contains("1) airports.zip -> airports.csv"));
    assert!(table.contains("2) https://example.com/airports.csv"));
    // The null source renders with placeholders.
    assert!(table.contains("stations"));
    assert!(table.contains("<none>"));
}

#[test]
fn permanent_add_snippet_carries_placeholders() {
    let registry = SourceRegistry::empty(PathBuf::from("/etc/fount/sources.yaml"), "/data");
    let config = SourceConfig::default();

    let snippet = render_permanent_add(&registry, &config);

    assert!(snippet.contains("/etc/fount/sources.yaml"));
    assert!(snippet.contains("<INSERT_ANY_NAME>"));
    assert!(snippet.contains("<INSERT_ABSOLUTE_FILE_PATH>"));
    assert!(snippet.contains("local: false"));
}
