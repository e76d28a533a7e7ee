//! Configuration loading tests

use std::collections::HashMap;
use std::fs;

use tembo::config::{Config, LoggingSettings, ScopeConfig};
use tembo::page::PageError;
use tempfile::TempDir;

const CONFIG_YML: &str = r#"
# time tokens: https://strftime.org
tembo:
  base_path: ~/tembo
  scopes:
    - name: scratchpad
      example: tembo new scratchpad
      path: "scratchpad/{d:%B_%Y}"
      filename: "{d:%B_%W}"
      extension: md
      template_filename: scratchpad.md.tpl
    - name: knowledge
      example: tembo new knowledge $project $filename
      path: "knowledge/{input0}"
      filename: "{input1}"
      extension: md
  logging:
    level: INFO
    path: ~/tembo/.logs
"#;

#[test]
fn test_parse_config_with_header() {
    let config = Config::from_yaml(CONFIG_YML).unwrap();

    assert_eq!(config.base_path, "~/tembo");
    assert_eq!(config.scopes.len(), 2);
    assert_eq!(
        config.scopes[1],
        ScopeConfig {
            name: "knowledge".to_string(),
            path: "knowledge/{input0}".to_string(),
            filename: "{input1}".to_string(),
            extension: "md".to_string(),
            template_filename: None,
            example: Some("tembo new knowledge $project $filename".to_string()),
        }
    );
    assert_eq!(
        config.logging,
        LoggingSettings {
            level: "INFO".to_string(),
            path: Some("~/tembo/.logs".to_string()),
        }
    );
    assert_eq!(config.logging.filter_directive(), "info");
}

#[test]
fn test_parse_config_without_header() {
    let config =
        Config::from_yaml("base_path: /srv/notes\ntemplate_path: /srv/templates\n").unwrap();

    assert_eq!(config.base_path, "/srv/notes");
    assert_eq!(config.template_dir(), std::path::PathBuf::from("/srv/templates"));
    assert!(config.scopes.is_empty());
    assert_eq!(config.logging, LoggingSettings::default());
}

#[test]
fn test_empty_config_uses_defaults() {
    assert_eq!(Config::from_yaml("").unwrap(), Config::default());
    assert_eq!(Config::from_yaml("tembo:\n").unwrap(), Config::default());
}

#[test]
fn test_default_template_dir() {
    let config = Config::from_yaml("base_path: /srv/notes\n").unwrap();
    assert_eq!(
        config.template_dir(),
        std::path::PathBuf::from("/srv/notes/.templates")
    );
}

#[test]
fn test_missing_mandatory_key() {
    let result = Config::from_yaml("scopes:\n  - name: broken\n    path: x\n    extension: md\n");
    assert!(result.is_err());
}

#[test]
fn test_scope_registry_from_config() {
    let config = Config::from_yaml(CONFIG_YML).unwrap();
    let registry = config.scope_registry().unwrap();

    assert_eq!(
        registry.names().collect::<Vec<_>>(),
        ["scratchpad", "knowledge"]
    );
    assert_eq!(
        registry.example("scratchpad").unwrap(),
        Some("tembo new scratchpad")
    );
    assert_eq!(
        registry.get("scratchpad").unwrap().template_name.as_deref(),
        Some("scratchpad.md.tpl")
    );
}

#[test]
fn test_scope_registry_rejects_duplicate_names() {
    let yaml = r#"
scopes:
  - name: meeting
    path: a
    filename: b
    extension: md
  - name: meeting
    path: c
    filename: d
    extension: md
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert!(matches!(
        config.scope_registry(),
        Err(PageError::InvalidScope { .. })
    ));
}

#[test]
fn test_env_overrides() {
    let mut config = Config::from_yaml(CONFIG_YML).unwrap();
    let env = HashMap::from([
        ("TEMBO_BASE_PATH", "/tmp/tembo"),
        ("TEMBO_LOGGING_LEVEL", "debug"),
    ]);

    config.apply_env_overrides(|key| env.get(key).map(|v| v.to_string()));

    assert_eq!(config.base_path, "/tmp/tembo");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.path.as_deref(), Some("~/tembo/.logs"));
    assert_eq!(config.template_path, None);
}

#[test]
fn test_from_file() {
    let dir = TempDir::new().unwrap();
    let path = Config::config_path(dir.path());
    fs::write(&path, CONFIG_YML).unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.scopes.len(), 2);
}

#[test]
fn test_from_file_invalid_yaml() {
    let dir = TempDir::new().unwrap();
    let path = Config::config_path(dir.path());
    fs::write(&path, "scopes: [unclosed").unwrap();

    let err = Config::from_file(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to load config file"));
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load(&dir.path().join("config.yml")).unwrap();
    assert!(config.scopes.is_empty());
}
