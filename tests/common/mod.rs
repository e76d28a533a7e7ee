//! Shared test utilities for page creation tests

use std::fs;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use tembo::ScopeDefinition;
use tempfile::TempDir;

/// Sunday 2021-11-21, midnight
pub fn reference_date() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2021, 11, 21)
        .expect("valid date")
        .and_hms_opt(0, 0, 0)
        .expect("valid time")
}

pub fn inputs(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn meeting_scope() -> ScopeDefinition {
    ScopeDefinition::new(
        "meeting",
        "meetings/{d:%B_%y}",
        "{d:%a_%d_%m_%y}-{input0}",
        "md",
        Some("meeting.md.tpl".to_string()),
        Some("tembo new meeting $meeting_title".to_string()),
    )
    .expect("valid meeting scope")
}

/// Creates a base directory with a `.templates` directory holding `templates`
pub fn create_base_dir(templates: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let template_dir = temp_dir.path().join(".templates");
    fs::create_dir_all(&template_dir).expect("Failed to create template dir");

    for (name, body) in templates {
        fs::write(template_dir.join(name), body).expect("Failed to write template");
    }

    temp_dir
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("Failed to read page")
}
