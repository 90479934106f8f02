//! CLI integration tests against real INI files on disk.

mod common;

use common::*;
use std::path::PathBuf;
use typedconf::cli::{execute, Command};
use typedconf::domain::error::ConfigError;

fn get(config: PathBuf, section: &str, key: &str, show_type: bool) -> Vec<String> {
    execute(&Command::Get {
        config,
        section: section.into(),
        key: key.into(),
        show_type,
    })
    .unwrap()
}

#[test]
fn get_prints_coerced_value() {
    let file = write_temp_ini(MAIN_INI);
    let path = file.path().to_path_buf();
    assert_eq!(get(path.clone(), "main", "retries", false), vec!["3"]);
    assert_eq!(get(path.clone(), "main", "enabled", true), vec!["bool: true"]);
    assert_eq!(get(path, "main", "log_level", true), vec!["string: DEBUG"]);
}

#[test]
fn get_missing_key_prints_empty() {
    let file = write_temp_ini(MAIN_INI);
    assert_eq!(get(file.path().to_path_buf(), "main", "nope", false), vec![""]);
}

#[test]
fn sections_lists_headers() {
    let file = write_temp_ini(FIREWALL_INI);
    let lines = execute(&Command::Sections {
        config: file.path().to_path_buf(),
    })
    .unwrap();
    assert_eq!(lines, vec!["LOG", "IPV6", "ACCEPTANCE", "UWSGI"]);
}

#[test]
fn set_persists_value() {
    let file = write_temp_ini(MAIN_INI);
    let path = file.path().to_path_buf();
    let lines = execute(&Command::Set {
        config: path.clone(),
        section: "main".into(),
        key: "retries".into(),
        value: "7".into(),
    })
    .unwrap();
    assert!(lines.is_empty());
    assert_eq!(get(path, "main", "retries", true), vec!["int: 7"]);
}

#[test]
fn set_unknown_section_fails() {
    let file = write_temp_ini(MAIN_INI);
    let result = execute(&Command::Set {
        config: file.path().to_path_buf(),
        section: "other".into(),
        key: "retries".into(),
        value: "7".into(),
    });
    assert!(matches!(result, Err(ConfigError::UnknownSection { .. })));
}

#[test]
fn sections_on_missing_file_is_empty() {
    let lines = execute(&Command::Sections {
        config: PathBuf::from("/nonexistent/path/config.ini"),
    })
    .unwrap();
    assert!(lines.is_empty());
}
