//! Tests for loading the TOML config.

use std::io::Write;
use timetravel_tui::{Focus, TuiConfig};

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "log_file = \"/tmp/ttt.log\"\nlog_filter = \"debug\"\nshow_hints = false\nstart_focus = \"history\""
    )
    .unwrap();

    let config = TuiConfig::from_file(file.path()).expect("config loads");
    assert_eq!(config.log_file().to_str(), Some("/tmp/ttt.log"));
    assert_eq!(config.log_filter(), "debug");
    assert!(!config.show_hints());
    assert_eq!(config.start_focus(), &Focus::History);
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = TuiConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_no_path_uses_defaults() {
    let config = TuiConfig::load(None).expect("defaults");
    assert_eq!(config, TuiConfig::default());
    assert!(config.show_hints());
}
