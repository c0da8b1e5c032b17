//! Tests for loading configuration files.

use std::io::Write;
use std::path::{Path, PathBuf};
use tictactoe::Config;
use tictactoe_rules::Mark;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_from_file() {
    let file = write_config(
        r##"
log_file = "game.log"
log_filter = "debug"
mouse = false

[symbols]
x = "#"
o = "@"
"##,
    );

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.log_file(), Path::new("game.log"));
    assert_eq!(config.log_filter(), "debug");
    assert!(!*config.mouse());
    assert_eq!(config.symbols().symbol(Mark::X), "#");
    assert_eq!(config.symbols().symbol(Mark::O), "@");
}

#[test]
fn test_explicit_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(Some(dir.path().join("missing.toml").as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_parse_error_reported() {
    let file = write_config("mouse = \"sometimes\"\n");
    let err = Config::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_blank_symbol_rejected() {
    let file = write_config("[symbols]\nx = \" \"\n");
    assert!(Config::from_file(file.path()).is_err());
}

#[test]
fn test_log_file_override() {
    let config = Config::default().with_log_file(PathBuf::from("other.log"));
    assert_eq!(config.log_file(), Path::new("other.log"));
}
