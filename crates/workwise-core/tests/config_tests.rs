use std::io::Write;
use std::time::Duration;
use workwise_core::{ConfigError, WorkwiseConfig};

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "suggestion_delay_ms = 250\nnotice_duration_ms = 1000\ndefault_log_filter = \"workwise_core=debug\""
    )
    .unwrap();

    let config = WorkwiseConfig::load(file.path()).unwrap();
    assert_eq!(config.suggestion_delay(), Duration::from_millis(250));
    assert_eq!(config.notice_duration(), Duration::from_secs(1));
    assert_eq!(config.default_log_filter, "workwise_core=debug");
}

#[test]
fn test_empty_file_uses_defaults() {
    let file = tempfile::NamedTempFile::new().unwrap();
    assert_eq!(WorkwiseConfig::load(file.path()).unwrap(), WorkwiseConfig::new());
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = WorkwiseConfig::load(&path).unwrap_err();
    assert!(matches!(&err, ConfigError::Read { path: p, .. } if p == &path));
    assert!(err.to_string().contains("absent.toml"));
}
