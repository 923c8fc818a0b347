// Integration tests for logging
// Note: the subscriber is global, so this file holds a single test.

use pie::infrastructure::logging::{LogConfig, LogFormat, LoggerImpl, RotationPolicy};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_file_logging_writes_json_lines() {
    let temp_dir = TempDir::new().unwrap();

    let config = LogConfig {
        level: "debug".to_string(),
        format: LogFormat::Json,
        log_dir: Some(temp_dir.path().to_path_buf()),
        rotation: RotationPolicy::Never,
    };

    let logger = temp_env::with_var_unset("RUST_LOG", || LoggerImpl::init(&config)).unwrap();

    tracing::info!(project = "github:acme/widgets", issues = 3, "GitHub issue load finished");

    // A second subscriber cannot be installed.
    assert!(LoggerImpl::init(&config).is_err());

    // Dropping the guard flushes the non-blocking writer.
    drop(logger);

    let contents = fs::read_to_string(temp_dir.path().join("pie.log")).unwrap();
    let line = contents
        .lines()
        .find(|line| line.contains("GitHub issue load finished"))
        .expect("log line should be written");

    let value: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(value["level"], "INFO");
    assert_eq!(value["fields"]["project"], "github:acme/widgets");
    assert_eq!(value["fields"]["issues"], 3);
}
