use mfit_domain::config::LogConfig;
use mfit_logger::{Logger, LoggerError};
use serial_test::serial;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

// One test binary shares one global subscriber, so only the first init can win.
#[test]
#[serial]
fn config_driven_file_logging_then_second_init_fails() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let config = LogConfig {
        level: "debug".to_owned(),
        directory: Some(log_dir.clone()),
        console: false,
        json: true,
    };
    let logger = Logger::from_config("integration-file-logging", &config)?;
    assert!(logger.writes_files());

    tracing::info!(field = "email", "registration attempt");

    let err = Logger::builder().name("integration-second").init().expect_err("already installed");
    assert!(matches!(err, LoggerError::Subscriber { .. }), "unexpected error: {err}");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(&log_file)?;
    let first = contents.lines().find(|line| line.contains("registration attempt")).expect("record");
    assert!(first.trim_start().starts_with('{'), "json records expected, got {first}");

    Ok(())
}
