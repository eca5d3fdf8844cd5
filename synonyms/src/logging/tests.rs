use crate::config::{LogFormat, LogLevel, LoggingConfig};
use crate::logging::{LogError, level_to_log_level, parse_log_level};

#[test]
fn test_init_file_logging() {
    let temp_dir = tempfile::tempdir().unwrap();
    let log_path = temp_dir.path().join("logs").join("synonyms.log");

    let config = LoggingConfig {
        level: LogLevel::Debug,
        format: LogFormat::Json,
        file: Some(log_path.clone()),
        stdout: false,
    };

    // Either installs the subscriber or finds one already present; both are fine.
    let guard = crate::logging::init(&config).unwrap();
    tracing::info!("file logging initialized");

    if guard.is_some() {
        assert!(log_path.exists());
    }
    drop(guard);

    // Calling again is a no-op once a subscriber exists.
    assert!(crate::logging::init(&LoggingConfig::default()).unwrap().is_none());
}

#[test]
fn test_level_conversion() {
    assert_eq!(parse_log_level("trace").unwrap(), LogLevel::Trace);
    assert_eq!(parse_log_level("Debug").unwrap(), LogLevel::Debug);
    assert_eq!(parse_log_level("info").unwrap(), LogLevel::Info);
    assert_eq!(parse_log_level("warn").unwrap(), LogLevel::Warn);
    assert_eq!(parse_log_level("error").unwrap(), LogLevel::Error);
    assert!(matches!(
        parse_log_level("invalid"),
        Err(LogError::InvalidLogLevel(_))
    ));

    assert_eq!(level_to_log_level(tracing::Level::TRACE), LogLevel::Trace);
    assert_eq!(level_to_log_level(tracing::Level::DEBUG), LogLevel::Debug);
    assert_eq!(level_to_log_level(tracing::Level::INFO), LogLevel::Info);
    assert_eq!(level_to_log_level(tracing::Level::WARN), LogLevel::Warn);
    assert_eq!(level_to_log_level(tracing::Level::ERROR), LogLevel::Error);
}
