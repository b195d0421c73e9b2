//! Tests for the logging configuration and redaction behavior.

use std::io;

use tracing::level_filters::LevelFilter;

use epistats_cli::logging::{
    LogConfig, REDACTED_VALUE, init_logging_with_writer, log_data_enabled, redact_value,
};

#[test]
fn verbosity_maps_to_levels() {
    assert_eq!(LogConfig::from_verbosity(0).level_filter, LevelFilter::INFO);
    assert_eq!(LogConfig::from_verbosity(1).level_filter, LevelFilter::DEBUG);
    assert_eq!(LogConfig::from_verbosity(2).level_filter, LevelFilter::TRACE);
    assert_eq!(LogConfig::from_verbosity(9).level_filter, LevelFilter::TRACE);
}

#[test]
fn person_level_values_are_redacted_until_enabled() {
    // Redaction is the default; initializing with log_data flips it. Both
    // checks run in one test because the subscriber can only be installed
    // once per process.
    assert!(!log_data_enabled());
    assert_eq!(redact_value("Amara CONTEH"), REDACTED_VALUE);

    let config = LogConfig {
        log_data: true,
        ..LogConfig::default()
    };
    init_logging_with_writer(&config, io::sink);
    assert!(log_data_enabled());
    assert_eq!(redact_value("Amara CONTEH"), "Amara CONTEH");
}
