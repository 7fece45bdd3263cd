/*!
 * Tests for application configuration
 */

use subskip::app_config::{Config, LogLevel, SCREENSHOT_MAX_HEIGHT};

/// Test the defaults-only constructor
#[test]
fn test_config_withScreenshotTime_shouldDefaultEverythingElse() {
    let config = Config::with_screenshot_time(83.5);

    assert_eq!(config.screenshot_time, 83.5);
    assert_eq!(config.subs_offset, 0.0);
    assert_eq!(config.margin, 0.0);
    assert!(config.service_offsets.is_empty());
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test the fixed screenshot resize bound
#[test]
fn test_screenshot_max_height_shouldBe240() {
    assert_eq!(SCREENSHOT_MAX_HEIGHT, 240);
}

/// Test log level conversion to the log crate's filter
#[test]
fn test_log_level_conversion_shouldMapAllLevels() {
    assert_eq!(log::LevelFilter::from(LogLevel::Error), log::LevelFilter::Error);
    assert_eq!(log::LevelFilter::from(LogLevel::Warn), log::LevelFilter::Warn);
    assert_eq!(log::LevelFilter::from(LogLevel::Info), log::LevelFilter::Info);
    assert_eq!(log::LevelFilter::from(LogLevel::Debug), log::LevelFilter::Debug);
    assert_eq!(log::LevelFilter::from(LogLevel::Trace), log::LevelFilter::Trace);
}

/// Test configuration serialization round-trip
#[test]
fn test_config_serde_withFullConfig_shouldRoundTrip() {
    let json = r#"{
        "subs_offset": 1.5,
        "margin": 0.5,
        "service_offsets": {"google": 0.2},
        "screenshot_time": 83.5,
        "log_level": "debug"
    }"#;

    let config: Config = serde_json::from_str(json).unwrap();
    assert_eq!(config.subs_offset, 1.5);
    assert_eq!(config.margin, 0.5);
    assert_eq!(config.service_offsets.len(), 1);
    assert_eq!(config.log_level, LogLevel::Debug);

    let serialized = serde_json::to_string(&config).unwrap();
    let reparsed: Config = serde_json::from_str(&serialized).unwrap();
    assert_eq!(reparsed.screenshot_time, config.screenshot_time);
    assert_eq!(reparsed.service_offsets, config.service_offsets);
}

/// Test omitted fields fall back to defaults
#[test]
fn test_config_serde_withMinimalConfig_shouldApplyDefaults() {
    let config: Config = serde_json::from_str(r#"{"screenshot_time": 10.0}"#).unwrap();

    assert_eq!(config.subs_offset, 0.0);
    assert_eq!(config.margin, 0.0);
    assert!(config.service_offsets.is_empty());
    assert_eq!(config.log_level, LogLevel::Info);
}
