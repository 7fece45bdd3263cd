use serde::{Deserialize, Serialize};

use crate::video_skip::ServiceOffsets;

/// Application configuration module
/// This module holds the plain configuration values the CLI layer hands to
/// the pipeline, plus the fixed bounds applied to the screenshot.
/// Fixed resize bound applied to the screenshot before encoding: height is
/// capped at 240 px, width is unbounded
pub const SCREENSHOT_MAX_HEIGHT: u32 = 240;

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Global subtitles offset in seconds, applied to every derived filter.
    /// Use this when the subtitles file does not align perfectly with the
    /// streaming service.
    #[serde(default)]
    pub subs_offset: f64,

    /// Filtering margin in seconds: how long before a matching subtitle to
    /// start filtering and how long to keep filtering afterwards
    #[serde(default)]
    pub margin: f64,

    /// Per-service playback offsets
    #[serde(default)]
    pub service_offsets: ServiceOffsets,

    /// Timestamp of the synchronization screenshot, in seconds
    pub screenshot_time: f64,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Config {
    /// Create a configuration with the given screenshot time and defaults
    /// everywhere else - used by tests and external consumers
    #[allow(dead_code)]
    pub fn with_screenshot_time(screenshot_time: f64) -> Self {
        Config {
            subs_offset: 0.0,
            margin: 0.0,
            service_offsets: ServiceOffsets::new(),
            screenshot_time,
            log_level: LogLevel::default(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}
