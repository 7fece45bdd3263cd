use std::fmt;

use serde::{Deserialize, Serialize};

use super::timecode::Timecode;

/// Severity of filtered content, on the three-step VideoSkip scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// Mild content (1)
    Mild,
    /// Moderate content (2)
    Moderate,
    /// Severe content (3)
    Severe,
}

impl Severity {
    /// Numeric severity as used in the VideoSkip format
    pub fn as_u8(self) -> u8 {
        match self {
            Self::Mild => 1,
            Self::Moderate => 2,
            Self::Severe => 3,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// What the playback extension should do over the filtered range.
///
/// Muting the audio track is the only action currently emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterAction {
    /// Mute the audio track
    #[default]
    Audio,
}

impl fmt::Display for FilterAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Audio => write!(f, "audio"),
        }
    }
}

/// A single time-ranged content filter.
///
/// Immutable once created; `start <= end` is expected but deliberately not
/// enforced here, a margin wider than half the gap between consecutive
/// entries can invert a short range and the inverted range is emitted as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkipFilter {
    /// Where to start filtering
    pub start: Timecode,

    /// Where to end filtering
    pub end: Timecode,

    /// E.g. "profanity"
    pub category: String,

    /// Content severity
    pub severity: Severity,

    /// What to do over the range
    pub action: FilterAction,

    /// Any human-readable text
    pub description: String,
}

impl fmt::Display for SkipFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} --> {}\n{} {} {} ({})",
            self.start, self.end, self.category, self.action, self.severity, self.description
        )
    }
}
