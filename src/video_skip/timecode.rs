use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

const MICROS_PER_MILLI: i64 = 1_000;
const MICROS_PER_SECOND: i64 = 1_000_000;
const MICROS_PER_MINUTE: i64 = 60 * MICROS_PER_SECOND;
const MICROS_PER_HOUR: i64 = 60 * MICROS_PER_MINUTE;

/// A signed duration with microsecond resolution.
///
/// Movie timestamps are durations, not wall-clock times: a filter start can
/// exceed 24 hours and, after offset and margin arithmetic, can go negative.
/// Both are representable and both serialize as-is.
///
/// The text rendering is `H:MM:SS` with a six-digit fractional part appended
/// only when the microsecond remainder is nonzero, e.g. `0:00:10.500000` or
/// `1:02:03`. Negative values are prefixed with `-`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timecode {
    micros: i64,
}

impl Timecode {
    /// Create a timecode from a microsecond count - used by tests
    #[allow(dead_code)]
    pub fn from_micros(micros: i64) -> Self {
        Timecode { micros }
    }

    /// Create a timecode from a millisecond count
    pub fn from_millis(millis: i64) -> Self {
        Timecode {
            micros: millis.saturating_mul(MICROS_PER_MILLI),
        }
    }

    /// Create a timecode from a decimal number of seconds, rounded to the
    /// nearest microsecond
    pub fn from_secs_f64(seconds: f64) -> Self {
        Timecode {
            micros: (seconds * MICROS_PER_SECOND as f64).round() as i64,
        }
    }

    /// Total duration in microseconds
    #[allow(dead_code)]
    pub fn as_micros(&self) -> i64 {
        self.micros
    }

    /// Total duration as a decimal number of seconds - used by tests and
    /// external consumers
    #[allow(dead_code)]
    pub fn as_secs_f64(&self) -> f64 {
        self.micros as f64 / MICROS_PER_SECOND as f64
    }
}

impl Add for Timecode {
    type Output = Timecode;

    fn add(self, rhs: Timecode) -> Timecode {
        Timecode {
            micros: self.micros.saturating_add(rhs.micros),
        }
    }
}

impl Sub for Timecode {
    type Output = Timecode;

    fn sub(self, rhs: Timecode) -> Timecode {
        Timecode {
            micros: self.micros.saturating_sub(rhs.micros),
        }
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.micros < 0 { "-" } else { "" };
        let total = self.micros.unsigned_abs();

        let hours = total / MICROS_PER_HOUR as u64;
        let minutes = (total % MICROS_PER_HOUR as u64) / MICROS_PER_MINUTE as u64;
        let seconds = (total % MICROS_PER_MINUTE as u64) / MICROS_PER_SECOND as u64;
        let micros = total % MICROS_PER_SECOND as u64;

        if micros == 0 {
            write!(f, "{}{}:{:02}:{:02}", sign, hours, minutes, seconds)
        } else {
            write!(f, "{}{}:{:02}:{:02}.{:06}", sign, hours, minutes, seconds, micros)
        }
    }
}
