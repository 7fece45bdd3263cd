use std::fmt;

use serde::{Deserialize, Serialize};

use super::timecode::Timecode;

/// Screenshot block used by the playback extension to synchronize its clock
/// with the streaming service.
///
/// Pure value object: the image is an already-encoded base64 data URL and
/// carries no behavior here. Its text rendering covers only the timestamp
/// and description lines; the payload is appended separately at the very end
/// of the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkipScreenshot {
    /// Base64 data URL of the encoded image, e.g. `data:image/jpeg;base64,...`
    pub image_data_url: String,

    /// Timestamp the screenshot was taken at
    pub timestamp: Timecode,

    /// Any human-readable text
    pub description: String,
}

impl fmt::Display for SkipScreenshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.timestamp, self.description)
    }
}
