use std::fmt;

use serde::{Deserialize, Serialize};

use super::filter::SkipFilter;
use super::offsets::ServiceOffsets;
use super::screenshot::SkipScreenshot;

/// The complete VideoSkip output document.
///
/// Filter order is insertion order and is semantically significant: it
/// becomes the filter order of the serialized document, so callers must
/// supply filters in subtitle-chronological order.
///
/// The serialized layout is the external contract with the playback
/// extension, four sections separated by one blank line each:
///
/// 1. screenshot timestamp and description (two lines)
/// 2. the filter blocks, themselves blank-line separated
/// 3. the service offset table as a one-line JSON object
/// 4. the screenshot payload data URL, the final line of the document
///
/// An empty filter list leaves section 2 empty, producing a double blank
/// line; the playback extension accepts that shape and it is not
/// special-cased.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkipDocument {
    /// Reference screenshot for clock synchronization
    pub screenshot: SkipScreenshot,

    /// Content filters, in subtitle-chronological order
    pub filters: Vec<SkipFilter>,

    /// Per-service playback offsets
    pub service_offsets: ServiceOffsets,
}

impl fmt::Display for SkipDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filters = self
            .filters
            .iter()
            .map(|filter| filter.to_string())
            .collect::<Vec<_>>()
            .join("\n\n");

        write!(
            f,
            "{}\n\n{}\n\n{}\n\n{}",
            self.screenshot,
            filters,
            self.service_offsets.to_json(),
            self.screenshot.image_data_url
        )
    }
}
