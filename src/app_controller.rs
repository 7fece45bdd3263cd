use std::path::Path;

use anyhow::{Context, Result, anyhow};
use log::{debug, info};

use crate::app_config::{Config, SCREENSHOT_MAX_HEIGHT};
use crate::file_utils::FileManager;
use crate::filter_deriver::FilterDeriver;
use crate::image_utils;
use crate::predicates::BlasphemyDetector;
use crate::subtitle_processor::SubtitleCollection;
use crate::video_skip::{SkipDocument, SkipFilter, SkipScreenshot, Timecode};

// @module: Main application controller

/// Description embedded in the screenshot block of every document
const SCREENSHOT_DESCRIPTION: &str = "screenshot";

/// Orchestrates one invocation of the pipeline: parse subtitles, derive
/// filters, encode the screenshot and write the serialized document.
pub struct Controller {
    config: Config,
}

impl Controller {
    /// Create a controller with the given configuration
    pub fn with_config(config: Config) -> Self {
        Controller { config }
    }

    /// Run the pipeline end to end, writing the VideoSkip document to
    /// `output_path`
    pub fn run(
        &self,
        subtitles_path: &Path,
        screenshot_path: &Path,
        output_path: &Path,
    ) -> Result<()> {
        if !FileManager::file_exists(subtitles_path) {
            return Err(anyhow!("Subtitles file does not exist: {:?}", subtitles_path));
        }
        if !FileManager::file_exists(screenshot_path) {
            return Err(anyhow!("Screenshot file does not exist: {:?}", screenshot_path));
        }

        let content = FileManager::read_to_string(subtitles_path)?;
        let collection =
            SubtitleCollection::from_srt_string(&content, subtitles_path.to_path_buf())
                .with_context(|| format!("Failed to parse subtitles: {:?}", subtitles_path))?;
        debug!("{}", collection);
        info!("Parsed {} subtitle entries", collection.entries.len());

        let filters = self.derive_filters(&collection);
        info!("Derived {} content filters", filters.len());

        let image_bytes = FileManager::read_bytes(screenshot_path)?;
        let image_data_url =
            image_utils::screenshot_data_url(&image_bytes, None, Some(SCREENSHOT_MAX_HEIGHT))
                .with_context(|| format!("Failed to process screenshot: {:?}", screenshot_path))?;

        let document = SkipDocument {
            screenshot: SkipScreenshot {
                image_data_url,
                timestamp: Timecode::from_secs_f64(self.config.screenshot_time),
                description: SCREENSHOT_DESCRIPTION.to_string(),
            },
            filters,
            service_offsets: self.config.service_offsets.clone(),
        };

        FileManager::write_to_file(output_path, &document.to_string())?;
        info!("Wrote VideoSkip document to {:?}", output_path);

        Ok(())
    }

    /// Derive the filter list from the parsed subtitles, in chronological
    /// order
    fn derive_filters(&self, collection: &SubtitleCollection) -> Vec<SkipFilter> {
        let deriver = FilterDeriver::new(
            Timecode::from_secs_f64(self.config.subs_offset),
            Timecode::from_secs_f64(self.config.margin),
            BlasphemyDetector,
        );

        deriver.derive(&collection.entries).collect()
    }
}
