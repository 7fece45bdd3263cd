/*!
 * # subskip - Subtitle-driven content filter generator
 *
 * A Rust library for deriving VideoSkip content filters from subtitles.
 *
 * ## Features
 *
 * - Parse SRT subtitle files into timed entries
 * - Classify subtitle text with pluggable content predicates
 * - Derive time-ranged audio filters with a global offset and a
 *   symmetric margin
 * - Embed a reference screenshot (scaled, JPEG-encoded, base64 data URL)
 *   for synchronization with the streaming service
 * - Serialize everything into the VideoSkip exchange format
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration values consumed by the pipeline
 * - `subtitle_processor`: Subtitle file handling and processing
 * - `predicates`: Content predicates that classify subtitle text
 * - `filter_deriver`: Turns matching subtitle entries into filters
 * - `video_skip`: The VideoSkip document model and serialization:
 *   - `video_skip::timecode`: Signed duration type and text rendering
 *   - `video_skip::filter`: A single time-ranged content filter
 *   - `video_skip::screenshot`: Screenshot synchronization block
 *   - `video_skip::offsets`: Per-service offset table
 *   - `video_skip::document`: The complete output document
 * - `image_utils`: Screenshot scaling and data URL encoding
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod filter_deriver;
pub mod image_utils;
pub mod predicates;
pub mod subtitle_processor;
pub mod video_skip;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use errors::{AppError, OffsetsError, SubtitleError};
pub use filter_deriver::FilterDeriver;
pub use predicates::{BlasphemyDetector, PredicateMatch, SubtitlePredicate};
pub use subtitle_processor::{SubtitleCollection, SubtitleEntry};
pub use video_skip::{
    FilterAction, ServiceOffsets, Severity, SkipDocument, SkipFilter, SkipScreenshot, Timecode,
};
