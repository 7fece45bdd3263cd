/*!
 * The VideoSkip document model and its text serialization.
 *
 * A VideoSkip document bundles everything the browser extension needs to
 * apply content filters to a stream: a reference screenshot for
 * synchronization, the ordered list of time-ranged filters, and a table of
 * per-service playback offsets. It is split into several submodules:
 *
 * - `timecode`: Signed duration type and its text rendering
 * - `filter`: A single time-ranged content filter
 * - `screenshot`: Screenshot synchronization block
 * - `offsets`: Per-service offset table
 * - `document`: The complete output document
 */

// Re-export main types for easier usage
pub use self::document::SkipDocument;
pub use self::filter::{FilterAction, Severity, SkipFilter};
pub use self::offsets::ServiceOffsets;
pub use self::screenshot::SkipScreenshot;
pub use self::timecode::Timecode;

// Submodules
pub mod document;
pub mod filter;
pub mod offsets;
pub mod screenshot;
pub mod timecode;
