use crate::predicates::SubtitlePredicate;
use crate::subtitle_processor::SubtitleEntry;
use crate::video_skip::{FilterAction, SkipFilter, Timecode};

// @module: Deriving content filters from subtitle entries

/// Derives time-ranged content filters from subtitle entries.
///
/// Each entry is classified by the predicate; matches become one filter
/// each with the global offset applied to both ends and the margin widening
/// the range symmetrically:
///
/// ```text
/// start = entry.start + offset - margin
/// end   = entry.end   + offset + margin
/// ```
///
/// Entry order is preserved, so chronological input yields a chronological
/// filter list. Overlapping or adjacent ranges after margin expansion are
/// emitted independently, never merged. A negative start from a large
/// margin passes through unmodified.
#[derive(Debug, Clone)]
pub struct FilterDeriver<P> {
    /// Global offset applied to both ends of every range
    offset: Timecode,

    /// Symmetric widening applied around every range
    margin: Timecode,

    /// Predicate deciding which entries produce a filter
    predicate: P,
}

impl<P: SubtitlePredicate> FilterDeriver<P> {
    /// Create a deriver with the given offset, margin and predicate
    pub fn new(offset: Timecode, margin: Timecode, predicate: P) -> Self {
        FilterDeriver {
            offset,
            margin,
            predicate,
        }
    }

    /// Lazily derive filters from the given entries.
    ///
    /// The returned iterator borrows the deriver and the entries; calling
    /// `derive` again restarts from the beginning.
    pub fn derive<'a>(
        &'a self,
        entries: &'a [SubtitleEntry],
    ) -> impl Iterator<Item = SkipFilter> + 'a {
        entries.iter().filter_map(move |entry| {
            self.predicate
                .classify(&entry.text_without_tags())
                .map(|matched| SkipFilter {
                    start: entry.start_timecode() + self.offset - self.margin,
                    end: entry.end_timecode() + self.offset + self.margin,
                    category: matched.category,
                    severity: matched.severity,
                    action: FilterAction::Audio,
                    description: matched.description,
                })
        })
    }
}
