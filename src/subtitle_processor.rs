use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::SubtitleError;
use crate::video_skip::Timecode;

// @module: Subtitle processing and manipulation

// @const: SRT timestamp regex
static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{2}):(\d{2}):(\d{2}),(\d{3}) --> (\d{2}):(\d{2}):(\d{2}),(\d{3})").unwrap()
});

// @const: Markup tag regex, e.g. <i>, </font>
static TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

// @struct: Single subtitle entry
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleEntry {
    // @field: Sequence number
    pub seq_num: usize,

    // @field: Start time in ms
    pub start_time_ms: u64,

    // @field: End time in ms
    pub end_time_ms: u64,

    // @field: Subtitle text
    pub text: String,
}

impl SubtitleEntry {
    /// Creates a new subtitle entry - used by tests and external consumers
    #[allow(dead_code)]
    pub fn new(seq_num: usize, start_time_ms: u64, end_time_ms: u64, text: String) -> Self {
        SubtitleEntry {
            seq_num,
            start_time_ms,
            end_time_ms,
            text,
        }
    }

    // @creates: Validated subtitle entry
    // @validates: Time range and non-empty text
    pub fn new_validated(
        seq_num: usize,
        start_time_ms: u64,
        end_time_ms: u64,
        text: String,
    ) -> Result<Self> {
        if end_time_ms <= start_time_ms {
            return Err(SubtitleError::InvalidTimeRange {
                start_ms: start_time_ms,
                end_ms: end_time_ms,
            }
            .into());
        }

        let trimmed_text = text.trim();
        if trimmed_text.is_empty() {
            return Err(SubtitleError::EmptyText(seq_num).into());
        }

        Ok(SubtitleEntry {
            seq_num,
            start_time_ms,
            end_time_ms,
            text: trimmed_text.to_string(),
        })
    }

    /// Parse an SRT timestamp (HH:MM:SS,mmm) to milliseconds - used by tests
    #[allow(dead_code)]
    pub fn parse_timestamp(timestamp: &str) -> Result<u64> {
        let parts: Vec<&str> = timestamp.split(&[':', ',', '.'][..]).collect();

        if parts.len() != 4 {
            return Err(SubtitleError::InvalidTimestamp(timestamp.to_string()).into());
        }

        let hours: u64 = parts[0].parse().context("Failed to parse hours")?;
        let minutes: u64 = parts[1].parse().context("Failed to parse minutes")?;
        let seconds: u64 = parts[2].parse().context("Failed to parse seconds")?;
        let millis: u64 = parts[3].parse().context("Failed to parse milliseconds")?;

        if minutes >= 60 || seconds >= 60 || millis >= 1000 {
            return Err(SubtitleError::InvalidTimestamp(timestamp.to_string()).into());
        }

        Ok(hours * 3_600_000 + minutes * 60_000 + seconds * 1_000 + millis)
    }

    /// Format a timestamp in milliseconds to SRT format (HH:MM:SS,mmm)
    pub fn format_timestamp(ms: u64) -> String {
        let hours = ms / 3_600_000;
        let minutes = (ms % 3_600_000) / 60_000;
        let seconds = (ms % 60_000) / 1_000;
        let millis = ms % 1_000;

        format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
    }

    /// Convert start time to formatted SRT timestamp
    pub fn format_start_time(&self) -> String {
        Self::format_timestamp(self.start_time_ms)
    }

    /// Convert end time to formatted SRT timestamp
    pub fn format_end_time(&self) -> String {
        Self::format_timestamp(self.end_time_ms)
    }

    /// Start time as a signed timecode
    pub fn start_timecode(&self) -> Timecode {
        Timecode::from_millis(self.start_time_ms as i64)
    }

    /// End time as a signed timecode
    pub fn end_timecode(&self) -> Timecode {
        Timecode::from_millis(self.end_time_ms as i64)
    }

    /// Subtitle text with markup tags such as `<i>` and `<font ...>` removed
    pub fn text_without_tags(&self) -> String {
        TAG_REGEX.replace_all(&self.text, "").into_owned()
    }
}

impl fmt::Display for SubtitleEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.seq_num)?;
        writeln!(f, "{} --> {}", self.format_start_time(), self.format_end_time())?;
        writeln!(f, "{}", self.text)?;
        writeln!(f)
    }
}

/// Collection of subtitle entries with source metadata
#[derive(Debug)]
pub struct SubtitleCollection {
    /// Source filename
    pub source_file: PathBuf,

    /// List of subtitle entries, sorted chronologically
    pub entries: Vec<SubtitleEntry>,
}

impl SubtitleCollection {
    /// Create an empty subtitle collection
    pub fn new(source_file: PathBuf) -> Self {
        SubtitleCollection {
            source_file,
            entries: Vec::new(),
        }
    }

    /// Parse SRT content into a collection
    pub fn from_srt_string(content: &str, source_file: PathBuf) -> Result<Self> {
        let entries = Self::parse_srt_string(content)?;
        Ok(SubtitleCollection {
            source_file,
            entries,
        })
    }

    /// Parse SRT format string into subtitle entries.
    ///
    /// Entries with an inverted time range or empty text are skipped with a
    /// warning. The result is sorted by start time and renumbered so the
    /// derived filter list comes out chronological.
    pub fn parse_srt_string(content: &str) -> Result<Vec<SubtitleEntry>> {
        let mut entries = Vec::new();

        // One block per entry: sequence number, timestamp line, text lines
        let mut seq_num: Option<usize> = None;
        let mut times: Option<(u64, u64)> = None;
        let mut text = String::new();
        let mut line_count = 0;

        for line in content.lines() {
            line_count += 1;
            let trimmed = line.trim();

            if trimmed.is_empty() {
                Self::finalize_entry(&mut entries, &mut seq_num, &mut times, &mut text);
                continue;
            }

            // A block starts with a bare sequence number
            if seq_num.is_none() && text.is_empty() {
                if let Ok(num) = trimmed.parse::<usize>() {
                    seq_num = Some(num);
                    continue;
                }
            }

            // Followed by its timestamp line
            if seq_num.is_some() && times.is_none() {
                if let Some(caps) = TIMESTAMP_REGEX.captures(trimmed) {
                    match (
                        Self::parse_timestamp_to_ms(&caps, 1),
                        Self::parse_timestamp_to_ms(&caps, 5),
                    ) {
                        (Ok(start_ms), Ok(end_ms)) => {
                            times = Some((start_ms, end_ms));
                            continue;
                        }
                        _ => {
                            warn!("Invalid timestamp format at line {}: {}", line_count, trimmed);
                        }
                    }
                }
            }

            // Everything else inside a block is subtitle text
            if seq_num.is_some() && times.is_some() {
                if !text.is_empty() {
                    text.push('\n');
                }
                text.push_str(trimmed);
            } else {
                warn!(
                    "Unexpected text at line {} before sequence number or timestamp: {}",
                    line_count, trimmed
                );
            }
        }

        // Final block may not be terminated by a blank line
        Self::finalize_entry(&mut entries, &mut seq_num, &mut times, &mut text);

        if entries.is_empty() {
            warn!("No valid subtitle entries found in content");
            return Err(SubtitleError::NoEntries.into());
        }

        // Sort by start time to ensure correct order
        entries.sort_by_key(|entry| entry.start_time_ms);

        let overlap_count = entries
            .windows(2)
            .filter(|pair| pair[0].end_time_ms > pair[1].start_time_ms)
            .count();
        if overlap_count > 0 {
            warn!("Found {} overlapping subtitle entries", overlap_count);
        }

        // Renumber entries to ensure sequential order
        for (i, entry) in entries.iter_mut().enumerate() {
            entry.seq_num = i + 1;
        }

        Ok(entries)
    }

    /// Push the current block as an entry if it is complete, resetting the
    /// parser state either way
    fn finalize_entry(
        entries: &mut Vec<SubtitleEntry>,
        seq_num: &mut Option<usize>,
        times: &mut Option<(u64, u64)>,
        text: &mut String,
    ) {
        if let (Some(num), Some((start_ms, end_ms))) = (*seq_num, *times) {
            if !text.trim().is_empty() {
                match SubtitleEntry::new_validated(num, start_ms, end_ms, text.trim().to_string()) {
                    Ok(entry) => entries.push(entry),
                    Err(e) => warn!("Skipping invalid subtitle entry {}: {}", num, e),
                }
            } else {
                warn!("Skipping empty subtitle entry {}", num);
            }

            *seq_num = None;
            *times = None;
            text.clear();
        }
    }

    /// Parse timestamp capture groups to milliseconds
    fn parse_timestamp_to_ms(caps: &regex::Captures, start_idx: usize) -> Result<u64> {
        let hours: u64 = caps
            .get(start_idx)
            .map_or(0, |m| m.as_str().parse().unwrap_or(0));
        let minutes: u64 = caps
            .get(start_idx + 1)
            .map_or(0, |m| m.as_str().parse().unwrap_or(0));
        let seconds: u64 = caps
            .get(start_idx + 2)
            .map_or(0, |m| m.as_str().parse().unwrap_or(0));
        let millis: u64 = caps
            .get(start_idx + 3)
            .map_or(0, |m| m.as_str().parse().unwrap_or(0));

        Ok((hours * 3600 + minutes * 60 + seconds) * 1000 + millis)
    }
}

impl fmt::Display for SubtitleCollection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Subtitle Collection")?;
        writeln!(f, "Source: {:?}", self.source_file)?;
        writeln!(f, "Entries: {}", self.entries.len())?;
        Ok(())
    }
}
