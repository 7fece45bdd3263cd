/*!
 * Tests for the VideoSkip document model and its serialization
 */

use std::str::FromStr;

use serde_json::Number;
use subskip::video_skip::{
    FilterAction, ServiceOffsets, Severity, SkipDocument, SkipFilter, SkipScreenshot, Timecode,
};

/// Test timecode rendering with a fractional part
#[test]
fn test_timecode_display_withFraction_shouldRenderMicroseconds() {
    assert_eq!(Timecode::from_secs_f64(10.5).to_string(), "0:00:10.500000");
    assert_eq!(Timecode::from_millis(2500).to_string(), "0:00:02.500000");
    assert_eq!(Timecode::from_micros(1).to_string(), "0:00:00.000001");
}

/// Test timecode rendering of whole seconds omits the fraction
#[test]
fn test_timecode_display_withWholeSeconds_shouldOmitFraction() {
    assert_eq!(Timecode::from_secs_f64(0.0).to_string(), "0:00:00");
    assert_eq!(Timecode::from_millis(2000).to_string(), "0:00:02");
    assert_eq!(Timecode::from_secs_f64(3661.0).to_string(), "1:01:01");
}

/// Test hours are not zero-padded and can exceed a day
#[test]
fn test_timecode_display_withLargeDuration_shouldNotWrap() {
    assert_eq!(Timecode::from_secs_f64(90_000.0).to_string(), "25:00:00");
    assert_eq!(Timecode::from_secs_f64(360_000.5).to_string(), "100:00:00.500000");
}

/// Test negative durations are sign-prefixed
#[test]
fn test_timecode_display_withNegativeDuration_shouldPrefixSign() {
    assert_eq!(Timecode::from_secs_f64(-1.5).to_string(), "-0:00:01.500000");
    assert_eq!(Timecode::from_millis(-2000).to_string(), "-0:00:02");
}

/// Test timecode arithmetic is exact at microsecond resolution
#[test]
fn test_timecode_arithmetic_withOffsets_shouldBeExact() {
    let base = Timecode::from_millis(1000);
    let offset = Timecode::from_secs_f64(0.25);

    assert_eq!((base + offset).as_micros(), 1_250_000);
    assert_eq!((base - offset).as_micros(), 750_000);
    assert_eq!(
        (Timecode::from_secs_f64(0.1) + Timecode::from_secs_f64(0.2)).as_micros(),
        300_000
    );
}

/// Test severity renders its numeric value
#[test]
fn test_severity_display_shouldRenderNumber() {
    assert_eq!(Severity::Mild.to_string(), "1");
    assert_eq!(Severity::Moderate.to_string(), "2");
    assert_eq!(Severity::Severe.to_string(), "3");
    assert_eq!(Severity::Severe.as_u8(), 3);
}

/// Test filter rendering matches the two-line VideoSkip block
#[test]
fn test_filter_display_withValidFilter_shouldRenderTwoLines() {
    let filter = SkipFilter {
        start: Timecode::from_secs_f64(0.5),
        end: Timecode::from_secs_f64(2.5),
        category: "profanity".to_string(),
        severity: Severity::Severe,
        action: FilterAction::Audio,
        description: "blasphemy auto-detected from subtitles".to_string(),
    };

    assert_eq!(
        filter.to_string(),
        "0:00:00.500000 --> 0:00:02.500000\nprofanity audio 3 (blasphemy auto-detected from subtitles)"
    );
}

/// Test screenshot rendering covers timestamp and description only
#[test]
fn test_screenshot_display_withValidScreenshot_shouldRenderTwoLines() {
    let screenshot = SkipScreenshot {
        image_data_url: "data:image/jpeg;base64,YXNkZg==".to_string(),
        timestamp: Timecode::from_secs_f64(10.5),
        description: "screenshot".to_string(),
    };

    assert_eq!(screenshot.to_string(), "0:00:10.500000\nscreenshot");
}

/// Test service offsets parsing of the empty specification
#[test]
fn test_service_offsets_parsing_withEmptyString_shouldYieldEmptyTable() {
    let offsets = ServiceOffsets::from_str("").unwrap();
    assert!(offsets.is_empty());
    assert_eq!(offsets.to_json(), "{}");
}

/// Test service offsets parsing of a two-service specification
#[test]
fn test_service_offsets_parsing_withTwoServices_shouldYieldBoth() {
    let offsets = ServiceOffsets::from_str("google=0.2,netflix=1.3").unwrap();

    assert_eq!(offsets.len(), 2);
    assert_eq!(offsets.get("google"), Some(&Number::from_f64(0.2).unwrap()));
    assert_eq!(offsets.get("netflix"), Some(&Number::from_f64(1.3).unwrap()));
}

/// Test service offsets parsing failures
#[test]
fn test_service_offsets_parsing_withMalformedSpec_shouldFail() {
    let err = ServiceOffsets::from_str("bad").unwrap_err();
    assert!(err.to_string().contains("expected name=seconds"));

    let err = ServiceOffsets::from_str("google=abc").unwrap_err();
    assert!(err.to_string().contains("not a number"));

    assert!(ServiceOffsets::from_str("google=0.2,bad").is_err());
}

/// Test integer offsets stay integers in the JSON rendering
#[test]
fn test_service_offsets_json_withIntegerOffset_shouldNotGainFraction() {
    let offsets = ServiceOffsets::from_str("google=0").unwrap();
    assert_eq!(offsets.to_json(), "{\"google\":0}");
}

/// Test the JSON rendering is deterministic with sorted keys
#[test]
fn test_service_offsets_json_withSeveralServices_shouldSortKeys() {
    let mut offsets = ServiceOffsets::new();
    offsets.insert("netflix", Number::from(2));
    offsets.insert("amazon", Number::from(1));
    offsets.insert("google", Number::from(3));

    assert_eq!(offsets.to_json(), "{\"amazon\":1,\"google\":3,\"netflix\":2}");
}

/// Test the full document layout with zero filters, byte for byte
#[test]
fn test_document_display_withNoFilters_shouldKeepEmptySection() {
    let document = SkipDocument {
        screenshot: SkipScreenshot {
            image_data_url: "data:image/jpeg;base64,YXNkZg==".to_string(),
            timestamp: Timecode::from_secs_f64(10.5),
            description: "screenshot".to_string(),
        },
        filters: Vec::new(),
        service_offsets: ServiceOffsets::from_str("google=0").unwrap(),
    };

    // Empty filter section leaves a double blank line between the
    // description and the offsets table
    assert_eq!(
        document.to_string(),
        "0:00:10.500000\nscreenshot\n\n\n\n{\"google\":0}\n\ndata:image/jpeg;base64,YXNkZg=="
    );
}

/// Test the full document layout with two filters, byte for byte
#[test]
fn test_document_display_withTwoFilters_shouldJoinWithBlankLines() {
    let filter = |start: f64, end: f64| SkipFilter {
        start: Timecode::from_secs_f64(start),
        end: Timecode::from_secs_f64(end),
        category: "profanity".to_string(),
        severity: Severity::Severe,
        action: FilterAction::Audio,
        description: "blasphemy auto-detected from subtitles".to_string(),
    };

    let document = SkipDocument {
        screenshot: SkipScreenshot {
            image_data_url: "data:image/jpeg;base64,YXNkZg==".to_string(),
            timestamp: Timecode::from_secs_f64(83.0),
            description: "screenshot".to_string(),
        },
        filters: vec![filter(1.0, 2.0), filter(5.5, 7.0)],
        service_offsets: ServiceOffsets::new(),
    };

    let expected = "0:01:23\nscreenshot\n\n\
        0:00:01 --> 0:00:02\nprofanity audio 3 (blasphemy auto-detected from subtitles)\n\n\
        0:00:05.500000 --> 0:00:07\nprofanity audio 3 (blasphemy auto-detected from subtitles)\n\n\
        {}\n\n\
        data:image/jpeg;base64,YXNkZg==";
    assert_eq!(document.to_string(), expected);
}
