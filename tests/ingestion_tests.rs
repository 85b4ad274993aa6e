//! Job ingestion tests
//!
//! Tests for reading job lists from CSV, TSV and JSON and for the loose
//! field typing that spreadsheet exports produce.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use stickersheet::csv::{parse_jobs, Delimiter, JobFormat};
use stickersheet::{generate_sheet, validate_jobs, PageSpec, RawJob, RenderConfig, StickerError};
use test_case::test_case;

#[test]
fn test_csv_to_sheet() {
    let data = b"top,bottom,count\r\n5001,19608,3\r\n5002,19609,2\r\n";
    let raw = parse_jobs(data, JobFormat::Delimited(Delimiter::Comma)).unwrap();
    let sheet = generate_sheet(&raw, &common::four_up(), &RenderConfig::default()).unwrap();
    assert_eq!(sheet.summary.total, 5);
    assert_eq!(sheet.summary.pages, 2);
    assert_eq!(sheet.summary.colors_used, 2);
}

#[test]
fn test_csv_with_bom() {
    let data = "\u{feff}top,bottom,count\nA,1,1\n".as_bytes();
    let raw = parse_jobs(data, JobFormat::Delimited(Delimiter::Comma)).unwrap();
    assert_eq!(validate_jobs(&raw).len(), 1);
}

#[test]
fn test_json_accepts_numbers_and_strings() {
    let data = br#"[
        {"top": 5001, "bottom": "19608", "count": "2"},
        {"top": "A", "bottom": 7, "count": 3.9},
        {"top": "B", "bottom": "x"}
    ]"#;
    let raw = parse_jobs(data, JobFormat::Json).unwrap();
    assert_eq!(raw.len(), 3);
    let jobs = validate_jobs(&raw);
    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0].pair(), ("5001", "19608"));
    assert_eq!(jobs[0].count(), 2);
    assert_eq!(jobs[1].bottom(), "7");
    // Fractional counts truncate
    assert_eq!(jobs[1].count(), 3);
}

#[test_case("0" ; "zero")]
#[test_case("-2" ; "negative")]
#[test_case("abc" ; "not a number")]
#[test_case("" ; "empty")]
fn test_bad_counts_are_dropped(count: &str) {
    let data = format!("top,bottom,count\nA,1,{count}\nB,2,1\n");
    let raw = parse_jobs(data.as_bytes(), JobFormat::Delimited(Delimiter::Comma)).unwrap();
    let jobs = validate_jobs(&raw);
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].top(), "B");
}

#[test]
fn test_whitespace_only_text_is_dropped() {
    let raw = vec![RawJob::new("   ", "1", 2), RawJob::new("A", "\t", 2)];
    let err = generate_sheet(&raw, &PageSpec::default(), &RenderConfig::default()).unwrap_err();
    assert!(matches!(err, StickerError::NoValidJobs));
}

#[test]
fn test_text_is_trimmed() {
    let raw = vec![RawJob::new("  5001 ", " 19608", 1)];
    let jobs = validate_jobs(&raw);
    assert_eq!(jobs[0].pair(), ("5001", "19608"));
}

#[test]
fn test_header_only_file_has_no_jobs() {
    let raw = parse_jobs(b"top,bottom,count\n", JobFormat::Delimited(Delimiter::Comma)).unwrap();
    assert!(raw.is_empty());
    let err = generate_sheet(&raw, &PageSpec::default(), &RenderConfig::default()).unwrap_err();
    assert!(matches!(err, StickerError::NoValidJobs));
}

#[test]
fn test_page_spec_from_json() {
    let spec: PageSpec =
        serde_json::from_str(r#"{"pageWidth": 8.5, "pageHeight": 11, "unit": "inch"}"#).unwrap();
    assert_eq!(spec.page_width, 8.5);
    assert_eq!(spec.margin, 0.25);
    assert_eq!(spec.cell_width, 1.134);
}

#[test]
fn test_render_config_from_json() {
    let config: RenderConfig =
        serde_json::from_str(r##"{"fontSize": 14, "drawBorders": false, "palette": ["#112233"]}"##)
            .unwrap();
    assert_eq!(config.font_size, 14.0);
    assert!(!config.draw_borders);
    assert_eq!(config.palette.len(), 1);
    assert_eq!(config.min_font_size, 12.0);
}
