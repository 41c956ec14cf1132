//! Integration tests for EPG response decoding.
//!
//! Tests cover:
//! - The `/epg_list` envelope shape
//! - The `/channels_names` envelope shape
//! - Structured failures on missing fields, tolerance for extra ones

use epg_coverage::services::epg::{ChannelNamesResponse, EpgResponse};

// ========== EPG LIST ENVELOPE TESTS ==========

#[test]
fn test_decode_epg_list() {
    let body = r#"{
        "data": [
            {"programs": [{"begin": 100, "end": 200}, {"begin": 200, "end": 300}]},
            {"programs": []}
        ]
    }"#;

    let resp: EpgResponse = serde_json::from_str(body).unwrap();
    assert_eq!(resp.data.len(), 2);
    assert_eq!(resp.data[0].programs.len(), 2);
    assert_eq!(resp.data[0].programs[0].begin, 100);
    assert_eq!(resp.data[0].programs[0].end, 200);
    assert!(resp.data[1].programs.is_empty());
}

#[test]
fn test_extra_fields_are_ignored() {
    // Real backends attach channel names, ids and icon URLs
    let body = r#"{
        "data": [
            {
                "id": 42,
                "name": "Channel One",
                "icon": "http://example.org/icon.png",
                "programs": [{"begin": 100, "end": 200, "title": "News"}]
            }
        ]
    }"#;

    let resp: EpgResponse = serde_json::from_str(body).unwrap();
    assert_eq!(resp.data.len(), 1);
    assert_eq!(resp.data[0].programs[0].end, 200);
}

#[test]
fn test_missing_data_field_fails() {
    let body = r#"{"channels": []}"#;
    assert!(serde_json::from_str::<EpgResponse>(body).is_err());
}

#[test]
fn test_missing_programs_field_fails() {
    let body = r#"{"data": [{"name": "Channel One"}]}"#;
    assert!(serde_json::from_str::<EpgResponse>(body).is_err());
}

#[test]
fn test_missing_program_bounds_fail() {
    let body = r#"{"data": [{"programs": [{"begin": 100}]}]}"#;
    assert!(serde_json::from_str::<EpgResponse>(body).is_err());
}

#[test]
fn test_mistyped_timestamp_fails() {
    let body = r#"{"data": [{"programs": [{"begin": "100", "end": 200}]}]}"#;
    assert!(serde_json::from_str::<EpgResponse>(body).is_err());
}

#[test]
fn test_empty_channel_list_decodes() {
    let body = r#"{"data": []}"#;
    let resp: EpgResponse = serde_json::from_str(body).unwrap();
    assert!(resp.data.is_empty());
}

// ========== CHANNEL NAMES ENVELOPE TESTS ==========

#[test]
fn test_decode_channel_names_length_only() {
    // Entries are opaque; strings and objects both count
    let body = r#"{"data": ["First", {"name": "Second"}, "Third"]}"#;
    let resp: ChannelNamesResponse = serde_json::from_str(body).unwrap();
    assert_eq!(resp.data.len(), 3);
}

#[test]
fn test_channel_names_missing_data_fails() {
    let body = r#"[]"#;
    assert!(serde_json::from_str::<ChannelNamesResponse>(body).is_err());
}
