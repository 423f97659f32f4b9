//! Tests for the error type

use super::*;
use std::io;

#[test]
fn test_error_type_display() {
    assert_eq!(format!("{}", ErrorType::Parse), "Parse");
    assert_eq!(format!("{}", ErrorType::Settings), "Settings");
    assert_eq!(format!("{}", ErrorType::Pattern), "Pattern");
    assert_eq!(format!("{}", ErrorType::Input), "Input");
    assert_eq!(format!("{}", ErrorType::Io), "IO");
}

#[test]
fn test_new_sets_fields() {
    let err = SubwordError::new(ErrorType::Parse, "UNKNOWN_MOTION", "bad key");
    assert_eq!(err.kind, ErrorType::Parse);
    assert_eq!(err.code, "UNKNOWN_MOTION");
    assert_eq!(err.message, "bad key");
}

#[test]
fn test_error_display() {
    let err = SubwordError::new(ErrorType::Pattern, "INVALID_PATTERN", "unclosed class");
    assert_eq!(
        format!("{}", err),
        "Pattern(INVALID_PATTERN): unclosed class"
    );
}

#[test]
fn test_line_out_of_range() {
    let err = SubwordError::line_out_of_range(7, 3);
    assert_eq!(err.kind, ErrorType::Input);
    assert_eq!(err.code, "LINE_OUT_OF_RANGE");
    assert!(err.contains_msg("line 7"));
    assert!(err.contains_msg("1..=3"));
}

#[test]
fn test_from_io_error() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: SubwordError = io_err.into();
    assert_eq!(err.kind, ErrorType::Io);
    assert_eq!(err.code, "IO_ERROR");
    assert!(err.contains_msg("file not found"));
}

#[test]
fn test_from_regex_error() {
    let regex_err = regex::Regex::new("[a-").unwrap_err();
    let err: SubwordError = regex_err.into();
    assert_eq!(err.kind, ErrorType::Pattern);
    assert_eq!(err.code, "INVALID_PATTERN");
}
