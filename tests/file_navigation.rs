use std::fs;
use subword::error::ErrorType;
use subword::{LineBuffer, LineSource, Motion, MotionOptions, MotionTarget, Navigator, Position, TextRange};
use tempfile::tempdir;

const SOURCE: &str = "fn parseHttpHeader(raw_input: &str) {\r\n    let valueV2 = 1;\r\n\r\n}\r\n";

fn load() -> LineBuffer {
    let dir = tempdir().unwrap();
    let path = dir.path().join("header.rs");
    fs::write(&path, SOURCE).unwrap();
    LineBuffer::open(&path).unwrap()
}

#[test]
fn test_open_splits_crlf_lines() {
    let buffer = load();
    assert_eq!(buffer.line_count(), 4);
    assert_eq!(buffer.line(2).unwrap(), "    let valueV2 = 1;");
    assert_eq!(buffer.line(3).unwrap(), "");
}

#[test]
fn test_motions_on_loaded_file() {
    let buffer = load();
    let nav = Navigator::new(&buffer);
    let start = Position::new(1, 3);

    assert_eq!(
        nav.apply(Motion::WordStart, start).unwrap(),
        MotionTarget::Found(Position::new(1, 8))
    );
    assert_eq!(
        nav.apply(Motion::WordEnd, start).unwrap(),
        MotionTarget::Found(Position::new(1, 7))
    );
    assert_eq!(
        nav.apply(Motion::WordStartBackward, Position::new(4, 0)).unwrap(),
        MotionTarget::Found(Position::new(3, 0))
    );
}

#[test]
fn test_text_objects_on_loaded_file() {
    let buffer = load();
    let nav = Navigator::new(&buffer);

    assert_eq!(
        nav.inner_word(Position::new(2, 10)).unwrap(),
        Some(TextRange::from_pairs((2, 8), (2, 12)))
    );
    assert_eq!(
        nav.inner_word(Position::new(2, 13)).unwrap(),
        Some(TextRange::from_pairs((2, 13), (2, 13)))
    );
    assert_eq!(nav.around_word(Position::new(3, 0)).unwrap(), None);

    let whole = Navigator::new(&buffer).with_options(MotionOptions {
        subword: false,
        ..MotionOptions::default()
    });
    assert_eq!(
        whole.inner_word(Position::new(2, 10)).unwrap(),
        Some(TextRange::from_pairs((2, 8), (2, 14)))
    );
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = LineBuffer::open(dir.path().join("absent.txt")).unwrap_err();
    assert_eq!(err.kind, ErrorType::Io);
}
