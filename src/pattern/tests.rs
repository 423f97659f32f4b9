use super::*;

#[test]
fn test_anchor_detection() {
    assert!(Pattern::new(r"^\S").unwrap().is_anchored_start());
    assert!(!Pattern::new(r"\s\S").unwrap().is_anchored_start());
    assert!(Pattern::new(r"\S$").unwrap().is_anchored_end());
    assert!(!Pattern::new(r"a\$").unwrap().is_anchored_end());
    assert!(Pattern::new(r"a\\$").unwrap().is_anchored_end());
}

#[test]
fn test_empty_match_rejected() {
    let err = Pattern::new(r"\s*").unwrap_err();
    assert_eq!(err.kind, ErrorType::Pattern);
    assert_eq!(err.code, "EMPTY_MATCH");
}

#[test]
fn test_invalid_regex_rejected() {
    let err = Pattern::new("[a-").unwrap_err();
    assert_eq!(err.code, "INVALID_PATTERN");
}

#[test]
fn test_candidate_parse() {
    let c = Candidate::parse(r"1,0:\s\S").unwrap();
    assert_eq!(c.pattern.as_str(), r"\s\S");
    assert_eq!(c.start_offset, 1);
    assert_eq!(c.end_offset, 0);

    // The pattern itself may contain ':' and ','
    let c = Candidate::parse(r"0,1:[:,]x").unwrap();
    assert_eq!(c.pattern.as_str(), "[:,]x");
}

#[test]
fn test_candidate_parse_malformed() {
    for bad in ["", r"\s\S", "1:x", "a,b:x", "1,-1:x"] {
        let err = Candidate::parse(bad).unwrap_err();
        assert_eq!(err.code, "MALFORMED_CANDIDATE", "input {bad:?}");
    }
}

#[test]
fn test_builtin_tables_compile() {
    assert_eq!(word_start(true).len(), 7);
    assert_eq!(word_end(true).len(), 7);
    assert_eq!(word_start(false).len(), 2);
    assert_eq!(word_end(false).len(), 2);
    assert!(word_start(true)[0].pattern.is_anchored_start());
    assert!(word_end(true)[0].pattern.is_anchored_end());
}

#[test]
fn test_offsets_agree_for_fixed_windows() {
    // For a window of width w, start + start_offset must equal
    // (start + w - 1) - end_offset.
    for table in [word_start(true), word_end(true)] {
        for c in table {
            let width = match c.pattern.as_str() {
                s if s.starts_with('^') || s.ends_with('$') => 1,
                s if s.contains(r"\p{Lu}\p{Lu}\p{Ll}") => 3,
                _ => 2,
            };
            assert_eq!(
                c.start_offset + c.end_offset,
                width - 1,
                "pattern {}",
                c.pattern.as_str()
            );
        }
    }
}

