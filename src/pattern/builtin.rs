//! Built-in candidate tables for word starts and word ends
//!
//! Sub-word tables stop at camelCase humps, at the first letter after a
//! separator (`kebab-case`, `snake_case`, `dotted.path`), at letter/digit
//! transitions and inside acronyms (`HTTPServer` -> `HTTP`, `Server`).
//! Whole-word tables only split on whitespace.

use super::Candidate;
use lazy_static::lazy_static;

/// (pattern, start offset, end offset)
type Row = (&'static str, usize, usize);

const SUBWORD_START: &[Row] = &[
    (r"^\S", 0, 0),
    (r"\s\S", 1, 0),
    (r"\p{Ll}\p{Lu}", 1, 0),
    (r"\p{Lu}\p{Lu}\p{Ll}", 1, 1),
    (r"[^\p{L}\p{N}\s][\p{L}\p{N}]", 1, 0),
    (r"\p{L}\p{N}", 1, 0),
    (r"\p{N}\p{L}", 1, 0),
];

const SUBWORD_END: &[Row] = &[
    (r"\S$", 0, 0),
    (r"\S\s", 0, 1),
    (r"\p{Ll}\p{Lu}", 0, 1),
    (r"\p{Lu}\p{Lu}\p{Ll}", 0, 2),
    (r"[\p{L}\p{N}][^\p{L}\p{N}\s]", 0, 1),
    (r"\p{L}\p{N}", 0, 1),
    (r"\p{N}\p{L}", 0, 1),
];

const WORD_START: &[Row] = &[(r"^\S", 0, 0), (r"\s\S", 1, 0)];

const WORD_END: &[Row] = &[(r"\S$", 0, 0), (r"\S\s", 0, 1)];

fn compile(rows: &[Row]) -> Vec<Candidate> {
    rows.iter()
        .map(|&(source, start, end)| {
            Candidate::new(source, start, end).expect("built-in pattern compiles")
        })
        .collect()
}

lazy_static! {
    static ref SUBWORD_START_TABLE: Vec<Candidate> = compile(SUBWORD_START);
    static ref SUBWORD_END_TABLE: Vec<Candidate> = compile(SUBWORD_END);
    static ref WORD_START_TABLE: Vec<Candidate> = compile(WORD_START);
    static ref WORD_END_TABLE: Vec<Candidate> = compile(WORD_END);
}

/// Candidates marking the first character of a word
pub fn word_start(subword: bool) -> &'static [Candidate] {
    if subword {
        &SUBWORD_START_TABLE
    } else {
        &WORD_START_TABLE
    }
}

/// Candidates marking the last character of a word
pub fn word_end(subword: bool) -> &'static [Candidate] {
    if subword {
        &SUBWORD_END_TABLE
    } else {
        &WORD_END_TABLE
    }
}
