//! Natural ordering for reference designators (C2 < C10 < R1).

use std::cmp::Ordering;

/// Run of ASCII digits compared by numeric value
///
/// Leading zeros are stripped on construction, so values of any length
/// compare correctly without parsing into a fixed-width integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digits(String);

impl Digits {
    fn new(run: &str) -> Self {
        let trimmed = run.trim_start_matches('0');
        Self(if trimmed.is_empty() { "0" } else { trimmed }.to_string())
    }
}

impl Ord for Digits {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Digits {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Key segment. Numbers order before text when kinds ever differ.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Segment {
    Number(Digits),
    Text(String),
}

/// Comparable key alternating text and number segments
///
/// The key always starts and ends with a text segment (possibly empty), so
/// segments at the same position in two keys are always the same kind.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct NaturalKey(Vec<Segment>);

/// Build the natural sort key for `s`
pub fn natural_key(s: &str) -> NaturalKey {
    let mut segments = Vec::new();
    let mut rest = s;

    loop {
        let text_end = rest.find(|c: char| c.is_ascii_digit()).unwrap_or(rest.len());
        segments.push(Segment::Text(rest[..text_end].to_string()));
        rest = &rest[text_end..];
        if rest.is_empty() {
            break;
        }

        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        segments.push(Segment::Number(Digits::new(&rest[..digits_end])));
        rest = &rest[digits_end..];
    }

    NaturalKey(segments)
}
