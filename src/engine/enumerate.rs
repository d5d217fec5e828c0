//! Match enumeration
//!
//! Walks a subject string with a compiled matcher and collects at most
//! [`MAX_MATCHES`] records, left to right and non-overlapping.

use std::ops::Range;

use super::compiler::CompiledMatcher;

/// Hard cap on the number of records a single evaluation returns
pub const MAX_MATCHES: usize = 50;

/// Text captured by one capturing group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    /// Captured text
    pub text: String,
    /// Byte range of the capture in the subject
    pub range: Range<usize>,
}

/// One match of the pattern against the subject
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    /// Full matched text
    pub full_text: String,
    /// Offset of the match in UTF-16 code units
    pub start_offset: usize,
    /// Byte offset of the match in the subject; this is what slicing uses
    pub byte_start: usize,
    /// One entry per capturing group; `None` when the group did not take part
    pub groups: Vec<Option<Capture>>,
}

impl MatchRecord {
    /// Byte range of the match in the subject
    pub fn byte_range(&self) -> Range<usize> {
        self.byte_start..self.byte_start + self.full_text.len()
    }

    /// Byte offset just past the match
    pub fn byte_end(&self) -> usize {
        self.byte_start + self.full_text.len()
    }

    /// Length of the match in UTF-16 code units
    pub fn utf16_len(&self) -> usize {
        self.full_text.encode_utf16().count()
    }

    pub fn is_empty(&self) -> bool {
        self.full_text.is_empty()
    }

    pub fn has_groups(&self) -> bool {
        !self.groups.is_empty()
    }
}

/// Running conversion from byte offsets to UTF-16 offsets.
///
/// Offsets handed to it must never decrease.
struct Utf16Cursor<'a> {
    subject: &'a str,
    byte_pos: usize,
    utf16_pos: usize,
}

impl<'a> Utf16Cursor<'a> {
    fn new(subject: &'a str) -> Self {
        Self {
            subject,
            byte_pos: 0,
            utf16_pos: 0,
        }
    }

    fn advance_to(&mut self, byte_pos: usize) -> usize {
        if let Some(skipped) = self.subject.get(self.byte_pos..byte_pos) {
            self.utf16_pos += skipped.encode_utf16().count();
            self.byte_pos = byte_pos;
        }
        self.utf16_pos
    }
}

/// Enumerate matches.
///
/// With `global` set, keeps searching after each match until the subject is
/// exhausted or [`MAX_MATCHES`] records were collected. Otherwise makes a
/// single attempt from the start of the subject. The matcher's sticky flag
/// requires every match to begin exactly where the search began.
pub fn enumerate(matcher: &CompiledMatcher, subject: &str, global: bool) -> Vec<MatchRecord> {
    let sticky = matcher.spec().flags.is_sticky();
    let mut offsets = Utf16Cursor::new(subject);
    let mut records = Vec::new();
    let mut pos = 0;

    while records.len() < MAX_MATCHES {
        let found = match matcher.regex().find_from(subject, pos).next() {
            Some(m) => m,
            None => break,
        };
        let range = found.range();
        // regress has no anchored search; a sticky miss scans the rest of
        // the subject once and then ends the loop
        if sticky && range.start != pos {
            break;
        }

        let groups = found
            .groups()
            .skip(1)
            .map(|group| {
                group.map(|range| Capture {
                    text: subject[range.clone()].to_string(),
                    range,
                })
            })
            .collect();

        records.push(MatchRecord {
            full_text: subject[range.clone()].to_string(),
            start_offset: offsets.advance_to(range.start),
            byte_start: range.start,
            groups,
        });

        if !global {
            break;
        }

        pos = if range.is_empty() {
            // Step over one whole character so an empty match can't repeat
            match subject[range.end..].chars().next() {
                Some(ch) => range.end + ch.len_utf8(),
                None => break,
            }
        } else {
            range.end
        };
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compiler::{compile, PatternSpec};
    use crate::engine::flags::FlagSet;

    fn run(source: &str, flags: &str, subject: &str) -> Vec<MatchRecord> {
        let spec = PatternSpec::new(source, FlagSet::parse(flags).unwrap());
        let matcher = compile(&spec).unwrap();
        enumerate(&matcher, subject, spec.flags.is_global())
    }

    fn texts(records: &[MatchRecord]) -> Vec<&str> {
        records.iter().map(|r| r.full_text.as_str()).collect()
    }

    fn assert_ordered_and_disjoint(records: &[MatchRecord]) {
        for pair in records.windows(2) {
            assert!(pair[0].start_offset + pair[0].utf16_len() <= pair[1].start_offset);
            assert!(pair[0].byte_end() <= pair[1].byte_start);
        }
    }

    #[test]
    fn test_digits_in_price() {
        let records = run("[0-9]", "g", "The price is $42.99 for item #12345.");
        assert_eq!(texts(&records), vec!["4", "2", "9", "9", "1", "2", "3", "4", "5"]);
        assert_eq!(records[0].start_offset, 14);
        assert!(records.iter().all(|r| r.groups.is_empty()));
        assert_ordered_and_disjoint(&records);
    }

    #[test]
    fn test_quoted_text_groups() {
        let subject = r#"She said "hello" and he replied "goodbye"."#;
        let records = run(r#""([^"]*)""#, "g", subject);
        assert_eq!(texts(&records), vec![r#""hello""#, r#""goodbye""#]);
        let first = records[0].groups[0].as_ref().unwrap();
        assert_eq!(first.text, "hello");
        assert_eq!(&subject[first.range.clone()], "hello");
        assert_eq!(records[1].groups[0].as_ref().unwrap().text, "goodbye");
    }

    #[test]
    fn test_non_global_single_match() {
        let records = run("[0-9]", "", "a1b2c3");
        assert_eq!(texts(&records), vec!["1"]);
        assert_eq!(records[0].start_offset, 1);
    }

    #[test]
    fn test_no_match() {
        assert!(run("z", "g", "abc").is_empty());
        assert!(run("z", "", "abc").is_empty());
    }

    #[test]
    fn test_cap_truncates() {
        let subject = "a".repeat(120);
        let records = run("a", "g", &subject);
        assert_eq!(records.len(), MAX_MATCHES);
        assert_eq!(records.last().unwrap().start_offset, MAX_MATCHES - 1);
    }

    #[test]
    fn test_empty_pattern_terminates() {
        let records = run("", "g", "abc");
        // One empty match before each character and one at the end
        assert_eq!(records.len(), 4);
        assert!(records.iter().all(|r| r.is_empty()));
        let starts: Vec<usize> = records.iter().map(|r| r.start_offset).collect();
        assert_eq!(starts, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_zero_length_alternation() {
        let records = run("a*", "g", "baab");
        assert_eq!(texts(&records), vec!["", "aa", "", ""]);
        assert_ordered_and_disjoint(&records);
    }

    #[test]
    fn test_empty_pattern_on_long_subject_is_capped() {
        let records = run("", "g", &"x".repeat(200));
        assert_eq!(records.len(), MAX_MATCHES);
    }

    #[test]
    fn test_empty_subject() {
        let records = run("x*", "g", "");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].start_offset, 0);
        assert!(run("x", "g", "").is_empty());
    }

    #[test]
    fn test_optional_group_absent() {
        let records = run("a(b)?(c*)", "g", "a ab");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].groups.len(), 2);
        assert!(records[0].groups[0].is_none());
        // An empty capture is present, not absent
        assert_eq!(records[0].groups[1].as_ref().unwrap().text, "");
        assert_eq!(records[1].groups[0].as_ref().unwrap().text, "b");
    }

    #[test]
    fn test_utf16_offsets() {
        // U+1F600 is two UTF-16 code units and four bytes
        let subject = "\u{1F600}é x";
        let records = run("x", "g", subject);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].start_offset, 4);
        assert_eq!(records[0].byte_start, 7);
    }

    #[test]
    fn test_empty_match_steps_whole_char() {
        let records = run("", "g", "é\u{1F600}");
        let starts: Vec<usize> = records.iter().map(|r| r.byte_start).collect();
        assert_eq!(starts, vec![0, 2, 6]);
        let utf16: Vec<usize> = records.iter().map(|r| r.start_offset).collect();
        assert_eq!(utf16, vec![0, 1, 3]);
    }

    #[test]
    fn test_sticky_stops_at_gap() {
        let records = run("[0-9]", "gy", "12a3");
        assert_eq!(texts(&records), vec!["1", "2"]);
        assert!(run("[0-9]", "y", "a1").is_empty());
    }

    #[test]
    fn test_sticky_miss_ignores_later_matches() {
        let subject = format!("{}1", "a".repeat(200));
        assert!(run("[0-9]", "gy", &subject).is_empty());
        let records = run("a", "gy", "aab");
        assert_eq!(texts(&records), vec!["a", "a"]);
    }

    #[test]
    fn test_lookbehind_sees_previous_text() {
        let records = run(r"(?<=\$)\d+", "g", "Price: $25 and $7");
        assert_eq!(texts(&records), vec!["25", "7"]);
    }

    #[test]
    fn test_case_insensitive_and_multiline() {
        assert_eq!(texts(&run("cat", "gi", "Cat CAT cat")).len(), 3);
        let records = run("^start", "gm", "start of line\nstart again");
        assert_eq!(records.len(), 2);
        assert_eq!(run("^start", "g", "start of line\nstart again").len(), 1);
    }

    #[test]
    fn test_dot_all() {
        assert!(run("a.b", "", "a\nb").is_empty());
        assert_eq!(run("a.b", "s", "a\nb").len(), 1);
    }

    #[test]
    fn test_idempotent() {
        let subject = "one 1 two 22 three 333";
        assert_eq!(run(r"\d+", "g", subject), run(r"\d+", "g", subject));
    }
}
