//! Highlighting of match spans
//!
//! Splits the subject into alternating plain and matched runs. Matched
//! runs carry the capturing groups that fall inside them so the display
//! can mark groups within a match.

use std::ops::Range;

use super::enumerate::MatchRecord;

/// A capturing group inside a matched segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupAnnotation {
    /// Group number, starting at 1
    pub group: usize,
    /// Byte range relative to the segment text
    pub range: Range<usize>,
}

/// One run of the subject text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSegment {
    pub text: String,
    pub is_match: bool,
    /// Index of the match this segment came from
    pub match_index: Option<usize>,
    /// Capturing groups within this segment, outermost first
    pub groups: Vec<GroupAnnotation>,
}

impl HighlightSegment {
    /// Create an unmatched segment
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_match: false,
            match_index: None,
            groups: Vec::new(),
        }
    }

    fn matched(text: &str, match_index: usize, groups: Vec<GroupAnnotation>) -> Self {
        Self {
            text: text.to_string(),
            is_match: true,
            match_index: Some(match_index),
            groups,
        }
    }

    /// The innermost group covering a byte offset within this segment
    pub fn group_at(&self, offset: usize) -> Option<usize> {
        self.groups
            .iter()
            .filter(|g| g.range.contains(&offset))
            .max_by_key(|g| (g.range.start, g.group))
            .map(|g| g.group)
    }
}

/// Render a subject and its matches into segments.
///
/// Segment texts always concatenate back to `subject`. An empty subject
/// renders to no segments, and zero-length matches produce no segment.
pub fn render(subject: &str, matches: &[MatchRecord]) -> Vec<HighlightSegment> {
    let mut order: Vec<usize> = (0..matches.len()).collect();
    order.sort_by_key(|&i| matches[i].byte_start);

    let mut segments = Vec::new();
    let mut cursor = 0;

    for idx in order {
        let record = &matches[idx];
        let end = record.byte_end().min(subject.len());
        // Anything before the cursor was already emitted
        let start = record.byte_start.max(cursor);
        if start >= end {
            continue;
        }
        let (Some(gap), Some(text)) = (subject.get(cursor..start), subject.get(start..end)) else {
            continue;
        };

        if !gap.is_empty() {
            segments.push(HighlightSegment::plain(gap));
        }
        segments.push(HighlightSegment::matched(
            text,
            idx,
            group_annotations(record, start..end),
        ));
        cursor = end;
    }

    if let Some(rest) = subject.get(cursor..) {
        if !rest.is_empty() {
            segments.push(HighlightSegment::plain(rest));
        }
    }

    segments
}

/// Groups of `record` clipped to `span`, relative to `span.start`
fn group_annotations(record: &MatchRecord, span: Range<usize>) -> Vec<GroupAnnotation> {
    let mut annotations: Vec<GroupAnnotation> = record
        .groups
        .iter()
        .enumerate()
        .filter_map(|(i, capture)| {
            let capture = capture.as_ref()?;
            let start = capture.range.start.max(span.start);
            let end = capture.range.end.min(span.end);
            (start < end).then(|| GroupAnnotation {
                group: i + 1,
                range: start - span.start..end - span.start,
            })
        })
        .collect();
    annotations.sort_by_key(|a| (a.range.start, std::cmp::Reverse(a.range.end), a.group));
    annotations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compiler::{compile, PatternSpec};
    use crate::engine::enumerate::{enumerate, Capture};
    use crate::engine::flags::FlagSet;

    fn matches_for(source: &str, flags: &str, subject: &str) -> Vec<MatchRecord> {
        let spec = PatternSpec::new(source, FlagSet::parse(flags).unwrap());
        let matcher = compile(&spec).unwrap();
        enumerate(&matcher, subject, spec.flags.is_global())
    }

    fn joined(segments: &[HighlightSegment]) -> String {
        segments.iter().map(|s| s.text.as_str()).collect()
    }

    fn record(text: &str, byte_start: usize) -> MatchRecord {
        MatchRecord {
            full_text: text.to_string(),
            start_offset: byte_start,
            byte_start,
            groups: Vec::new(),
        }
    }

    #[test]
    fn test_alternating_runs() {
        let subject = "abc 12 de 3";
        let segments = render(subject, &matches_for(r"\d+", "g", subject));
        let shape: Vec<(&str, bool)> = segments
            .iter()
            .map(|s| (s.text.as_str(), s.is_match))
            .collect();
        assert_eq!(
            shape,
            vec![("abc ", false), ("12", true), (" de ", false), ("3", true)]
        );
        assert_eq!(joined(&segments), subject);
    }

    #[test]
    fn test_no_matches_single_plain() {
        let segments = render("hello", &[]);
        assert_eq!(segments, vec![HighlightSegment::plain("hello")]);
    }

    #[test]
    fn test_empty_subject() {
        assert!(render("", &[]).is_empty());
        assert!(render("", &matches_for("x*", "g", "")).is_empty());
    }

    #[test]
    fn test_whole_subject_matched() {
        let segments = render("abc", &matches_for("abc", "", "abc"));
        assert_eq!(segments.len(), 1);
        assert!(segments[0].is_match);
        assert_eq!(segments[0].match_index, Some(0));
    }

    #[test]
    fn test_zero_length_matches_skipped() {
        let subject = "baab";
        let segments = render(subject, &matches_for("a*", "g", subject));
        assert!(segments.iter().all(|s| !s.text.is_empty()));
        assert_eq!(joined(&segments), subject);
        assert_eq!(segments.iter().filter(|s| s.is_match).count(), 1);
    }

    #[test]
    fn test_unsorted_input_is_sorted() {
        let subject = "ab cd";
        let matches = vec![record("cd", 3), record("ab", 0)];
        let segments = render(subject, &matches);
        assert_eq!(joined(&segments), subject);
        assert_eq!(segments[0].match_index, Some(1));
        assert_eq!(segments[2].match_index, Some(0));
    }

    #[test]
    fn test_overlapping_input_is_clipped() {
        let subject = "abcdef";
        let matches = vec![record("abcd", 0), record("cdef", 2)];
        let segments = render(subject, &matches);
        assert_eq!(joined(&segments), subject);
        assert_eq!(segments[1].text, "ef");
    }

    #[test]
    fn test_group_annotations() {
        let subject = r#"She said "hello" and he replied "goodbye"."#;
        let segments = render(subject, &matches_for(r#""([^"]*)""#, "g", subject));
        let hello = segments.iter().find(|s| s.text == r#""hello""#).unwrap();
        assert_eq!(hello.groups, vec![GroupAnnotation { group: 1, range: 1..6 }]);
        assert_eq!(hello.group_at(0), None);
        assert_eq!(hello.group_at(1), Some(1));
        assert_eq!(joined(&segments), subject);
    }

    #[test]
    fn test_nested_groups_innermost_wins() {
        let subject = "user@example.com";
        let segments = render(subject, &matches_for(r"((\w+)@(\w+))\.com", "", subject));
        let seg = &segments[0];
        assert_eq!(seg.groups[0].group, 1);
        assert_eq!(seg.group_at(0), Some(2));
        assert_eq!(seg.group_at(4), Some(1));
        assert_eq!(seg.group_at(6), Some(3));
        assert_eq!(seg.group_at(13), None);
    }

    #[test]
    fn test_absent_and_empty_groups_not_annotated() {
        let mut rec = record("ab", 0);
        rec.groups = vec![None, Some(Capture { text: String::new(), range: 1..1 })];
        let segments = render("ab", &[rec]);
        assert!(segments[0].groups.is_empty());
    }

    #[test]
    fn test_concatenation_over_many_patterns() {
        let subject = "The price is $42.99 for item #12345.\nSecond line é\u{1F600}!";
        for (source, flags) in [
            ("[0-9]", "g"),
            (r"\d+", "g"),
            ("", "g"),
            (".", "gs"),
            ("^", "gm"),
            (r"\w*", "g"),
            ("item", ""),
            ("nomatch", "g"),
        ] {
            let matches = matches_for(source, flags, subject);
            let segments = render(subject, &matches);
            assert_eq!(joined(&segments), subject, "pattern /{}/{}", source, flags);
            assert!(segments.iter().all(|s| !s.text.is_empty()));
            assert_eq!(render(subject, &matches), segments);
        }
    }
}
