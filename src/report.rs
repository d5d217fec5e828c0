//! Plain-text evaluation report for the `eval` command

use std::fmt::Write as _;

use crate::engine::{Controller, EvalState, HighlightSegment, MAX_MATCHES};

/// Process exit status for an evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Matched,
    NoMatch,
    Failed,
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Matched => 0,
            Outcome::NoMatch => 1,
            Outcome::Failed => 2,
        }
    }
}

/// Describe the controller's current state.
///
/// Matched text is wrapped in brackets in the subject line.
pub fn write_report(controller: &Controller) -> (String, Outcome) {
    let mut out = String::new();
    let literal = controller.spec().literal();

    let result = match controller.state() {
        EvalState::Idle => {
            let _ = writeln!(out, "{}: blank pattern, nothing to evaluate", literal);
            return (out, Outcome::NoMatch);
        }
        EvalState::Failed(err) => {
            let _ = writeln!(out, "{}: error: {}", literal, err.message);
            return (out, Outcome::Failed);
        }
        EvalState::Ready(result) => result,
    };

    if !result.matched {
        let _ = writeln!(out, "{}: pattern does not match", literal);
        return (out, Outcome::NoMatch);
    }

    let count = result.matches.len();
    let noun = if count == 1 { "match" } else { "matches" };
    let capped = if count == MAX_MATCHES { " (limit reached)" } else { "" };
    let _ = writeln!(out, "{}: {} {}{}", literal, count, noun, capped);
    let _ = writeln!(out, "{}", bracketed(&controller.segments()));

    for (i, record) in result.matches.iter().enumerate() {
        let _ = write!(out, "{:>4}. {:?} at {}", i + 1, record.full_text, record.start_offset);
        if record.has_groups() {
            let groups: Vec<String> = record
                .groups
                .iter()
                .enumerate()
                .map(|(g, capture)| match capture {
                    Some(capture) => format!("{}={:?}", g + 1, capture.text),
                    None => format!("{}=(unmatched)", g + 1),
                })
                .collect();
            let _ = write!(out, "  groups: {}", groups.join(" "));
        }
        out.push('\n');
    }

    (out, Outcome::Matched)
}

/// The subject with every matched segment wrapped in `[` `]`
fn bracketed(segments: &[HighlightSegment]) -> String {
    segments
        .iter()
        .map(|s| {
            if s.is_match {
                format!("[{}]", s.text)
            } else {
                s.text.clone()
            }
        })
        .collect()
}
