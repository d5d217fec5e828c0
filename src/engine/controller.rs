//! Live evaluation state
//!
//! The controller owns the pattern, flags and subject text and rebuilds its
//! result from scratch whenever one of them changes. Every setter goes
//! through [`Controller::recompute`]; callers that mutate the inputs some
//! other way must call it themselves.

use tracing::{debug, trace};

use super::compiler::{compile, PatternSpec};
use super::enumerate::{enumerate, MatchRecord};
use super::flags::{Flag, FlagSet};
use super::highlight::{render, HighlightSegment};
use crate::error::PatternError;

/// Matches produced by one evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationResult {
    pub matches: Vec<MatchRecord>,
    pub matched: bool,
}

impl EvaluationResult {
    fn new(matches: Vec<MatchRecord>) -> Self {
        let matched = !matches.is_empty();
        Self { matches, matched }
    }

    /// Whether any match has capturing groups to list
    pub fn has_groups(&self) -> bool {
        self.matches.iter().any(MatchRecord::has_groups)
    }
}

/// Why the last evaluation failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationError {
    pub message: String,
}

impl From<PatternError> for EvaluationError {
    fn from(err: PatternError) -> Self {
        Self {
            message: err.message,
        }
    }
}

/// Observable controller state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EvalState {
    /// The pattern is empty or blank; nothing to show
    #[default]
    Idle,
    Ready(EvaluationResult),
    Failed(EvaluationError),
}

impl EvalState {
    pub fn is_idle(&self) -> bool {
        matches!(self, EvalState::Idle)
    }
}

/// Compile `spec` and enumerate its matches against `subject`
pub fn evaluate(spec: &PatternSpec, subject: &str) -> Result<EvaluationResult, PatternError> {
    let matcher = compile(spec)?;
    let matches = enumerate(&matcher, subject, spec.flags.is_global());
    Ok(EvaluationResult::new(matches))
}

/// Owner of the pattern/flags/subject triple and its evaluation
#[derive(Debug, Default)]
pub struct Controller {
    spec: PatternSpec,
    subject: String,
    state: EvalState,
}

impl Controller {
    /// Create a controller with the given starting flags
    pub fn new(flags: FlagSet) -> Self {
        Self {
            spec: PatternSpec::new(String::new(), flags),
            subject: String::new(),
            state: EvalState::Idle,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.spec.source
    }

    pub fn flags(&self) -> &FlagSet {
        &self.spec.flags
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn spec(&self) -> &PatternSpec {
        &self.spec
    }

    pub fn state(&self) -> &EvalState {
        &self.state
    }

    /// The latest result, if the last evaluation succeeded
    pub fn result(&self) -> Option<&EvaluationResult> {
        match &self.state {
            EvalState::Ready(result) => Some(result),
            _ => None,
        }
    }

    /// The latest error, if the last evaluation failed
    pub fn error(&self) -> Option<&EvaluationError> {
        match &self.state {
            EvalState::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn set_pattern(&mut self, pattern: impl Into<String>) {
        self.spec.source = pattern.into();
        self.recompute();
    }

    pub fn set_flags(&mut self, flags: FlagSet) {
        self.spec.flags = flags;
        self.recompute();
    }

    /// Flip one flag; returns whether it is now set
    pub fn toggle_flag(&mut self, flag: Flag) -> bool {
        let enabled = self.spec.flags.toggle(flag);
        self.recompute();
        enabled
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.subject = subject.into();
        self.recompute();
    }

    /// Replace pattern and subject together with a single recompute
    pub fn load_example(&mut self, pattern: impl Into<String>, subject: impl Into<String>) {
        self.spec.source = pattern.into();
        self.subject = subject.into();
        self.recompute();
    }

    /// Discard the current state and evaluate the inputs again
    pub fn recompute(&mut self) {
        self.state = if self.spec.source.trim().is_empty() {
            EvalState::Idle
        } else {
            match evaluate(&self.spec, &self.subject) {
                Ok(result) => {
                    trace!(
                        pattern = %self.spec.literal(),
                        matches = result.matches.len(),
                        "evaluated pattern"
                    );
                    EvalState::Ready(result)
                }
                Err(err) => {
                    debug!(pattern = %self.spec.literal(), error = %err, "pattern rejected");
                    EvalState::Failed(err.into())
                }
            }
        };
    }

    /// The subject split for display.
    ///
    /// Without a result the whole subject is one plain segment.
    pub fn segments(&self) -> Vec<HighlightSegment> {
        match &self.state {
            EvalState::Ready(result) => render(&self.subject, &result.matches),
            _ if self.subject.is_empty() => Vec::new(),
            _ => vec![HighlightSegment::plain(self.subject.as_str())],
        }
    }
}
