//! Live pattern evaluation
//!
//! Compiles a pattern, enumerates its matches against the subject text and
//! splits the subject into highlighted runs. [`Controller`] ties the pieces
//! together and is the only thing the display talks to.

mod compiler;
mod controller;
mod enumerate;
mod flags;
mod highlight;

pub use compiler::{compile, CompiledMatcher, PatternSpec};
pub use controller::{evaluate, Controller, EvalState, EvaluationError, EvaluationResult};
pub use enumerate::{enumerate, Capture, MatchRecord, MAX_MATCHES};
pub use flags::{Flag, FlagSet};
pub use highlight::{render, GroupAnnotation, HighlightSegment};
