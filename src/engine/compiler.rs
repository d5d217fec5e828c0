//! Pattern compilation
//!
//! Thin wrapper over the ECMAScript engine: turns a pattern source and a
//! flag set into a reusable matcher, or into the engine's diagnostic.

use regress::Regex;

use super::flags::FlagSet;
use crate::error::PatternError;

/// A pattern source together with its flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternSpec {
    pub source: String,
    pub flags: FlagSet,
}

impl PatternSpec {
    pub fn new(source: impl Into<String>, flags: FlagSet) -> Self {
        Self {
            source: source.into(),
            flags,
        }
    }

    /// `/source/flags`, the way the pattern field shows it
    pub fn literal(&self) -> String {
        format!("/{}/{}", self.source, self.flags)
    }
}

/// A compiled pattern bound to the spec it was built from
#[derive(Debug)]
pub struct CompiledMatcher {
    regex: Regex,
    spec: PatternSpec,
}

impl CompiledMatcher {
    pub fn spec(&self) -> &PatternSpec {
        &self.spec
    }

    pub(crate) fn regex(&self) -> &Regex {
        &self.regex
    }
}

/// Compile a pattern.
///
/// Empty sources are compiled like any other; deciding that an empty
/// pattern means "nothing to evaluate" is the controller's job.
pub fn compile(spec: &PatternSpec) -> Result<CompiledMatcher, PatternError> {
    let regex = Regex::with_flags(&spec.source, spec.flags.engine_flags())?;
    Ok(CompiledMatcher {
        regex,
        spec: spec.clone(),
    })
}
