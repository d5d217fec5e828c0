//! Regex flag codes
//!
//! The six single-character modifiers a pattern can carry. A `FlagSet`
//! remembers the order flags were switched on so it prints back the way
//! the user typed it.

use std::fmt;

use crate::error::PatternError;

/// A single regex flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    /// `g` - find every match instead of the first
    Global,
    /// `i` - case-insensitive matching
    IgnoreCase,
    /// `m` - `^` and `$` match at line boundaries
    Multiline,
    /// `s` - `.` also matches line terminators
    DotAll,
    /// `u` - unicode mode
    Unicode,
    /// `y` - matches must start exactly at the search position
    Sticky,
}

impl Flag {
    /// All flags, in the order the flag selector shows them
    pub const ALL: [Flag; 6] = [
        Flag::Global,
        Flag::IgnoreCase,
        Flag::Multiline,
        Flag::DotAll,
        Flag::Unicode,
        Flag::Sticky,
    ];

    /// The flag's code character
    pub fn code(&self) -> char {
        match self {
            Flag::Global => 'g',
            Flag::IgnoreCase => 'i',
            Flag::Multiline => 'm',
            Flag::DotAll => 's',
            Flag::Unicode => 'u',
            Flag::Sticky => 'y',
        }
    }

    /// Parse a flag from its code character
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'g' => Some(Flag::Global),
            'i' => Some(Flag::IgnoreCase),
            'm' => Some(Flag::Multiline),
            's' => Some(Flag::DotAll),
            'u' => Some(Flag::Unicode),
            'y' => Some(Flag::Sticky),
            _ => None,
        }
    }

    /// Short description used in the flag legend
    pub fn description(&self) -> &'static str {
        match self {
            Flag::Global => "global",
            Flag::IgnoreCase => "case-insensitive",
            Flag::Multiline => "multiline",
            Flag::DotAll => "dot matches newlines",
            Flag::Unicode => "unicode",
            Flag::Sticky => "sticky",
        }
    }
}

/// An ordered set of flags with no duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagSet {
    flags: Vec<Flag>,
}

impl FlagSet {
    /// Create an empty flag set
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a flag string such as `"gi"`.
    ///
    /// Unknown codes and repeated codes are rejected, the same way the
    /// engine rejects them when they are passed alongside a pattern.
    pub fn parse(s: &str) -> Result<Self, PatternError> {
        let mut set = Self::new();
        for ch in s.chars() {
            match Flag::from_code(ch) {
                Some(flag) if !set.contains(flag) => set.flags.push(flag),
                _ => {
                    return Err(PatternError::new(format!(
                        "Invalid flags supplied to RegExp constructor '{}'",
                        s
                    )))
                }
            }
        }
        Ok(set)
    }

    /// Check whether a flag is set
    pub fn contains(&self, flag: Flag) -> bool {
        self.flags.contains(&flag)
    }

    /// Switch a flag on, keeping its position if already present
    pub fn insert(&mut self, flag: Flag) {
        if !self.contains(flag) {
            self.flags.push(flag);
        }
    }

    /// Switch a flag off
    pub fn remove(&mut self, flag: Flag) {
        self.flags.retain(|f| *f != flag);
    }

    /// Flip a flag; returns whether it is now set
    pub fn toggle(&mut self, flag: Flag) -> bool {
        if self.contains(flag) {
            self.remove(flag);
            false
        } else {
            self.flags.push(flag);
            true
        }
    }

    /// Iterate flags in display order
    pub fn iter(&self) -> impl Iterator<Item = Flag> + '_ {
        self.flags.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn is_global(&self) -> bool {
        self.contains(Flag::Global)
    }

    pub fn is_sticky(&self) -> bool {
        self.contains(Flag::Sticky)
    }

    /// Engine-level flags; `g` and `y` are handled by the enumerator
    pub(crate) fn engine_flags(&self) -> regress::Flags {
        regress::Flags {
            icase: self.contains(Flag::IgnoreCase),
            multiline: self.contains(Flag::Multiline),
            dot_all: self.contains(Flag::DotAll),
            unicode: self.contains(Flag::Unicode),
            ..regress::Flags::default()
        }
    }
}

impl fmt::Display for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for flag in &self.flags {
            write!(f, "{}", flag.code())?;
        }
        Ok(())
    }
}
