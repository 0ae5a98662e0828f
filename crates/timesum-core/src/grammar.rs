//! Grammar classification for time expression tokens.
//!
//! A token must match one of three shapes over its entire length:
//!
//! - **Range**: `H[H]:M[M]-H[H]:M[M]` — two clock times joined by `-`
//! - **Absolute**: `H[H]:M[M]` — a single clock time
//! - **Decimal**: `digits` or `digits.digits` — hours as a decimal number
//!
//! Classification is purely structural; hour/minute bounds are checked later
//! by the converters. A token that merely *contains* a valid shape does not
//! count — the patterns are anchored on both ends, so partial matches are
//! impossible by construction.

use regex::Regex;

// [0-9] rather than \d: the converters rely on receiving ASCII digits only.
const RANGE: &str = r"^([0-9]{1,2}):([0-9]{1,2})-([0-9]{1,2}):([0-9]{1,2})$";
const ABSOLUTE: &str = r"^([0-9]{1,2}):([0-9]{1,2})$";
const DECIMAL: &str = r"^([0-9]+)(?:\.([0-9]+))?$";

/// The grammar category a token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Two clock times joined by `-`, e.g. `07:45-11:19`.
    Range,
    /// A single clock time, e.g. `14:30`.
    Absolute,
    /// Hours as a decimal number, e.g. `2.25` or bare `3`.
    Decimal,
    /// The token matched none of the grammars in full.
    Unrecognized,
}

/// The three compiled token grammars.
///
/// Built once per invocation and shared by reference across all tokens;
/// immutable after construction.
#[derive(Debug)]
pub struct Grammar {
    range: Regex,
    absolute: Regex,
    decimal: Regex,
}

impl Grammar {
    pub fn new() -> Self {
        Self {
            range: Regex::new(RANGE).expect("range pattern compiles"),
            absolute: Regex::new(ABSOLUTE).expect("absolute pattern compiles"),
            decimal: Regex::new(DECIMAL).expect("decimal pattern compiles"),
        }
    }

    /// Classify a token by the first grammar it matches in full.
    ///
    /// The shapes cannot overlap, but the probe order is fixed — range, then
    /// absolute, then decimal — to keep the historical precedence.
    pub fn classify(&self, token: &str) -> Shape {
        if self.range.is_match(token) {
            Shape::Range
        } else if self.absolute.is_match(token) {
            Shape::Absolute
        } else if self.decimal.is_match(token) {
            Shape::Decimal
        } else {
            Shape::Unrecognized
        }
    }

    /// Captured digit groups of a range token: start hour, start minute,
    /// end hour, end minute.
    pub(crate) fn range_fields<'t>(&self, token: &'t str) -> Option<[&'t str; 4]> {
        let caps = self.range.captures(token)?;
        Some([
            caps.get(1)?.as_str(),
            caps.get(2)?.as_str(),
            caps.get(3)?.as_str(),
            caps.get(4)?.as_str(),
        ])
    }

    /// Captured digit groups of an absolute token: hour and minute.
    pub(crate) fn clock_fields<'t>(&self, token: &'t str) -> Option<[&'t str; 2]> {
        let caps = self.absolute.captures(token)?;
        Some([caps.get(1)?.as_str(), caps.get(2)?.as_str()])
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::new()
    }
}
