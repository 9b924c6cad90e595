//! Core types shared by the parser and writer.

use serde::{Deserialize, Serialize};

/// One term/translation record extracted from a data line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair {
    pub term: String,
    pub translation: String,
}

impl Pair {
    pub fn new(term: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            translation: translation.into(),
        }
    }
}

/// Which separator heuristics the parser applies.
///
/// The export format is inconsistent: fields may be column-aligned with
/// wide gaps, colon-delimited, or parenthesized. `Full` accepts all of
/// them in priority order; `DoubleSpaceOnly` accepts only the
/// column-aligned form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParserMode {
    Full,
    DoubleSpaceOnly,
}

impl Default for ParserMode {
    fn default() -> Self {
        Self::Full
    }
}
