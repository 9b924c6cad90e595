//! Line classifier for the vocabulary export format.
//!
//! # Format
//! ```text
//! 2023-01-05
//! hello        sawasdee
//! bye: laa gorn
//! yes(chai)
//! ```
//!
//! A date-shaped line opens a period; every non-blank line after it
//! holds one term/translation pair until the next date line. Pair
//! lines come in three shapes (column-aligned, colon-delimited,
//! parenthesized), tried in that order.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ParseError, Result};
use crate::lesson::{Lesson, LessonBook};
use crate::types::{Pair, ParserMode};

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}[/-]\d{2}[/-]\d{2}$").expect("regex is valid"));

/// Parse a whole export into lessons ordered by period key.
///
/// The export source prepends a UTF-8 BOM; exactly one is stripped
/// from the very start of the content before classification.
pub fn parse(content: &str, mode: ParserMode) -> Result<Vec<(String, Lesson)>> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut book = LessonBook::new();
    for (idx, line) in content.lines().enumerate() {
        let line_num = idx + 1;
        match classify(line, line_num, mode)? {
            LineType::Blank => {}
            LineType::PeriodMarker(key) => book.start_lesson(&key),
            LineType::Pair(pair) => book.add_pair(pair, line_num, line)?,
        }
    }
    Ok(book.finish())
}

enum LineType {
    Blank,
    PeriodMarker(String),
    Pair(Pair),
}

fn classify(line: &str, line_num: usize, mode: ParserMode) -> Result<LineType> {
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (None, _) => Ok(LineType::Blank),
        (Some(token), None) => classify_single(line, token, line_num, mode),
        (Some(_), Some(_)) => split_pair(line, line_num, mode).map(LineType::Pair),
    }
}

/// A line that tokenizes to a single field is either a period marker
/// or, in full mode, possibly a compact `term(translation)` pair.
fn classify_single(line: &str, token: &str, line_num: usize, mode: ParserMode) -> Result<LineType> {
    if mode == ParserMode::Full && line.contains('(') {
        return split_pair(line, line_num, mode).map(LineType::Pair);
    }
    if DATE_RE.is_match(token) {
        return Ok(LineType::PeriodMarker(period_key(token)));
    }
    Err(ParseError::UnexpectedToken {
        line: line_num,
        text: line.to_string(),
    })
}

/// Normalize a matched `YYYY?MM?DD` token to the 7-char `YYYY-MM` key,
/// always `-` separated whatever the input used.
fn period_key(token: &str) -> String {
    format!("{}-{}", &token[0..4], &token[5..7])
}

/// Split a data line into (term, translation) using the first rule
/// that matches. Splits run on the original line, not the whitespace
/// tokens, so multi-word fields survive intact.
fn split_pair(line: &str, line_num: usize, mode: ParserMode) -> Result<Pair> {
    // Column-aligned exports leave a run of spaces between the fields.
    if let Some(i) = line.find("  ") {
        return Ok(Pair::new(line[..i].trim(), line[i + 2..].trim()));
    }

    if mode == ParserMode::Full {
        if let Some(i) = line.find(':') {
            return Ok(Pair::new(line[..i].trim(), line[i + 1..].trim()));
        }

        // Translation wrapped in parens, e.g. "to go (bpai)".
        if let (Some(i), Some(j)) = (line.find('('), line.rfind(')')) {
            if j > i {
                return Ok(Pair::new(line[..i].trim(), line[i + 1..j].trim()));
            }
        }
    }

    Err(ParseError::NoSeparator {
        line: line_num,
        text: line.to_string(),
    })
}
