//! Lesson grouping: the per-period pair collection and the aggregation
//! state that folds classified lines into it.

use std::collections::{HashMap, HashSet};

use crate::error::{ParseError, Result};
use crate::types::Pair;

/// Ordered, deduplicated pairs belonging to one period.
#[derive(Debug, Clone, Default)]
pub struct Lesson {
    pairs: Vec<Pair>,
    seen: HashSet<(String, String)>,
}

impl Lesson {
    /// Append a pair unless an identical one is already present.
    /// Re-adding a known pair is a silent no-op.
    pub fn add(&mut self, pair: Pair) {
        let key = (pair.term.clone(), pair.translation.clone());
        if self.seen.insert(key) {
            self.pairs.push(pair);
        }
    }

    /// Pairs in first-seen order.
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// All lessons discovered so far, keyed by period, plus the cursor for
/// the period currently being filled.
#[derive(Debug, Default)]
pub struct LessonBook {
    lessons: HashMap<String, Lesson>,
    active_key: Option<String>,
}

impl LessonBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `key` the active period, creating its lesson on first
    /// sight. A marker repeating the active key leaves the state
    /// untouched; a key seen earlier in the input reopens its existing
    /// lesson rather than starting over.
    pub fn start_lesson(&mut self, key: &str) {
        if self.active_key.as_deref() == Some(key) {
            return;
        }
        self.lessons.entry(key.to_string()).or_default();
        self.active_key = Some(key.to_string());
    }

    /// Add a pair to the active lesson. `line` and `text` identify the
    /// source line for the error raised when no period marker has been
    /// seen yet.
    pub fn add_pair(&mut self, pair: Pair, line: usize, text: &str) -> Result<()> {
        match &self.active_key {
            Some(key) => {
                self.lessons.entry(key.clone()).or_default().add(pair);
                Ok(())
            }
            None => Err(ParseError::PairBeforeDate {
                line,
                text: text.to_string(),
            }),
        }
    }

    /// Number of distinct periods seen.
    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    /// Consume the book, yielding lessons sorted ascending by period
    /// key (lexicographic, which is chronological for YYYY-MM keys).
    pub fn finish(self) -> Vec<(String, Lesson)> {
        let mut out: Vec<_> = self.lessons.into_iter().collect();
        out.sort_by(|a, b| a.0.cmp(&b.0));
        out
    }
}
