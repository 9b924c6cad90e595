//! Core library for splitting a flat vocabulary export into
//! per-period flashcard import files.
//!
//! Provides:
//! - Line classifier for the mixed export format (date markers,
//!   column-aligned / colon / parenthesized pairs)
//! - Lesson aggregation with per-period dedup
//! - Tab-separated writer, one file per period

pub mod convert;
pub mod error;
pub mod lesson;
pub mod parser;
pub mod types;
pub mod writer;

pub use convert::convert_file;
pub use error::{ConvertError, ParseError, Result};
pub use lesson::{Lesson, LessonBook};
pub use parser::parse;
pub use types::{Pair, ParserMode};
