use crate::outcome::OutcomeKind;
use std::borrow::Cow;
use std::fmt;
use std::num::ParseIntError;
use std::str::Utf8Error;
use thiserror::Error;

/// Why a parser did not succeed
///
/// Carried by both [`ParseOutcome::Failure`](crate::ParseOutcome::Failure)
/// and [`ParseOutcome::Error`](crate::ParseOutcome::Error); the variant of the
/// outcome, not the cause, decides whether alternation may backtrack.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input did not match what the parser was looking for
    #[error("expected {expected}")]
    Expected { expected: String },

    /// Fewer elements remained than the parser needs
    #[error("expected {expected}, but only {remaining} byte(s) remain")]
    EndOfInput { expected: String, remaining: usize },

    #[error("invalid integer {text:?}: {source}")]
    InvalidInteger {
        text: String,
        #[source]
        source: ParseIntError,
    },

    /// The field splits a multi-byte character or is not UTF-8 at all
    #[error("{expected} is not valid UTF-8: {source}")]
    InvalidUtf8 {
        expected: String,
        #[source]
        source: Utf8Error,
    },

    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i64, month: i64, day: i64 },

    /// Free-form cause for user-defined primitives
    #[error("{0}")]
    Custom(Cow<'static, str>),
}

impl ParseError {
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        ParseError::Custom(message.into())
    }
}

/// Line-oriented view of an input position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadablePosition {
    pub line: usize,
    pub byte_offset: usize,
}

/// A position inside the input, kept together with the input for reporting
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CodeLoc<'code> {
    code: &'code [u8],
    /// May lie past the end of `code`
    loc: usize,
}

impl<'code> CodeLoc<'code> {
    pub fn new(code: &'code [u8], loc: usize) -> Self {
        Self { code, loc }
    }

    pub fn position(&self) -> usize {
        self.loc
    }

    /// Line number (1-based) and byte offset within that line
    ///
    /// Records are byte-indexed, so the offset is in bytes rather than
    /// rendered columns.
    pub fn readable_position(&self) -> ReadablePosition {
        let before = &self.code[..self.loc.min(self.code.len())];
        let line_start = before
            .iter()
            .rposition(|&byte| byte == b'\n')
            .map_or(0, |newline| newline + 1);

        ReadablePosition {
            line: 1 + before.iter().filter(|&&byte| byte == b'\n').count(),
            byte_offset: self.loc - line_start,
        }
    }

    /// Up to two lines either side of the position, with a pointer under it
    pub fn context_lines(&self) -> Vec<String> {
        let pos = self.readable_position();
        let text = String::from_utf8_lossy(self.code);
        let first = pos.line.saturating_sub(2);
        let last = pos.line + 2;

        let mut lines = Vec::new();
        for (index, content) in text.split('\n').enumerate() {
            let current_line = index + 1;
            if current_line < first || current_line > last {
                continue;
            }
            let prefix = if current_line == pos.line {
                format!("  > {} | ", current_line)
            } else {
                format!("    {} | ", current_line)
            };
            lines.push(format!("{}{}", prefix, content));

            if current_line == pos.line {
                let pointer_offset = prefix.len() + pos.byte_offset;
                lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
            }
        }

        lines
    }
}

impl fmt::Display for CodeLoc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos = self.readable_position();
        write!(f, "line {}, byte offset {}", pos.line, pos.byte_offset)
    }
}

/// A non-successful outcome lifted out of the combinator algebra
///
/// Returned by [`ParseOutcome::value_or_fail`](crate::ParseOutcome::value_or_fail)
/// for callers that want ordinary `?` propagation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parse {kind} at {loc}: {cause}")]
pub struct ParseFault<'code> {
    pub kind: OutcomeKind,
    #[source]
    pub cause: ParseError,
    pub loc: CodeLoc<'code>,
}

impl ParseFault<'_> {
    pub fn position(&self) -> usize {
        self.loc.position()
    }

    /// Multi-line rendering with the surrounding input
    pub fn report(&self) -> String {
        let mut out = format!("{}\n\n", self);
        for line in self.loc.context_lines() {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}
