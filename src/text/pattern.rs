use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::outcome::ParseOutcome;
use crate::parser::Parser;
use regex::bytes::Regex;

/// Parser that matches a regular expression anchored at the current position
///
/// A match found further along the input does not count; the pattern has to
/// match starting exactly at the cursor.
pub struct Pattern {
    regex: Regex,
    name: String,
}

impl Pattern {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!(r"\A(?:{})", pattern))?;
        Ok(Self {
            regex,
            name: format!("/{}/", pattern),
        })
    }
}

impl<'code> Parser<'code> for Pattern {
    type Output = String;

    fn apply(&self, cursor: Cursor<'code>) -> ParseOutcome<'code, Self::Output> {
        let start = cursor.position().min(cursor.source().len());
        let rest = &cursor.source()[start..];

        match self.regex.find(rest) {
            Some(found) => match std::str::from_utf8(found.as_bytes()) {
                Ok(text) => ParseOutcome::success(text.to_owned(), cursor.advance(found.end())),
                Err(source) => ParseOutcome::failure(
                    ParseError::InvalidUtf8 {
                        expected: self.name.clone(),
                        source,
                    },
                    cursor,
                ),
            },
            None => ParseOutcome::failure(
                ParseError::Expected {
                    expected: self.name.clone(),
                },
                cursor,
            ),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Convenience function to create a Pattern parser
pub fn pattern(pattern: &str) -> Result<Pattern, regex::Error> {
    Pattern::new(pattern)
}
