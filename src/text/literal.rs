use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::outcome::ParseOutcome;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser that matches an exact string at the current position
pub struct Literal {
    expected: Cow<'static, str>,
    name: String,
}

impl Literal {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        let expected = expected.into();
        let name = format!("\"{}\"", expected);
        Self { expected, name }
    }
}

impl<'code> Parser<'code> for Literal {
    type Output = Cow<'static, str>;

    fn apply(&self, cursor: Cursor<'code>) -> ParseOutcome<'code, Self::Output> {
        let size = self.expected.len();

        if !cursor.has_at_least(size) {
            return ParseOutcome::failure(
                ParseError::EndOfInput {
                    expected: self.name.clone(),
                    remaining: cursor.remaining_len().max(0) as usize,
                },
                cursor,
            );
        }

        if cursor.peek(size).as_ref() == self.expected.as_bytes() {
            // Clone is cheap here - just copies the reference for &'static str
            ParseOutcome::success(self.expected.clone(), cursor.advance(size))
        } else {
            ParseOutcome::failure(
                ParseError::Expected {
                    expected: self.name.clone(),
                },
                cursor,
            )
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Convenience function to create a Literal parser
pub fn literal(expected: impl Into<Cow<'static, str>>) -> Literal {
    Literal::new(expected)
}
