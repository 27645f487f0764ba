use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::outcome::ParseOutcome;
use crate::parser::Parser;

/// Parser that takes a field of exactly `width` bytes and trims it
pub struct FixedWidth {
    width: usize,
    name: String,
}

impl FixedWidth {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            name: format!("string({})", width),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }
}

impl<'code> Parser<'code> for FixedWidth {
    type Output = String;

    fn apply(&self, cursor: Cursor<'code>) -> ParseOutcome<'code, Self::Output> {
        if !cursor.has_at_least(self.width) {
            return ParseOutcome::failure(
                ParseError::EndOfInput {
                    expected: self.name.clone(),
                    remaining: cursor.remaining_len().max(0) as usize,
                },
                cursor,
            );
        }

        let field = cursor.peek(self.width);
        match std::str::from_utf8(&field) {
            Ok(text) => ParseOutcome::success(text.trim().to_owned(), cursor.advance(self.width)),
            Err(source) => ParseOutcome::failure(
                ParseError::InvalidUtf8 {
                    expected: self.name.clone(),
                    source,
                },
                cursor,
            ),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Convenience function to create a FixedWidth parser
pub fn fixed_width(width: usize) -> FixedWidth {
    FixedWidth::new(width)
}
