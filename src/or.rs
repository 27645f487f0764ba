use crate::cursor::Cursor;
use crate::outcome::ParseOutcome;
use crate::parser::Parser;
use log::{debug, trace};

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// Both parsers run from the same starting cursor. Only a `Failure` from the
/// first parser lets the second one's outcome through; an `Error` is returned
/// as is, never replaced by a fallback.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
    name: String,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new<'code>(parser1: P1, parser2: P2) -> Self
    where
        P1: Parser<'code>,
        P2: Parser<'code, Output = P1::Output>,
    {
        let name = format!("{} | {}", parser1.name(), parser2.name());
        Or {
            parser1,
            parser2,
            name,
        }
    }
}

impl<'code, P1, P2, O> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    type Output = O;

    fn apply(&self, cursor: Cursor<'code>) -> ParseOutcome<'code, Self::Output> {
        // Both branches are evaluated; only the selection is conditional
        let first = self.parser1.apply(cursor);
        let second = self.parser2.apply(cursor);

        if first.is_failure() {
            trace!(
                "{}: backtracking to {} at offset {}",
                self.name,
                self.parser2.name(),
                cursor.position()
            );
        } else if first.is_error() {
            debug!(
                "{}: not backtracking past error at offset {}",
                self.name,
                first.next().position()
            );
        }

        first.alternative_or(second)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    Or::new(parser1, parser2)
}
