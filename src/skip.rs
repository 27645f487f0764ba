use crate::cursor::Cursor;
use crate::outcome::ParseOutcome;
use crate::parser::Parser;

/// Sequence two parsers, keeping only the right-hand value
pub struct SkipThen<P1, P2> {
    skipped: P1,
    parser: P2,
    name: String,
}

impl<P1, P2> SkipThen<P1, P2> {
    pub fn new<'code>(skipped: P1, parser: P2) -> Self
    where
        P1: Parser<'code>,
        P2: Parser<'code>,
    {
        let name = format!("[{}] ~ {}", skipped.name(), parser.name());
        SkipThen {
            skipped,
            parser,
            name,
        }
    }
}

impl<'code, P1, P2> Parser<'code> for SkipThen<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P2::Output;

    fn apply(&self, cursor: Cursor<'code>) -> ParseOutcome<'code, Self::Output> {
        self.skipped
            .apply(cursor)
            .bind_with_next(|_| |next| self.parser.apply(next))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Sequence two parsers, keeping only the left-hand value
pub struct Skip<P1, P2> {
    parser: P1,
    skipped: P2,
    name: String,
}

impl<P1, P2> Skip<P1, P2> {
    pub fn new<'code>(parser: P1, skipped: P2) -> Self
    where
        P1: Parser<'code>,
        P2: Parser<'code>,
    {
        let name = format!("{} ~ [{}]", parser.name(), skipped.name());
        Skip {
            parser,
            skipped,
            name,
        }
    }
}

impl<'code, P1, P2> Parser<'code> for Skip<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P1::Output;

    fn apply(&self, cursor: Cursor<'code>) -> ParseOutcome<'code, Self::Output> {
        self.parser.apply(cursor).bind_with_next(|value| {
            move |next| self.skipped.apply(next).map(|_| value)
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Extension trait to add .skip_then() and .skip() method support for parsers
pub trait SkipExt<'code>: Parser<'code> + Sized {
    /// Match `self`, discard it, then match `other`
    fn skip_then<P>(self, other: P) -> SkipThen<Self, P>
    where
        P: Parser<'code>,
    {
        SkipThen::new(self, other)
    }

    /// Match `self`, then match and discard `other`
    fn skip<P>(self, other: P) -> Skip<Self, P>
    where
        P: Parser<'code>,
    {
        Skip::new(self, other)
    }
}

impl<'code, P> SkipExt<'code> for P where P: Parser<'code> {}
