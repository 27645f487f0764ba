use crate::cursor::Cursor;
use crate::outcome::ParseOutcome;
use crate::parser::Parser;

/// Parser combinator that picks the next parser based on the value just parsed
///
/// The continuation runs from the cursor the first parser stopped at.
pub struct Bind<P, F> {
    parser: P,
    continuation: F,
}

impl<P, F> Bind<P, F> {
    pub fn new(parser: P, continuation: F) -> Self {
        Bind {
            parser,
            continuation,
        }
    }
}

impl<'code, P, F, Q> Parser<'code> for Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    type Output = Q::Output;

    fn apply(&self, cursor: Cursor<'code>) -> ParseOutcome<'code, Self::Output> {
        self.parser.apply(cursor).bind_with_next(|value| {
            let next_parser = (self.continuation)(value);
            move |next| next_parser.apply(next)
        })
    }

    fn name(&self) -> &str {
        self.parser.name()
    }
}

/// Convenience function to create a Bind parser
pub fn bind<'code, P, F, Q>(parser: P, continuation: F) -> Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    Bind::new(parser, continuation)
}

/// Extension trait to add .bind() method support for parsers
pub trait BindExt<'code>: Parser<'code> + Sized {
    fn bind<F, Q>(self, continuation: F) -> Bind<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'code>,
    {
        Bind::new(self, continuation)
    }
}

impl<'code, P> BindExt<'code> for P where P: Parser<'code> {}
