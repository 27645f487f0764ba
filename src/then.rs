use crate::cursor::Cursor;
use crate::outcome::ParseOutcome;
use crate::parser::Parser;

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Chaining produces nested pairs. Nesting to the right,
/// `a.then(b.then(c))`, gives `(a, (b, c))`, which is the usual shape for a
/// record decoded field by field.
///
/// ```
/// use fixcomb::number::integer;
/// use fixcomb::text::literal;
/// use fixcomb::then::ThenExt;
/// use fixcomb::parse;
///
/// let parser = literal("GL").then(literal("EC").then(integer(24)));
/// let (gl, (ec, n)) = parse("GLEC24", &parser).value_or_fail().unwrap();
/// assert_eq!(gl, "GL");
/// assert_eq!(ec, "EC");
/// assert_eq!(n, 24);
/// ```
pub struct Then<P1, P2> {
    parser1: P1,
    parser2: P2,
    name: String,
}

impl<P1, P2> Then<P1, P2> {
    pub fn new<'code>(parser1: P1, parser2: P2) -> Self
    where
        P1: Parser<'code>,
        P2: Parser<'code>,
    {
        let name = format!("{} ~ {}", parser1.name(), parser2.name());
        Then {
            parser1,
            parser2,
            name,
        }
    }
}

impl<'code, P1, P2> Parser<'code> for Then<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = (P1::Output, P2::Output);

    fn apply(&self, cursor: Cursor<'code>) -> ParseOutcome<'code, Self::Output> {
        self.parser1.apply(cursor).bind_with_next(|first| {
            move |next| self.parser2.apply(next).map(|second| (first, second))
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Convenience function to create a Then parser
pub fn then<'code, P1, P2>(parser1: P1, parser2: P2) -> Then<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    Then::new(parser1, parser2)
}

/// Extension trait to add .then() method support for parsers
pub trait ThenExt<'code>: Parser<'code> + Sized {
    fn then<P>(self, other: P) -> Then<Self, P>
    where
        P: Parser<'code>,
    {
        Then::new(self, other)
    }
}

/// Implement ThenExt for all parsers
impl<'code, P> ThenExt<'code> for P where P: Parser<'code> {}
