use crate::cursor::Cursor;
use crate::outcome::ParseOutcome;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser combinator that relabels another parser for diagnostics
pub struct Named<P> {
    parser: P,
    name: Cow<'static, str>,
}

impl<P> Named<P> {
    pub fn new(parser: P, name: impl Into<Cow<'static, str>>) -> Self {
        Named {
            parser,
            name: name.into(),
        }
    }
}

impl<'code, P> Parser<'code> for Named<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn apply(&self, cursor: Cursor<'code>) -> ParseOutcome<'code, Self::Output> {
        self.parser.apply(cursor)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Extension trait to add .with_name() method support for parsers
pub trait NamedExt<'code>: Parser<'code> + Sized {
    fn with_name(self, name: impl Into<Cow<'static, str>>) -> Named<Self> {
        Named::new(self, name)
    }
}

impl<'code, P> NamedExt<'code> for P where P: Parser<'code> {}
