use crate::cursor::Cursor;
use crate::outcome::ParseOutcome;
use log::trace;
use std::borrow::Cow;

/// Core parser trait for parser combinators
pub trait Parser<'code> {
    type Output;

    /// Run this parser from the given cursor position
    ///
    /// Must be pure: applying the same parser to the same cursor always
    /// yields the same outcome.
    fn apply(&self, cursor: Cursor<'code>) -> ParseOutcome<'code, Self::Output>;

    /// Diagnostic label; never affects matching
    fn name(&self) -> &str {
        ""
    }
}

/// Parser backed by a plain function from cursor to outcome
pub struct FnParser<F> {
    func: F,
    name: Cow<'static, str>,
}

impl<'code, F, O> Parser<'code> for FnParser<F>
where
    F: Fn(Cursor<'code>) -> ParseOutcome<'code, O>,
{
    type Output = O;

    fn apply(&self, cursor: Cursor<'code>) -> ParseOutcome<'code, Self::Output> {
        (self.func)(cursor)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Build a parser from a raw matching function
///
/// This is where user-defined primitives live, and the only place an
/// [`ParseOutcome::Error`] can originate.
pub fn from_fn<'code, F, O>(func: F) -> FnParser<F>
where
    F: Fn(Cursor<'code>) -> ParseOutcome<'code, O>,
{
    FnParser {
        func,
        name: Cow::Borrowed(""),
    }
}

/// Same as [`from_fn`], with a diagnostic name
pub fn from_fn_named<'code, F, O>(name: impl Into<Cow<'static, str>>, func: F) -> FnParser<F>
where
    F: Fn(Cursor<'code>) -> ParseOutcome<'code, O>,
{
    FnParser {
        func,
        name: name.into(),
    }
}

/// Apply `parser` to `input` from offset 0
pub fn parse<'code, P>(input: &'code str, parser: &P) -> ParseOutcome<'code, P::Output>
where
    P: Parser<'code>,
{
    parse_bytes(input.as_bytes(), parser)
}

pub fn parse_bytes<'code, P>(input: &'code [u8], parser: &P) -> ParseOutcome<'code, P::Output>
where
    P: Parser<'code>,
{
    trace!("applying {} to {} byte(s)", parser.name(), input.len());
    parser.apply(Cursor::new(input))
}
