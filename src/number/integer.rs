use crate::bind::BindExt;
use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::named::NamedExt;
use crate::outcome::ParseOutcome;
use crate::parser::{Parser, from_fn};
use crate::text::{fixed_width, literal};

/// Decode the text produced by `parser` as a signed decimal integer
///
/// A malformed numeral is a `Failure`, so an `or` around the field can still
/// fall back to another layout.
pub fn to_integer<'code, P>(parser: P) -> impl Parser<'code, Output = i64>
where
    P: Parser<'code>,
    P::Output: AsRef<str>,
{
    parser.bind(|text: P::Output| from_fn(move |next| decode(text.as_ref(), next)))
}

/// Parser that matches the decimal rendering of `value` exactly
pub fn integer<'code>(value: i64) -> impl Parser<'code, Output = i64> {
    let rendered = value.to_string();
    to_integer(literal(rendered.clone())).with_name(rendered)
}

/// Parser that reads a fixed-width numeric field, ignoring surrounding blanks
pub fn integer_of_size<'code>(width: usize) -> impl Parser<'code, Output = i64> {
    to_integer(fixed_width(width)).with_name(format!("integer({})", width))
}

fn decode<'code>(text: &str, next: Cursor<'code>) -> ParseOutcome<'code, i64> {
    match text.parse::<i64>() {
        Ok(value) => ParseOutcome::success(value, next),
        Err(source) => ParseOutcome::failure(
            ParseError::InvalidInteger {
                text: text.to_owned(),
                source,
            },
            next,
        ),
    }
}
