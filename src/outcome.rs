use crate::cursor::Cursor;
use crate::error::{CodeLoc, ParseError, ParseFault};
use log::debug;
use std::fmt;

/// Which of the three outcomes a parse produced
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    Success,
    Failure,
    Error,
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OutcomeKind::Success => "success",
            OutcomeKind::Failure => "failure",
            OutcomeKind::Error => "error",
        };
        f.write_str(label)
    }
}

/// Result of applying a parser to a cursor
///
/// `Failure` means "this alternative did not match" and lets
/// [`or`](crate::or::OrExt::or) try the next branch. `Error` means the whole
/// attempt must stop: no combinator will ever fall back past it. Every
/// variant carries a cursor so failures can be reported with a position.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome<'code, O> {
    Success { value: O, next: Cursor<'code> },
    Failure { cause: ParseError, next: Cursor<'code> },
    Error { cause: ParseError, next: Cursor<'code> },
}

impl<'code, O> ParseOutcome<'code, O> {
    pub fn success(value: O, next: Cursor<'code>) -> Self {
        ParseOutcome::Success { value, next }
    }

    pub fn failure(cause: ParseError, next: Cursor<'code>) -> Self {
        ParseOutcome::Failure { cause, next }
    }

    pub fn error(cause: ParseError, next: Cursor<'code>) -> Self {
        ParseOutcome::Error { cause, next }
    }

    pub fn kind(&self) -> OutcomeKind {
        match self {
            ParseOutcome::Success { .. } => OutcomeKind::Success,
            ParseOutcome::Failure { .. } => OutcomeKind::Failure,
            ParseOutcome::Error { .. } => OutcomeKind::Error,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ParseOutcome::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ParseOutcome::Failure { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ParseOutcome::Error { .. })
    }

    /// Cursor after the consumed input, or where the parser gave up
    pub fn next(&self) -> Cursor<'code> {
        match self {
            ParseOutcome::Success { next, .. }
            | ParseOutcome::Failure { next, .. }
            | ParseOutcome::Error { next, .. } => *next,
        }
    }

    pub fn value(&self) -> Option<&O> {
        match self {
            ParseOutcome::Success { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn cause(&self) -> Option<&ParseError> {
        match self {
            ParseOutcome::Success { .. } => None,
            ParseOutcome::Failure { cause, .. } | ParseOutcome::Error { cause, .. } => Some(cause),
        }
    }

    pub fn map<U, F>(self, f: F) -> ParseOutcome<'code, U>
    where
        F: FnOnce(O) -> U,
    {
        match self {
            ParseOutcome::Success { value, next } => ParseOutcome::Success {
                value: f(value),
                next,
            },
            ParseOutcome::Failure { cause, next } => ParseOutcome::Failure { cause, next },
            ParseOutcome::Error { cause, next } => ParseOutcome::Error { cause, next },
        }
    }

    /// Feed the value into a continuation and run it from this outcome's cursor
    ///
    /// This is how sequencing threads the position forward. Failure and Error
    /// never invoke `f`.
    pub fn bind_with_next<U, F, K>(self, f: F) -> ParseOutcome<'code, U>
    where
        F: FnOnce(O) -> K,
        K: FnOnce(Cursor<'code>) -> ParseOutcome<'code, U>,
    {
        match self {
            ParseOutcome::Success { value, next } => f(value)(next),
            ParseOutcome::Failure { cause, next } => ParseOutcome::Failure { cause, next },
            ParseOutcome::Error { cause, next } => ParseOutcome::Error { cause, next },
        }
    }

    pub fn value_or(self, default: O) -> O {
        match self {
            ParseOutcome::Success { value, .. } => value,
            _ => default,
        }
    }

    /// Leave the algebra: the value, or the cause as an ordinary error
    pub fn value_or_fail(self) -> Result<O, ParseFault<'code>> {
        let kind = self.kind();
        match self {
            ParseOutcome::Success { value, .. } => Ok(value),
            ParseOutcome::Failure { cause, next } | ParseOutcome::Error { cause, next } => {
                let fault = ParseFault {
                    kind,
                    cause,
                    loc: CodeLoc::new(next.source(), next.position()),
                };
                debug!("{}", fault);
                Err(fault)
            }
        }
    }

    /// Backtracking rule
    ///
    /// Success keeps itself, Failure yields `other`, Error keeps itself so a
    /// fallback branch can never hide it.
    pub fn alternative_or(self, other: Self) -> Self {
        match self {
            ParseOutcome::Failure { .. } => other,
            ParseOutcome::Success { .. } | ParseOutcome::Error { .. } => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom(message: &'static str) -> ParseError {
        ParseError::custom(message)
    }

    #[test]
    fn test_bind_with_next_threads_cursor() {
        let source = b"2442";
        let outcome = ParseOutcome::success("24", Cursor::at(source, 2))
            .bind_with_next(|text| move |next| ParseOutcome::success(text.parse::<i64>(), next));

        assert_eq!(outcome.next().position(), 2);
        assert_eq!(outcome.value_or_fail().unwrap(), Ok(24));
    }

    #[test]
    fn test_bind_with_next_short_circuits() {
        let cursor = Cursor::from("abc");
        let failure: ParseOutcome<i64> = ParseOutcome::failure(custom("nope"), cursor);
        let error: ParseOutcome<i64> = ParseOutcome::error(custom("broken"), cursor);

        let mapped = failure.bind_with_next(|_| -> fn(Cursor) -> ParseOutcome<i64> {
            panic!("continuation must not run after a failure")
        });
        assert!(mapped.is_failure());

        let mapped = error.bind_with_next(|_| -> fn(Cursor) -> ParseOutcome<i64> {
            panic!("continuation must not run after an error")
        });
        assert!(mapped.is_error());
    }

    #[test]
    fn test_map() {
        let cursor = Cursor::from("abc").advance(3);

        let success = ParseOutcome::success("abc", cursor).map(str::len);
        assert_eq!(success, ParseOutcome::success(3, cursor));

        let failure = ParseOutcome::<&str>::failure(custom("nope"), cursor).map(str::len);
        assert_eq!(failure, ParseOutcome::failure(custom("nope"), cursor));

        let error = ParseOutcome::<&str>::error(custom("broken"), cursor).map(str::len);
        assert_eq!(error, ParseOutcome::error(custom("broken"), cursor));
    }

    #[test]
    fn test_value_or() {
        let cursor = Cursor::from("x");

        assert_eq!(ParseOutcome::success(1, cursor).value_or(0), 1);
        assert_eq!(ParseOutcome::failure(custom("f"), cursor).value_or(0), 0);
        assert_eq!(ParseOutcome::error(custom("e"), cursor).value_or(0), 0);
    }

    #[test]
    fn test_value_or_fail() {
        let cursor = Cursor::from("abc").advance(1);

        let fault = ParseOutcome::<()>::failure(custom("nope"), cursor)
            .value_or_fail()
            .unwrap_err();
        assert_eq!(fault.kind, OutcomeKind::Failure);
        assert_eq!(fault.cause, custom("nope"));
        assert_eq!(fault.position(), 1);

        let fault = ParseOutcome::<()>::error(custom("broken"), cursor)
            .value_or_fail()
            .unwrap_err();
        assert_eq!(fault.kind, OutcomeKind::Error);
        assert_eq!(fault.to_string(), "parse error at line 1, byte offset 1: broken");
    }

    #[test]
    fn test_alternative_or() {
        let cursor = Cursor::from("abc");
        let success = ParseOutcome::success('a', cursor.advance(1));
        let failure = ParseOutcome::failure(custom("nope"), cursor);
        let error = ParseOutcome::error(custom("broken"), cursor);
        let other = ParseOutcome::success('z', cursor.advance(3));

        assert_eq!(success.clone().alternative_or(other.clone()), success);
        assert_eq!(failure.alternative_or(other.clone()), other);
        assert_eq!(error.clone().alternative_or(other), error);
    }

    #[test]
    fn test_accessors() {
        let cursor = Cursor::from("abc");
        let success = ParseOutcome::success(7, cursor.advance(2));
        let failure: ParseOutcome<i32> = ParseOutcome::failure(custom("nope"), cursor);

        assert_eq!(success.kind(), OutcomeKind::Success);
        assert_eq!(success.value(), Some(&7));
        assert_eq!(success.cause(), None);
        assert_eq!(success.next().position(), 2);

        assert_eq!(failure.kind(), OutcomeKind::Failure);
        assert_eq!(failure.value(), None);
        assert_eq!(failure.cause(), Some(&custom("nope")));
        assert_eq!(failure.next().position(), 0);
    }
}
