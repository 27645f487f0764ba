use crate::bind::BindExt;
use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::named::NamedExt;
use crate::number::integer_of_size;
use crate::outcome::ParseOutcome;
use crate::parser::{Parser, from_fn};
use crate::then::ThenExt;
use chrono::NaiveDate;

/// Parser for an eight-byte `YYYYMMDD` date field
///
/// The three numeric fields are read first; a value that is not a real
/// calendar date (month 13, February 30) is a `Failure` positioned after the
/// field, the same as a malformed numeral.
pub fn date_yyyymmdd<'code>() -> impl Parser<'code, Output = NaiveDate> {
    integer_of_size(4)
        .then(integer_of_size(2).then(integer_of_size(2)))
        .with_name("date(YYYYMMDD)")
        .bind(|(year, (month, day))| from_fn(move |next| calendar_date(year, month, day, next)))
}

fn calendar_date<'code>(
    year: i64,
    month: i64,
    day: i64,
    next: Cursor<'code>,
) -> ParseOutcome<'code, NaiveDate> {
    let date = match (
        i32::try_from(year),
        u32::try_from(month),
        u32::try_from(day),
    ) {
        (Ok(y), Ok(m), Ok(d)) => NaiveDate::from_ymd_opt(y, m, d),
        _ => None,
    };

    match date {
        Some(date) => ParseOutcome::success(date, next),
        None => ParseOutcome::failure(ParseError::InvalidDate { year, month, day }, next),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use rstest::rstest;

    #[test]
    fn test_date() {
        let outcome = parse("20000101", &date_yyyymmdd());

        assert_eq!(
            outcome.value_or_fail().unwrap(),
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_date_leaves_cursor_after_field() {
        let outcome = parse("19991231PRD", &date_yyyymmdd());

        assert_eq!(outcome.next().position(), 8);
        assert_eq!(outcome.next().first(), b'P');
    }

    #[rstest]
    #[case("20001301", 2000, 13, 1)]
    #[case("20000230", 2000, 2, 30)]
    #[case("19000229", 1900, 2, 29)]
    #[case("20000100", 2000, 1, 0)]
    fn test_invalid_calendar_date_is_failure(
        #[case] input: &str,
        #[case] year: i64,
        #[case] month: i64,
        #[case] day: i64,
    ) {
        let outcome = parse(input, &date_yyyymmdd());

        assert!(outcome.is_failure());
        assert_eq!(
            outcome.cause(),
            Some(&ParseError::InvalidDate { year, month, day })
        );
        assert_eq!(outcome.next().position(), 8);
    }

    #[test]
    fn test_negative_month_is_failure() {
        assert!(parse("2000-101", &date_yyyymmdd()).is_failure());
    }

    #[test]
    fn test_leap_day() {
        let outcome = parse("20000229", &date_yyyymmdd());

        assert_eq!(outcome.value(), NaiveDate::from_ymd_opt(2000, 2, 29).as_ref());
    }

    #[test]
    fn test_non_numeric_field_is_failure() {
        let outcome = parse("2000AB01", &date_yyyymmdd());

        assert!(matches!(
            outcome.cause(),
            Some(ParseError::InvalidInteger { .. })
        ));
    }

    #[test]
    fn test_name() {
        assert_eq!(date_yyyymmdd().name(), "date(YYYYMMDD)");
    }
}
