use fixcomb::number::integer_of_size;
use fixcomb::text::{fixed_width, literal};
use fixcomb::{Cursor, OrExt, ParseError, ParseOutcome, Parser, ThenExt, from_fn};
use proptest::prelude::*;
use std::borrow::Cow;

fn oversized() -> impl Strategy<Value = usize> {
    prop_oneof![
        8usize..16,
        Just(usize::MAX),
        (isize::MAX as usize)..=usize::MAX,
    ]
}

fn fatal(cursor: Cursor) -> ParseOutcome<Cow<'static, str>> {
    ParseOutcome::error(ParseError::custom("fatal"), cursor)
}

proptest! {
    #[test]
    fn apply_is_deterministic(input in "[ -~]{0,16}", width in 0usize..20) {
        let parser = fixed_width(width);
        let cursor = Cursor::from(input.as_str());

        prop_assert_eq!(parser.apply(cursor), parser.apply(cursor));
    }

    #[test]
    fn or_keeps_left_success(input in "[a-c]{0,6}", left in "[a-c]{1,3}", right in "[a-c]{1,3}") {
        let a = literal(left);
        let b = literal(right);
        let cursor = Cursor::from(input.as_str());
        let first = a.apply(cursor);

        let combined = a.or(b).apply(cursor);
        if first.is_success() {
            prop_assert_eq!(combined, first);
        }
    }

    #[test]
    fn or_falls_back_on_failure(input in "[a-c]{0,6}", left in "[a-c]{1,3}", right in "[a-c]{1,3}") {
        let a = literal(left);
        let b = literal(right);
        let cursor = Cursor::from(input.as_str());
        let first = a.apply(cursor);
        let second = b.apply(cursor);

        let combined = a.or(b).apply(cursor);
        if first.is_failure() {
            prop_assert_eq!(combined, second);
        }
    }

    #[test]
    fn or_never_rescues_error(input in "[a-c]{0,6}", right in "[a-c]{1,3}") {
        let cursor = Cursor::from(input.as_str());
        let parser = from_fn(fatal).or(literal(right));

        prop_assert_eq!(parser.apply(cursor), fatal(cursor));
    }

    #[test]
    fn then_threads_position(input in "[ab]{0,8}", left in "[ab]{1,3}", right in "[ab]{1,3}") {
        let a = literal(left.clone());
        let b = literal(right.clone());
        let cursor = Cursor::from(input.as_str());

        let combined = a.then(b).apply(cursor);
        let expected = input.starts_with(&format!("{}{}", left, right));
        prop_assert_eq!(combined.is_success(), expected);

        if let ParseOutcome::Success { value: (first, second), next } = combined {
            prop_assert_eq!(first, left.as_str());
            prop_assert_eq!(second, right.as_str());
            prop_assert_eq!(next.position(), left.len() + right.len());
        }
    }

    #[test]
    fn fixed_width_round_trip(input in "[A-Z0-9 ]{12,16}", width in 1usize..12) {
        let field = &input[..width];

        let value = fixed_width(width)
            .apply(Cursor::from(input.as_str()))
            .value_or_fail()
            .unwrap();
        let padded = format!("{:<width$}", value, width = width);

        prop_assert_eq!(padded.len(), width);
        prop_assert_eq!(padded.trim(), field.trim());
    }

    #[test]
    fn short_input_is_failure(input in "[0-9 ]{0,7}", width in oversized()) {
        let cursor = Cursor::from(input.as_str());

        prop_assert!(!cursor.has_at_least(width));
        prop_assert_eq!(cursor.peek(width).len(), input.len() + 1);
        prop_assert!(cursor.peek(width).ends_with(&[fixcomb::END_OF_INPUT]));
        prop_assert!(fixed_width(width).apply(cursor).is_failure());
        prop_assert!(integer_of_size(width).apply(cursor).is_failure());
    }

    #[test]
    fn short_input_literal_is_failure(input in "[x ]{0,7}", width in 8usize..16, skip in oversized()) {
        let expected = "x".repeat(width);
        let cursor = Cursor::from(input.as_str());

        prop_assert!(literal(expected.clone()).apply(cursor).is_failure());
        // Skipping far past the end must not wrap the cursor back into range
        prop_assert!(literal(expected).apply(cursor.advance(skip)).is_failure());
        prop_assert!(literal("x").apply(cursor.advance(skip).advance(skip)).is_failure());
    }

    #[test]
    fn past_end_is_failure(input in "[a-z]{0,4}", extra in 1usize..4, width in 1usize..4) {
        let cursor = Cursor::from(input.as_str()).advance(input.len() + extra);

        prop_assert!(fixed_width(width).apply(cursor).is_failure());
        prop_assert!(cursor.peek(width).ends_with(&[fixcomb::END_OF_INPUT]));
    }
}
