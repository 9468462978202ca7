//! Property tests for the tokenizing and arithmetic layers.

use placeholder_engine::{
    convert_millis, convert_to_millis, interpolate, parse_to_days, split_args,
};
use proptest::prelude::*;

fn unit() -> impl Strategy<Value = &'static str> {
    proptest::sample::select(vec![
        "MILLI", "SECOND", "MINUTE", "HOUR", "DAY", "MONTH", "YEAR",
    ])
}

proptest! {
    #[test]
    fn split_never_panics_and_never_returns_nothing(input in ".*") {
        let tokens = split_args(&input);
        prop_assert!(!tokens.is_empty());
    }

    #[test]
    fn split_of_quote_free_tokens_is_plain_split(
        tokens in proptest::collection::vec("[a-z0-9]{1,6}", 1..6),
    ) {
        let joined = tokens.join(".");
        prop_assert_eq!(split_args(&joined), tokens);
    }

    #[test]
    fn quoted_middle_token_keeps_its_dots(middle in "[a-z.]{0,10}") {
        let input = format!("a.\"{middle}\".b");
        prop_assert_eq!(split_args(&input), vec!["a".to_string(), middle, "b".to_string()]);
    }

    #[test]
    fn interpolate_substitutes_a_single_span(name in "[a-z_]{1,10}") {
        let out = interpolate(&format!("x{{{name}}}y"), |n| {
            assert_eq!(n, name);
            "R".to_string()
        });
        prop_assert_eq!(out, "xRy");
    }

    #[test]
    fn escaped_spans_never_reach_the_resolver(name in "[a-z_]{1,10}") {
        let out = interpolate(&format!("x\\{{{name}\\}}y"), |_| {
            panic!("resolver must not be called for escaped braces")
        });
        prop_assert_eq!(out, format!("x{{{name}}}y"));
    }

    #[test]
    fn whole_day_tokens_fold_exactly(days in 0i64..5_000) {
        prop_assert_eq!(parse_to_days(&format!("{days}d")), days);
    }

    #[test]
    fn hour_tokens_round_to_nearest_day(hours in 0i64..100_000) {
        let expected = ((hours * 3_600) as f64 / 86_400.0).round() as i64;
        prop_assert_eq!(parse_to_days(&format!("{hours}h")), expected);
    }

    #[test]
    fn convert_round_trips_for_whole_counts(n in -10_000i64..10_000, u in unit()) {
        prop_assert_eq!(convert_millis(convert_to_millis(n, u), u), n);
    }

    #[test]
    fn conversion_never_overshoots(millis in -10_000_000i64..10_000_000, u in unit()) {
        let per = convert_to_millis(1, u);
        let truncated = convert_millis(millis, u);
        // Truncation toward zero: the reconstructed value never passes the
        // original, and the remainder stays under one unit.
        prop_assert!((truncated * per).abs() <= millis.abs());
        prop_assert!((millis - truncated * per).abs() < per);
    }
}
