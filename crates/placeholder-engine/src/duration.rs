//! Folding mixed human-readable duration strings into a day count.
//!
//! Input like `"1y 2mo 3w 4d 5h 6m 7s"` is scanned for `(number)(unit)`
//! tokens — optionally whitespace-separated — and folded into a total using
//! fixed ratios (a year is 365 days, a month 30). Text between tokens is
//! ignored, not an error: the strings come from an upstream permission
//! system's expiry display and may carry arbitrary decoration.

use crate::error::EngineError;

const SECONDS_PER_DAY: i64 = 86_400;

/// Fold every recognizable duration token in `input` into a whole number of
/// days, rounded to nearest.
///
/// Returns the sentinel `-1` when the input is blank or contains no token at
/// all. Unit letters are `y`, `mo`, `w`, `d`, `h`, `m`, `s`; `mo` takes
/// precedence over a bare `m` at the same position.
///
/// # Examples
///
/// ```
/// use placeholder_engine::duration::parse_to_days;
///
/// assert_eq!(parse_to_days("1d"), 1);
/// assert_eq!(parse_to_days("36h"), 2); // 1.5 days rounds up
/// assert_eq!(parse_to_days("1y 2mo 3d"), 428);
/// assert_eq!(parse_to_days("nonsense"), -1);
/// ```
pub fn parse_to_days(input: &str) -> i64 {
    match try_parse_to_days(input) {
        Ok(days) => days,
        Err(_) => -1,
    }
}

/// [`parse_to_days`] with the failure reason preserved.
pub fn try_parse_to_days(input: &str) -> Result<i64, EngineError> {
    if input.trim().is_empty() {
        return Err(EngineError::InvalidDuration("blank input".to_string()));
    }

    let bytes = input.as_bytes();
    let mut total_seconds: i64 = 0;
    let mut found = false;
    let mut i = 0;

    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        let digits_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        let Ok(value) = input[digits_start..i].parse::<i64>() else {
            // Absurdly long digit runs overflow; skip rather than fail.
            continue;
        };

        let mut unit_at = i;
        while unit_at < bytes.len() && bytes[unit_at].is_ascii_whitespace() {
            unit_at += 1;
        }

        let seconds_per_unit = if input[unit_at..].starts_with("mo") {
            i = unit_at + 2;
            Some(30 * SECONDS_PER_DAY)
        } else {
            let per_unit = match bytes.get(unit_at) {
                Some(b'y') => Some(365 * SECONDS_PER_DAY),
                Some(b'w') => Some(7 * SECONDS_PER_DAY),
                Some(b'd') => Some(SECONDS_PER_DAY),
                Some(b'h') => Some(3_600),
                Some(b'm') => Some(60),
                Some(b's') => Some(1),
                _ => None,
            };
            if per_unit.is_some() {
                i = unit_at + 1;
            }
            per_unit
        };

        if let Some(per_unit) = seconds_per_unit {
            // A token whose seconds exceed i64 is skipped like any other
            // unrecognizable text, same as an unparseable digit run.
            if let Some(next_total) = value
                .checked_mul(per_unit)
                .and_then(|seconds| total_seconds.checked_add(seconds))
            {
                total_seconds = next_total;
                found = true;
            }
        }
    }

    if !found {
        return Err(EngineError::InvalidDuration(format!(
            "no duration tokens in '{input}'"
        )));
    }

    Ok((total_seconds as f64 / SECONDS_PER_DAY as f64).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_day_token() {
        assert_eq!(parse_to_days("1d"), 1);
    }

    #[test]
    fn sub_day_totals_round_to_nearest() {
        assert_eq!(parse_to_days("24h"), 1);
        assert_eq!(parse_to_days("36h"), 2);
        assert_eq!(parse_to_days("11h"), 0);
        assert_eq!(parse_to_days("12h"), 1);
    }

    #[test]
    fn month_token_beats_minute_at_same_position() {
        assert_eq!(parse_to_days("1mo"), 30);
        assert_eq!(parse_to_days("1m"), 0);
        assert_eq!(parse_to_days("720m"), 1); // 12 hours of minutes rounds up
    }

    #[test]
    fn mixed_tokens_accumulate() {
        // 365 + 60 + 3 days.
        assert_eq!(parse_to_days("1y2mo3d"), 428);
        assert_eq!(parse_to_days("1y 2mo 3d"), 428);
    }

    #[test]
    fn whitespace_between_number_and_unit_is_allowed() {
        assert_eq!(parse_to_days("2 w"), 14);
    }

    #[test]
    fn decoration_between_tokens_is_ignored() {
        assert_eq!(parse_to_days("expires in 3d (soon!)"), 3);
        assert_eq!(parse_to_days("12x3d"), 3);
    }

    #[test]
    fn blank_or_tokenless_input_is_sentinel() {
        assert_eq!(parse_to_days(""), -1);
        assert_eq!(parse_to_days("   "), -1);
        assert_eq!(parse_to_days("nonsense"), -1);
        assert_eq!(parse_to_days("123"), -1);
    }

    #[test]
    fn token_overflowing_seconds_is_skipped() {
        // 4e11 years exceeds i64 seconds; the token folds to nothing.
        assert_eq!(parse_to_days("400000000000y"), -1);
        // Surviving tokens still count.
        assert_eq!(parse_to_days("1d 400000000000y"), 1);
        // Each token fits on its own but the sum would overflow; the second
        // one is dropped rather than wrapping the total.
        assert_eq!(
            parse_to_days("200000000000y 200000000000y"),
            200_000_000_000 * 365,
        );
    }

    #[test]
    fn full_grid_of_units() {
        assert_eq!(parse_to_days("1y"), 365);
        assert_eq!(parse_to_days("1w"), 7);
        assert_eq!(parse_to_days("86400s"), 1);
    }
}
