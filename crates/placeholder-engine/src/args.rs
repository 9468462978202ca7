//! Dotted argument tokenizing with quote awareness.
//!
//! Raw requests arrive as a single dotted string, e.g.
//! `diffDays.second."18:00:00".false`. Splitting naively on `.` would break
//! the quoted time literal apart, so a dot only counts as a separator when it
//! is not inside a double-quoted span. Surrounding quotes are stripped from
//! each resulting token.
//!
//! The quoting grammar is deliberately best-effort: an input with an odd
//! number of `"` characters has no well-defined quoting and the split points
//! are whatever the even-lookahead rule produces. This function never fails.

/// Split `input` on every `.` that lies outside double-quoted spans, then
/// strip one surrounding quote pair from each token that carries one.
///
/// A dot is a separator exactly when the remainder of the string after it
/// contains an even number of `"` characters. Trailing empty tokens are
/// dropped, but an empty input still yields a single empty token.
///
/// # Examples
///
/// ```
/// use placeholder_engine::args::split_args;
///
/// assert_eq!(
///     split_args("diffDays.second.\"18:00:00\".false"),
///     vec!["diffDays", "second", "18:00:00", "false"],
/// );
/// assert_eq!(split_args("a.\"b.c\".d"), vec!["a", "b.c", "d"]);
/// ```
pub fn split_args(input: &str) -> Vec<String> {
    let total_quotes = input.chars().filter(|&c| c == '"').count();

    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut quotes_seen = 0usize;

    for ch in input.chars() {
        match ch {
            '"' => {
                quotes_seen += 1;
                current.push(ch);
            }
            '.' if (total_quotes - quotes_seen) % 2 == 0 => {
                pieces.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }
    pieces.push(current);

    // Trailing separators produce empty tokens the caller never asked for.
    while pieces.len() > 1 && pieces.last().is_some_and(String::is_empty) {
        pieces.pop();
    }
    pieces.into_iter().map(strip_quotes).collect()
}

/// Remove exactly one leading and one trailing `"` when both are present.
fn strip_quotes(piece: String) -> String {
    if piece.len() >= 2 && piece.starts_with('"') && piece.ends_with('"') {
        piece[1..piece.len() - 1].to_string()
    } else {
        piece
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_plain_dotted_string() {
        assert_eq!(split_args("a.b.c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn quoted_span_is_atomic() {
        assert_eq!(split_args("a.\"b.c\".d"), vec!["a", "b.c", "d"]);
    }

    #[test]
    fn strips_surrounding_quotes_only() {
        assert_eq!(
            split_args("diffDays.second.\"18:00:00\".true"),
            vec!["diffDays", "second", "18:00:00", "true"],
        );
    }

    #[test]
    fn empty_input_yields_single_empty_token() {
        assert_eq!(split_args(""), vec![""]);
    }

    #[test]
    fn inner_empty_tokens_survive_but_trailing_are_dropped() {
        assert_eq!(split_args("a..b"), vec!["a", "", "b"]);
        assert_eq!(split_args("a."), vec!["a"]);
    }

    #[test]
    fn lone_quote_pair_becomes_empty_token() {
        assert_eq!(split_args("x.\"\""), vec!["x", ""]);
    }

    #[test]
    fn quoted_dots_with_multiple_spans() {
        assert_eq!(
            split_args("\"a.b\".\"c.d\""),
            vec!["a.b", "c.d"],
        );
    }

    #[test]
    fn single_token_passthrough() {
        assert_eq!(split_args("getTheWeek"), vec!["getTheWeek"]);
    }
}
