//! Recursive `{...}` placeholder interpolation.
//!
//! A request argument may embed references to external placeholders as
//! `{name}` spans. Each span is handed to a caller-supplied resolver and the
//! result is spliced back in place. The scan restarts from the beginning of
//! the string after every substitution, so a resolver result that itself
//! contains `{...}` is expanded too — and because a span may not contain
//! nested braces, the innermost reference is always the one matched first.
//! Expansion therefore proceeds from the innermost placeholder outward by
//! construction.
//!
//! `\{` and `\}` suppress matching and are rewritten to literal braces once
//! no spans remain. As a final display step every `&` is mapped to `§`, the
//! legacy color-code marker.
//!
//! # Termination
//!
//! The resolver is trusted not to be self-referential. A resolver that
//! returns text containing an unescaped `{...}` reference to itself would
//! re-expand forever; this contract is documented to callers rather than
//! enforced with a depth limit.

/// Expand every unescaped `{...}` span in `input` through `resolve`, then
/// un-escape `\{` / `\}` and map `&` to the color-code marker.
///
/// The resolver receives the text between the braces.
///
/// # Examples
///
/// ```
/// use placeholder_engine::interpolate::interpolate;
///
/// let out = interpolate("x{a}y", |name| {
///     assert_eq!(name, "a");
///     "Z".to_string()
/// });
/// assert_eq!(out, "xZy");
///
/// let out = interpolate(r"x\{a\}y", |_| unreachable!());
/// assert_eq!(out, "x{a}y");
/// ```
pub fn interpolate(input: &str, resolve: impl Fn(&str) -> String) -> String {
    let mut text = input.to_string();

    while let Some((start, end)) = find_innermost_span(&text) {
        let replacement = resolve(&text[start + 1..end]);
        text.replace_range(start..end + 1, &replacement);
    }

    let text = text.replace("\\{", "{").replace("\\}", "}");
    text.replace('&', "\u{00a7}")
}

/// Byte offsets of the `{` and `}` of the first brace span that contains no
/// nested braces and whose `{` is not immediately preceded by a backslash.
fn find_innermost_span(text: &str) -> Option<(usize, usize)> {
    let mut candidate: Option<usize> = None;
    let mut prev: Option<char> = None;

    for (i, ch) in text.char_indices() {
        match ch {
            '{' => {
                // An escaped brace can neither open a span nor sit inside one.
                candidate = if prev == Some('\\') { None } else { Some(i) };
            }
            '}' => {
                if let Some(start) = candidate {
                    return Some((start, i));
                }
            }
            _ => {}
        }
        prev = Some(ch);
    }
    None
}
