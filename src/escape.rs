//! HTML attribute escaping for translated values.

use std::borrow::Cow;

/// Longest entity name we accept before giving up on the no-double-encoding
/// check. Real named references top out around 32 characters.
const MAX_ENTITY_BODY: usize = 32;

/// Escapes `text` for interpolation into HTML attribute values.
///
/// Quote escaping is always active (both `"` and `'`). An ampersand that
/// already begins a well-formed entity reference (`&amp;`, `&#39;`,
/// `&#x1F;`) is left alone, so pre-escaped catalog values are not
/// double-encoded.
#[must_use]
pub fn escape_attribute(text: &str) -> Cow<'_, str> {
    if !text.bytes().any(|b| matches!(b, b'&' | b'<' | b'>' | b'"' | b'\'')) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    for (i, ch) in text.char_indices() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            '&' => {
                let already_encoded =
                    text.get(i + 1..).is_some_and(starts_entity_reference);
                if already_encoded {
                    out.push('&');
                } else {
                    out.push_str("&amp;");
                }
            }
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

/// Returns true if `rest` starts with the body of a well-formed entity
/// reference: `name;`, `#123;` or `#x1F;`.
fn starts_entity_reference(rest: &str) -> bool {
    let Some(end) = rest.find(';') else {
        return false;
    };
    if end == 0 || end > MAX_ENTITY_BODY {
        return false;
    }
    let Some(body) = rest.get(..end) else {
        return false;
    };

    if let Some(hex) = body.strip_prefix("#x").or_else(|| body.strip_prefix("#X")) {
        return !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    if let Some(dec) = body.strip_prefix('#') {
        return !dec.is_empty() && dec.chars().all(|c| c.is_ascii_digit());
    }
    body.chars().all(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Bonjour", "Bonjour")]
    #[case("He said \"hi\"", "He said &quot;hi&quot;")]
    #[case("l'été", "l&#039;été")]
    #[case("a < b && b > c", "a &lt; b &amp;&amp; b &gt; c")]
    fn test_escape_attribute(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_attribute(input), expected);
    }

    #[rstest]
    // Well-formed references pass through untouched.
    #[case("fish &amp; chips", "fish &amp; chips")]
    #[case("&#039;quoted&#039;", "&#039;quoted&#039;")]
    #[case("&#x1F600; emoji", "&#x1F600; emoji")]
    // Structural check only, no name table: `&T;` counts as a reference.
    #[case("AT&T;", "AT&T;")]
    // Malformed ones are still encoded.
    #[case("a & b; c", "a &amp; b; c")]
    #[case("trailing &", "trailing &amp;")]
    #[case("&;", "&amp;;")]
    fn test_no_double_encoding(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_attribute(input), expected);
    }

    #[test]
    fn test_borrowed_when_clean() {
        assert!(matches!(escape_attribute("nothing to do"), Cow::Borrowed(_)));
    }
}
