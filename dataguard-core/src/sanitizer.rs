// dataguard-core/src/sanitizer.rs
//! String sanitization for safe embedding of user input.
//!
//! [`sanitize_string`] runs a fixed pipeline of stages. Order matters: each stage
//! works on the output of the previous one, and no stage introduces characters that
//! a later stage would transform again. The backslash escapes of the first stage
//! only emit `\`, letters, `0`, quotes and `%`; the `&amp;` of the third stage
//! contains no `/`; the `&#x2F;` of the fourth stage runs after ampersands are
//! already encoded.
//!
//! Every stage returns a `Cow`, so input that needs no change is not copied.
//!
//! License: MIT OR APACHE 2.0

use std::borrow::Cow;

/// Returns the two-character escape for control and quote characters, if any.
fn escape_for(c: char) -> Option<&'static str> {
    match c {
        '\0' => Some("\\0"),
        '\x08' => Some("\\b"),
        '\t' => Some("\\t"),
        '\x1a' => Some("\\z"),
        '\n' => Some("\\n"),
        '\r' => Some("\\r"),
        '"' => Some("\\\""),
        '\'' => Some("\\'"),
        '\\' => Some("\\\\"),
        '%' => Some("\\%"),
        _ => None,
    }
}

/// Replaces each occurrence of a matching character with its replacement text.
fn replace_chars<'a, F>(input: Cow<'a, str>, replacement: F) -> Cow<'a, str>
where
    F: Fn(char) -> Option<&'static str>,
{
    if !input.chars().any(|c| replacement(c).is_some()) {
        return input;
    }
    let mut output = String::with_capacity(input.len() + input.len() / 4);
    for c in input.chars() {
        match replacement(c) {
            Some(text) => output.push_str(text),
            None => output.push(c),
        }
    }
    Cow::Owned(output)
}

/// Stage 1: backslash-escapes NUL, backspace, tab, SUB, newline, carriage return,
/// both quote characters, backslash and percent.
pub fn escape_special_chars(input: &str) -> Cow<'_, str> {
    replace_chars(Cow::Borrowed(input), escape_for)
}

/// Stage 2: deletes every `<` and `>`.
pub fn strip_angle_brackets(input: &str) -> Cow<'_, str> {
    if input.contains(['<', '>']) {
        Cow::Owned(input.replace(['<', '>'], ""))
    } else {
        Cow::Borrowed(input)
    }
}

/// Stage 3: encodes `&` as `&amp;`.
pub fn encode_ampersands(input: &str) -> Cow<'_, str> {
    replace_chars(Cow::Borrowed(input), |c| (c == '&').then_some("&amp;"))
}

/// Stage 4: encodes `/` as `&#x2F;`.
pub fn encode_slashes(input: &str) -> Cow<'_, str> {
    replace_chars(Cow::Borrowed(input), |c| (c == '/').then_some("&#x2F;"))
}

/// Whitespace removed by the final trim: the Unicode `White_Space` set without
/// U+0085 (NEL), plus U+FEFF (BOM).
pub fn is_trim_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Sanitizes a string for embedding in SQL literals and HTML text.
///
/// Applies, in order: [`escape_special_chars`], [`strip_angle_brackets`],
/// [`encode_ampersands`], [`encode_slashes`], then trims leading and trailing
/// whitespace as defined by [`is_trim_whitespace`].
///
/// ```rust
/// use dataguard_core::sanitize_string;
///
/// assert_eq!(sanitize_string("  it's <b>a/b</b> & more "), "it\\'s ba&#x2F;b&#x2F;b &amp; more");
/// ```
pub fn sanitize_string(value: &str) -> String {
    let escaped = escape_special_chars(value);
    let stripped = strip_angle_brackets(&escaped);
    let ampersands = encode_ampersands(&stripped);
    let slashes = encode_slashes(&ampersands);
    slashes.trim_matches(is_trim_whitespace).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_control_and_quote_characters() {
        let input = "Hello\n\r\t\"'\\%World";
        assert_eq!(sanitize_string(input), "Hello\\n\\r\\t\\\"\\'\\\\\\%World");
    }

    #[test]
    fn test_escapes_nul_backspace_and_sub() {
        assert_eq!(sanitize_string("a\0b\x08c\x1ad"), "a\\0b\\bc\\zd");
    }

    #[test]
    fn test_strips_tags_characters() {
        let sanitized = sanitize_string("<script>alert(\"xss\")</script><p>Hello</p>");
        assert!(!sanitized.contains("<script>"));
        assert!(!sanitized.contains("</script>"));
        assert_eq!(
            sanitized,
            "scriptalert(\\\"xss\\\")&#x2F;scriptpHello&#x2F;p"
        );
    }

    #[test]
    fn test_entities_are_not_double_encoded() {
        assert_eq!(sanitize_string("a/b&c"), "a&#x2F;b&amp;c");
        assert_eq!(sanitize_string("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_trims_after_escaping() {
        // Tabs and newlines are escaped before trimming, so they survive as text.
        assert_eq!(sanitize_string("  padded  "), "padded");
        assert_eq!(sanitize_string("\tpadded\n"), "\\tpadded\\n");
        assert_eq!(sanitize_string(" <> "), "");
    }

    #[test]
    fn test_trim_strips_bom_and_keeps_nel() {
        assert_eq!(sanitize_string("\u{feff}a\u{feff}"), "a");
        assert_eq!(sanitize_string("\u{a0}\u{3000}a\u{2028}"), "a");
        assert_eq!(sanitize_string("\u{85}a\u{85}"), "\u{85}a\u{85}");
    }

    #[test]
    fn test_untouched_input_is_borrowed() {
        assert!(matches!(escape_special_chars("plain"), Cow::Borrowed(_)));
        assert!(matches!(strip_angle_brackets("plain"), Cow::Borrowed(_)));
        assert!(matches!(encode_ampersands("plain"), Cow::Borrowed(_)));
        assert!(matches!(encode_slashes("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_unicode_passes_through() {
        assert_eq!(sanitize_string("Grüße, 世界"), "Grüße, 世界");
    }
}
