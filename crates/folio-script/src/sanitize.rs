// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Escaping for AppleScript double-quoted string literals.

use std::fmt;

/// Escape `text` for placement inside a double-quoted AppleScript literal.
///
/// Backslashes are escaped first so that a user-supplied `\"` cannot end the
/// literal early. Newlines and carriage returns become their escape sequences.
pub fn sanitize(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + text.len() / 8);
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// A sanitized string, ready for interpolation between double quotes.
///
/// The only constructor runs [`sanitize`], so every `Literal` that reaches a
/// script has been escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal(String);

impl Literal {
    pub fn new(raw: &str) -> Self {
        Self(sanitize(raw))
    }

    /// The escaped text, without surrounding quotes.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Renders the literal with its surrounding double quotes.
impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn escapes_quotes_and_newlines() {
        assert_eq!(sanitize("He said \"hi\"\nBye"), r#"He said \"hi\"\nBye"#);
    }

    #[test]
    fn escapes_backslash_before_quote() {
        // Without escaping the backslash, `\"` would become `\\"` and close the literal.
        assert_eq!(sanitize(r#"a\"b"#), r#"a\\\"b"#);
    }

    #[test]
    fn escapes_carriage_return() {
        assert_eq!(sanitize("a\r\nb"), r"a\r\nb");
    }

    #[test]
    fn leaves_plain_text_and_unicode_alone() {
        assert_eq!(sanitize("Grüße, 世界\ttab"), "Grüße, 世界\ttab");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn literal_displays_with_quotes() {
        let lit = Literal::new("say \"x\"");
        assert_eq!(lit.as_str(), r#"say \"x\""#);
        assert_eq!(lit.to_string(), r#""say \"x\"""#);
    }

    /// Reverses [`sanitize`], failing on any escape it would not produce.
    fn unescape(escaped: &str) -> Option<String> {
        let mut out = String::new();
        let mut chars = escaped.chars();
        while let Some(ch) = chars.next() {
            if ch == '\\' {
                match chars.next()? {
                    '\\' => out.push('\\'),
                    '"' => out.push('"'),
                    'n' => out.push('\n'),
                    'r' => out.push('\r'),
                    _ => return None,
                }
            } else {
                out.push(ch);
            }
        }
        Some(out)
    }

    /// True when every `"` in `escaped` is preceded by an odd run of backslashes.
    fn quotes_all_escaped(escaped: &str) -> bool {
        let mut backslashes = 0usize;
        for ch in escaped.chars() {
            match ch {
                '\\' => backslashes += 1,
                '"' if backslashes % 2 == 0 => return false,
                _ => backslashes = 0,
            }
        }
        true
    }

    proptest! {
        #[test]
        fn output_has_no_raw_newline_or_bare_quote(input in any::<String>()) {
            let escaped = sanitize(&input);
            prop_assert!(!escaped.contains('\n'));
            prop_assert!(!escaped.contains('\r'));
            prop_assert!(quotes_all_escaped(&escaped));
        }

        #[test]
        fn sanitize_is_reversible(input in any::<String>()) {
            prop_assert_eq!(unescape(&sanitize(&input)), Some(input));
        }

        #[test]
        fn double_sanitize_decodes_one_level_at_a_time(input in any::<String>()) {
            let twice = sanitize(&sanitize(&input));
            prop_assert!(quotes_all_escaped(&twice));
            prop_assert_eq!(unescape(&twice), Some(sanitize(&input)));
        }
    }
}
