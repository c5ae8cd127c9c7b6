//! vCard text escaping.
//!
//! vCard escapes: `\n`/`\N` (newline), `\,` (comma), `\;` (semicolon),
//! `\\` (backslash). Structured values (N, ADR, ORG) are split on
//! unescaped semicolons before their components are unescaped, so escaped
//! separators survive a round trip.

/// Escapes a text value for the N, FN, TITLE, ORG, ROLE, and ADR
/// components.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            ';' => result.push_str("\\;"),
            ',' => result.push_str("\\,"),
            _ => result.push(c),
        }
    }

    result
}

/// Escapes a NOTE value: the text escapes plus newline as a literal `\n`.
#[must_use]
pub fn escape_note(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            ';' => result.push_str("\\;"),
            ',' => result.push_str("\\,"),
            '\n' => result.push_str("\\n"),
            _ => result.push(c),
        }
    }

    result
}

/// Unescapes a vCard text value.
///
/// `\n` and `\N` become newlines; escaped commas, semicolons, and
/// backslashes are restored. Unrecognized escape sequences are kept as-is.
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some('n' | 'N') => {
                    chars.next();
                    result.push('\n');
                }
                Some(',') => {
                    chars.next();
                    result.push(',');
                }
                Some(';') => {
                    chars.next();
                    result.push(';');
                }
                Some('\\') => {
                    chars.next();
                    result.push('\\');
                }
                _ => result.push(c),
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Splits a structured value on unescaped semicolons.
///
/// Components stay escaped; callers unescape each piece. A backslash
/// escapes the character after it, so `\\;` ends a component while `\;`
/// does not.
#[must_use]
pub fn split_structured(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut prev_backslash = false;

    for (i, c) in s.char_indices() {
        if c == '\\' {
            prev_backslash = !prev_backslash;
            continue;
        }

        if c == ';' && !prev_backslash {
            parts.push(&s[start..i]);
            start = i + 1;
        }

        prev_backslash = false;
    }

    parts.push(&s[start..]);
    parts
}
