//! vCard lexer: line unfolding, content-line splitting, and TYPE tags.
//!
//! Unfolding follows the folding rules shared by the vCard and iCalendar
//! family (RFC 5545 §3.1). Content-line parsing is lenient: a line the
//! lexer cannot use yields `None` and the caller moves on.

use crate::rfc::vcard::escape::unescape_text;

/// Parameter tokens accepted as bare type tags (vCard 2.1 style).
const BARE_TYPE_TOKENS: [&str; 8] = [
    "CELL", "MOBILE", "WORK", "HOME", "VOICE", "FAX", "PREF", "PERSONAL",
];

/// Unfolds vCard text by removing line continuations.
///
/// Line endings are normalized first (CRLF and lone CR count as LF); a
/// newline followed by a single space or tab is a continuation and is
/// removed together with that whitespace character.
#[must_use]
pub fn unfold(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        let newline = match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                true
            }
            '\n' => true,
            _ => false,
        };

        if newline {
            if matches!(chars.peek(), Some(' ' | '\t')) {
                chars.next(); // folded continuation, rejoin the line
            } else {
                result.push('\n');
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// A content line reduced to what the contact decoder consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Property name (uppercase).
    pub name: String,
    /// TYPE tags, uppercased, from `TYPE=` parameters and bare tokens.
    pub type_tags: Vec<String>,
    /// Raw value, trimmed but still escaped.
    pub value: String,
}

/// Parses a single content line.
///
/// Format: `NAME[;param]*:value`. Returns `None` for lines without a
/// colon and for lines whose value unescapes to nothing; the decoder
/// skips both.
#[must_use]
pub fn parse_content_line(line: &str) -> Option<ContentLine> {
    let (name_params, value) = line.split_once(':')?;

    let (name, params) = match name_params.split_once(';') {
        Some((name, params)) => (name, Some(params)),
        None => (name_params, None),
    };

    let value = value.trim();
    if unescape_text(value).is_empty() {
        return None;
    }

    Some(ContentLine {
        name: name.to_ascii_uppercase(),
        type_tags: params.map(parse_type_tags).unwrap_or_default(),
        value: value.to_string(),
    })
}

/// Parses TYPE tags from a content line's parameter string.
///
/// `TYPE=X,Y` lists are split and uppercased. A bare token is accepted as
/// a legacy vCard 2.1 tag when it names a known type; anything else is
/// ignored.
#[must_use]
pub fn parse_type_tags(params: &str) -> Vec<String> {
    let mut tags = Vec::new();

    for token in params.split(';') {
        if let Some(values) = strip_type_prefix(token) {
            for value in values.split(',') {
                tags.push(value.to_ascii_uppercase());
            }
        } else {
            let bare = token.to_ascii_uppercase();
            if BARE_TYPE_TOKENS.contains(&bare.as_str()) {
                tags.push(bare);
            }
        }
    }

    tags
}

/// Strips a case-insensitive `TYPE=` prefix.
fn strip_type_prefix(token: &str) -> Option<&str> {
    let (prefix, rest) = token.split_at_checked(5)?;
    prefix.eq_ignore_ascii_case("TYPE=").then_some(rest)
}
