//! Slug generation for suggested download filenames.
//!
//! ## Summary
//! Turns display names into filename-safe stems: lowercase, alphanumeric
//! with hyphens, collapsed and trimmed.

/// Generate a filename-safe slug from a name, with a fallback for input
/// that contains no usable characters.
///
/// Examples:
/// - "John Doe" -> "john-doe"
/// - "O'Brien, Anne" -> "o-brien-anne"
/// - "" -> the fallback
#[must_use]
pub fn slugify_or(name: &str, fallback: &str) -> String {
    let slug = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() {
        fallback.to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_name() {
        assert_eq!(slugify_or("contact", "x"), "contact");
    }

    #[test]
    fn test_with_spaces() {
        assert_eq!(slugify_or("John Doe", "x"), "john-doe");
    }

    #[test]
    fn test_with_special_chars() {
        assert_eq!(slugify_or("O'Brien, Anne", "x"), "o-brien-anne");
    }

    #[test]
    fn test_leading_trailing() {
        assert_eq!(slugify_or("  John  ", "x"), "john");
    }

    #[test]
    fn test_empty_falls_back() {
        assert_eq!(slugify_or("", "contact"), "contact");
        assert_eq!(slugify_or("@#$", "contact"), "contact");
    }
}
