//! Key predicates and case-transform primitives.
//!
//! Pure string functions with no I/O and no shared mutable state. Keys are
//! treated as ASCII identifiers; classification and transforms use ASCII
//! case rules and are best-effort on anything else.

use once_cell::sync::Lazy;
use regex::Regex;

// =============================================================================
// LAZY STATIC PATTERNS
// =============================================================================
// Compiled once on first use; read-only process-wide constants.

static HAS_UPPERCASE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").unwrap());

/// An uppercase letter, together with a literal dot immediately before it.
static CAMEL_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.?([A-Z])").unwrap());

// =============================================================================
// PREDICATES
// =============================================================================

/// True if the key contains at least one underscore.
pub fn has_underscore(key: &str) -> bool {
    key.contains('_')
}

/// True if the key contains at least one uppercase letter.
pub fn has_uppercase(key: &str) -> bool {
    HAS_UPPERCASE.is_match(key)
}

/// True if the key's first character is a lowercase letter.
///
/// Empty keys satisfy neither first-character predicate.
pub fn is_first_char_lower(key: &str) -> bool {
    key.chars().next().is_some_and(|c| c.is_ascii_lowercase())
}

/// True if the key's first character is an uppercase letter.
pub fn is_first_char_upper(key: &str) -> bool {
    key.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

// =============================================================================
// TRANSFORMS
// =============================================================================

/// Convert a snake_case key to camelCase.
///
/// The first segment is lowercased whole; each later segment is capitalized.
/// Empty segments (consecutive underscores) contribute nothing.
pub fn snake_to_camel(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for (i, segment) in key.split('_').enumerate() {
        if segment.is_empty() {
            continue;
        }
        if i == 0 {
            out.push_str(&segment.to_ascii_lowercase());
        } else {
            out.push_str(&capitalize_words(segment));
        }
    }
    out
}

/// Convert a camelCase key to snake_case.
///
/// An underscore is inserted before every uppercase letter, which is then
/// lowercased; a literal `.` immediately preceding the letter is stripped,
/// as is a leading underscore introduced at position 0.
pub fn camel_to_snake(key: &str) -> String {
    let replaced = CAMEL_BOUNDARY.replace_all(key, |caps: &regex::Captures<'_>| {
        format!("_{}", caps[1].to_ascii_lowercase())
    });
    match replaced.strip_prefix('_') {
        Some(rest) => rest.to_string(),
        None => replaced.into_owned(),
    }
}

/// Convert a camelCase key to PascalCase by uppercasing the first character.
pub fn camel_to_pascal(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars();
    if let Some(first) = chars.next() {
        out.push(first.to_ascii_uppercase());
    }
    out.extend(chars);
    out
}

/// Convert a snake_case key to PascalCase.
///
/// Each underscore-delimited segment is capitalized and the segments are
/// concatenated; empty segments contribute nothing.
pub fn snake_to_pascal(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for segment in key.split('_') {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
        }
        out.extend(chars);
    }
    out
}

/// Convert a PascalCase key to camelCase by lowercasing only the first
/// character; all other characters are left untouched.
pub fn pascal_to_camel(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars();
    if let Some(first) = chars.next() {
        out.push(first.to_ascii_lowercase());
    }
    out.extend(chars);
    out
}

/// Convert a PascalCase key to snake_case.
///
/// The key is split before each internal uppercase letter, every segment is
/// lowercased, and the segments are joined with underscores.
pub fn pascal_to_snake(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i != 0 {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Uppercase the leading lowercase letter of a segment, and any lowercase
/// letter immediately following internal whitespace.
fn capitalize_words(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    let mut at_boundary = true;
    for ch in segment.chars() {
        if at_boundary && ch.is_ascii_lowercase() {
            out.push(ch.to_ascii_uppercase());
        } else {
            out.push(ch);
        }
        at_boundary = ch.is_whitespace();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates() {
        assert!(has_underscore("user_id"));
        assert!(!has_underscore("userId"));

        assert!(has_uppercase("userId"));
        assert!(!has_uppercase("user_id"));

        assert!(is_first_char_lower("blogDate"));
        assert!(!is_first_char_lower("BlogDate"));

        assert!(is_first_char_upper("BlogDate"));
        assert!(!is_first_char_upper("blogDate"));
    }

    #[test]
    fn test_predicates_on_empty_key() {
        assert!(!has_underscore(""));
        assert!(!has_uppercase(""));
        assert!(!is_first_char_lower(""));
        assert!(!is_first_char_upper(""));
    }

    #[test]
    fn test_snake_to_camel() {
        assert_eq!(snake_to_camel("user_id"), "userId");
        assert_eq!(snake_to_camel("user_email_address"), "userEmailAddress");
        assert_eq!(snake_to_camel("user"), "user");
    }

    #[test]
    fn test_snake_to_camel_collapses_empty_segments() {
        assert_eq!(snake_to_camel("user__id"), "userId");
        assert_eq!(snake_to_camel("user_id_"), "userId");
    }

    #[test]
    fn test_snake_to_camel_lowercases_first_segment() {
        assert_eq!(snake_to_camel("USER_id"), "userId");
    }

    #[test]
    fn test_camel_to_snake() {
        assert_eq!(camel_to_snake("blogDate"), "blog_date");
        assert_eq!(camel_to_snake("userEmailAddress"), "user_email_address");
        assert_eq!(camel_to_snake("aB"), "a_b");
    }

    #[test]
    fn test_camel_to_snake_strips_leading_underscore() {
        // A leading uppercase letter would otherwise produce "_blog".
        assert_eq!(camel_to_snake("Blog"), "blog");
    }

    #[test]
    fn test_camel_to_snake_strips_dot_before_uppercase() {
        assert_eq!(camel_to_snake("blog.Date"), "blog_date");
    }

    #[test]
    fn test_camel_to_pascal() {
        assert_eq!(camel_to_pascal("blogDate"), "BlogDate");
        assert_eq!(camel_to_pascal(""), "");
    }

    #[test]
    fn test_snake_to_pascal() {
        assert_eq!(snake_to_pascal("user_id"), "UserId");
        assert_eq!(snake_to_pascal("user__id"), "UserId");
        assert_eq!(snake_to_pascal("user"), "User");
    }

    #[test]
    fn test_pascal_to_camel_touches_only_first_char() {
        assert_eq!(pascal_to_camel("BlogDate"), "blogDate");
        assert_eq!(pascal_to_camel("ABTest"), "aBTest");
        assert_eq!(pascal_to_camel(""), "");
    }

    #[test]
    fn test_pascal_to_snake() {
        assert_eq!(pascal_to_snake("BlogDate"), "blog_date");
        assert_eq!(pascal_to_snake("PosterName"), "poster_name");
        assert_eq!(pascal_to_snake("ABTest"), "a_b_test");
        assert_eq!(pascal_to_snake("Blog"), "blog");
    }
}
