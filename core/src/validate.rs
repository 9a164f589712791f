//! Input format validation

use std::sync::LazyLock;

use regex::Regex;

/// Permissive email shape: something, `@`, something, `.`, something, with
/// no whitespace or extra `@` in any part.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Check whether a string looks like an email address.
///
/// This is a format sanity check, not a deliverability guarantee - it accepts
/// anything of the form `local@domain.tld` and rejects obviously malformed
/// input.
pub fn is_valid_email(input: &str) -> bool {
    EMAIL_RE.is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_minimal_address() {
        assert!(is_valid_email("a@b.co"));
    }

    #[test]
    fn accepts_common_shapes() {
        assert!(is_valid_email("first.last@example.com"));
        assert!(is_valid_email("user+tag@sub.domain.org"));
    }

    #[test]
    fn rejects_missing_parts() {
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("ab.com"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn rejects_whitespace_and_double_at() {
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email("a@b@c.co"));
        assert!(!is_valid_email(" a@b.co"));
    }
}
