use std::sync::LazyLock;

use regex::Regex;

pub const MIN_PASSWORD_LEN: usize = 8;

// non-space, '@', non-space, '.', non-space
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("user@test.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("ab.com"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("a@@b.co"));
    }

    #[test]
    fn password_length_boundary() {
        assert!(!is_valid_password("1234567"));
        assert!(is_valid_password("12345678"));
        assert!(is_valid_password("password1"));
        assert!(!is_valid_password(""));
    }

    #[test]
    fn name_must_have_content() {
        assert!(is_valid_name("Juan Dela Cruz"));
        assert!(is_valid_name("  x "));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name(" \t\n"));
    }
}
