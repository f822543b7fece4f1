//! E-mail address utility functions for the registration service

use once_cell::sync::Lazy;
use regex::Regex;

/// Regular expression for a standard `local@domain.tld` shape:
/// non-empty local part, non-empty domain with at least one dot, no whitespace
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
});

/// Validates the shape of an e-mail address
pub fn is_valid_email_format(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Normalize an e-mail address to its canonical lookup key
///
/// The address is trimmed and lowercased; e-mail identity is
/// case-insensitive across the system.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Mask an e-mail address for logging (keep first character and domain)
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let head = local.chars().next().map(String::from).unwrap_or_default();
            format!("{}***@{}", head, domain)
        }
        None => "***".to_string(),
    }
}
