//! Email address checks.
//!
//! This module holds the email grammar used by the form validator.

use log::*;
use regex::Regex;
use std::sync::OnceLock;

/// Email grammar: a dot-separated or quoted local part, `@`, then either a
/// bracketed IPv4 literal or dot-separated labels ending in a 2+ letter TLD.
/// The byte order mark counts as whitespace.
///
const EMAIL_PATTERN: &str = r#"^(([^<>()\[\]\\.,;:\s\x{FEFF}@"]+(\.[^<>()\[\]\\.,;:\s\x{FEFF}@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#;

fn email_regex() -> Option<&'static Regex> {
    static EMAIL_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL_REGEX
        .get_or_init(|| match Regex::new(EMAIL_PATTERN) {
            Ok(re) => Some(re),
            Err(e) => {
                warn!("Failed to compile email pattern: {}", e);
                None
            }
        })
        .as_ref()
}

/// Return true if the text is a non-empty, well-formed email address.
///
/// # Arguments
/// * `text` - The raw text typed into the email field
///
/// # Returns
/// `false` for empty text, text that fails the grammar, or when the grammar
/// itself could not be compiled.
pub fn is_valid_email(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    email_regex().map(|re| re.is_match(text)).unwrap_or(false)
}
