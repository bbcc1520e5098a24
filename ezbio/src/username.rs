//! Username normalization and validation.
//!
//! Only consulted when normalization is requested; the default lookup path
//! forwards the argument byte-for-byte, empty strings included.

use crate::constants::{bio_url_re, username_re};
use crate::error::LookupError;

/// Reduces user input to a bare username.
///
/// A full `https://e-z.bio/<user>` URL yields its username segment. Other
/// input has one leading `@` and surrounding whitespace stripped.
///
/// # Errors
///
/// Returns [`LookupError::InvalidUrl`] for an `e-z.bio` URL with no
/// username segment.
pub fn extract(input: &str) -> Result<String, LookupError> {
    let trimmed = input.trim();
    if trimmed.starts_with("https://e-z.bio/") {
        return match bio_url_re().captures(trimmed).and_then(|caps| caps.get(1)) {
            Some(segment) => Ok(segment.as_str().to_owned()),
            None => Err(LookupError::InvalidUrl),
        };
    }
    Ok(trimmed.strip_prefix('@').unwrap_or(trimmed).trim().to_owned())
}

/// Whether a normalized username is acceptable: non-empty, with only word
/// characters, `-`, and `.`.
#[must_use]
pub fn is_valid(username: &str) -> bool {
    username_re().is_match(username)
}
