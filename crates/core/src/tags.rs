//! Tag line parsing and validation.
//!
//! dev.to enforces at most four alphanumeric tags per article. Validation
//! is all-or-nothing: either every tag passes and the full list comes
//! back, or a single error describes the problem. Empty tokens produced
//! by consecutive commas are dropped before any check runs.

use regex::Regex;

/// Maximum number of tags accepted per article.
pub const MAX_TAGS: usize = 4;

/// Why a tag line was rejected. The messages are user-facing and consumed
/// verbatim by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagError {
    #[error("Too many tags. Max allowed: {max}")]
    TooManyTags { max: usize },

    /// Every offending tag, in input order, joined by `", "`.
    #[error("Invalid tags: {0}")]
    InvalidTags(String),
}

/// Parse and validate a comma-separated tag line.
///
/// Tokens are trimmed and empty ones dropped. The count limit is checked
/// first; character validation only runs on lines within the limit. On
/// success the tags come back trimmed, in input order, casing preserved.
pub fn validate_tags(input: &str) -> Result<Vec<String>, TagError> {
    let tags: Vec<String> = input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect();

    if tags.len() > MAX_TAGS {
        return Err(TagError::TooManyTags { max: MAX_TAGS });
    }

    let alphanumeric = Regex::new("^[a-zA-Z0-9]+$").unwrap();
    let invalid: Vec<&str> = tags
        .iter()
        .filter(|tag| !alphanumeric.is_match(tag))
        .map(String::as_str)
        .collect();

    if !invalid.is_empty() {
        return Err(TagError::InvalidTags(invalid.join(", ")));
    }

    Ok(tags)
}
