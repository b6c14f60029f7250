//! Track title validation and slug generation.
//!
//! Slugs are the human-readable secondary key used by `GET /tracks/{slug}`.
//! They must be unique across the catalog; uniqueness itself is enforced by
//! the store, this module only derives and checks their shape.

use crate::error::CoreError;

/// Maximum accepted title length, in characters.
pub const MAX_TITLE_LEN: usize = 200;

// ---------------------------------------------------------------------------
// Slug generation
// ---------------------------------------------------------------------------

/// Generate a URL-safe slug from a track title.
///
/// Lowercases and trims the title, drops every character that is not an
/// ASCII word character, whitespace or hyphen, then collapses runs of
/// whitespace, underscores and hyphens into a single hyphen and trims
/// leading/trailing hyphens.
///
/// ```
/// use melodex_core::slug::generate_slug;
/// assert_eq!(generate_slug("Hello World!"), "hello-world");
/// assert_eq!(generate_slug("My Awesome Track - 2023"), "my-awesome-track-2023");
/// ```
pub fn generate_slug(title: &str) -> String {
    let lowered = title.to_lowercase();

    let mut result = String::with_capacity(lowered.len());
    let mut pending_separator = false;
    for c in lowered.trim().chars() {
        if c.is_whitespace() || c == '_' || c == '-' {
            pending_separator = true;
        } else if c.is_ascii_alphanumeric() {
            if pending_separator && !result.is_empty() {
                result.push('-');
            }
            pending_separator = false;
            result.push(c);
        }
        // Anything else is dropped without breaking the current word.
    }

    result
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a track title: non-blank, at most [`MAX_TITLE_LEN`] characters,
/// and producing a non-empty slug.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Title must not be empty".into()));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "Title must be at most {MAX_TITLE_LEN} characters"
        )));
    }
    if generate_slug(title).is_empty() {
        return Err(CoreError::Validation(
            "Title must contain at least one letter or digit".into(),
        ));
    }
    Ok(())
}

/// Validate a slug (non-empty, only lowercase alphanumeric + hyphens).
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() {
        return Err(CoreError::Validation("Slug must not be empty".into()));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(CoreError::Validation(
            "Slug must contain only lowercase alphanumeric characters and hyphens".into(),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
