//! Cover image URL validation.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Direct links to an image file, optionally followed by a simple query string.
const IMAGE_URL_PATTERN: &str = r"(?i)^https?://(?:[\w-]+\.)+[a-z]{2,}(?:/[\w-]+)*/[\w-]+\.(?:jpg|jpeg|png|gif|bmp|webp)(?:\?[a-z0-9&=]*)?$";

/// Hosts that serve images from extension-less URLs.
const DYNAMIC_IMAGE_PATTERN: &str = r"(?i)^https?://(?:picsum\.photos|img\.freepik\.com)";

static IMAGE_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(IMAGE_URL_PATTERN).expect("valid regex"));

static DYNAMIC_IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DYNAMIC_IMAGE_PATTERN).expect("valid regex"));

/// Whether `url` looks like a usable cover image URL.
pub fn is_valid_cover_url(url: &str) -> bool {
    IMAGE_URL_RE.is_match(url) || DYNAMIC_IMAGE_RE.is_match(url)
}

/// Validate an optional cover image. Empty means "no cover" and is accepted.
pub fn validate_cover_image(url: &str) -> Result<(), CoreError> {
    if url.is_empty() || is_valid_cover_url(url) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid cover image URL '{url}'. Expected a link to a jpg, jpeg, png, gif, bmp or webp image"
        )))
    }
}
