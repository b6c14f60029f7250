//! Audio upload constants and validation.

use crate::error::CoreError;

/// Default maximum upload size (10 MiB).
pub const DEFAULT_MAX_AUDIO_BYTES: usize = 10 * 1024 * 1024;

/// MIME types accepted for track audio uploads.
pub const ALLOWED_AUDIO_MIME_TYPES: &[&str] =
    &["audio/mpeg", "audio/wav", "audio/mp3", "audio/x-wav"];

/// Check whether a MIME type is an accepted audio type.
pub fn is_allowed_mime_type(mime: &str) -> bool {
    ALLOWED_AUDIO_MIME_TYPES.contains(&mime)
}

/// Validate the MIME type reported for an uploaded file.
pub fn validate_mime_type(mime: Option<&str>) -> Result<(), CoreError> {
    match mime {
        Some(m) if is_allowed_mime_type(m) => Ok(()),
        _ => Err(CoreError::Validation(
            "Invalid file type. Only MP3 and WAV files are allowed.".into(),
        )),
    }
}

/// Validate the size of an uploaded file against `max_bytes`.
pub fn validate_size(len: usize, max_bytes: usize) -> Result<(), CoreError> {
    if len > max_bytes {
        return Err(CoreError::Validation(format!(
            "File is too large. Maximum size is {}.",
            format_size(max_bytes)
        )));
    }
    Ok(())
}

/// Build the stored asset name for a track: `<id>.<ext>`.
///
/// The extension comes from the uploaded filename, lowercased and kept only
/// when it is non-empty ASCII alphanumeric. Otherwise the asset is stored
/// under the bare id.
pub fn stored_file_name(track_id: &str, original_name: &str) -> String {
    match extension(original_name) {
        Some(ext) => format!("{track_id}.{ext}"),
        None => track_id.to_string(),
    }
}

fn extension(file_name: &str) -> Option<String> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

fn format_size(bytes: usize) -> String {
    const MIB: usize = 1024 * 1024;
    if bytes >= MIB && bytes % MIB == 0 {
        format!("{}MB", bytes / MIB)
    } else {
        format!("{bytes} bytes")
    }
}
