//! Track entity model and DTOs.

use melodex_core::track_query::Queryable;
use melodex_core::types::{Timestamp, TrackId};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A stored track (`<tracks_dir>/<id>.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: TrackId,
    pub title: String,
    pub artist: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_file: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Queryable for Track {
    fn title(&self) -> &str {
        &self.title
    }

    fn artist(&self) -> &str {
        &self.artist
    }

    fn album(&self) -> Option<&str> {
        self.album.as_deref()
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn genres(&self) -> &[String] {
        &self.genres
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }

    fn updated_at(&self) -> Timestamp {
        self.updated_at
    }
}

/// DTO for creating a new track. The slug is derived from the title.
///
/// `title` and `artist` default to empty so a missing field surfaces as a
/// validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrack {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 200, message = "Artist must be 1-200 characters"))]
    pub artist: String,
    #[validate(length(max = 200, message = "Album must be at most 200 characters"))]
    pub album: Option<String>,
    #[serde(default)]
    #[validate(length(max = 20, message = "A track can have at most 20 genres"))]
    pub genres: Vec<String>,
    pub cover_image: Option<String>,
}

/// DTO for updating an existing track. All fields optional.
///
/// Changing the title recomputes the slug. An empty `album` or `coverImage`
/// clears the field.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTrack {
    pub title: Option<String>,
    #[validate(length(min = 1, max = 200, message = "Artist must be 1-200 characters"))]
    pub artist: Option<String>,
    #[validate(length(max = 200, message = "Album must be at most 200 characters"))]
    pub album: Option<String>,
    #[validate(length(max = 20, message = "A track can have at most 20 genres"))]
    pub genres: Option<Vec<String>>,
    pub cover_image: Option<String>,
}

/// DTO for deleting several tracks at once.
#[derive(Debug, Clone, Deserialize)]
pub struct BulkDeleteTracks {
    #[serde(default)]
    pub ids: Vec<TrackId>,
}

/// Outcome of a bulk delete, partitioned by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BulkDeleteResult {
    pub success: Vec<TrackId>,
    pub failed: Vec<TrackId>,
}
