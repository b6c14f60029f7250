//! Repository for track records (`<tracks_dir>/<id>.json`).

use std::io::ErrorKind;
use std::path::Path;

use chrono::Utc;
use melodex_core::slug::generate_slug;

use crate::models::track::{BulkDeleteResult, CreateTrack, Track, UpdateTrack};
use crate::{write_json_atomic, FileStore, StoreError};

/// Name of the slug uniqueness invariant, reported in conflicts.
pub const UQ_TRACKS_SLUG: &str = "uq_tracks_slug";

/// Provides CRUD operations for tracks.
pub struct TrackRepo;

impl TrackRepo {
    /// Load every track in the store, ordered by id (creation order for
    /// UUIDv7 ids).
    ///
    /// Files that are not valid track JSON are skipped with a warning so one
    /// corrupt record does not take the whole listing down.
    pub async fn list(store: &FileStore) -> Result<Vec<Track>, StoreError> {
        let dir = store.tracks_dir();
        let mut entries = tokio::fs::read_dir(dir)
            .await
            .map_err(|e| StoreError::io(dir, e))?;

        let mut tracks = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StoreError::io(dir, e))?
        {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match read_track(&path).await {
                Ok(Some(track)) => tracks.push(track),
                // Removed between read_dir and read.
                Ok(None) => {}
                Err(StoreError::Serialization { path, source }) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %source,
                        "Skipping malformed track file"
                    );
                }
                Err(e) => return Err(e),
            }
        }

        tracks.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(tracks)
    }

    /// Find a track by id. Ids that could not have been issued by the store
    /// (anything outside `[A-Za-z0-9_-]`) are never found.
    pub async fn find_by_id(store: &FileStore, id: &str) -> Result<Option<Track>, StoreError> {
        if !is_valid_id(id) {
            return Ok(None);
        }
        read_track(&store.track_path(id)).await
    }

    /// Find a track by its slug.
    pub async fn find_by_slug(store: &FileStore, slug: &str) -> Result<Option<Track>, StoreError> {
        let tracks = Self::list(store).await?;
        Ok(tracks.into_iter().find(|t| t.slug == slug))
    }

    /// Insert a new track, returning the created record.
    ///
    /// Fails with [`StoreError::UniqueViolation`] if another track already
    /// has the slug derived from `input.title`.
    pub async fn create(store: &FileStore, input: &CreateTrack) -> Result<Track, StoreError> {
        let slug = generate_slug(&input.title);

        let _guard = store.lock_writes().await;
        if Self::find_by_slug(store, &slug).await?.is_some() {
            return Err(StoreError::UniqueViolation {
                constraint: UQ_TRACKS_SLUG,
                value: slug,
            });
        }

        let now = Utc::now();
        let track = Track {
            id: uuid::Uuid::now_v7().to_string(),
            title: input.title.clone(),
            artist: input.artist.clone(),
            album: non_empty(input.album.as_deref()),
            genres: input.genres.clone(),
            slug,
            cover_image: non_empty(input.cover_image.as_deref()),
            audio_file: None,
            created_at: now,
            updated_at: now,
        };
        write_json_atomic(&store.track_path(&track.id), &track).await?;

        tracing::debug!(id = %track.id, slug = %track.slug, "Created track");
        Ok(track)
    }

    /// Update a track. Only non-`None` fields are applied.
    ///
    /// A changed title recomputes the slug; a slug owned by a different track
    /// is a [`StoreError::UniqueViolation`]. Returns `None` if no track with
    /// the given `id` exists.
    pub async fn update(
        store: &FileStore,
        id: &str,
        input: &UpdateTrack,
    ) -> Result<Option<Track>, StoreError> {
        let _guard = store.lock_writes().await;
        let Some(mut track) = Self::find_by_id(store, id).await? else {
            return Ok(None);
        };

        if let Some(title) = &input.title {
            if *title != track.title {
                let slug = generate_slug(title);
                if let Some(other) = Self::find_by_slug(store, &slug).await? {
                    if other.id != track.id {
                        return Err(StoreError::UniqueViolation {
                            constraint: UQ_TRACKS_SLUG,
                            value: slug,
                        });
                    }
                }
                track.slug = slug;
                track.title = title.clone();
            }
        }
        if let Some(artist) = &input.artist {
            track.artist = artist.clone();
        }
        if let Some(album) = &input.album {
            track.album = non_empty(Some(album));
        }
        if let Some(genres) = &input.genres {
            track.genres = genres.clone();
        }
        if let Some(cover_image) = &input.cover_image {
            track.cover_image = non_empty(Some(cover_image));
        }
        track.updated_at = Utc::now();

        write_json_atomic(&store.track_path(&track.id), &track).await?;
        Ok(Some(track))
    }

    /// Delete a track and its audio file.
    ///
    /// Returns `false` if the track does not exist. Failure to remove the
    /// audio file is logged and does not fail the delete.
    pub async fn delete(store: &FileStore, id: &str) -> Result<bool, StoreError> {
        let _guard = store.lock_writes().await;
        let Some(track) = Self::find_by_id(store, id).await? else {
            return Ok(false);
        };

        let path = store.track_path(&track.id);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(StoreError::io(&path, e)),
        }

        if let Some(audio_file) = &track.audio_file {
            let audio_path = store.upload_path(audio_file);
            if let Err(e) = tokio::fs::remove_file(&audio_path).await {
                tracing::warn!(
                    id = %track.id,
                    path = %audio_path.display(),
                    error = %e,
                    "Failed to delete audio file for track"
                );
            }
        }

        tracing::debug!(id = %track.id, "Deleted track");
        Ok(true)
    }

    /// Delete several tracks, reporting which ids were removed.
    ///
    /// Missing ids and per-track errors land in `failed`; the batch itself
    /// never fails.
    pub async fn delete_many(store: &FileStore, ids: &[String]) -> BulkDeleteResult {
        let mut result = BulkDeleteResult::default();
        for id in ids {
            match Self::delete(store, id).await {
                Ok(true) => result.success.push(id.clone()),
                Ok(false) => result.failed.push(id.clone()),
                Err(e) => {
                    tracing::warn!(id = %id, error = %e, "Bulk delete failed for track");
                    result.failed.push(id.clone());
                }
            }
        }
        result
    }

    /// Persist `track` unchanged. Callers must hold the write lock.
    pub(crate) async fn save(store: &FileStore, track: &Track) -> Result<(), StoreError> {
        write_json_atomic(&store.track_path(&track.id), track).await
    }
}

/// Whether `id` is shaped like an id the store could have issued.
pub fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= 64
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

async fn read_track(path: &Path) -> Result<Option<Track>, StoreError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(StoreError::io(path, e)),
    };
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|e| StoreError::serialization(path, e))
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
