//! Repository for uploaded track audio (`<uploads_dir>/<id>.<ext>`).

use std::io::ErrorKind;

use chrono::Utc;
use melodex_core::audio::stored_file_name;

use crate::models::track::Track;
use crate::repositories::TrackRepo;
use crate::{write_bytes_atomic, FileStore, StoreError};

/// Stores and removes the audio asset attached to a track.
pub struct AudioRepo;

impl AudioRepo {
    /// Store `bytes` as the audio file of track `id` and record it on the
    /// track.
    ///
    /// The asset is named after the track id plus the extension of
    /// `original_name`. A previous asset under a different name is removed
    /// once the record points at the new one; failing to remove it is logged.
    /// Returns `None` if the track does not exist.
    pub async fn save(
        store: &FileStore,
        id: &str,
        original_name: &str,
        bytes: &[u8],
    ) -> Result<Option<Track>, StoreError> {
        let _guard = store.lock_writes().await;
        let Some(mut track) = TrackRepo::find_by_id(store, id).await? else {
            return Ok(None);
        };

        let file_name = stored_file_name(&track.id, original_name);
        write_bytes_atomic(&store.upload_path(&file_name), bytes).await?;

        let previous = track
            .audio_file
            .replace(file_name.clone())
            .filter(|previous| *previous != file_name);
        track.updated_at = Utc::now();
        TrackRepo::save(store, &track).await?;

        if let Some(previous) = previous {
            discard_upload(store, &track.id, &previous).await;
        }

        tracing::info!(id = %track.id, file = %file_name, size = bytes.len(), "Stored audio file");
        Ok(Some(track))
    }

    /// Remove the audio asset of track `id` and clear its reference.
    ///
    /// Returns `None` if the track does not exist or has no audio file. The
    /// reference is cleared first; an asset that cannot be removed afterwards
    /// is logged and left behind.
    pub async fn delete(store: &FileStore, id: &str) -> Result<Option<Track>, StoreError> {
        let _guard = store.lock_writes().await;
        let Some(mut track) = TrackRepo::find_by_id(store, id).await? else {
            return Ok(None);
        };
        let Some(file_name) = track.audio_file.take() else {
            return Ok(None);
        };

        track.updated_at = Utc::now();
        TrackRepo::save(store, &track).await?;
        discard_upload(store, &track.id, &file_name).await;

        tracing::info!(id = %track.id, file = %file_name, "Deleted audio file");
        Ok(Some(track))
    }
}

/// Best-effort removal of an asset no record refers to any more.
async fn discard_upload(store: &FileStore, id: &str, file_name: &str) {
    if let Err(e) = remove_upload(store, file_name).await {
        tracing::warn!(id = %id, file = %file_name, error = %e, "Failed to remove audio file");
    }
}

async fn remove_upload(store: &FileStore, file_name: &str) -> Result<(), StoreError> {
    let path = store.upload_path(file_name);
    match tokio::fs::remove_file(&path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(StoreError::io(&path, e)),
    }
}
