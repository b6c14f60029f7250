//! Directory-backed JSON persistence for the track catalog.
//!
//! Every track is one `<id>.json` file in the tracks directory, uploaded
//! audio lives in the uploads directory, and the genre list is a single JSON
//! array. [`FileStore`] is the shared handle (the analogue of a connection
//! pool); repositories in [`repositories`] take `&FileStore` as their first
//! argument.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{Mutex, MutexGuard};

pub mod error;
pub mod models;
pub mod repositories;
pub mod seed;

pub use error::StoreError;

/// Genres written to a fresh genres file.
pub const DEFAULT_GENRES: &[&str] = &[
    "Rock",
    "Pop",
    "Hip Hop",
    "Jazz",
    "Classical",
    "Electronic",
    "R&B",
    "Country",
    "Folk",
    "Reggae",
    "Metal",
    "Blues",
    "Indie",
];

/// Locations of the three storage areas.
#[derive(Debug, Clone)]
pub struct StorePaths {
    pub tracks_dir: PathBuf,
    pub uploads_dir: PathBuf,
    pub genres_file: PathBuf,
}

impl StorePaths {
    /// Conventional layout under a single data directory:
    /// `tracks/`, `uploads/` and `genres.json`.
    pub fn under(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        Self {
            tracks_dir: data_dir.join("tracks"),
            uploads_dir: data_dir.join("uploads"),
            genres_file: data_dir.join("genres.json"),
        }
    }
}

/// Cheaply cloneable handle to the on-disk store.
///
/// Reads take no lock. Mutations go through [`FileStore::lock_writes`] so a
/// uniqueness check and the write that depends on it cannot interleave with
/// another mutation.
#[derive(Debug, Clone)]
pub struct FileStore {
    inner: Arc<StoreInner>,
}

#[derive(Debug)]
struct StoreInner {
    paths: StorePaths,
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Build a handle without touching the filesystem.
    pub fn new(paths: StorePaths) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                paths,
                write_lock: Mutex::new(()),
            }),
        }
    }

    pub fn tracks_dir(&self) -> &Path {
        &self.inner.paths.tracks_dir
    }

    pub fn uploads_dir(&self) -> &Path {
        &self.inner.paths.uploads_dir
    }

    pub fn genres_file(&self) -> &Path {
        &self.inner.paths.genres_file
    }

    pub(crate) fn track_path(&self, id: &str) -> PathBuf {
        self.tracks_dir().join(format!("{id}.json"))
    }

    pub(crate) fn upload_path(&self, file_name: &str) -> PathBuf {
        self.uploads_dir().join(file_name)
    }

    pub(crate) async fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.inner.write_lock.lock().await
    }
}

/// Open the store, creating the tracks and uploads directories if needed.
pub async fn open_store(paths: StorePaths) -> Result<FileStore, StoreError> {
    let store = FileStore::new(paths);
    for dir in [store.tracks_dir(), store.uploads_dir()] {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| StoreError::io(dir, e))?;
    }
    Ok(store)
}

/// Write the default genre list if no genres file exists yet.
///
/// Existing genre files are left untouched.
pub async fn initialize(store: &FileStore) -> Result<(), StoreError> {
    let path = store.genres_file();
    match tokio::fs::try_exists(path).await {
        Ok(true) => Ok(()),
        Ok(false) => {
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| StoreError::io(parent, e))?;
            }
            write_json_atomic(path, &DEFAULT_GENRES).await?;
            tracing::info!(path = %path.display(), "Wrote default genres file");
            Ok(())
        }
        Err(e) => Err(StoreError::io(path, e)),
    }
}

/// Verify that the tracks and uploads directories are readable.
pub async fn health_check(store: &FileStore) -> Result<(), StoreError> {
    for dir in [store.tracks_dir(), store.uploads_dir()] {
        tokio::fs::read_dir(dir)
            .await
            .map_err(|e| StoreError::io(dir, e))?;
    }
    Ok(())
}

/// Serialize `value` as pretty JSON and replace `path` atomically.
///
/// The data is written to a sibling temp file first and renamed over the
/// target, so readers never observe a half-written record.
pub(crate) async fn write_json_atomic<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
) -> Result<(), StoreError> {
    let bytes =
        serde_json::to_vec_pretty(value).map_err(|e| StoreError::serialization(path, e))?;
    write_bytes_atomic(path, &bytes).await
}

/// Write raw bytes to `path` via a temp file + rename.
pub(crate) async fn write_bytes_atomic(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let tmp = path.with_file_name(format!(".{file_name}.{}.tmp", uuid::Uuid::new_v4()));

    tokio::fs::write(&tmp, bytes)
        .await
        .map_err(|e| StoreError::io(&tmp, e))?;
    if let Err(e) = tokio::fs::rename(&tmp, path).await {
        let _ = tokio::fs::remove_file(&tmp).await;
        return Err(StoreError::io(path, e));
    }
    Ok(())
}
