//! Repository for the genre list (a single JSON array file).

use std::io::ErrorKind;

use crate::{FileStore, StoreError};

/// Read-only access to the available genres.
pub struct GenreRepo;

impl GenreRepo {
    /// List all genres in file order. A missing genres file is an empty list.
    pub async fn list(store: &FileStore) -> Result<Vec<String>, StoreError> {
        let path = store.genres_file();
        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::io(path, e)),
        };
        serde_json::from_str(&content).map_err(|e| StoreError::serialization(path, e))
    }
}
