//! Route definitions for tracks.
//!
//! Reads address a track by slug, writes by id. Both share the `{key}`
//! segment because the router cannot hold two differently named parameters
//! at the same position.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::track;
use crate::state::AppState;

/// Track routes mounted at `/tracks`.
///
/// ```text
/// GET    /                  -> list_tracks
/// POST   /                  -> create_track
/// POST   /delete            -> bulk_delete_tracks
/// GET    /{key}             -> get_track_by_slug
/// PUT    /{key}             -> update_track
/// DELETE /{key}             -> delete_track
/// POST   /{key}/upload      -> upload_track_audio
/// DELETE /{key}/file        -> delete_track_audio
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(track::list_tracks).post(track::create_track))
        .route(
            "/delete",
            get(track::get_track_with_delete_slug).post(track::bulk_delete_tracks),
        )
        .route(
            "/{key}",
            get(track::get_track_by_slug)
                .put(track::update_track)
                .delete(track::delete_track),
        )
        .route("/{key}/upload", post(track::upload_track_audio))
        .route("/{key}/file", delete(track::delete_track_audio))
}
