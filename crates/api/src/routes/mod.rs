pub mod genre;
pub mod health;
pub mod track;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /genres                        list
///
/// /tracks                        list (filter, sort, paginate), create
/// /tracks/delete                 bulk delete (POST)
/// /tracks/{key}                  get by slug, update/delete by id
/// /tracks/{key}/upload           attach audio (POST, multipart)
/// /tracks/{key}/file             remove audio (DELETE)
/// ```
///
/// Uploaded audio is served separately under `/api/files` (see
/// [`crate::router::build_app_router`]).
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/genres", genre::router())
        .nest("/tracks", track::router())
}
