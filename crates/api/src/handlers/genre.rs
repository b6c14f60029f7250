//! Handlers for the genre list.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use melodex_db::repositories::GenreRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/genres
///
/// Return every available genre as a bare JSON array.
pub async fn list_genres(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let genres = GenreRepo::list(&state.store).await?;
    Ok(Json(genres))
}
