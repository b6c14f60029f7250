use axum::routing::get;
use axum::Router;

use crate::handlers::genre;
use crate::state::AppState;

/// Genre routes mounted at `/genres`.
///
/// ```text
/// GET    /                  -> list_genres
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(genre::list_genres))
}
