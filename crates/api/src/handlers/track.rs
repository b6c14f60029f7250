//! Handlers for the `/tracks` resource.
//!
//! Listing runs the filter/sort/paginate pipeline over every stored track.
//! Single tracks are looked up by slug for reads and by id for writes.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use melodex_core::audio::{validate_mime_type, validate_size};
use melodex_core::cover_image::validate_cover_image;
use melodex_core::error::CoreError;
use melodex_core::slug::{validate_slug, validate_title};
use melodex_core::track_query;
use melodex_core::types::TrackId;
use melodex_db::models::track::{BulkDeleteTracks, CreateTrack, Track, UpdateTrack};
use melodex_db::repositories::{AudioRepo, TrackRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::query::TrackListParams;
use crate::response::PaginatedResponse;
use crate::state::AppState;

fn track_not_found(id: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Track",
        id: id.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

/// GET /api/tracks
///
/// List tracks with optional `search`, `genre` and `artist` filters,
/// `sort`/`order`, and `page`/`limit` pagination.
pub async fn list_tracks(
    State(state): State<AppState>,
    Query(params): Query<TrackListParams>,
) -> AppResult<impl IntoResponse> {
    let query = params.to_query()?;
    let tracks = TrackRepo::list(&state.store).await?;
    let page = track_query::query(&tracks, &query);

    tracing::debug!(
        total = page.total,
        returned = page.items.len(),
        page = query.page,
        limit = query.limit,
        "Listed tracks"
    );

    Ok(Json(PaginatedResponse::new(page, &query)))
}

/// GET /api/tracks/{slug}
pub async fn get_track_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Track>> {
    // A malformed slug cannot belong to any track.
    if validate_slug(&slug).is_err() {
        return Err(track_not_found(&slug));
    }

    let track = TrackRepo::find_by_slug(&state.store, &slug)
        .await?
        .ok_or_else(|| track_not_found(&slug))?;

    Ok(Json(track))
}

/// GET /api/tracks/delete
///
/// `delete` is a legal slug; this keeps it reachable next to the static
/// bulk-delete route.
pub async fn get_track_with_delete_slug(state: State<AppState>) -> AppResult<Json<Track>> {
    get_track_by_slug(state, Path("delete".to_string())).await
}

// ---------------------------------------------------------------------------
// Writes
// ---------------------------------------------------------------------------

/// POST /api/tracks
///
/// Create a track. The slug is derived from the title and must be unique.
pub async fn create_track(
    State(state): State<AppState>,
    Json(input): Json<CreateTrack>,
) -> AppResult<impl IntoResponse> {
    if input.title.trim().is_empty() || input.artist.trim().is_empty() {
        return Err(AppError::BadRequest("Title and artist are required".into()));
    }
    input.validate()?;
    validate_title(&input.title)?;
    if let Some(cover) = &input.cover_image {
        validate_cover_image(cover)?;
    }

    let track = TrackRepo::create(&state.store, &input).await?;

    tracing::info!(id = %track.id, slug = %track.slug, "Track created");

    Ok((StatusCode::CREATED, Json(track)))
}

/// PUT /api/tracks/{id}
///
/// Partially update a track. A new title recomputes the slug.
pub async fn update_track(
    State(state): State<AppState>,
    Path(id): Path<TrackId>,
    Json(input): Json<UpdateTrack>,
) -> AppResult<Json<Track>> {
    input.validate()?;
    if let Some(title) = &input.title {
        validate_title(title)?;
    }
    if input.artist.as_deref().is_some_and(|a| a.trim().is_empty()) {
        return Err(AppError::Core(CoreError::Validation(
            "Artist must not be blank".into(),
        )));
    }
    if let Some(cover) = &input.cover_image {
        validate_cover_image(cover)?;
    }

    let track = TrackRepo::update(&state.store, &id, &input)
        .await?
        .ok_or_else(|| track_not_found(&id))?;

    tracing::info!(id = %track.id, slug = %track.slug, "Track updated");

    Ok(Json(track))
}

/// DELETE /api/tracks/{id}
///
/// Delete a track together with its audio file.
pub async fn delete_track(
    State(state): State<AppState>,
    Path(id): Path<TrackId>,
) -> AppResult<impl IntoResponse> {
    let deleted = TrackRepo::delete(&state.store, &id).await?;

    if !deleted {
        return Err(track_not_found(&id));
    }

    tracing::info!(id = %id, "Track deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/tracks/delete
///
/// Delete several tracks. Responds with the ids that were and were not
/// deleted; unknown ids do not fail the request.
pub async fn bulk_delete_tracks(
    State(state): State<AppState>,
    Json(input): Json<BulkDeleteTracks>,
) -> AppResult<impl IntoResponse> {
    if input.ids.is_empty() {
        return Err(AppError::BadRequest("ids must not be empty".into()));
    }

    let result = TrackRepo::delete_many(&state.store, &input.ids).await;

    tracing::info!(
        deleted = result.success.len(),
        failed = result.failed.len(),
        "Bulk track delete"
    );

    Ok(Json(result))
}

// ---------------------------------------------------------------------------
// Audio
// ---------------------------------------------------------------------------

/// POST /api/tracks/{id}/upload
///
/// Accepts a multipart form carrying an MP3 or WAV file. The first part with
/// a filename is the upload, whatever its field name (`file`, `audio`, ...);
/// plain form fields are skipped. Replaces any audio already attached to the
/// track.
pub async fn upload_track_audio(
    State(state): State<AppState>,
    Path(id): Path<TrackId>,
    mut multipart: Multipart,
) -> AppResult<Json<Track>> {
    if TrackRepo::find_by_id(&state.store, &id).await?.is_none() {
        return Err(track_not_found(&id));
    }

    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        validate_mime_type(field.content_type())?;

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        upload = Some((file_name, data.to_vec()));
        break;
    }

    let (file_name, data) =
        upload.ok_or_else(|| AppError::BadRequest("No audio file uploaded".into()))?;
    validate_size(data.len(), state.config.max_file_size)?;

    let track = AudioRepo::save(&state.store, &id, &file_name, &data)
        .await?
        .ok_or_else(|| track_not_found(&id))?;

    Ok(Json(track))
}

/// DELETE /api/tracks/{id}/file
///
/// Remove the audio file attached to a track.
pub async fn delete_track_audio(
    State(state): State<AppState>,
    Path(id): Path<TrackId>,
) -> AppResult<Json<Track>> {
    if TrackRepo::find_by_id(&state.store, &id).await?.is_none() {
        return Err(track_not_found(&id));
    }

    let track = AudioRepo::delete(&state.store, &id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Audio file for track",
                id: id.clone(),
            })
        })?;

    Ok(Json(track))
}
