//! Query parameter types for the track listing endpoint.

use melodex_core::track_query::{RawTrackQuery, TrackQuery};
use serde::Deserialize;

use crate::error::AppResult;

/// Raw `?search=&genre=&artist=&sort=&order=&page=&limit=` parameters.
///
/// Every field is kept as a string so malformed numbers are reported by
/// [`TrackQuery::from_raw`] as a JSON validation error instead of being
/// rejected by the extractor.
#[derive(Debug, Default, Deserialize)]
pub struct TrackListParams {
    pub search: Option<String>,
    pub genre: Option<String>,
    pub artist: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl TrackListParams {
    /// Validate into the form consumed by the query pipeline.
    pub fn to_query(&self) -> AppResult<TrackQuery> {
        let raw = RawTrackQuery {
            search: self.search.as_deref(),
            genre: self.genre.as_deref(),
            artist: self.artist.as_deref(),
            sort: self.sort.as_deref(),
            order: self.order.as_deref(),
            page: self.page.as_deref(),
            limit: self.limit.as_deref(),
        };
        Ok(TrackQuery::from_raw(&raw)?)
    }
}
