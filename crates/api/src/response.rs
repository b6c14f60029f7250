//! Response envelope types for API handlers.
//!
//! Single resources are returned as bare JSON objects. Paginated listings
//! use the [`PaginatedResponse`] envelope.

use melodex_core::track_query::{total_pages, TrackPage, TrackQuery};
use serde::Serialize;

/// `{ "data": [...], "meta": {...} }` envelope for paginated listings.
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T: Serialize> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

/// Pagination metadata. `total` counts matches before pagination.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total: usize,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

impl<T: Serialize> PaginatedResponse<T> {
    /// Wrap one page of results together with the query that produced it.
    pub fn new(page: TrackPage<T>, query: &TrackQuery) -> Self {
        Self {
            meta: PageMeta {
                total: page.total,
                page: query.page,
                limit: query.limit,
                total_pages: total_pages(page.total, query.limit),
            },
            data: page.items,
        }
    }
}
