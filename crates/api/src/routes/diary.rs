//! Route definitions for diary entries.
//!
//! Mounted at `/diaries` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::diary;
use crate::state::AppState;

/// Diary routes.
///
/// ```text
/// GET  /            -> list_diaries (?ownerId)
/// POST /            -> upsert_diary
/// GET  /{date}      -> get_diary_by_date (?ownerId)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(diary::list_diaries).post(diary::upsert_diary))
        .route("/{date}", get(diary::get_diary_by_date))
}
