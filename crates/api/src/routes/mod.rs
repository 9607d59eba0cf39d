pub mod diary;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /diaries                 list summaries (?ownerId), upsert entry
/// /diaries/{date}          fetch one full entry (?ownerId)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/diaries", diary::router())
}
