//! Handlers for diary entries.
//!
//! One write endpoint addressed by the `(ownerId, entryDate)` natural key,
//! plus per-owner listing and a single-date fetch. The row id never
//! appears in a request; clients always speak in owner and date.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

use mydiary_core::diary::{self, IllustrationOutcome};
use mydiary_core::error::CoreError;
use mydiary_db::models::diary::{DiaryEntry, DiarySummary, UpsertDiaryEntry};
use mydiary_db::repositories::DiaryRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Query parameters for the owner-scoped read endpoints.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerParams {
    pub owner_id: Option<String>,
}

/// POST /diaries
///
/// Create or update the entry for `(ownerId, entryDate)`. Both outcomes
/// answer 200 with the stored row; the client treats every write as "set
/// this day's entry" and does not care whether the row already existed.
pub async fn upsert_diary(
    State(state): State<AppState>,
    Json(input): Json<UpsertDiaryEntry>,
) -> AppResult<impl IntoResponse> {
    let owner_id = diary::parse_owner_id(input.owner_id.as_deref())?;
    let entry_date = diary::parse_entry_date(input.entry_date.as_deref())?;

    let existing = DiaryRepo::find_by_owner_and_date(&state.pool, owner_id, entry_date).await?;

    let outcome = if input.generate_illustration {
        match state.illustrator.generate_image_url(&input.content).await {
            Ok(url) => IllustrationOutcome::Generated(url),
            Err(e) => {
                // The entry must still be saved, so the failure is absorbed
                // here rather than propagated.
                tracing::warn!(
                    %owner_id,
                    %entry_date,
                    error = %e,
                    "Illustration generation failed, keeping previous illustration"
                );
                IllustrationOutcome::Failed
            }
        }
    } else {
        IllustrationOutcome::NotRequested
    };

    let merged = DiaryEntry::merge(existing, owner_id, entry_date, &input, &outcome, Utc::now());
    let saved = DiaryRepo::save(&state.pool, &merged).await?;

    tracing::info!(
        %owner_id,
        %entry_date,
        entry_id = %saved.id,
        "Diary entry upserted"
    );

    Ok(Json(saved))
}

/// GET /diaries?ownerId=
///
/// List summaries for an owner, newest entry date first.
pub async fn list_diaries(
    State(state): State<AppState>,
    Query(params): Query<OwnerParams>,
) -> AppResult<impl IntoResponse> {
    let owner_id = diary::parse_owner_id(params.owner_id.as_deref())?;

    let entries = DiaryRepo::list_by_owner(&state.pool, owner_id).await?;
    let summaries: Vec<DiarySummary> = entries.iter().map(DiarySummary::from).collect();

    Ok(Json(summaries))
}

/// GET /diaries/{date}?ownerId=
///
/// Fetch the full entry for one date.
pub async fn get_diary_by_date(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Query(params): Query<OwnerParams>,
) -> AppResult<impl IntoResponse> {
    let owner_id = diary::parse_owner_id(params.owner_id.as_deref())?;
    let entry_date = diary::parse_entry_date(Some(&date))?;

    let entry = DiaryRepo::find_by_owner_and_date(&state.pool, owner_id, entry_date)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "DiaryEntry",
            key: format!("{owner_id}/{entry_date}"),
        })?;

    Ok(Json(entry))
}
