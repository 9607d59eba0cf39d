//! Diary entry model and DTOs.
//!
//! The upsert endpoint addresses entries by the natural key
//! `(owner_id, entry_date)`, never by row id, so the entity carries both
//! and the merge below decides which columns a write may touch.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use mydiary_core::diary::{self, IllustrationOutcome};
use mydiary_core::types::{EntryDate, EntryId, OwnerId, Timestamp};

/// A row from the `diaries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntry {
    pub id: EntryId,
    pub owner_id: OwnerId,
    pub entry_date: EntryDate,
    pub content: String,
    pub mood: Option<String>,
    pub todo: Option<String>,
    pub reflection: Option<String>,
    pub illustration_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for the upsert endpoint.
///
/// `owner_id` and `entry_date` arrive as raw strings and go through the
/// core parsers, so a missing or malformed key is reported as a
/// validation failure instead of a deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertDiaryEntry {
    pub owner_id: Option<String>,
    pub entry_date: Option<String>,
    pub content: String,
    pub mood: Option<String>,
    pub todo: Option<String>,
    pub reflection: Option<String>,
    pub illustration_url: Option<String>,
    #[serde(default)]
    pub generate_illustration: bool,
}

/// List-view projection of a diary entry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiarySummary {
    pub id: EntryId,
    pub entry_date: EntryDate,
    pub mood: Option<String>,
    pub summary: String,
}

impl From<&DiaryEntry> for DiarySummary {
    fn from(entry: &DiaryEntry) -> Self {
        Self {
            id: entry.id,
            entry_date: entry.entry_date,
            mood: entry.mood.clone(),
            summary: diary::make_summary(&entry.content),
        }
    }
}

impl DiaryEntry {
    /// Merge a write request into the stored row, or mint a new row when
    /// none exists yet for the `(owner_id, entry_date)` key.
    ///
    /// Content fields (`content`, `mood`, `todo`, `reflection`) are
    /// overwritten with whatever the request carries, including clearing
    /// them when absent. The illustration URL instead follows the fallback
    /// policy in [`mydiary_core::diary::resolve_illustration_url`]. On an
    /// existing row the identity columns and `created_at` never change and
    /// only `updated_at` advances; the caller supplies the clock.
    pub fn merge(
        existing: Option<DiaryEntry>,
        owner_id: OwnerId,
        entry_date: EntryDate,
        input: &UpsertDiaryEntry,
        outcome: &IllustrationOutcome,
        now: Timestamp,
    ) -> DiaryEntry {
        let illustration_url = diary::resolve_illustration_url(
            existing.as_ref().and_then(|e| e.illustration_url.as_deref()),
            input.illustration_url.as_deref(),
            outcome,
        );

        match existing {
            Some(entry) => DiaryEntry {
                content: input.content.clone(),
                mood: diary::normalize_mood(input.mood.as_deref()),
                todo: input.todo.clone(),
                reflection: input.reflection.clone(),
                illustration_url,
                updated_at: now,
                ..entry
            },
            None => DiaryEntry {
                id: Uuid::new_v4(),
                owner_id,
                entry_date,
                content: input.content.clone(),
                mood: diary::normalize_mood(input.mood.as_deref()),
                todo: input.todo.clone(),
                reflection: input.reflection.clone(),
                illustration_url,
                created_at: now,
                updated_at: now,
            },
        }
    }
}
