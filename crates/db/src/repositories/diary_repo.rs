//! Repository for the `diaries` table.

use sqlx::PgPool;

use mydiary_core::types::{EntryDate, OwnerId};

use crate::models::diary::DiaryEntry;

/// Column list for the `diaries` table.
const COLUMNS: &str = "id, owner_id, entry_date, content, mood, todo, reflection, \
     illustration_url, created_at, updated_at";

/// Provides data access for diary entries.
pub struct DiaryRepo;

impl DiaryRepo {
    /// Fetch one entry by its natural key.
    pub async fn find_by_owner_and_date(
        pool: &PgPool,
        owner_id: OwnerId,
        entry_date: EntryDate,
    ) -> Result<Option<DiaryEntry>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM diaries WHERE owner_id = $1 AND entry_date = $2");
        sqlx::query_as::<_, DiaryEntry>(&query)
            .bind(owner_id)
            .bind(entry_date)
            .fetch_optional(pool)
            .await
    }

    /// List all entries for an owner, newest entry date first.
    pub async fn list_by_owner(
        pool: &PgPool,
        owner_id: OwnerId,
    ) -> Result<Vec<DiaryEntry>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM diaries WHERE owner_id = $1 ORDER BY entry_date DESC");
        sqlx::query_as::<_, DiaryEntry>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Persist a merged entry.
    ///
    /// The identity columns and `created_at` are written only when the row
    /// is first inserted; a conflict on the id updates the mutable columns.
    /// Two concurrent first writes for the same `(owner_id, entry_date)`
    /// key carry different ids, so the loser hits the
    /// `uq_diaries_owner_id_entry_date` constraint instead of silently
    /// overwriting the winner.
    pub async fn save(pool: &PgPool, entry: &DiaryEntry) -> Result<DiaryEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO diaries \
                (id, owner_id, entry_date, content, mood, todo, reflection, \
                 illustration_url, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             ON CONFLICT (id) DO UPDATE SET \
                content = EXCLUDED.content, \
                mood = EXCLUDED.mood, \
                todo = EXCLUDED.todo, \
                reflection = EXCLUDED.reflection, \
                illustration_url = EXCLUDED.illustration_url, \
                updated_at = EXCLUDED.updated_at \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DiaryEntry>(&query)
            .bind(entry.id)
            .bind(entry.owner_id)
            .bind(entry.entry_date)
            .bind(&entry.content)
            .bind(&entry.mood)
            .bind(&entry.todo)
            .bind(&entry.reflection)
            .bind(&entry.illustration_url)
            .bind(entry.created_at)
            .bind(entry.updated_at)
            .fetch_one(pool)
            .await
    }
}
