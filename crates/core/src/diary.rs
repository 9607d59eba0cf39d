//! Diary entry policy: summary truncation, mood normalization, request
//! key parsing, and the illustration fallback rule.
//!
//! The upsert handler and the `DiaryEntry` merge in the `db` crate are
//! thin wiring around these functions; every branch that can lose or
//! clobber data is decided here, in pure code.

use crate::error::CoreError;
use crate::types::{EntryDate, OwnerId};

// ---------------------------------------------------------------------------
// Summary truncation
// ---------------------------------------------------------------------------

/// Maximum length of a list-view summary, in characters.
pub const SUMMARY_MAX_CHARS: usize = 60;

/// Marker appended when content had to be cut.
pub const SUMMARY_ELLIPSIS: &str = "...";

/// Project entry content to a list-view summary.
///
/// Content of up to [`SUMMARY_MAX_CHARS`] characters is returned
/// unmodified. Longer content is cut to 57 characters plus
/// [`SUMMARY_ELLIPSIS`], so the result is always at most 60 characters.
/// Counts characters, not bytes, so multibyte content cuts cleanly.
pub fn make_summary(content: &str) -> String {
    if content.chars().count() <= SUMMARY_MAX_CHARS {
        return content.to_string();
    }
    let keep = SUMMARY_MAX_CHARS - SUMMARY_ELLIPSIS.len();
    let head: String = content.chars().take(keep).collect();
    format!("{head}{SUMMARY_ELLIPSIS}")
}

// ---------------------------------------------------------------------------
// Mood
// ---------------------------------------------------------------------------

/// Normalize a client-supplied mood label for storage.
///
/// Moods are free-form short labels chosen by the client (the reference
/// frontend sends happy/sad/angry/chill); the server only lowercases them
/// and treats an empty string as "no mood picked".
pub fn normalize_mood(mood: Option<&str>) -> Option<String> {
    match mood {
        Some(m) if !m.is_empty() => Some(m.to_lowercase()),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Request key parsing
// ---------------------------------------------------------------------------

/// Parse the `ownerId` request field.
///
/// Missing and malformed values are both validation failures, raised
/// before any store access.
pub fn parse_owner_id(raw: Option<&str>) -> Result<OwnerId, CoreError> {
    let raw = raw.ok_or_else(|| CoreError::Validation("ownerId is required".to_string()))?;
    raw.parse().map_err(|_| {
        CoreError::Validation(format!("Invalid owner id '{raw}': must be a UUID"))
    })
}

/// Parse the `entryDate` request field (ISO `YYYY-MM-DD`).
pub fn parse_entry_date(raw: Option<&str>) -> Result<EntryDate, CoreError> {
    let raw = raw.ok_or_else(|| CoreError::Validation("entryDate is required".to_string()))?;
    raw.parse().map_err(|_| {
        CoreError::Validation(format!(
            "Invalid entry date '{raw}': must be an ISO date (YYYY-MM-DD)"
        ))
    })
}

// ---------------------------------------------------------------------------
// Illustration fallback policy
// ---------------------------------------------------------------------------

/// Result of the optional illustration-generation step for one write.
///
/// The generator client reports `Result<String, _>`; the caller converts
/// that into this outcome (absorbing and logging the error) so the merge
/// can branch on it without knowing anything about HTTP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IllustrationOutcome {
    /// The request did not ask for generation.
    NotRequested,
    /// The generator returned a usable URL.
    Generated(String),
    /// The generator errored, timed out, or returned nothing usable.
    Failed,
}

/// Decide which illustration URL a write leaves behind.
///
/// * `previous` - the URL already stored on the record, if any.
/// * `supplied` - the URL the client sent in this request, if any.
/// * `outcome`  - what the generation attempt produced.
///
/// A non-empty client-supplied URL replaces the stored one as the
/// baseline. A successful generation overwrites the baseline. Any other
/// outcome leaves the baseline untouched -- a generator failure must never
/// erase an illustration that existed before the call, whether it came
/// from the store or from this same request.
pub fn resolve_illustration_url(
    previous: Option<&str>,
    supplied: Option<&str>,
    outcome: &IllustrationOutcome,
) -> Option<String> {
    let baseline = match supplied {
        Some(url) if !url.is_empty() => Some(url.to_string()),
        _ => previous.map(str::to_string),
    };

    match outcome {
        IllustrationOutcome::Generated(url) if !url.is_empty() => Some(url.clone()),
        _ => baseline,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
