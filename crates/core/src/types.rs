/// Diary record identifiers are UUIDs assigned by the service at first
/// creation, never by the database.
pub type EntryId = uuid::Uuid;

/// Owners are identified by the UUID the auth provider hands the client.
pub type OwnerId = uuid::Uuid;

/// Entries are keyed by calendar date, no time component.
pub type EntryDate = chrono::NaiveDate;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
