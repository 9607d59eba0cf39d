#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A lookup by natural key came up empty. `key` is the human-readable
    /// form of the key (e.g. `"{owner_id}/{entry_date}"`).
    #[error("Entity not found: {entity} with key {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),
}
