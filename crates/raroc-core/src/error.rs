use thiserror::Error;

#[derive(Debug, Error)]
pub enum RarocError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Not found: {table} has no entry for '{key}'")]
    NotFound { table: String, key: String },
}
