// Résumé storage: a key-value blob backend, the per-user collection store on
// top of it, and the home feed filter.

pub mod blob;
pub mod feed;
pub mod handlers;
pub mod repository;

use thiserror::Error;

pub use repository::ResumeStore;

/// Recoverable storage failures. Callers may retry or surface a message.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Resume {0} not found")]
    NotFound(String),

    #[error("Resume {0} already exists")]
    Conflict(String),

    #[error("Resume limit of {0} reached")]
    LimitReached(usize),

    #[error("Stored collection is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
