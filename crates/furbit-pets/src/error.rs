use thiserror::Error;

/// Errors that can occur in the pet record store.
#[derive(Debug, Error)]
pub enum PetStoreError {
    /// A SQLite operation failed.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// No owner with the given ID exists.
    #[error("owner not found: {id}")]
    OwnerNotFound { id: String },

    /// No pet with the given ID exists.
    #[error("pet not found: {id}")]
    PetNotFound { id: String },
}

pub type Result<T> = std::result::Result<T, PetStoreError>;
