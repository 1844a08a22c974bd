use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Reminder not found: {id}")]
    ReminderNotFound { id: String },
}

pub type Result<T> = std::result::Result<T, LedgerError>;
