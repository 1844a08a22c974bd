use thiserror::Error;

/// Infrastructure failures that abort a whole pass.
///
/// Per-entry problems (a bad date, one undeliverable record) are contained
/// inside the passes and never become an `EngineError`.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Record store error: {0}")]
    Store(#[from] furbit_pets::PetStoreError),

    #[error("Ledger error: {0}")]
    Ledger(#[from] furbit_ledger::LedgerError),
}

pub type Result<T> = std::result::Result<T, EngineError>;
