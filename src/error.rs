use thiserror::Error;

/// Central error type for the medicase storage layer.
///
/// These errors never cross the repository boundary: the repository treats
/// unreadable data as an empty collection and reports failed writes through
/// the operation's return value, logging the cause.
#[derive(Error, Debug)]
pub enum MedicaseError {
    #[error("Failed to save to storage: {0}")]
    StorageSaveFailed(String),

    #[error("Failed to load from storage: {0}")]
    StorageLoadFailed(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Mutex lock error")]
    LockError,
}

// Implement conversion from PoisonError for Mutex locks
impl<T> From<std::sync::PoisonError<T>> for MedicaseError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        MedicaseError::LockError
    }
}

// Helper type alias for Results
pub type MedicaseResult<T> = Result<T, MedicaseError>;
