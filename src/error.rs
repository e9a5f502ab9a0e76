use thiserror::Error;

/// Errors that can occur while reading or writing snapshots
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to (de)serialize snapshot: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to access preference file: {0}")]
    Io(#[from] std::io::Error),

    #[error("No configuration directory available on this platform")]
    NoConfigDirectory,
}

/// Result type for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Errors that can occur while exporting the note to a text file
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Could not find the desktop directory")]
    NoDesktopDirectory,

    #[error("Failed to write note: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;
