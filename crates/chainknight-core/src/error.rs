//! Error types for ChainKnight

use thiserror::Error;

/// Main error type for ChainKnight operations
#[derive(Error, Debug)]
pub enum ChainError {
    /// Requested tool id is not part of the catalog
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Submitted access key did not match any accepted key
    #[error("Invalid access key")]
    InvalidKey,

    /// Action needs an open access gate
    #[error("Access gate is closed")]
    GateClosed,

    /// Two catalog entries share the same id
    #[error("Duplicate tool id: {0}")]
    DuplicateTool(String),

    /// Catalog failed validation
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Tool destination is not an absolute http(s) address
    #[error("Invalid tool URL: {0}")]
    InvalidUrl(String),

    /// Configuration value out of range or unreadable
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Opening an external browsing context failed
    #[error("Browser error: {0}")]
    Browser(String),
}

/// Result type alias using ChainError
pub type ChainResult<T> = Result<T, ChainError>;
