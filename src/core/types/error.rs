//! Error types for the memory engine

use std::fmt;
use thiserror::Error;

/// Main error type for memory operations
///
/// Expected low-level failures (unmapped pages, partial transfers, broken
/// pointer links) are reported as `None`/`false` by the accessor layer and
/// never appear here; this enum covers handle-level and document-level
/// failures that callers must surface.
#[derive(Error, Debug)]
pub enum MemoryError {
    #[error("No process handle is open")]
    ProcessNotOpen,

    #[error("Process not found: {0}")]
    ProcessNotFound(u32),

    #[error("Access denied to process {pid}: {reason}")]
    AccessDenied { pid: u32, reason: String },

    #[error("Failed to read memory at {address}: {reason}")]
    ReadFailed { address: String, reason: String },

    #[error("Failed to write memory at {address}: {reason}")]
    WriteFailed { address: String, reason: String },

    #[error("Invalid memory address: {0}")]
    InvalidAddress(String),

    #[error("Cheat table parse error: {0}")]
    TableParse(String),

    #[error("Windows API: {0}")]
    WindowsApi(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for memory operations
pub type MemoryResult<T> = Result<T, MemoryError>;

impl MemoryError {
    /// Creates an access denied error for a process
    pub fn access_denied(pid: u32, reason: impl Into<String>) -> Self {
        MemoryError::AccessDenied {
            pid,
            reason: reason.into(),
        }
    }

    /// Creates a read failed error
    pub fn read_failed(address: impl fmt::Display, reason: impl Into<String>) -> Self {
        MemoryError::ReadFailed {
            address: address.to_string(),
            reason: reason.into(),
        }
    }

    /// Creates a write failed error
    pub fn write_failed(address: impl fmt::Display, reason: impl Into<String>) -> Self {
        MemoryError::WriteFailed {
            address: address.to_string(),
            reason: reason.into(),
        }
    }
}
