//! Error types for sheetpick-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sheetpick-core
#[derive(Debug, Error)]
pub enum Error {
    /// Cell coordinate outside the addressable space (coordinates are 1-based)
    #[error("Cell coordinate ({0}, {1}) out of range: rows and columns start at 1")]
    CellOutOfRange(u32, u32),

    /// Sheet not found by name
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// Invalid sheet name
    #[error("Invalid sheet name: {0}")]
    InvalidSheetName(String),

    /// Duplicate sheet name
    #[error("Sheet name already exists: {0}")]
    DuplicateSheetName(String),

    /// Document could not be opened or parsed
    #[error("Failed to load document: {0}")]
    Load(String),
}
