//! Error types for gridstore-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by backends and by bounds resolution.
///
/// The public [`TabularStore`](crate::TabularStore) operations never return
/// these; they are logged and converted into `false`, `None` or an empty
/// result at the facade boundary.
#[derive(Debug, Error)]
pub enum Error {
    /// Sheet index out of bounds
    #[error("Sheet index {0} out of bounds (count: {1})")]
    SheetOutOfBounds(usize, usize),

    /// No sheet with the given name
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// Row index out of bounds
    #[error("Row index {0} out of bounds (max: {1})")]
    RowOutOfBounds(usize, usize),

    /// Column index out of bounds
    #[error("Column index {0} out of bounds (max: {1})")]
    ColumnOutOfBounds(usize, usize),

    /// Span whose start lies past its end
    #[error("Invalid span: start {start} is greater than end {end}")]
    InvalidSpan { start: usize, end: usize },

    /// Invalid sheet name
    #[error("Invalid sheet name: {0}")]
    InvalidSheetName(String),

    /// Duplicate sheet name
    #[error("Sheet name already exists: {0}")]
    DuplicateSheetName(String),

    /// Cell value the backend cannot store
    #[error("Invalid cell value: {0}")]
    InvalidValue(String),

    /// Failure inside the backing spreadsheet library
    #[error("Backend error: {0}")]
    Backend(String),
}

impl Error {
    /// Create a backend error with a message
    pub fn backend<S: Into<String>>(msg: S) -> Self {
        Error::Backend(msg.into())
    }
}
