//! XLSX error types

use thiserror::Error;

/// Result type for XLSX operations
pub type XlsxResult<T> = std::result::Result<T, XlsxError>;

/// Errors that can occur during XLSX reading/writing
#[derive(Debug, Error)]
pub enum XlsxError {
    /// Error from calamine while loading a workbook
    #[error("Read error: {0}")]
    Read(#[from] calamine::Error),

    /// Error from rust_xlsxwriter while saving a workbook
    #[error("Write error: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] gridstore_core::Error),
}

impl From<XlsxError> for gridstore_core::Error {
    fn from(err: XlsxError) -> Self {
        match err {
            XlsxError::Core(inner) => inner,
            other => gridstore_core::Error::backend(other.to_string()),
        }
    }
}
