//! Error types for sheet building and export.

use thiserror::Error;
use xlsxwriter::XlsxError;

/// Result type alias for sheet operations.
pub type Result<T> = std::result::Result<T, SheetError>;

/// Errors that can occur while building or exporting sheets.
#[derive(Error, Debug)]
pub enum SheetError {
    /// A sheet with this name is already in the book.
    #[error("duplicate sheet name: {0}")]
    DuplicateSheet(String),

    /// Sheet names must be non-empty.
    #[error("sheet name must not be empty")]
    EmptySheetName,

    /// A row did not match the table's column count.
    #[error("row width mismatch: expected {expected} cells, got {got}")]
    RowWidth {
        /// Number of columns in the table.
        expected: usize,
        /// Number of cells in the rejected row.
        got: usize,
    },

    /// Workbook-level error from the XLSX writer.
    #[error("xlsx error: {0}")]
    Xlsx(#[from] XlsxError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
