//! Error types for reprint library.

use std::io;
use thiserror::Error;

use crate::model::ElementKind;

/// Result type alias for reprint operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while rebuilding a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input or writing packaged output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The analysis result (or a serialized book) is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An element carries no bounding region, so it cannot be placed on a page.
    #[error("{kind} #{index} has no bounding region")]
    MissingBoundingRegion {
        /// Kind of the offending element
        kind: ElementKind,
        /// Position of the element in its input stream
        index: usize,
    },

    /// A polygon that cannot be reduced to a bounding box.
    #[error("Invalid polygon: {0}")]
    InvalidPolygon(String),

    /// A table cell anchored outside its table's declared grid.
    #[error("Cell at row {row}, column {column} lies outside a {rows}x{columns} table")]
    CellOutOfBounds {
        /// Row index of the cell
        row: usize,
        /// Column index of the cell
        column: usize,
        /// Declared row count of the table
        rows: usize,
        /// Declared column count of the table
        columns: usize,
    },

    /// Error during rendering or serialization of the output.
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::CellOutOfBounds {
            row: 3,
            column: 1,
            rows: 2,
            columns: 2,
        };
        assert_eq!(
            err.to_string(),
            "Cell at row 3, column 1 lies outside a 2x2 table"
        );

        let err = Error::MissingBoundingRegion {
            kind: ElementKind::Table,
            index: 4,
        };
        assert_eq!(err.to_string(), "table #4 has no bounding region");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
