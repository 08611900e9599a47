//! JSON rendering for rebuilt books.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{Book, TocEntry};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a book to JSON.
pub fn to_json(book: &Book, format: JsonFormat) -> Result<String> {
    serialize(book, format)
}

/// Convert a table of contents to JSON.
pub fn toc_to_json(toc: &[TocEntry], format: JsonFormat) -> Result<String> {
    serialize(toc, format)
}

fn serialize<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
